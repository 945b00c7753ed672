use crate::{derive_infallible, Convert, TryConvert};
use num_traits::{NumCast, ToPrimitive};
use primcast_base::{Error, Kind, Primitive};

/// Range-checked cast, comparing in the wider of the two types.
fn checked<S, T>(value: S, overflow: fn(Kind) -> Error) -> Result<T, Error>
where
    S: ToPrimitive,
    T: NumCast + Primitive,
{
    <T as NumCast>::from(value).ok_or_else(|| overflow(T::KIND))
}

/// Lossless conversions, the target range is a superset of the source one.
macro_rules! derive_widen {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl Convert<$dst> for $src {
                fn convert(self) -> $dst {
                    <$dst as From<$src>>::from(self)
                }
            }
        )+
        derive_infallible!($src => $($dst),+);
    };
}

/// Signed source into a signed target.
macro_rules! derive_narrow_signed {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for $src {
                fn try_convert(self) -> Result<$dst, Error> {
                    checked(self, Error::out_of_range)
                }
            }
        )+
    };
}

/// Signed source into an unsigned target. The sign is checked before the magnitude.
macro_rules! derive_signed_to_unsigned {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for $src {
                fn try_convert(self) -> Result<$dst, Error> {
                    if self < 0 {
                        return Err(Error::negative(<$dst as Primitive>::KIND));
                    }
                    checked(self, Error::out_of_range)
                }
            }
        )+
    };
}

/// Unsigned source into a target with a smaller maximum.
macro_rules! derive_narrow_unsigned {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for $src {
                fn try_convert(self) -> Result<$dst, Error> {
                    checked(self, Error::exceeds_max)
                }
            }
        )+
    };
}

// `isize` and `usize` have platform width, so only the conversions that `std` guarantees
// to be lossless on every platform are treated as widening.

derive_narrow_signed!(isize => i8, i16, i32, i64);
derive_signed_to_unsigned!(isize => usize, u8, u16, u32, u64);

derive_widen!(i8 => isize, i16, i32, i64);
derive_signed_to_unsigned!(i8 => usize, u8, u16, u32, u64);

derive_widen!(i16 => isize, i32, i64);
derive_narrow_signed!(i16 => i8);
derive_signed_to_unsigned!(i16 => usize, u8, u16, u32, u64);

derive_widen!(i32 => i64);
derive_narrow_signed!(i32 => isize, i8, i16);
derive_signed_to_unsigned!(i32 => usize, u8, u16, u32, u64);

derive_narrow_signed!(i64 => isize, i8, i16, i32);
derive_signed_to_unsigned!(i64 => usize, u8, u16, u32, u64);

derive_narrow_unsigned!(usize => isize, i8, i16, i32, i64, u8, u16, u32, u64);

derive_widen!(u8 => isize, i16, i32, i64, usize, u16, u32, u64);
derive_narrow_unsigned!(u8 => i8);

derive_widen!(u16 => i32, i64, usize, u32, u64);
derive_narrow_unsigned!(u16 => isize, i8, i16, u8);

derive_widen!(u32 => i64, u64);
derive_narrow_unsigned!(u32 => isize, i8, i16, i32, usize, u8, u16);

derive_narrow_unsigned!(u64 => isize, i8, i16, i32, i64, usize, u8, u16, u32);
