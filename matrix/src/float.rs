use crate::{derive_infallible, Convert, TryConvert};
use num_traits::{Bounded, Float, NumCast, PrimInt};
use primcast_base::{Error, Kind, Primitive};

/// Float to integer conversion.
///
/// The value is compared against the integer bounds cast into the float type, and then truncated toward zero.
/// Bounds that aren't exactly representable in `F` are rounded up to the next power of two,
/// so the final checked cast rejects the values that reach them. NaN is always out of range.
fn float_to_int<F, T>(value: F) -> Result<T, Error>
where
    F: Float,
    T: PrimInt + Bounded + Primitive,
{
    let out_of_range = || Error::out_of_range(T::KIND);
    let min = <F as NumCast>::from(T::min_value()).ok_or_else(out_of_range)?;
    let max = <F as NumCast>::from(T::max_value()).ok_or_else(out_of_range)?;
    if !(value >= min && value <= max) {
        return Err(out_of_range());
    }
    <T as NumCast>::from(value.trunc()).ok_or_else(out_of_range)
}

macro_rules! derive_float_to_int {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for $src {
                fn try_convert(self) -> Result<$dst, Error> {
                    float_to_int(self)
                }
            }
        )+
    };
}

/// Every integer fits into the float range, rounding to the nearest representable value.
macro_rules! derive_int_to_float {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl Convert<$dst> for $src {
                fn convert(self) -> $dst {
                    self as $dst
                }
            }
        )+
        derive_infallible!($src => $($dst),+);
    };
}

derive_float_to_int!(f32 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
derive_float_to_int!(f64 => isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);

derive_int_to_float!(isize => f32, f64);
derive_int_to_float!(i8 => f32, f64);
derive_int_to_float!(i16 => f32, f64);
derive_int_to_float!(i32 => f32, f64);
derive_int_to_float!(i64 => f32, f64);
derive_int_to_float!(usize => f32, f64);
derive_int_to_float!(u8 => f32, f64);
derive_int_to_float!(u16 => f32, f64);
derive_int_to_float!(u32 => f32, f64);
derive_int_to_float!(u64 => f32, f64);

impl Convert<f64> for f32 {
    fn convert(self) -> f64 {
        <f64 as From<f32>>::from(self)
    }
}
derive_infallible!(f32 => f64);

/// Fails beyond `±f32::MAX`, including infinities. NaN stays NaN.
impl TryConvert<f32> for f64 {
    fn try_convert(self) -> Result<f32, Error> {
        let max = <f64 as From<f32>>::from(f32::MAX);
        if self > max || self < -max {
            return Err(Error::out_of_range(Kind::Float32));
        }
        Ok(self as f32)
    }
}
