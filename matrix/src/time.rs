use crate::{layouts::parse_time, TryConvert};
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use primcast_base::{Error, Kind, Primitive};

/// Calendar time of `secs` seconds past the Unix epoch.
fn from_epoch_seconds(secs: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| Error::out_of_range(Kind::Time))
}

macro_rules! derive_signed_to_time {
    ($($src:ty),+ $(,)?) => {
        $(
            impl TryConvert<DateTime<Utc>> for $src {
                fn try_convert(self) -> Result<DateTime<Utc>, Error> {
                    let secs = self.to_i64().ok_or_else(|| Error::out_of_range(Kind::Time))?;
                    from_epoch_seconds(secs)
                }
            }
        )+
    };
}

/// Every unsigned width is checked against the `int64` maximum, the limit of epoch seconds.
macro_rules! derive_unsigned_to_time {
    ($($src:ty),+ $(,)?) => {
        $(
            impl TryConvert<DateTime<Utc>> for $src {
                fn try_convert(self) -> Result<DateTime<Utc>, Error> {
                    let secs = self.to_i64().ok_or_else(|| Error::exceeds_limit(Kind::Int64, Kind::Time))?;
                    from_epoch_seconds(secs)
                }
            }
        )+
    };
}

/// Floats are never interpreted as epoch seconds.
macro_rules! derive_reject_time {
    ($($src:ty),+ $(,)?) => {
        $(
            impl TryConvert<DateTime<Utc>> for $src {
                fn try_convert(self) -> Result<DateTime<Utc>, Error> {
                    Err(Error::rejected(<$src as Primitive>::KIND, Kind::Time))
                }
            }
        )+
    };
}

/// Calendar time converts only to itself.
macro_rules! derive_from_time {
    ($($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for DateTime<Utc> {
                fn try_convert(self) -> Result<$dst, Error> {
                    Err(Error::unsupported().to(<$dst as Primitive>::KIND))
                }
            }
        )+
    };
}

derive_signed_to_time!(isize, i8, i16, i32, i64);
derive_unsigned_to_time!(usize, u8, u16, u32, u64);
derive_reject_time!(f32, f64);
derive_from_time!(bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String);

impl TryConvert<DateTime<Utc>> for bool {
    fn try_convert(self) -> Result<DateTime<Utc>, Error> {
        Err(Error::unsupported().to(Kind::Time))
    }
}

impl TryConvert<DateTime<Utc>> for &str {
    fn try_convert(self) -> Result<DateTime<Utc>, Error> {
        parse_time(self)
    }
}
