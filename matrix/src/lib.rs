//! Pairwise conversion matrix.
//!
//! For every ordered pair of supported native types `(S, T)` there is exactly one
//! `impl TryConvert<T> for S`. Pairs that can never fail additionally implement [`Convert`].
//!
//! Conversions are grouped by algorithm:
//!
//! + identity (this module),
//! + integer to integer (`int`),
//! + float to/from numeric (`float`),
//! + bool to/from numeric (`bool_`),
//! + text to/from numeric and bool (`string`),
//! + anything to calendar time (`time`).

mod bool_;
mod duration;
mod float;
mod int;
mod layouts;
mod string;
mod time;

use chrono::{DateTime, Utc};
use primcast_base::Error;

pub use duration::parse_duration;
pub use layouts::{parse_time, Form, Layout, Layouts};

/// Checked conversion of a primitive value into `T`.
pub trait TryConvert<T>: Sized {
    fn try_convert(self) -> Result<T, Error>;
}

/// Conversion into `T` that always succeeds.
pub trait Convert<T>: TryConvert<T> {
    fn convert(self) -> T;
}

/// Implements [`TryConvert`] on top of [`Convert`] for the listed pairs.
macro_rules! derive_infallible {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl $crate::TryConvert<$dst> for $src {
                fn try_convert(self) -> Result<$dst, primcast_base::Error> {
                    Ok($crate::Convert::<$dst>::convert(self))
                }
            }
        )+
    };
}

pub(crate) use derive_infallible;

macro_rules! derive_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Convert<$ty> for $ty {
                fn convert(self) -> $ty {
                    self
                }
            }
            derive_infallible!($ty => $ty);
        )+
    };
}

derive_identity!(bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String, DateTime<Utc>);

pub mod traits {
    pub use super::{Convert, TryConvert};
}
