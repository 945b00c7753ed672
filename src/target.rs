//! Conversions into a fixed target kind from a value of any supported type.
//!
//! Every `try_into_<kind>` function inspects the type of its argument at runtime and applies the matching
//! pairwise conversion. The `into_<kind>` counterparts panic on failure.

use crate::dispatch::{dispatch, unwrap_or_panic};
use chrono::{DateTime, Utc};
use primcast_base::Error;

macro_rules! derive_target {
    ($($try_name:ident, $name:ident => $ty:ty;)+) => {
        $(
            #[doc = concat!("Convert any supported value to [`", stringify!($ty), "`].")]
            pub fn $try_name<T: 'static>(value: T) -> Result<$ty, Error> {
                dispatch::<$ty, T>(value)
            }

            #[doc = concat!("Like [`", stringify!($try_name), "`], but panics on failure.")]
            #[track_caller]
            pub fn $name<T: 'static>(value: T) -> $ty {
                unwrap_or_panic($try_name(value))
            }
        )+
    };
}

derive_target! {
    try_into_bool, into_bool => bool;
    try_into_int, into_int => isize;
    try_into_int8, into_int8 => i8;
    try_into_int16, into_int16 => i16;
    try_into_int32, into_int32 => i32;
    try_into_int64, into_int64 => i64;
    try_into_uint, into_uint => usize;
    try_into_uint8, into_uint8 => u8;
    try_into_uint16, into_uint16 => u16;
    try_into_uint32, into_uint32 => u32;
    try_into_uint64, into_uint64 => u64;
    try_into_float32, into_float32 => f32;
    try_into_float64, into_float64 => f64;
    try_into_string, into_string => String;
    try_into_time, into_time => DateTime<Utc>;
}
