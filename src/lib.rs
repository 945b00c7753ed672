//! Checked conversions between primitive types with runtime kind dispatch.
//!
//! # Supported kinds
//!
//! + Boolean ([`bool`]).
//! + Signed integers ([`isize`], [`i8`], [`i16`], [`i32`], [`i64`]).
//! + Unsigned integers ([`usize`], [`u8`], [`u16`], [`u32`], [`u64`]).
//! + Floating-point numbers ([`f32`], [`f64`]).
//! + Text ([`String`], `&'static str` is accepted as a source).
//! + Calendar time ([`DateTime<Utc>`](`chrono::DateTime`)).
//!
//! # Layers
//!
//! + [`matrix`] - statically typed conversion for every ordered pair of supported types ([`TryConvert`], [`Convert`]).
//! + [`dispatch`] - the same conversions keyed by runtime [`Kind`]s.
//! + Per-target functions ([`try_into_int32`], [`into_string`], ...) that accept a value of any supported type.
//! + [`try_into`] and [`into`] that also resolve the target kind from the result type.
//!
//! ```rust
//! assert_eq!(primcast::try_into::<f32, _>("123.456"), Ok(123.456));
//! assert_eq!(primcast::into_int64(42u8), 42);
//! assert!(primcast::try_into_int8(128i32).is_err());
//! ```
//!
//! # User-defined types
//!
//! A type outside the supported set can still be converted by [`try_into`] if it implements [`SelfInto`] or
//! [`SelfTryInto`] and is passed boxed.
//!
//! ```rust
//! use primcast::SelfInto;
//!
//! struct Celsius(f64);
//! struct Fahrenheit(f64);
//!
//! impl SelfInto<Fahrenheit> for Celsius {
//!     fn self_into(self: Box<Self>) -> Fahrenheit {
//!         Fahrenheit(self.0 * 1.8 + 32.0)
//!     }
//! }
//!
//! let f: Fahrenheit = primcast::into(Celsius(100.0).boxed());
//! assert_eq!(f.0, 212.0);
//! ```

mod capability;
pub mod dispatch;
mod target;

pub use primcast_base::{
    error::{self, Error, ErrorKind, SyntaxError},
    kind::{self, Kind},
    traits::{self, Primitive, SelfInto, SelfTryInto},
    value::{self, Value},
};
pub use primcast_matrix as matrix;

pub use dispatch::convert;
pub use matrix::{parse_duration, parse_time, Convert, TryConvert};
pub use target::*;

pub mod prelude {
    pub use primcast_base::traits::*;
    pub use primcast_matrix::traits::*;
}

/// Convert a value of any supported type into `U`.
///
/// If `U` is not one of the supported types, then the value itself must provide the conversion (see [`SelfInto`]).
pub fn try_into<U: 'static, T: 'static>(value: T) -> Result<U, Error> {
    match Kind::of::<U>() {
        Some(target) => {
            let value = Value::from_any(value)?;
            convert(value, target)?.downcast::<U>()
        }
        None => capability::self_convert::<U, T>(value),
    }
}

/// Like [`try_into`], but panics on failure.
#[track_caller]
pub fn into<U: 'static, T: 'static>(value: T) -> U {
    dispatch::unwrap_or_panic(try_into(value))
}
