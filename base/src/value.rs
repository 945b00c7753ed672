use crate::{error::Error, kind::Kind};
use chrono::{DateTime, Utc};
use core::{any::Any, fmt};

/// Value of any supported kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Time(DateTime<Utc>),
}

/// Moves the value out of `slot` if it holds an `Option<T>`.
#[doc(hidden)]
pub fn take<T: 'static>(slot: &mut dyn Any) -> Option<T> {
    slot.downcast_mut::<Option<T>>().and_then(Option::take)
}

macro_rules! for_each_variant {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            Value::Bool($v) => $body,
            Value::Int($v) => $body,
            Value::Int8($v) => $body,
            Value::Int16($v) => $body,
            Value::Int32($v) => $body,
            Value::Int64($v) => $body,
            Value::Uint($v) => $body,
            Value::Uint8($v) => $body,
            Value::Uint16($v) => $body,
            Value::Uint32($v) => $body,
            Value::Uint64($v) => $body,
            Value::Float32($v) => $body,
            Value::Float64($v) => $body,
            Value::String($v) => $body,
            Value::Time($v) => $body,
        }
    };
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::String(_) => Kind::String,
            Value::Time(_) => Kind::Time,
        }
    }

    /// Inspect an arbitrary value at runtime and wrap it if its type is supported.
    ///
    /// `&'static str` is accepted as text, and a [`Value`] is passed through as is.
    pub fn from_any<T: 'static>(value: T) -> Result<Self, Error> {
        let mut slot = Some(value);
        let slot: &mut dyn Any = &mut slot;

        if let Some(value) = take::<Value>(slot) {
            return Ok(value);
        }
        if let Some(text) = take::<&'static str>(slot) {
            return Ok(text.into());
        }

        macro_rules! try_take {
            ($($native:ty),* $(,)?) => {
                $(
                    if let Some(value) = take::<$native>(slot) {
                        return Ok(value.into());
                    }
                )*
            };
        }
        try_take!(bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String, DateTime<Utc>);

        Err(Error::unsupported())
    }

    /// Extract the native value if `T` is exactly the type of the held value.
    pub fn downcast<T: 'static>(self) -> Result<T, Error> {
        for_each_variant!(self, v => {
            let mut slot = Some(v);
            take::<T>(&mut slot)
        })
        .ok_or_else(Error::unsupported)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_variant!(self, v => fmt::Display::fmt(v, f))
    }
}
