use crate::error::Error;
use chrono::{DateTime, Utc};
use core::{any::TypeId, fmt, str::FromStr};

/// Tag of one of the supported primitive types.
///
/// Native counterparts:
///
/// + `Bool` - [`bool`].
/// + `Int`, `Int8` .. `Int64` - [`isize`], [`i8`] .. [`i64`].
/// + `Uint`, `Uint8` .. `Uint64` - [`usize`], [`u8`] .. [`u64`].
/// + `Float32`, `Float64` - [`f32`], [`f64`].
/// + `String` - [`String`].
/// + `Time` - [`DateTime<Utc>`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Time,
}

impl Kind {
    pub const COUNT: usize = 15;

    /// All kinds in declaration order, so that `Kind::ALL[k.index()] == k`.
    pub const ALL: [Kind; Self::COUNT] = [
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Float32,
        Kind::Float64,
        Kind::String,
        Kind::Time,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind of the native type `T`, or `None` if `T` isn't supported.
    pub fn of<T: ?Sized + 'static>() -> Option<Kind> {
        let id = TypeId::of::<T>();
        Self::ALL.into_iter().find(|kind| kind.type_id() == id)
    }

    fn type_id(self) -> TypeId {
        match self {
            Kind::Bool => TypeId::of::<bool>(),
            Kind::Int => TypeId::of::<isize>(),
            Kind::Int8 => TypeId::of::<i8>(),
            Kind::Int16 => TypeId::of::<i16>(),
            Kind::Int32 => TypeId::of::<i32>(),
            Kind::Int64 => TypeId::of::<i64>(),
            Kind::Uint => TypeId::of::<usize>(),
            Kind::Uint8 => TypeId::of::<u8>(),
            Kind::Uint16 => TypeId::of::<u16>(),
            Kind::Uint32 => TypeId::of::<u32>(),
            Kind::Uint64 => TypeId::of::<u64>(),
            Kind::Float32 => TypeId::of::<f32>(),
            Kind::Float64 => TypeId::of::<f64>(),
            Kind::String => TypeId::of::<String>(),
            Kind::Time => TypeId::of::<DateTime<Utc>>(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Time => "time",
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64)
    }
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64)
    }
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(Error::unsupported)
    }
}
