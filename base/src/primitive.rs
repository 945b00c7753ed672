use crate::{kind::Kind, traits::Primitive, value::Value};
use chrono::{DateTime, Utc};

/// Macro for implementing [`Primitive`] for native types.
///
/// `$kind` must be both the [`Kind`] and the [`Value`] variant holding `$ty`.
macro_rules! impl_prim {
    ($ty:ty, $kind:ident) => {
        impl Primitive for $ty {
            const KIND: Kind = Kind::$kind;

            fn into_value(self) -> Value {
                Value::$kind(self)
            }
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$kind(v)
            }
        }
    };
}

impl_prim!(bool, Bool);

impl_prim!(isize, Int);
impl_prim!(i8, Int8);
impl_prim!(i16, Int16);
impl_prim!(i32, Int32);
impl_prim!(i64, Int64);

impl_prim!(usize, Uint);
impl_prim!(u8, Uint8);
impl_prim!(u16, Uint16);
impl_prim!(u32, Uint32);
impl_prim!(u64, Uint64);

impl_prim!(f32, Float32);
impl_prim!(f64, Float64);

impl_prim!(String, String);
impl_prim!(DateTime<Utc>, Time);
