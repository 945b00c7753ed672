use crate::{error::Error, kind::Kind, value::Value};

/// Native type of one of the supported kinds.
pub trait Primitive: Sized + 'static {
    /// Kind tag of the type.
    const KIND: Kind;

    fn into_value(self) -> Value;
    /// Returns `None` if `value` is of another kind.
    fn from_value(value: Value) -> Option<Self>;
}

/// Conversion of a user-defined type into `U` that always succeeds.
///
/// Values of types outside the supported set are recognized by the top-level dispatcher only in the boxed form,
/// see [`SelfInto::boxed`].
pub trait SelfInto<U> {
    fn self_into(self: Box<Self>) -> U;

    fn boxed(self) -> Box<dyn SelfInto<U>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Fallible conversion of a user-defined type into `U`.
pub trait SelfTryInto<U> {
    fn self_try_into(self: Box<Self>) -> Result<U, Error>;

    fn boxed(self) -> Box<dyn SelfTryInto<U>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
