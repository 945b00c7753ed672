use chrono::{DateTime, Utc};
use primcast_base::{Error, Kind, Primitive, Value};
use primcast_matrix::TryConvert;

/// Type-erased pairwise converter.
pub type Converter = fn(Value) -> Result<Value, Error>;

/// Unpacks `S` from the value, converts it to `T` and packs the result back.
fn entry<S, T>(value: Value) -> Result<Value, Error>
where
    S: Primitive + TryConvert<T>,
    T: Primitive,
{
    let source = S::from_value(value).ok_or_else(|| Error::unsupported().to(T::KIND))?;
    TryConvert::<T>::try_convert(source).map(T::into_value)
}

macro_rules! matrix {
    ([$($src:ty),+ $(,)?] $dsts:tt) => {
        [$(matrix!(@row $src $dsts)),+]
    };
    (@row $src:ty [$($dst:ty),+ $(,)?]) => {
        [$(entry::<$src, $dst> as Converter),+]
    };
}

/// Converters indexed by `[source.index()][target.index()]`.
///
/// Rows and columns follow the order of [`Kind::ALL`].
#[rustfmt::skip]
pub static MATRIX: [[Converter; Kind::COUNT]; Kind::COUNT] = matrix!(
    [bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String, DateTime<Utc>]
    [bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String, DateTime<Utc>]
);

/// Convert the value to the `target` kind.
pub fn convert(value: Value, target: Kind) -> Result<Value, Error> {
    let source = value.kind();
    log::trace!("converting {source} to {target}");
    MATRIX[source.index()][target.index()](value).map_err(|error| {
        log::debug!("conversion from {source} to {target} failed: {error}");
        error
    })
}

/// Inspect the value at runtime and convert it into the native type `U`.
pub(crate) fn dispatch<U: Primitive, T: 'static>(value: T) -> Result<U, Error> {
    let value = Value::from_any(value).map_err(|error| {
        log::debug!("cannot convert {} to {}: {error}", core::any::type_name::<T>(), U::KIND);
        error
    })?;
    let result = convert(value, U::KIND)?;
    U::from_value(result).ok_or_else(|| Error::unsupported().to(U::KIND))
}

#[track_caller]
pub(crate) fn unwrap_or_panic<U>(result: Result<U, Error>) -> U {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}
