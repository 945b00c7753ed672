use core::any::{type_name, Any};
use primcast_base::{value::take, Error, SelfInto, SelfTryInto};

/// Convert a value that declares its own conversion into `U`.
///
/// The value must be a boxed [`SelfInto<U>`] or [`SelfTryInto<U>`], the infallible one is tried first.
pub(crate) fn self_convert<U: 'static, T: 'static>(value: T) -> Result<U, Error> {
    let mut slot = Some(value);
    let slot: &mut dyn Any = &mut slot;

    if let Some(value) = take::<Box<dyn SelfInto<U>>>(slot) {
        log::trace!("converting to {} via self conversion", type_name::<U>());
        return Ok(value.self_into());
    }
    if let Some(value) = take::<Box<dyn SelfTryInto<U>>>(slot) {
        log::trace!("converting to {} via fallible self conversion", type_name::<U>());
        return value.self_try_into();
    }

    log::debug!("cannot convert {} to {}", type_name::<T>(), type_name::<U>());
    Err(Error::unsupported())
}
