use chrono::{DateTime, Utc};
use primcast::{
    into_bool, into_string, try_into, try_into_float32, try_into_float64, try_into_int, try_into_int16,
    try_into_int32, try_into_int64, try_into_int8, try_into_uint, try_into_uint16, try_into_uint32, try_into_uint64,
    try_into_uint8, ErrorKind, Kind, Value,
};

macro_rules! each_numeric {
    ($mac:ident) => {
        $mac!(isize);
        $mac!(i8);
        $mac!(i16);
        $mac!(i32);
        $mac!(i64);
        $mac!(usize);
        $mac!(u8);
        $mac!(u16);
        $mac!(u32);
        $mac!(u64);
        $mac!(f32);
        $mac!(f64);
    };
}

#[test]
fn identity() {
    macro_rules! check {
        ($ty:ty) => {
            for value in [<$ty>::MIN, <$ty>::MAX, 0 as $ty, 1 as $ty] {
                assert_eq!(try_into::<$ty, _>(value), Ok(value));
            }
        };
    }
    each_numeric!(check);

    assert_eq!(try_into::<bool, _>(true), Ok(true));
    assert_eq!(try_into::<String, _>(String::new()), Ok(String::new()));
    let time = DateTime::<Utc>::MIN_UTC;
    assert_eq!(try_into::<DateTime<Utc>, _>(time), Ok(time));
}

#[test]
fn widen_then_narrow() {
    for value in [i8::MIN, -1, 0, i8::MAX] {
        assert_eq!(try_into_int8(try_into_int64(value).unwrap()), Ok(value));
        assert_eq!(try_into_int8(try_into_float32(value).unwrap()), Ok(value));
    }
    for value in [0, 1, u16::MAX] {
        assert_eq!(try_into_uint16(try_into_uint64(value).unwrap()), Ok(value));
        assert_eq!(try_into_uint16(try_into_int32(value).unwrap()), Ok(value));
        assert_eq!(try_into_uint16(try_into_float64(value).unwrap()), Ok(value));
    }
    for value in [i32::MIN, i32::MAX] {
        assert_eq!(try_into_int32(try_into_float64(value).unwrap()), Ok(value));
        assert_eq!(try_into_int32(try_into_int(value).unwrap()), Ok(value));
    }
    for value in [0, u32::MAX] {
        assert_eq!(try_into_uint32(try_into_uint(value).unwrap()), Ok(value));
        assert_eq!(try_into_uint32(try_into_int64(value).unwrap()), Ok(value));
    }
}

#[test]
fn boolean_mapping() {
    macro_rules! check {
        ($ty:ty) => {
            assert!(!into_bool(0 as $ty));
            assert!(into_bool(1 as $ty));
            assert!(into_bool(<$ty>::MAX));
            assert!(into_bool(<$ty>::MIN) || <$ty>::MIN == 0 as $ty);
            assert_eq!(try_into::<$ty, _>(true), Ok(1 as $ty));
            assert_eq!(try_into::<$ty, _>(false), Ok(0 as $ty));
        };
    }
    each_numeric!(check);

    assert!(!into_bool(-0.0f64));
    assert!(into_bool(f64::NAN));
}

#[test]
fn range_boundaries() {
    assert_eq!(try_into_int8(127i64), Ok(127));
    assert_eq!(try_into_int8(128i64).unwrap_err().kind, ErrorKind::OutOfRange);
    assert_eq!(try_into_int8(-128i16), Ok(-128));
    assert_eq!(try_into_int8(-129i16).unwrap_err().kind, ErrorKind::OutOfRange);
    assert_eq!(try_into_uint8(255u64), Ok(255));
    assert_eq!(try_into_uint8(256u64).unwrap_err().kind, ErrorKind::ExceedsMax);
    assert_eq!(try_into_uint8(256i32).unwrap_err().kind, ErrorKind::OutOfRange);
    assert_eq!(try_into_int16(32767u16), Ok(32767));
    assert_eq!(try_into_int16(32768u16).unwrap_err().to_string(), "value exceeds int16 max limit");
    assert_eq!(try_into_int64(i64::MAX as u64), Ok(i64::MAX));
    assert_eq!(try_into_uint64(u64::MAX as f64).unwrap_err().kind, ErrorKind::OutOfRange);
    assert_eq!(try_into_int32(2147483647.0f64), Ok(i32::MAX));
    assert_eq!(try_into_int32(2147483648.0f64).unwrap_err().to_string(), "value out of range for int32");
    assert_eq!(try_into_float32(f64::from(f32::MAX)), Ok(f32::MAX));
    assert!(try_into_float32(f64::INFINITY).is_err());
}

/// Smallest and largest values of a numeric kind.
fn extremes(kind: Kind) -> [Value; 2] {
    match kind {
        Kind::Int => [Value::Int(isize::MIN), Value::Int(isize::MAX)],
        Kind::Int8 => [Value::Int8(i8::MIN), Value::Int8(i8::MAX)],
        Kind::Int16 => [Value::Int16(i16::MIN), Value::Int16(i16::MAX)],
        Kind::Int32 => [Value::Int32(i32::MIN), Value::Int32(i32::MAX)],
        Kind::Int64 => [Value::Int64(i64::MIN), Value::Int64(i64::MAX)],
        Kind::Uint => [Value::Uint(usize::MIN), Value::Uint(usize::MAX)],
        Kind::Uint8 => [Value::Uint8(u8::MIN), Value::Uint8(u8::MAX)],
        Kind::Uint16 => [Value::Uint16(u16::MIN), Value::Uint16(u16::MAX)],
        Kind::Uint32 => [Value::Uint32(u32::MIN), Value::Uint32(u32::MAX)],
        Kind::Uint64 => [Value::Uint64(u64::MIN), Value::Uint64(u64::MAX)],
        Kind::Float32 => [Value::Float32(f32::MIN), Value::Float32(f32::MAX)],
        Kind::Float64 => [Value::Float64(f64::MIN), Value::Float64(f64::MAX)],
        _ => unreachable!("{kind} is not numeric"),
    }
}

/// Integer value widened without loss, `None` for floats.
fn as_i128(value: &Value) -> Option<i128> {
    match *value {
        Value::Int(v) => Some(v as i128),
        Value::Int8(v) => Some(v.into()),
        Value::Int16(v) => Some(v.into()),
        Value::Int32(v) => Some(v.into()),
        Value::Int64(v) => Some(v.into()),
        Value::Uint(v) => Some(v as i128),
        Value::Uint8(v) => Some(v.into()),
        Value::Uint16(v) => Some(v.into()),
        Value::Uint32(v) => Some(v.into()),
        Value::Uint64(v) => Some(v.into()),
        _ => None,
    }
}

fn as_f64(value: &Value) -> f64 {
    match *value {
        Value::Float32(v) => v.into(),
        Value::Float64(v) => v,
        _ => unreachable!(),
    }
}

/// Whether `value` lies within the range of the numeric `target` kind.
fn fits(value: &Value, target: Kind) -> bool {
    let [min, max] = extremes(target);
    match (as_i128(value), as_i128(&min), as_i128(&max)) {
        (Some(v), Some(min), Some(max)) => min <= v && v <= max,
        // Every integer is within the float range.
        (Some(_), None, None) => true,
        (None, Some(min), Some(max)) => {
            let v = as_f64(value);
            min as f64 <= v && v <= max as f64
        }
        (None, None, None) => {
            let v = as_f64(value);
            as_f64(&min) <= v && v <= as_f64(&max)
        }
        _ => unreachable!(),
    }
}

#[test]
fn range_boundaries_exhaustive() {
    let numeric = Kind::ALL.into_iter().filter(|kind| kind.is_numeric());
    for source in numeric.clone() {
        for target in numeric.clone() {
            for value in extremes(source) {
                let expected = fits(&value, target);
                let result = primcast::convert(value.clone(), target);
                assert_eq!(result.is_ok(), expected, "{value} ({source}) -> {target}: {result:?}");
                if let Err(error) = result {
                    assert_eq!(error.target, Some(target));
                }
            }
        }
    }
}

#[test]
fn sign_rejection() {
    macro_rules! check {
        ($value:expr) => {
            assert_eq!(try_into_uint($value).unwrap_err().kind, ErrorKind::Negative);
            assert_eq!(try_into_uint8($value).unwrap_err().kind, ErrorKind::Negative);
            assert_eq!(try_into_uint16($value).unwrap_err().kind, ErrorKind::Negative);
            assert_eq!(try_into_uint32($value).unwrap_err().kind, ErrorKind::Negative);
            let error = try_into_uint64($value).unwrap_err();
            assert_eq!(error.kind, ErrorKind::Negative);
            assert_eq!(error.to_string(), "negative value cannot be converted to uint64");
        };
    }
    check!(-1isize);
    check!(-1i8);
    check!(-1i16);
    check!(-1i32);
    check!(-1i64);
}

#[test]
fn text_round_trip() {
    macro_rules! check {
        ($ty:ty) => {
            for value in [<$ty>::MIN, <$ty>::MAX, 0 as $ty, 7 as $ty] {
                assert_eq!(try_into::<$ty, _>(into_string(value)), Ok(value));
            }
        };
    }
    each_numeric!(check);

    for value in [0.1f32, -1.5e-7, 3.4028235e38] {
        assert_eq!(try_into::<f32, _>(into_string(value)), Ok(value));
    }
    for value in [0.1f64, 1e300, f64::MIN_POSITIVE, 2.0f64.powi(60)] {
        assert_eq!(try_into::<f64, _>(into_string(value)), Ok(value));
    }
    for value in [true, false] {
        assert_eq!(try_into::<bool, _>(into_string(value)), Ok(value));
    }
}

#[test]
fn unsupported_never_succeeds() {
    for kind in Kind::ALL {
        let result = primcast::convert(Value::Uint8(0), kind);
        assert!(result.is_ok() || result.unwrap_err().target == Some(kind));
    }
    assert_eq!(try_into_int(1u128).unwrap_err().kind, ErrorKind::Unsupported);
    assert_eq!(try_into_float64('1').unwrap_err().kind, ErrorKind::Unsupported);
    assert_eq!(try_into::<u16, _>(&1u16).unwrap_err().kind, ErrorKind::Unsupported);
}
