use chrono::{DateTime, Utc};
use primcast::{into, into_float32, into_int8, into_string, into_time, into_uint8, SelfTryInto};

#[test]
fn success() {
    assert_eq!(into_int8(-128i64), -128);
    assert_eq!(into_float32("0.25"), 0.25);
    assert_eq!(into_string(12u8), "12");
    assert_eq!(into::<u64, _>(true), 1);
    assert_eq!(into_time(86400u32).timestamp(), 86400);
}

#[test]
#[should_panic(expected = "value out of range for int8")]
fn out_of_range() {
    into_int8(300i32);
}

#[test]
#[should_panic(expected = "negative value cannot be converted to uint8")]
fn negative() {
    into_uint8(-1i32);
}

#[test]
#[should_panic(expected = "value exceeds uint8 max limit")]
fn exceeds_max() {
    into::<u8, _>(256u16);
}

#[test]
#[should_panic(expected = "invalid float literal")]
fn syntax() {
    into_float32("one");
}

#[test]
#[should_panic(expected = "float64 cannot be converted to time")]
fn rejected() {
    into::<DateTime<Utc>, _>(3.14f64);
}

#[test]
#[should_panic(expected = "unsupported type")]
fn unsupported_source() {
    into_string('x');
}

#[test]
#[should_panic(expected = "unsupported type")]
fn unsupported_target() {
    into::<char, _>(1u32);
}

struct Never;

impl SelfTryInto<char> for Never {
    fn self_try_into(self: Box<Self>) -> Result<char, primcast::Error> {
        Err(primcast::Error::custom("never converts"))
    }
}

#[test]
#[should_panic(expected = "never converts")]
fn custom() {
    into::<char, _>(Never.boxed());
}
