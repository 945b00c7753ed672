use crate::{derive_infallible, Convert, TryConvert};
use chrono::{DateTime, Utc};
use primcast_base::{Error, Kind, Primitive, SyntaxError};

/// Canonical decimal notation. Floats use the shortest representation that round-trips, without exponent.
macro_rules! derive_to_string {
    ($($src:ty),+ $(,)?) => {
        $(
            impl Convert<String> for $src {
                fn convert(self) -> String {
                    self.to_string()
                }
            }
            derive_infallible!($src => String);
        )+
    };
}

derive_to_string!(bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, char);

macro_rules! derive_parse_int {
    ($($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for &str {
                fn try_convert(self) -> Result<$dst, Error> {
                    self.parse::<$dst>()
                        .map_err(|e| Error::from(SyntaxError::Int(e)).to(<$dst as Primitive>::KIND))
                }
            }
        )+
    };
}

derive_parse_int!(isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);

/// Whether the text literally spells an infinity, as opposed to a finite literal that overflowed.
fn is_infinity_literal(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

macro_rules! derive_parse_float {
    ($($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for &str {
                fn try_convert(self) -> Result<$dst, Error> {
                    let kind = <$dst as Primitive>::KIND;
                    let value = self
                        .parse::<$dst>()
                        .map_err(|e| Error::from(SyntaxError::Float(e)).to(kind))?;
                    if value.is_infinite() && !is_infinity_literal(self) {
                        return Err(Error::out_of_range(kind));
                    }
                    Ok(value)
                }
            }
        )+
    };
}

derive_parse_float!(f32, f64);

impl TryConvert<bool> for &str {
    fn try_convert(self) -> Result<bool, Error> {
        match self {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(Error::from(SyntaxError::Bool(self.to_owned())).to(Kind::Bool)),
        }
    }
}

impl Convert<String> for &str {
    fn convert(self) -> String {
        self.to_owned()
    }
}
derive_infallible!(&str => String);

/// Owned text follows the same rules as borrowed one.
macro_rules! derive_owned_text {
    ($($dst:ty),+ $(,)?) => {
        $(
            impl TryConvert<$dst> for String {
                fn try_convert(self) -> Result<$dst, Error> {
                    self.as_str().try_convert()
                }
            }
        )+
    };
}

derive_owned_text!(bool, isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, DateTime<Utc>);

impl TryConvert<String> for &[u8] {
    fn try_convert(self) -> Result<String, Error> {
        core::str::from_utf8(self)
            .map(str::to_owned)
            .map_err(|e| Error::from(SyntaxError::Utf8(e)).to(Kind::String))
    }
}

impl TryConvert<String> for Vec<u8> {
    fn try_convert(self) -> Result<String, Error> {
        String::from_utf8(self).map_err(|e| Error::from(SyntaxError::Utf8(e.utf8_error())).to(Kind::String))
    }
}
