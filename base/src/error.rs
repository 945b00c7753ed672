use crate::kind::Kind;
use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
    str::Utf8Error,
};

/// Error that can occur while converting a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    /// Kind the value was being converted to, if it is one of the built-ins.
    pub target: Option<Kind>,
}

/// Reason of a conversion failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source magnitude doesn't fit into the target range.
    OutOfRange,
    /// Negative value was converted to an unsigned kind.
    Negative,
    /// Unsigned value is greater than the target maximum.
    ExceedsMax,
    /// Value is greater than the maximum of `limit`, the representation used on the way to the target.
    ExceedsLimit { limit: Kind },
    /// Text is not a valid literal of the target kind.
    Syntax(SyntaxError),
    /// Source or target type is not one of the supported kinds.
    Unsupported,
    /// The pair of kinds is never convertible, whatever the value is.
    Rejected { source: Kind },
    /// Failure reported by a user-defined self-conversion.
    Custom(String),
}

/// Text that couldn't be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    Int(ParseIntError),
    Float(ParseFloatError),
    Bool(String),
    Time(String),
    Duration(String),
    Utf8(Utf8Error),
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, target: None }
    }
    /// Attach the target kind to the error.
    pub fn to(mut self, target: Kind) -> Self {
        self.target = Some(target);
        self
    }

    pub fn out_of_range(target: Kind) -> Self {
        Self::new(ErrorKind::OutOfRange).to(target)
    }
    pub fn negative(target: Kind) -> Self {
        Self::new(ErrorKind::Negative).to(target)
    }
    pub fn exceeds_max(target: Kind) -> Self {
        Self::new(ErrorKind::ExceedsMax).to(target)
    }
    pub fn exceeds_limit(limit: Kind, target: Kind) -> Self {
        Self::new(ErrorKind::ExceedsLimit { limit }).to(target)
    }
    pub fn unsupported() -> Self {
        Self::new(ErrorKind::Unsupported)
    }
    pub fn rejected(source: Kind, target: Kind) -> Self {
        Self::new(ErrorKind::Rejected { source }).to(target)
    }
    pub fn custom<M: Into<String>>(message: M) -> Self {
        Self::new(ErrorKind::Custom(message.into()))
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::new(ErrorKind::Syntax(error))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.target) {
            (ErrorKind::OutOfRange, Some(target)) => write!(f, "value out of range for {target}"),
            (ErrorKind::OutOfRange, None) => f.write_str("value out of range"),
            (ErrorKind::Negative, Some(target)) => write!(f, "negative value cannot be converted to {target}"),
            (ErrorKind::Negative, None) => f.write_str("negative value cannot be converted to unsigned"),
            (ErrorKind::ExceedsMax, Some(target)) => write!(f, "value exceeds {target} max limit"),
            (ErrorKind::ExceedsMax, None) => f.write_str("value exceeds max limit"),
            (ErrorKind::ExceedsLimit { limit }, _) => write!(f, "value exceeds {limit} max limit"),
            (ErrorKind::Syntax(error), _) => fmt::Display::fmt(error, f),
            (ErrorKind::Unsupported, _) => f.write_str("unsupported type"),
            (ErrorKind::Rejected { source }, Some(target)) => write!(f, "{source} cannot be converted to {target}"),
            (ErrorKind::Rejected { source }, None) => write!(f, "{source} cannot be converted"),
            (ErrorKind::Custom(message), _) => f.write_str(message),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Int(error) => fmt::Display::fmt(error, f),
            SyntaxError::Float(error) => fmt::Display::fmt(error, f),
            SyntaxError::Bool(text) => write!(f, "invalid boolean literal {text:?}"),
            SyntaxError::Time(text) => write!(f, "no known layout matches {text:?}"),
            SyntaxError::Duration(text) => write!(f, "invalid duration {text:?}"),
            SyntaxError::Utf8(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Syntax(SyntaxError::Int(error)) => Some(error),
            ErrorKind::Syntax(SyntaxError::Float(error)) => Some(error),
            ErrorKind::Syntax(SyntaxError::Utf8(error)) => Some(error),
            _ => None,
        }
    }
}
