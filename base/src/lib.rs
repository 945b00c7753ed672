//! Kinds, dynamic values and errors shared by the primcast crates.

pub mod error;
pub mod kind;
mod primitive;
pub mod traits;
pub mod value;

pub use error::{Error, ErrorKind, SyntaxError};
pub use kind::Kind;
pub use traits::{Primitive, SelfInto, SelfTryInto};
pub use value::Value;
