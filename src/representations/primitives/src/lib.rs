mod c_float;
mod c_integer;
mod c_primitive;
mod integer_sign;

pub use c_float::CFloat;
pub use c_integer::{CInteger, fmt_c_integer};
pub use c_primitive::CPrimitive;
pub use integer_sign::IntegerSign;
use thiserror::Error;

#[derive(Clone, Debug, Error, Hash, PartialEq, Eq)]
#[error("Unsupported field type `{0}`")]
pub struct UnsupportedFieldType(pub String);
