pub mod error;
pub mod extract;
pub mod object;
pub mod value;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use error::BridgeError;
pub use extract::{extract_fields, optional_long, optional_str, take_long, take_str, unwrap_optional};
pub use object::JavaObject;
pub use value::JavaValue;
