use std::fmt;
use std::sync::Arc;

use crate::error::BridgeError;
use crate::object::JavaObject;

/// A value returned by a zero-argument accessor call.
///
/// The bridge normalizes what the JVM hands back:
/// - integral values (Java `int`, `long`) become `Long`
/// - `java.lang.String` becomes `Str`
/// - `scala.Option` / `java.util.Optional` become `Optional`
/// - anything else object-shaped stays an opaque `Object` reference
#[derive(Clone)]
pub enum JavaValue {
    Long(i64),
    Bool(bool),
    Str(String),
    /// A nested foreign object, convertible or renderable via `toString`.
    Object(Arc<dyn JavaObject>),
    /// A present/absent wrapper.
    Optional(Option<Box<JavaValue>>),
    Null,
}

impl JavaValue {
    /// Short type word used in error messages.
    pub fn type_word(&self) -> &'static str {
        match self {
            JavaValue::Long(_) => "long",
            JavaValue::Bool(_) => "bool",
            JavaValue::Str(_) => "string",
            JavaValue::Object(_) => "object",
            JavaValue::Optional(_) => "optional",
            JavaValue::Null => "null",
        }
    }

    /// Project to an integral value. `accessor` is context for the error.
    pub fn into_long(self, accessor: &str) -> Result<i64, BridgeError> {
        match self {
            JavaValue::Long(v) => Ok(v),
            other => Err(mismatch(accessor, "long", &other)),
        }
    }

    pub fn into_bool(self, accessor: &str) -> Result<bool, BridgeError> {
        match self {
            JavaValue::Bool(v) => Ok(v),
            other => Err(mismatch(accessor, "bool", &other)),
        }
    }

    pub fn into_str(self, accessor: &str) -> Result<String, BridgeError> {
        match self {
            JavaValue::Str(v) => Ok(v),
            other => Err(mismatch(accessor, "string", &other)),
        }
    }

    /// Project to a nested foreign object reference.
    pub fn into_object(self, accessor: &str) -> Result<Arc<dyn JavaObject>, BridgeError> {
        match self {
            JavaValue::Object(obj) => Ok(obj),
            other => Err(mismatch(accessor, "object", &other)),
        }
    }
}

fn mismatch(accessor: &str, expected: &'static str, actual: &JavaValue) -> BridgeError {
    BridgeError::TypeMismatch {
        accessor: accessor.to_string(),
        expected,
        actual: actual.type_word(),
    }
}

// Manual impl: `Arc<dyn JavaObject>` carries no `PartialEq`. Opaque object
// references compare by pointer identity; every other variant structurally.
impl PartialEq for JavaValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JavaValue::Long(a), JavaValue::Long(b)) => a == b,
            (JavaValue::Bool(a), JavaValue::Bool(b)) => a == b,
            (JavaValue::Str(a), JavaValue::Str(b)) => a == b,
            (JavaValue::Object(a), JavaValue::Object(b)) => Arc::ptr_eq(a, b),
            (JavaValue::Optional(a), JavaValue::Optional(b)) => a == b,
            (JavaValue::Null, JavaValue::Null) => true,
            _ => false,
        }
    }
}

// Manual impl: `Arc<dyn JavaObject>` carries no Debug.
impl fmt::Debug for JavaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaValue::Long(v) => write!(f, "Long({v})"),
            JavaValue::Bool(v) => write!(f, "Bool({v})"),
            JavaValue::Str(v) => write!(f, "Str({v:?})"),
            JavaValue::Object(_) => f.write_str("Object(..)"),
            JavaValue::Optional(Some(v)) => write!(f, "Optional(Some({v:?}))"),
            JavaValue::Optional(None) => f.write_str("Optional(None)"),
            JavaValue::Null => f.write_str("Null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_long_projects_and_reports_mismatch() {
        assert_eq!(JavaValue::Long(42).into_long("numTasks"), Ok(42));

        let err = JavaValue::Str("x".to_string()).into_long("numTasks");
        assert_eq!(
            err,
            Err(BridgeError::TypeMismatch {
                accessor: "numTasks".to_string(),
                expected: "long",
                actual: "string",
            })
        );
    }

    #[test]
    fn into_str_rejects_null() {
        let err = JavaValue::Null.into_str("name");
        assert_eq!(
            err,
            Err(BridgeError::TypeMismatch {
                accessor: "name".to_string(),
                expected: "string",
                actual: "null",
            })
        );
    }

    #[test]
    fn into_bool_projects() {
        assert_eq!(JavaValue::Bool(true).into_bool("isDefined"), Ok(true));
    }
}
