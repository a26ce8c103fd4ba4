use std::collections::HashMap;

use crate::error::BridgeError;
use crate::object::JavaObject;
use crate::value::JavaValue;

/// Read the named zero-argument accessors of `obj` into a name → value map.
///
/// The key set of the result is exactly `names` minus `exclude` — no extra
/// keys, no missing keys. Any accessor failure propagates and no partial
/// map is returned. Excluded names are for fields the caller handles
/// specially (optional unwrap, recursive conversion).
pub fn extract_fields<'n>(
    obj: &dyn JavaObject,
    names: &[&'n str],
    exclude: &[&str],
) -> Result<HashMap<&'n str, JavaValue>, BridgeError> {
    let mut values = HashMap::with_capacity(names.len());
    for &name in names {
        if exclude.contains(&name) {
            continue;
        }
        values.insert(name, obj.call(name)?);
    }
    Ok(values)
}

/// Remove `accessor` from an extracted field map as an integral value.
pub fn take_long(
    fields: &mut HashMap<&str, JavaValue>,
    accessor: &str,
) -> Result<i64, BridgeError> {
    match fields.remove(accessor) {
        Some(value) => value.into_long(accessor),
        None => Err(BridgeError::accessor_not_found(accessor)),
    }
}

/// Remove `accessor` from an extracted field map as a string.
pub fn take_str(
    fields: &mut HashMap<&str, JavaValue>,
    accessor: &str,
) -> Result<String, BridgeError> {
    match fields.remove(accessor) {
        Some(value) => value.into_str(accessor),
        None => Err(BridgeError::accessor_not_found(accessor)),
    }
}

/// Unwrap a foreign present/absent wrapper to value-or-`None`.
///
/// The `None` sentinel is uniform across the system: downstream code tests
/// for absence the same way regardless of which field produced it. A value
/// that is not a wrapper at all is an unwrap failure, not an absent value.
pub fn unwrap_optional(value: JavaValue) -> Result<Option<JavaValue>, BridgeError> {
    match value {
        JavaValue::Optional(Some(inner)) => Ok(Some(*inner)),
        JavaValue::Optional(None) => Ok(None),
        other => Err(BridgeError::NotOptional { actual: other.type_word() }),
    }
}

/// Read `accessor` as an optional integral value.
pub fn optional_long(obj: &dyn JavaObject, accessor: &str) -> Result<Option<i64>, BridgeError> {
    unwrap_optional(obj.call(accessor)?)?
        .map(|v| v.into_long(accessor))
        .transpose()
}

/// Read `accessor` as an optional string.
pub fn optional_str(obj: &dyn JavaObject, accessor: &str) -> Result<Option<String>, BridgeError> {
    unwrap_optional(obj.call(accessor)?)?
        .map(|v| v.into_str(accessor))
        .transpose()
}
