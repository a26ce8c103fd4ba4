use sparkspy_bridge::JavaObject;

use crate::error::ConvertError;

/// A fixed-schema immutable record convertible from a foreign JVM object.
///
/// Implementations provide [`try_convert`](FromJava::try_convert); callers
/// go through [`from_java`](FromJava::from_java), which adds failure
/// logging. Conversion is all-or-nothing: either every declared field is
/// populated or an error comes back, never a partial record.
pub trait FromJava: Sized {
    /// Record type name, used in logs and error context.
    const TYPE_NAME: &'static str;

    /// Accessor names this record declares, in field order (Java spelling).
    const FIELDS: &'static [&'static str];

    /// Build the record from `obj`.
    ///
    /// Reads one zero-argument accessor per declared field, unwrapping
    /// optional wrappers and recursing into nested records where the
    /// schema says so.
    fn try_convert(obj: &dyn JavaObject) -> Result<Self, ConvertError>;

    /// Convert with failure logging.
    ///
    /// On error, emits one error-level event carrying the target type
    /// name, the error, and the accessors the object actually exposes
    /// (reflection, error path only) — then returns the error unchanged.
    /// The accessor listing is the diagnostic for schema drift: a field
    /// removed or renamed by a library upgrade shows up as expected-vs-found.
    fn from_java(obj: &dyn JavaObject) -> Result<Self, ConvertError> {
        Self::try_convert(obj).inspect_err(|error| {
            tracing::error!(
                record = Self::TYPE_NAME,
                error = %error,
                accessors = ?obj.accessor_names(),
                "failed to convert foreign object"
            );
        })
    }
}
