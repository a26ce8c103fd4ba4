//! In-process stand-ins for bridge-backed JVM objects.
//!
//! Gated behind the `test-util` feature; downstream crates pull it in as a
//! dev-dependency feature only.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::BridgeError;
use crate::object::JavaObject;
use crate::value::JavaValue;

enum Entry {
    Value(JavaValue),
    /// The accessor exists but its call fails.
    Fails(String),
}

/// A fake JVM object built from a name → value table.
///
/// Accessor calls look the name up; `accessor_names` returns the keys in
/// sorted order, standing in for the bridge's reflection listing.
#[derive(Default)]
pub struct FakeObject {
    accessors: BTreeMap<String, Entry>,
}

impl FakeObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, accessor: &str, value: JavaValue) -> Self {
        self.accessors.insert(accessor.to_string(), Entry::Value(value));
        self
    }

    pub fn with_long(self, accessor: &str, value: i64) -> Self {
        self.with(accessor, JavaValue::Long(value))
    }

    pub fn with_str(self, accessor: &str, value: &str) -> Self {
        self.with(accessor, JavaValue::Str(value.to_string()))
    }

    /// Attach a nested object under `accessor`.
    pub fn with_object(self, accessor: &str, nested: FakeObject) -> Self {
        self.with(accessor, JavaValue::Object(Arc::new(nested)))
    }

    /// A present optional wrapper holding `value`.
    pub fn with_present(self, accessor: &str, value: JavaValue) -> Self {
        self.with(accessor, JavaValue::Optional(Some(Box::new(value))))
    }

    /// An absent optional wrapper.
    pub fn with_absent(self, accessor: &str) -> Self {
        self.with(accessor, JavaValue::Optional(None))
    }

    /// An accessor whose call fails with `message`.
    pub fn with_failing(mut self, accessor: &str, message: &str) -> Self {
        self.accessors
            .insert(accessor.to_string(), Entry::Fails(message.to_string()));
        self
    }
}

impl JavaObject for FakeObject {
    fn call(&self, accessor: &str) -> Result<JavaValue, BridgeError> {
        match self.accessors.get(accessor) {
            Some(Entry::Value(value)) => Ok(value.clone()),
            Some(Entry::Fails(message)) => Err(BridgeError::call(accessor, message.clone())),
            None => Err(BridgeError::accessor_not_found(accessor)),
        }
    }

    fn accessor_names(&self) -> Vec<String> {
        self.accessors.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_looks_up_values() {
        let obj = FakeObject::new().with_long("jobId", 7);
        assert_eq!(obj.call("jobId").and_then(|v| v.into_long("jobId")), Ok(7));
        assert_eq!(
            obj.call("time").unwrap_err(),
            BridgeError::accessor_not_found("time")
        );
    }

    #[test]
    fn failing_accessor_reports_call_error() {
        let obj = FakeObject::new().with_failing("taskMetrics", "connection reset");
        assert_eq!(
            obj.call("taskMetrics").unwrap_err(),
            BridgeError::call("taskMetrics", "connection reset")
        );
    }

    #[test]
    fn accessor_names_lists_everything_sorted() {
        let obj = FakeObject::new()
            .with_long("time", 1)
            .with_long("jobId", 7)
            .with_failing("jobResult", "boom");
        assert_eq!(obj.accessor_names(), ["jobId", "jobResult", "time"]);
    }

    #[test]
    fn to_display_string_routes_through_tostring() {
        let obj = FakeObject::new().with_str("toString", "JobSucceeded");
        assert_eq!(obj.to_display_string(), Ok("JobSucceeded".to_string()));
    }
}
