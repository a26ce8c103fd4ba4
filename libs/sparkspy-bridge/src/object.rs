use crate::error::BridgeError;
use crate::value::JavaValue;

/// An opaque reference to an object owned by the JVM.
///
/// Implemented by the bridge layer that actually marshals method calls
/// (a py4j-style gateway, JNI, or an in-process fake in tests). Converters
/// only ever call declared zero-argument accessors; the one exception is
/// `accessor_names`, a reflection listing used on the error path to
/// diagnose schema drift.
///
/// Implementations must not mutate the underlying object: every method
/// here is a read.
pub trait JavaObject: Send + Sync {
    /// Invoke the zero-argument accessor `accessor` on the object.
    ///
    /// An accessor the object does not expose yields
    /// [`BridgeError::AccessorNotFound`]; a call that fails on the JVM
    /// side yields [`BridgeError::Call`].
    fn call(&self, accessor: &str) -> Result<JavaValue, BridgeError>;

    /// List every zero-argument accessor the object currently exposes.
    ///
    /// Backed by the bridge's reflection facility. Invoked only when a
    /// conversion has already failed, so it carries no normal-path cost.
    fn accessor_names(&self) -> Vec<String>;

    /// The Java `toString()` rendering, for enum-like values.
    fn to_display_string(&self) -> Result<String, BridgeError> {
        self.call("toString")?.into_str("toString")
    }
}
