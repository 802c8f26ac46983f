//! Composite primitive keys for namespaced registrations.

/// Separator between event type and namespace in a composite key.
pub(crate) const NAMESPACE_SEPARATOR: &str = "::";

/// Builds the primitive key for `(event, namespace)`.
#[inline]
pub(crate) fn composite_key(event: &str, namespace: &str) -> String {
    let mut key = String::with_capacity(event.len() + NAMESPACE_SEPARATOR.len() + namespace.len());
    key.push_str(event);
    key.push_str(NAMESPACE_SEPARATOR);
    key.push_str(namespace);
    key
}

/// Returns the namespace if it is non-empty; an empty namespace takes no effect.
#[inline]
pub(crate) fn effective(namespace: &str) -> Option<&str> {
    if namespace.is_empty() {
        None
    } else {
        Some(namespace)
    }
}
