//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the settings shared by a primitive and the emitters
//! built on top of it.
//!
//! Config is used in two ways:
//! 1. **Direct construction**: `NamespacedEmitter::with_config(scope, config)`
//! 2. **Registry defaults**: `ScopeRegistry::with_config(config)` hands it to every emitter it creates
//!
//! ## Sentinel values
//! - `max_listeners = 0` → unlimited (no leak warning is ever logged)

/// Default per-key listener count above which a possible leak is reported.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Configuration for emitters.
///
/// ## Field semantics
/// - `max_listeners`: per-key warning threshold (`0` = unlimited)
///
/// ## Notes
/// Exceeding the threshold never rejects a registration; it only logs a `warn!`
/// once per key. Prefer [`EmitterConfig::listener_limit`] over checking `0` directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Number of listeners a single key may hold before a leak warning is logged.
    ///
    /// Counted per primitive key, so a namespaced registration counts against its
    /// composite key and not against the plain event type.
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Returns the warning threshold as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → warn when a key holds more than `n` listeners
    #[inline]
    pub fn listener_limit(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }

    /// Returns a copy with the given threshold.
    #[must_use]
    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.max_listeners = max;
        self
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_listeners = 10`
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let cfg = EmitterConfig::default();
        assert_eq!(cfg.listener_limit(), Some(DEFAULT_MAX_LISTENERS));
    }

    #[test]
    fn test_zero_means_unlimited() {
        let cfg = EmitterConfig::default().with_max_listeners(0);
        assert_eq!(cfg.listener_limit(), None);
    }
}
