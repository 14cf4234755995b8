//! Everything the notifier needs, read once at startup.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::defaults;
use super::routes::{GLOBAL_SECTION, RouteTable, key};
use super::source::ConfigSource;

/// Process-wide notifier settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Shared, immutable route table
    pub routes: Arc<RouteTable>,

    /// Upper bound on each webhook request
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routes: Arc::new(RouteTable::default()),
            timeout: defaults::timeout(),
        }
    }
}

impl Settings {
    /// Reads settings from a configuration source.
    ///
    /// `global.timeout` must be a positive integer number of seconds;
    /// anything else keeps the default.
    #[must_use]
    pub fn load(source: &impl ConfigSource) -> Self {
        let timeout = source
            .get_u64(GLOBAL_SECTION, key::TIMEOUT)
            .filter(|secs| *secs > 0)
            .map_or_else(defaults::timeout, Duration::from_secs);

        Self {
            routes: Arc::new(RouteTable::load(source)),
            timeout,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, timeout: {}s", self.routes, self.timeout.as_secs())
    }
}
