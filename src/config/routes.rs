//! Routing from mailing lists to webhook destinations.

use std::collections::HashMap;
use std::fmt;

use super::defaults;
use super::source::ConfigSource;

/// Section holding process-wide settings.
pub const GLOBAL_SECTION: &str = "global";

/// Prefix of per-list sections: `list.<identifier>`.
pub const LIST_SECTION_PREFIX: &str = "list.";

/// Well-known keys.
pub mod key {
    /// Destination URL (global default or per list).
    pub const URL: &str = "url";
    /// Notification template.
    pub const MESSAGE_FORMAT: &str = "message_format";
    /// Request timeout in seconds.
    pub const TIMEOUT: &str = "timeout";
}

/// Destination lookup for mailing lists, plus the active template.
///
/// A list without its own route falls back to the default URL. An empty
/// URL, default or per list, means "no destination" and is never an
/// error. The table is immutable once built and is shared read-only
/// between callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    default_url: String,
    list_routes: HashMap<String, String>,
    template: String,
}

impl Default for RouteTable {
    /// No default destination, no routes and the built-in template.
    fn default() -> Self {
        Self::new(defaults::URL, defaults::MESSAGE_FORMAT)
    }
}

impl RouteTable {
    /// Creates a table with no list routes.
    #[must_use]
    pub fn new(default_url: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            default_url: default_url.into(),
            list_routes: HashMap::new(),
            template: template.into(),
        }
    }

    /// Adds or replaces the route for `list_id`.
    ///
    /// An empty `url` routes the list to "no destination".
    #[must_use]
    pub fn with_route(mut self, list_id: impl Into<String>, url: impl Into<String>) -> Self {
        self.list_routes.insert(list_id.into(), url.into());
        self
    }

    /// Builds the table from a configuration source.
    ///
    /// Reads `global.url`, `global.message_format` and the `url` key of each
    /// `list.<identifier>` section. Missing keys, or keys holding a value of
    /// the wrong type, keep their defaults; loading never fails. A list
    /// section without a usable `url` is skipped, so that list falls back to
    /// the default URL.
    #[must_use]
    pub fn load(source: &impl ConfigSource) -> Self {
        let default_url = source
            .get_str(GLOBAL_SECTION, key::URL)
            .unwrap_or(defaults::URL);
        let template = source
            .get_str(GLOBAL_SECTION, key::MESSAGE_FORMAT)
            .unwrap_or(defaults::MESSAGE_FORMAT);

        let mut table = Self::new(default_url, template);

        for section in source.sections() {
            let Some(list_id) = section.strip_prefix(LIST_SECTION_PREFIX) else {
                continue;
            };

            let Some(url) = source.get_str(&section, key::URL) else {
                tracing::error!(
                    list = list_id,
                    "Section [{section}] has no string '{}' key, list uses the default URL",
                    key::URL
                );
                continue;
            };

            if url.is_empty() {
                tracing::info!(list = list_id, "Notifications disabled for list");
            } else {
                tracing::info!(list = list_id, "List channel is ready to send out messages");
            }

            table.list_routes.insert(list_id.to_string(), url.to_string());
        }

        table
    }

    /// Returns the destination for `list_id`.
    ///
    /// The list's own route if it has one, otherwise the default URL.
    /// Either may be empty.
    #[must_use]
    pub fn resolve(&self, list_id: &str) -> &str {
        self.list_routes
            .get(list_id)
            .map_or(self.default_url.as_str(), String::as_str)
    }

    /// Returns the notification template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the fallback destination.
    #[must_use]
    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// Returns true if `list_id` has its own route.
    #[must_use]
    pub fn has_route(&self, list_id: &str) -> bool {
        self.list_routes.contains_key(list_id)
    }

    /// Number of per-list routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list_routes.len()
    }

    /// Returns true if there are no per-list routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list_routes.is_empty()
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = if self.default_url.is_empty() {
            "none"
        } else {
            self.default_url.as_str()
        };
        let enabled = self.list_routes.values().filter(|u| !u.is_empty()).count();

        write!(
            f,
            "Routes {{ default: {default}, lists: {}, enabled: {enabled} }}",
            self.len()
        )
    }
}
