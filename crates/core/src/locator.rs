use std::fmt;

use serde::{Deserialize, Serialize};

const DRIVE_SCHEME: &str = "drive://";

/// Opaque identifier naming one trace asset to load.
///
/// Either a direct URL or a provider-qualified id such as `drive://<id>`.
/// Well-formedness is not checked here; a malformed locator surfaces as a
/// fetch failure downstream. Immutable once parsed from the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLocator(String);

impl SourceLocator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Locator for a drive-backed file id.
    pub fn for_drive_id(id: &str) -> Self {
        Self(format!("{DRIVE_SCHEME}{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolution path the fetcher should take for this locator.
    pub fn provider(&self) -> Provider<'_> {
        match self.0.strip_prefix(DRIVE_SCHEME) {
            Some(id) => Provider::Drive { id },
            None => Provider::Url(&self.0),
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceLocator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// How a locator resolves to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider<'a> {
    /// Fetch over the network.
    Url(&'a str),
    /// Resolve from a payload registered ahead of time.
    Drive { id: &'a str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_locator_resolves_over_network() {
        let locator = SourceLocator::new("https://a.com/t.json");
        assert_eq!(locator.provider(), Provider::Url("https://a.com/t.json"));
    }

    #[test]
    fn drive_locator_carries_its_id() {
        let locator = SourceLocator::new("drive://abc123");
        assert_eq!(locator.provider(), Provider::Drive { id: "abc123" });
    }

    #[test]
    fn drive_id_round_trips() {
        let locator = SourceLocator::for_drive_id("xyz");
        assert_eq!(locator.as_str(), "drive://xyz");
        assert_eq!(locator.provider(), Provider::Drive { id: "xyz" });
    }
}
