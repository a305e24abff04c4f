//! Version stamp carried by series documents and availability reports.

use crate::SCHEMA_VERSION;

/// Layout version of a series document or report.
///
/// A document without a `version` field is read as the current one. The
/// file loader refuses documents whose major version differs; new optional
/// sample fields only bump the minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
pub struct SchemaVersion {
    /// Bumped when a field is renamed or its meaning changes.
    #[cfg_attr(feature = "minicbor", n(0))]
    pub major: u32,

    /// Bumped for additive fields that older readers can ignore.
    #[cfg_attr(feature = "minicbor", n(1))]
    pub minor: u32,
}

impl SchemaVersion {
    /// Create a new schema version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Version written by this release.
    pub const fn current() -> Self {
        Self {
            major: SCHEMA_VERSION,
            minor: 0,
        }
    }

    /// Whether a document at this version can be read by this release.
    pub fn is_compatible(&self) -> bool {
        self.major == SCHEMA_VERSION
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_compatible() {
        assert!(SchemaVersion::current().is_compatible());
        assert!(SchemaVersion::new(SCHEMA_VERSION, 7).is_compatible());
    }

    #[test]
    fn other_major_is_incompatible() {
        assert!(!SchemaVersion::new(SCHEMA_VERSION + 1, 0).is_compatible());
    }

    #[test]
    fn default_is_current() {
        assert_eq!(SchemaVersion::default(), SchemaVersion::current());
    }
}
