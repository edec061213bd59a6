#![forbid(unsafe_code)]

//! Stable group identifiers and the compound id scheme.
//!
//! Every tab group carries one [`GroupId`]. Tab and panel element ids are
//! derived from it by index: tab `{group}-tab-{i}`, panel `{group}-panel-{i}`.
//! Assistive technology relies on these strings to resolve the
//! controls/labelled-by relationships, so the format is load-bearing and
//! covered by tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for auto-generated group ids.
static GROUP_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifier for one tab group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Generate a fresh process-unique id of the form `tabs-{n}`.
    #[must_use]
    pub fn auto() -> Self {
        Self(format!("tabs-{}", GROUP_COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    /// Use a caller-supplied id, e.g. one generated by the host framework.
    #[must_use]
    pub fn custom(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id for the tab at `index`.
    #[must_use]
    pub fn tab_id(&self, index: usize) -> String {
        format!("{}-tab-{index}", self.0)
    }

    /// Element id for the panel at `index`.
    #[must_use]
    pub fn panel_id(&self, index: usize) -> String {
        format!("{}-panel-{index}", self.0)
    }
}

impl core::fmt::Display for GroupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
