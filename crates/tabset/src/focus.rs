#![forbid(unsafe_code)]

//! Focus coordination.
//!
//! Real input focus moves only at commit time, and only when something asked
//! for it during the event phase: a user-initiated selection change focuses
//! the selected tab, an explicit panel request focuses the selected panel.
//! Programmatic index changes and corrections never queue an intent.
//!
//! # Invariants
//!
//! 1. At most one intent is pending per cycle; a later request supersedes an
//!    earlier one.
//! 2. Applying drains the intent, so a second commit in the same state moves
//!    nothing.
//! 3. An intent whose target is not registered (e.g. panel focus with no
//!    panel mounted) is dropped silently.

use crate::descendants::DescendantRegistry;
use tabset_core::host::{FocusHost, NodeHandle};

/// A deferred focus movement, applied at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Focus the selected tab trigger.
    SelectedTab,
    /// Focus the selected panel.
    SelectedPanel,
}

/// Queues focus intents during the event phase and applies them at commit.
#[derive(Debug, Default)]
pub struct FocusCoordinator {
    pending: Option<FocusIntent>,
}

impl FocusCoordinator {
    /// Create a coordinator with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Queue an intent; a later request in the same cycle wins.
    pub fn request(&mut self, intent: FocusIntent) {
        self.pending = Some(intent);
    }

    /// The currently pending intent, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<FocusIntent> {
        self.pending
    }

    /// Drop the pending intent without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Apply and drain the pending intent.
    ///
    /// Resolves the intent against the given registries and `selected` index
    /// and moves focus through `host`. No-op when nothing is pending or the
    /// target is not registered.
    pub fn apply<N: NodeHandle>(
        &mut self,
        tabs: &DescendantRegistry<N>,
        panels: &DescendantRegistry<N>,
        selected: usize,
        host: &mut impl FocusHost<N>,
    ) {
        let Some(intent) = self.pending.take() else {
            return;
        };
        let registry = match intent {
            FocusIntent::SelectedTab => tabs,
            FocusIntent::SelectedPanel => panels,
        };
        if let Some(entry) = registry.get(selected) {
            host.focus(entry.node());
        }
    }
}
