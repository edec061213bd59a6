#![forbid(unsafe_code)]

//! Controlled/uncontrolled selection state.
//!
//! Owns the canonical selected index and mediates every selection-changing
//! request through a single entry point. In uncontrolled mode the controller
//! owns the index; in controlled mode the owner does, and the controller only
//! mirrors the last index the owner supplied.
//!
//! # Invariants
//!
//! 1. The mode is fixed at construction. A later attempt to switch is a usage
//!    error: warned once, then ignored.
//! 2. `request_select` notifies the change handler on every user-driven
//!    attempt (both modes) and mutates internal state only when uncontrolled.
//! 3. Read-only suppresses selection-changing requests entirely, including
//!    the change notification; controlled programmatic updates still apply.

use core::fmt;

/// Who owns the canonical selected index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The widget's caller owns the index; the core only requests changes.
    Controlled,
    /// The core owns the index.
    Uncontrolled,
}

/// Change handler invoked with the requested index on every user-driven
/// selection attempt.
pub type ChangeHandler = Box<dyn FnMut(usize)>;

/// Snapshot of the persistable selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SelectionState {
    /// Selected raw index (unclamped).
    pub selected: usize,
    /// Whether selection-changing requests are suppressed.
    pub read_only: bool,
}

/// Reconciles externally-driven and internally-driven index changes.
pub struct SelectionController {
    mode: SelectionMode,
    selected: usize,
    read_only: bool,
    user_interacted: bool,
    on_change: Option<ChangeHandler>,
    warned_mode_switch: bool,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .field("read_only", &self.read_only)
            .field("user_interacted", &self.user_interacted)
            .field("on_change", &self.on_change.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl SelectionController {
    /// Create an uncontrolled controller starting at `default_index`.
    #[must_use]
    pub fn uncontrolled(
        default_index: usize,
        read_only: bool,
        on_change: Option<ChangeHandler>,
    ) -> Self {
        Self {
            mode: SelectionMode::Uncontrolled,
            selected: default_index,
            read_only,
            user_interacted: false,
            on_change,
            warned_mode_switch: false,
        }
    }

    /// Create a controlled controller mirroring the owner-supplied `index`.
    ///
    /// A controlled controller without a change handler cannot report user
    /// selection attempts anywhere; unless it is read-only, that is a usage
    /// misconfiguration and is warned about.
    #[must_use]
    pub fn controlled(index: usize, read_only: bool, on_change: Option<ChangeHandler>) -> Self {
        if on_change.is_none() && !read_only {
            Self::warn_missing_handler();
        }
        Self {
            mode: SelectionMode::Controlled,
            selected: index,
            read_only,
            user_interacted: false,
            on_change,
            warned_mode_switch: false,
        }
    }

    /// The construction-time mode.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether selection-changing requests are currently suppressed.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Enable or disable read-only behavior.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// The selected raw index: internal when uncontrolled, the last
    /// owner-supplied index when controlled.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Handle a user-driven selection request for `index`.
    ///
    /// No-op (returns `false`) when read-only. Otherwise marks the change as
    /// user-initiated, notifies the change handler, and — only when
    /// uncontrolled — updates the internal index. Controlled owners are
    /// expected to feed the new index back via [`sync_index`](Self::sync_index).
    pub fn request_select(&mut self, index: usize) -> bool {
        if self.read_only {
            return false;
        }
        self.user_interacted = true;
        if let Some(handler) = self.on_change.as_mut() {
            handler(index);
        }
        if matches!(self.mode, SelectionMode::Uncontrolled) {
            #[cfg(feature = "tracing")]
            Self::log_switch("user", self.selected, index);
            self.selected = index;
        }
        true
    }

    /// Reconcile the owner's per-cycle external index.
    ///
    /// `Some` on a controlled instance applies the owner's index as a
    /// programmatic update. `Some` on an uncontrolled instance, or `None` on
    /// a controlled one, is an attempt to switch modes after construction:
    /// warned once, then ignored — the controller keeps behaving in its
    /// construction-time mode.
    pub fn sync_index(&mut self, index: Option<usize>) {
        match (self.mode, index) {
            (SelectionMode::Controlled, Some(index)) => {
                #[cfg(feature = "tracing")]
                Self::log_switch("owner", self.selected, index);
                self.selected = index;
            }
            (SelectionMode::Uncontrolled, None) => {}
            _ => self.warn_mode_switch(),
        }
    }

    /// Apply a programmatic correction (clamp or disabled-selection fix).
    ///
    /// Does not mark the change as user-initiated, so no focus movement
    /// follows. Only meaningful for uncontrolled controllers; callers guard.
    pub(crate) fn correct(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        Self::log_switch("correction", self.selected, index);
        self.selected = index;
    }

    /// Consume the transient user-interaction flag.
    pub(crate) fn take_user_interacted(&mut self) -> bool {
        let user = self.user_interacted;
        self.user_interacted = false;
        user
    }

    /// Snapshot the persistable selection state.
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        SelectionState {
            selected: self.selected,
            read_only: self.read_only,
        }
    }

    /// Restore a snapshot taken with [`state`](Self::state).
    ///
    /// The selected index is applied only when uncontrolled (a controlled
    /// owner restores its own index); `read_only` applies in both modes.
    pub fn restore(&mut self, state: SelectionState) {
        self.read_only = state.read_only;
        if matches!(self.mode, SelectionMode::Uncontrolled) {
            self.selected = state.selected;
        }
    }

    fn warn_mode_switch(&mut self) {
        if self.warned_mode_switch {
            return;
        }
        self.warned_mode_switch = true;
        #[cfg(feature = "tracing")]
        tracing::warn!(
            message = "tabset.selection.mode_switch",
            mode = ?self.mode,
            "controlled/uncontrolled mode changed after construction; keeping the original mode"
        );
    }

    fn warn_missing_handler() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            message = "tabset.selection.missing_change_handler",
            "controlled selection without a change handler is effectively read-only"
        );
    }

    #[cfg(feature = "tracing")]
    fn log_switch(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "tabset.selection.switch", reason, from, to);
    }
}
