#![forbid(unsafe_code)]

//! Tab group widget core.
//!
//! One [`TabGroup`] is one widget instance: two descendant registries (tabs,
//! panels), one selection controller, and one focus coordinator. The host
//! drives it in two phases. During the event phase it forwards registrations
//! and input ([`select`](TabGroup::select), [`handle_key`](TabGroup::handle_key),
//! [`sync_index`](TabGroup::sync_index)); attribute reads are pure and may
//! happen at any time. At layout time, after its tree reflects the latest
//! mutations and before paint, it calls [`commit`](TabGroup::commit), which
//! re-sorts the registries, applies selection corrections, and performs any
//! pending focus movement.

use crate::aria::{self, PanelAttrs, TabAttrs};
use crate::descendants::DescendantRegistry;
use crate::focus::{FocusCoordinator, FocusIntent};
use crate::navigator::{self, NavRequest};
use crate::selection::{ChangeHandler, SelectionController, SelectionMode, SelectionState};
use core::fmt;
use tabset_core::event::KeyEvent;
use tabset_core::host::{FocusHost, NodeHandle};
use tabset_core::ids::GroupId;

/// Result of feeding a key event to [`TabGroup::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// A tab was selected; the event was consumed.
    Selected(usize),
    /// Focus moves into the selected panel at commit; the event was consumed,
    /// so the host suppresses its default handling (e.g. scrolling on Down).
    FocusPanel,
    /// The key is not part of tab navigation; the event was left alone.
    Ignored,
}

impl KeyResult {
    /// Whether the event was consumed and the host should stop propagation.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Construction options for a [`TabGroup`].
#[derive(Default)]
pub struct TabGroupOptions {
    index: Option<usize>,
    default_index: usize,
    read_only: bool,
    id: Option<GroupId>,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for TabGroupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabGroupOptions")
            .field("index", &self.index)
            .field("default_index", &self.default_index)
            .field("read_only", &self.read_only)
            .field("id", &self.id)
            .field("on_change", &self.on_change.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl TabGroupOptions {
    /// Start from the defaults: uncontrolled, initial selection 0, writable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a controlled selection index. The group is controlled for its
    /// whole lifetime; keep feeding updates via [`TabGroup::sync_index`].
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Initial selection for an uncontrolled group (default 0).
    #[must_use]
    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    /// Suppress all selection-changing requests (default false).
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Override the auto-generated group id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(GroupId::custom(id));
        self
    }

    /// Handler invoked with the requested index on every user-driven
    /// selection attempt, controlled or not.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

/// An accessible tab group: tabs, panels, selection, and roving focus.
#[derive(Debug)]
pub struct TabGroup<N: NodeHandle> {
    id: GroupId,
    tabs: DescendantRegistry<N>,
    panels: DescendantRegistry<N>,
    selection: SelectionController,
    focus: FocusCoordinator,
}

impl<N: NodeHandle> Default for TabGroup<N> {
    fn default() -> Self {
        Self::new(TabGroupOptions::new())
    }
}

impl<N: NodeHandle> TabGroup<N> {
    /// Create a group from options. The selection mode is fixed here: the
    /// group is controlled iff [`TabGroupOptions::index`] was supplied.
    #[must_use]
    pub fn new(options: TabGroupOptions) -> Self {
        let selection = match options.index {
            Some(index) => {
                SelectionController::controlled(index, options.read_only, options.on_change)
            }
            None => SelectionController::uncontrolled(
                options.default_index,
                options.read_only,
                options.on_change,
            ),
        };
        Self {
            id: options.id.unwrap_or_else(GroupId::auto),
            tabs: DescendantRegistry::new(),
            panels: DescendantRegistry::new(),
            selection,
            focus: FocusCoordinator::new(),
        }
    }

    /// The group id used to derive tab/panel element ids.
    #[must_use]
    pub const fn id(&self) -> &GroupId {
        &self.id
    }

    // --- Registration -----------------------------------------------------

    /// Register (or update) a tab trigger; returns its current index.
    pub fn register_tab(&mut self, node: N, disabled: bool) -> usize {
        self.tabs.register(node, disabled)
    }

    /// Remove a tab trigger.
    pub fn unregister_tab(&mut self, node: &N) -> bool {
        self.tabs.unregister(node)
    }

    /// Register (or update) a panel; returns its current index.
    pub fn register_panel(&mut self, node: N) -> usize {
        self.panels.register(node, false)
    }

    /// Remove a panel.
    pub fn unregister_panel(&mut self, node: &N) -> bool {
        self.panels.unregister(node)
    }

    /// Current index of a registered tab node.
    #[must_use]
    pub fn tab_index_of(&self, node: &N) -> Option<usize> {
        self.tabs.index_of(node)
    }

    /// Current index of a registered panel node.
    #[must_use]
    pub fn panel_index_of(&self, node: &N) -> Option<usize> {
        self.panels.index_of(node)
    }

    /// Number of registered tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Number of registered panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// The tabs registry snapshot.
    #[must_use]
    pub fn tabs(&self) -> &DescendantRegistry<N> {
        &self.tabs
    }

    /// The panels registry snapshot.
    #[must_use]
    pub fn panels(&self) -> &DescendantRegistry<N> {
        &self.panels
    }

    // --- Selection --------------------------------------------------------

    /// The effective selected index, clamped to the current tab count.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.clamp(self.selection.selected_index())
    }

    /// Handle a user-driven selection request (e.g. a pointer press on the
    /// tab at `index`).
    ///
    /// Ignored (returns `false`) when the group is read-only, the index is
    /// not registered, or the tab is disabled. Otherwise the change handler
    /// fires and, for uncontrolled groups, the selection moves; the next
    /// [`commit`](Self::commit) focuses the selected tab.
    pub fn select(&mut self, index: usize) -> bool {
        let selectable = self
            .tabs
            .get(index)
            .is_some_and(|entry| !entry.is_disabled());
        if !selectable {
            return false;
        }
        self.selection.request_select(index)
    }

    /// Feed a key event through the navigation algorithm.
    ///
    /// Selection-changing keys resolve against the enabled subset of tabs;
    /// Down queues panel focus instead of changing selection. With zero
    /// enabled tabs, or in read-only mode, selection keys are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyResult {
        let Some(request) = navigator::nav_request_for_key(key) else {
            return KeyResult::Ignored;
        };
        if matches!(request, NavRequest::Panel) {
            self.focus.request(FocusIntent::SelectedPanel);
            return KeyResult::FocusPanel;
        }
        let targets = navigator::nav_targets(&self.tabs, self.selected_index());
        let Some(target) = targets.target(request) else {
            return KeyResult::Ignored;
        };
        if self.select(target) {
            KeyResult::Selected(target)
        } else {
            KeyResult::Ignored
        }
    }

    /// Ask for input focus to move into the selected panel at the next
    /// commit. Works in read-only mode; panel focus is not a selection
    /// change.
    pub fn request_focus_panel(&mut self) {
        self.focus.request(FocusIntent::SelectedPanel);
    }

    /// Reconcile the owner's external index (controlled groups); see
    /// [`SelectionController::sync_index`].
    pub fn sync_index(&mut self, index: Option<usize>) {
        self.selection.sync_index(index);
    }

    /// Enable or disable read-only behavior.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.selection.set_read_only(read_only);
    }

    /// Snapshot the persistable selection state.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Restore a snapshot taken with [`selection_state`](Self::selection_state).
    pub fn restore_selection(&mut self, state: SelectionState) {
        self.selection.restore(state);
    }

    // --- Commit -----------------------------------------------------------

    /// The layout-time pass: re-sort the registries, apply selection
    /// corrections, and perform any pending focus movement.
    ///
    /// The host calls this after its tree reflects the cycle's mutations and
    /// before paint. Corrections (out-of-range clamp, disabled-selection fix)
    /// apply to uncontrolled groups only and never move focus; a
    /// user-initiated selection change focuses the selected tab; an explicit
    /// panel request focuses the selected panel. Idempotent: a second call
    /// with no new events does nothing further.
    pub fn commit(&mut self, host: &mut impl FocusHost<N>) {
        self.tabs.resort();
        self.panels.resort();
        self.reconcile();
        if self.selection.take_user_interacted() && self.focus.pending().is_none() {
            self.focus.request(FocusIntent::SelectedTab);
        }
        self.focus
            .apply(&self.tabs, &self.panels, self.selected_index(), host);
    }

    /// Compute and apply the desired uncontrolled selection: clamp an
    /// out-of-range index, then move off a disabled tab to the navigator's
    /// next-enabled target (wrapping to first-enabled).
    fn reconcile(&mut self) {
        if !matches!(self.selection.mode(), SelectionMode::Uncontrolled) {
            return;
        }
        if self.tabs.is_empty() {
            return;
        }
        let raw = self.selection.selected_index();
        let clamped = raw.min(self.tabs.len() - 1);
        let desired = match self.tabs.get(clamped) {
            Some(entry) if entry.is_disabled() => {
                navigator::next_enabled_after(&self.tabs, clamped)
            }
            _ => Some(clamped),
        };
        if let Some(desired) = desired
            && desired != raw
        {
            self.selection.correct(desired);
        }
    }

    // --- Attributes -------------------------------------------------------

    /// Accessibility attributes for the tab at `index`.
    #[must_use]
    pub fn tab_attrs(&self, index: usize) -> TabAttrs {
        let disabled = self
            .tabs
            .get(index)
            .is_some_and(|entry| entry.is_disabled());
        aria::tab_attrs(&self.id, index, self.selected_index(), disabled)
    }

    /// Accessibility attributes for the panel at `index`.
    #[must_use]
    pub fn panel_attrs(&self, index: usize) -> PanelAttrs {
        aria::panel_attrs(&self.id, index, self.selected_index())
    }

    fn clamp(&self, index: usize) -> usize {
        if self.tabs.is_empty() {
            0
        } else {
            index.min(self.tabs.len() - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tabset_core::event::{KeyCode, KeyEvent};

    #[derive(Default)]
    struct Host {
        focused: Vec<u32>,
    }

    impl FocusHost<u32> for Host {
        fn focus(&mut self, node: &u32) {
            self.focused.push(*node);
        }
    }

    /// Tab nodes 100+i, panel nodes 200+i.
    fn group_with(disabled: &[bool], options: TabGroupOptions) -> TabGroup<u32> {
        let mut group = TabGroup::new(options);
        for (i, &flag) in disabled.iter().enumerate() {
            group.register_tab(100 + i as u32, flag);
            group.register_panel(200 + i as u32);
        }
        group
    }

    #[test]
    fn user_select_focuses_the_new_tab_exactly_once() {
        let mut group = group_with(&[false, false, false], TabGroupOptions::new());
        let mut host = Host::default();

        assert!(group.select(2));
        group.commit(&mut host);
        assert_eq!(group.selected_index(), 2);
        assert_eq!(host.focused, vec![102]);

        group.commit(&mut host);
        assert_eq!(host.focused, vec![102], "no further focus without input");
    }

    #[test]
    fn initial_mount_commit_moves_no_focus() {
        let mut group = group_with(&[false, false], TabGroupOptions::new());
        let mut host = Host::default();
        group.commit(&mut host);
        assert!(host.focused.is_empty());
    }

    #[test]
    fn disabled_initial_selection_corrects_without_focus() {
        let mut group = group_with(&[true, false, false], TabGroupOptions::new());
        let mut host = Host::default();

        group.commit(&mut host);
        assert_eq!(group.selected_index(), 1);
        assert!(host.focused.is_empty(), "correction is not user-initiated");
    }

    #[test]
    fn selection_becoming_disabled_is_corrected() {
        let mut group = group_with(&[false, false], TabGroupOptions::new());
        let mut host = Host::default();
        assert!(group.select(1));
        group.commit(&mut host);

        // The selected tab is re-registered as disabled.
        group.register_tab(101, true);
        group.commit(&mut host);
        assert_eq!(group.selected_index(), 0);
        assert_eq!(host.focused, vec![101], "only the earlier user focus");
    }

    #[test]
    fn removing_the_selected_last_tab_clamps() {
        let mut group = group_with(&[false, false, false], TabGroupOptions::new());
        let mut host = Host::default();
        assert!(group.select(2));
        group.commit(&mut host);

        assert!(group.unregister_tab(&102));
        group.commit(&mut host);
        assert_eq!(group.selected_index(), 1);
        assert_eq!(host.focused, vec![102], "clamping never moves focus");
    }

    #[test]
    fn clicking_a_disabled_tab_is_ignored() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut group = group_with(
            &[false, true],
            TabGroupOptions::new().on_change(move |index| sink.borrow_mut().push(index)),
        );

        assert!(!group.select(1));
        assert!(!group.select(9));
        assert_eq!(group.selected_index(), 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn arrow_keys_walk_the_enabled_subset() {
        let mut group = group_with(&[false, true, false, false], TabGroupOptions::new());

        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Selected(2)
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Selected(3)
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Selected(0),
            "wraps to the first enabled tab"
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Left)),
            KeyResult::Selected(3),
            "wraps to the last enabled tab"
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Home)),
            KeyResult::Selected(0)
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::End)),
            KeyResult::Selected(3)
        );
    }

    #[test]
    fn down_key_requests_panel_focus_not_selection() {
        let mut group = group_with(&[false, false], TabGroupOptions::new());
        let mut host = Host::default();

        let result = group.handle_key(&KeyEvent::new(KeyCode::Down));
        assert_eq!(result, KeyResult::FocusPanel);
        assert!(result.is_consumed());
        assert_eq!(group.selected_index(), 0);

        group.commit(&mut host);
        assert_eq!(host.focused, vec![200]);
    }

    #[test]
    fn unrelated_keys_are_left_alone() {
        let mut group = group_with(&[false, false], TabGroupOptions::new());
        let result = group.handle_key(&KeyEvent::new(KeyCode::Char('a')));
        assert_eq!(result, KeyResult::Ignored);
        assert!(!result.is_consumed());
    }

    #[test]
    fn read_only_ignores_selection_keys_but_not_panel_focus() {
        let mut group = group_with(&[false, false], TabGroupOptions::new().read_only(true));
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Ignored
        );
        assert_eq!(group.selected_index(), 0);
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Down)),
            KeyResult::FocusPanel
        );
    }

    #[test]
    fn zero_enabled_tabs_make_navigation_a_noop() {
        let mut group = group_with(&[true, true], TabGroupOptions::new());
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Ignored
        );
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::End)),
            KeyResult::Ignored
        );
    }

    #[test]
    fn controlled_group_waits_for_the_owner() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut group = group_with(
            &[false, false, false],
            TabGroupOptions::new()
                .index(0)
                .on_change(move |index| sink.borrow_mut().push(index)),
        );
        let mut host = Host::default();

        assert!(group.select(2));
        assert_eq!(group.selected_index(), 0, "internal state untouched");
        assert_eq!(*calls.borrow(), vec![2]);

        group.sync_index(Some(2));
        group.commit(&mut host);
        assert_eq!(group.selected_index(), 2);
        assert_eq!(host.focused, vec![102], "user-initiated change focuses");
    }

    #[test]
    fn programmatic_controlled_update_never_focuses() {
        let mut group = group_with(&[false, false], TabGroupOptions::new().index(0));
        let mut host = Host::default();

        group.sync_index(Some(1));
        group.commit(&mut host);
        assert_eq!(group.selected_index(), 1);
        assert!(host.focused.is_empty());
    }

    #[test]
    fn controlled_group_is_never_auto_corrected() {
        let mut group = group_with(&[true, false], TabGroupOptions::new().index(0));
        let mut host = Host::default();
        group.commit(&mut host);
        assert_eq!(
            group.selected_index(),
            0,
            "disabled correction is the owner's job in controlled mode"
        );
    }

    #[test]
    fn attrs_follow_the_id_scheme() {
        let group = group_with(&[false, false, false], TabGroupOptions::new().id("tabs-1"));
        for index in 0..3 {
            let tab = group.tab_attrs(index);
            let panel = group.panel_attrs(index);
            assert_eq!(tab.id, format!("tabs-1-tab-{index}"));
            assert_eq!(panel.id, format!("tabs-1-panel-{index}"));
            assert_eq!(tab.controls, panel.id);
            assert_eq!(panel.labelled_by, tab.id);
        }
        assert_eq!(group.tab_attrs(0).tab_index, 0);
        assert_eq!(group.tab_attrs(1).tab_index, -1);
        assert!(group.panel_attrs(1).hidden);
        assert!(!group.panel_attrs(0).hidden);
    }

    #[test]
    fn empty_group_is_inert() {
        let mut group: TabGroup<u32> = TabGroup::new(TabGroupOptions::new());
        let mut host = Host::default();

        assert_eq!(group.selected_index(), 0);
        assert!(!group.select(0));
        assert_eq!(
            group.handle_key(&KeyEvent::new(KeyCode::Right)),
            KeyResult::Ignored
        );
        group.commit(&mut host);
        assert!(host.focused.is_empty());
    }

    #[test]
    fn default_index_seeds_uncontrolled_selection() {
        let group = group_with(&[false, false, false], TabGroupOptions::new().default_index(2));
        assert_eq!(group.selected_index(), 2);
    }

    #[test]
    fn selection_state_roundtrip_through_the_group() {
        let mut group = group_with(&[false, false, false], TabGroupOptions::new());
        let mut host = Host::default();
        assert!(group.select(2));
        group.commit(&mut host);

        let saved = group.selection_state();
        assert!(group.select(0));
        group.commit(&mut host);
        group.restore_selection(saved);
        assert_eq!(group.selected_index(), 2);
    }
}
