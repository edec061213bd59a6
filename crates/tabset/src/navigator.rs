#![forbid(unsafe_code)]

//! Keyboard navigation over the enabled subset of tabs.
//!
//! Pure computation: given a registry snapshot and the selected raw index,
//! compute the wrap-around first/last/prev/next targets, considering only
//! non-disabled tabs.
//!
//! # Invariants
//!
//! - Targets are raw registry indices, always of enabled entries.
//! - `prev`/`next` wrap: off the start lands on `last`, off the end on
//!   `first`. When the selected entry is not in the enabled subset (disabled
//!   or gone), `next` wraps to `first` and `prev` to `last`.
//! - With zero enabled entries every target is `None`; callers issue no
//!   selection request.
//! - The computation is deterministic and has no side effects.

use crate::descendants::DescendantRegistry;
use tabset_core::event::{KeyCode, KeyEvent};

/// A navigation request decoded from a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Select the next enabled tab (wraps to the first).
    Next,
    /// Select the previous enabled tab (wraps to the last).
    Prev,
    /// Select the first enabled tab.
    First,
    /// Select the last enabled tab.
    Last,
    /// Move focus into the selected panel; never a selection change.
    Panel,
}

/// Wrap-around navigation targets, as raw registry indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavTargets {
    /// First enabled tab.
    pub first: Option<usize>,
    /// Last enabled tab.
    pub last: Option<usize>,
    /// Enabled tab before the selected one (wrapping).
    pub prev: Option<usize>,
    /// Enabled tab after the selected one (wrapping).
    pub next: Option<usize>,
}

impl NavTargets {
    /// The target index for a selection-changing request.
    ///
    /// [`NavRequest::Panel`] is not a selection change and yields `None`.
    #[must_use]
    pub const fn target(&self, request: NavRequest) -> Option<usize> {
        match request {
            NavRequest::Next => self.next,
            NavRequest::Prev => self.prev,
            NavRequest::First => self.first,
            NavRequest::Last => self.last,
            NavRequest::Panel => None,
        }
    }
}

/// Raw indices of the non-disabled tabs, in document order.
#[must_use]
pub fn enabled_indices<N>(tabs: &DescendantRegistry<N>) -> Vec<usize> {
    tabs.entries()
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| (!entry.is_disabled()).then_some(index))
        .collect()
}

/// Compute wrap-around targets for the given registry snapshot and selected
/// raw index.
#[must_use]
pub fn nav_targets<N>(tabs: &DescendantRegistry<N>, selected: usize) -> NavTargets {
    let enabled = enabled_indices(tabs);
    let (Some(&first), Some(&last)) = (enabled.first(), enabled.last()) else {
        return NavTargets::default();
    };
    let pos = enabled.iter().position(|&index| index == selected);
    let prev = match pos {
        Some(p) if p > 0 => enabled[p - 1],
        _ => last,
    };
    let next = match pos {
        Some(p) if p + 1 < enabled.len() => enabled[p + 1],
        _ => first,
    };
    NavTargets {
        first: Some(first),
        last: Some(last),
        prev: Some(prev),
        next: Some(next),
    }
}

/// First enabled tab after `index` in document order, wrapping to the first
/// enabled tab when none follows.
///
/// This is the disabled-selection correction target: unlike
/// [`NavTargets::next`], it scans forward from a raw position, so it stays
/// meaningful when `index` itself is disabled.
#[must_use]
pub fn next_enabled_after<N>(tabs: &DescendantRegistry<N>, index: usize) -> Option<usize> {
    let enabled = enabled_indices(tabs);
    enabled
        .iter()
        .copied()
        .find(|&i| i > index)
        .or_else(|| enabled.first().copied())
}

/// Decode a key event into a navigation request.
///
/// Right/Left step with wrap-around, Home/End jump to the extremes, and Down
/// asks for panel focus. Any other key is not part of tab navigation and maps
/// to `None`; callers leave the event untouched so the host's default
/// handling still applies.
#[must_use]
pub const fn nav_request_for_key(key: &KeyEvent) -> Option<NavRequest> {
    match key.code {
        KeyCode::Right => Some(NavRequest::Next),
        KeyCode::Left => Some(NavRequest::Prev),
        KeyCode::Home => Some(NavRequest::First),
        KeyCode::End => Some(NavRequest::Last),
        KeyCode::Down => Some(NavRequest::Panel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(disabled: &[bool]) -> DescendantRegistry<usize> {
        let mut reg = DescendantRegistry::new();
        for (index, &flag) in disabled.iter().enumerate() {
            reg.register(index, flag);
        }
        reg
    }

    #[test]
    fn wraps_around_the_enabled_subset() {
        // Enabled raw indices: [0, 2, 3] (index 1 disabled).
        let reg = registry(&[false, true, false, false]);

        let from_zero = nav_targets(&reg, 0);
        assert_eq!(from_zero.next, Some(2));
        assert_eq!(from_zero.prev, Some(3));

        let from_last = nav_targets(&reg, 3);
        assert_eq!(from_last.next, Some(0));
        assert_eq!(from_last.prev, Some(2));

        assert_eq!(from_zero.first, Some(0));
        assert_eq!(from_zero.last, Some(3));
    }

    #[test]
    fn disabled_selection_falls_back_to_the_extremes() {
        let reg = registry(&[true, false, false]);
        let targets = nav_targets(&reg, 0);
        assert_eq!(targets.next, Some(1));
        assert_eq!(targets.prev, Some(2));
    }

    #[test]
    fn single_enabled_tab_points_at_itself() {
        let reg = registry(&[true, false, true]);
        let targets = nav_targets(&reg, 1);
        assert_eq!(targets.first, Some(1));
        assert_eq!(targets.last, Some(1));
        assert_eq!(targets.prev, Some(1));
        assert_eq!(targets.next, Some(1));
    }

    #[test]
    fn zero_enabled_tabs_yield_no_targets() {
        let all_disabled = registry(&[true, true]);
        assert_eq!(nav_targets(&all_disabled, 0), NavTargets::default());

        let empty: DescendantRegistry<usize> = DescendantRegistry::new();
        assert_eq!(nav_targets(&empty, 0), NavTargets::default());
    }

    #[test]
    fn selection_beyond_the_registry_wraps_like_not_found() {
        let reg = registry(&[false, false]);
        let targets = nav_targets(&reg, 9);
        assert_eq!(targets.next, Some(0));
        assert_eq!(targets.prev, Some(1));
    }

    #[test]
    fn next_enabled_after_scans_forward_then_wraps() {
        let reg = registry(&[true, false, false]);
        assert_eq!(next_enabled_after(&reg, 0), Some(1));

        let middle_disabled = registry(&[false, true, false]);
        assert_eq!(next_enabled_after(&middle_disabled, 1), Some(2));

        let tail_disabled = registry(&[false, false, true]);
        assert_eq!(next_enabled_after(&tail_disabled, 2), Some(0));

        let none = registry(&[true, true]);
        assert_eq!(next_enabled_after(&none, 0), None);
    }

    #[test]
    fn key_mapping_covers_the_navigation_keys() {
        use tabset_core::event::KeyCode;

        let cases = [
            (KeyCode::Right, Some(NavRequest::Next)),
            (KeyCode::Left, Some(NavRequest::Prev)),
            (KeyCode::Home, Some(NavRequest::First)),
            (KeyCode::End, Some(NavRequest::Last)),
            (KeyCode::Down, Some(NavRequest::Panel)),
            (KeyCode::Up, None),
            (KeyCode::Enter, None),
            (KeyCode::Char('x'), None),
        ];
        for (code, expected) in cases {
            assert_eq!(nav_request_for_key(&KeyEvent::new(code)), expected);
        }
    }

    #[test]
    fn panel_request_is_not_a_selection_target() {
        let reg = registry(&[false, false]);
        let targets = nav_targets(&reg, 0);
        assert_eq!(targets.target(NavRequest::Panel), None);
        assert_eq!(targets.target(NavRequest::Next), Some(1));
    }
}
