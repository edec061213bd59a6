#![forbid(unsafe_code)]

//! Accessibility attribute computation.
//!
//! Each rendered element derives its own attributes from the shared group
//! state instead of having them injected by an ancestor. The id linkage is
//! bit-exact: tab `{group}-tab-{i}` controls panel `{group}-panel-{i}`, and
//! the panel is labelled by the tab. The roving tabindex keeps only the
//! selected tab in the host's tab order.

use tabset_core::ids::GroupId;

/// Attributes for the tab trigger at one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabAttrs {
    /// Element id: `{group}-tab-{index}`.
    pub id: String,
    /// Id of the panel this tab controls: `{group}-panel-{index}`.
    pub controls: String,
    /// Whether this tab is the selected one.
    pub selected: bool,
    /// Roving tab order value: `0` when selected, `-1` otherwise.
    pub tab_index: i32,
    /// Whether this tab is disabled.
    pub disabled: bool,
}

/// Attributes for the panel at one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAttrs {
    /// Element id: `{group}-panel-{index}`.
    pub id: String,
    /// Id of the tab labelling this panel: `{group}-tab-{index}`.
    pub labelled_by: String,
    /// Hidden when not the selected panel.
    pub hidden: bool,
}

/// Compute the attributes for the tab at `index`.
#[must_use]
pub fn tab_attrs(group: &GroupId, index: usize, selected: usize, disabled: bool) -> TabAttrs {
    let is_selected = index == selected;
    TabAttrs {
        id: group.tab_id(index),
        controls: group.panel_id(index),
        selected: is_selected,
        tab_index: if is_selected { 0 } else { -1 },
        disabled,
    }
}

/// Compute the attributes for the panel at `index`.
#[must_use]
pub fn panel_attrs(group: &GroupId, index: usize, selected: usize) -> PanelAttrs {
    PanelAttrs {
        id: group.panel_id(index),
        labelled_by: group.tab_id(index),
        hidden: index != selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_link_tabs_and_panels_by_index() {
        let group = GroupId::custom("tabs-1");
        for index in 0..3 {
            let tab = tab_attrs(&group, index, 0, false);
            let panel = panel_attrs(&group, index, 0);
            assert_eq!(tab.id, format!("tabs-1-tab-{index}"));
            assert_eq!(panel.id, format!("tabs-1-panel-{index}"));
            assert_eq!(tab.controls, panel.id);
            assert_eq!(panel.labelled_by, tab.id);
        }
    }

    #[test]
    fn roving_tab_index_follows_selection() {
        let group = GroupId::custom("g");
        let selected = tab_attrs(&group, 1, 1, false);
        let other = tab_attrs(&group, 0, 1, false);
        assert!(selected.selected);
        assert_eq!(selected.tab_index, 0);
        assert!(!other.selected);
        assert_eq!(other.tab_index, -1);
    }

    #[test]
    fn unselected_panels_are_hidden() {
        let group = GroupId::custom("g");
        assert!(!panel_attrs(&group, 2, 2).hidden);
        assert!(panel_attrs(&group, 0, 2).hidden);
    }

    #[test]
    fn disabled_flag_passes_through() {
        let group = GroupId::custom("g");
        assert!(tab_attrs(&group, 0, 1, true).disabled);
        assert!(!tab_attrs(&group, 0, 1, false).disabled);
    }
}
