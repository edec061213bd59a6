#![forbid(unsafe_code)]

//! Headless accessible tab widget core.
//!
//! A group of selectable triggers ("tabs"), each associated with a content
//! region ("panel"), where exactly one pair is active at a time. This crate
//! owns the selection/navigation state machine — positional registries,
//! controlled/uncontrolled selection, wrap-around keyboard navigation over
//! the enabled subset, and roving focus — and leaves rendering, styling, and
//! event plumbing to the embedding host, which plugs in at the
//! `tabset-core` seam ([`NodeHandle`], [`FocusHost`]).
//!
//! # Example
//!
//! ```
//! use tabset::event::{KeyCode, KeyEvent};
//! use tabset::{FocusHost, KeyResult, TabGroup, TabGroupOptions};
//!
//! struct Focus(Vec<u32>);
//!
//! impl FocusHost<u32> for Focus {
//!     fn focus(&mut self, node: &u32) {
//!         self.0.push(*node);
//!     }
//! }
//!
//! let mut group: TabGroup<u32> = TabGroup::new(TabGroupOptions::new().id("tabs-1"));
//! group.register_tab(10, false);
//! group.register_tab(11, false);
//! group.register_panel(20);
//! group.register_panel(21);
//!
//! // Arrow keys walk the enabled tabs with wrap-around.
//! let result = group.handle_key(&KeyEvent::new(KeyCode::Right));
//! assert_eq!(result, KeyResult::Selected(1));
//!
//! // The commit pass applies corrections and moves focus for user input.
//! let mut focus = Focus(Vec::new());
//! group.commit(&mut focus);
//! assert_eq!(focus.0, vec![11]);
//!
//! // Accessibility attributes follow the compound id scheme.
//! assert_eq!(group.tab_attrs(1).id, "tabs-1-tab-1");
//! assert_eq!(group.panel_attrs(1).labelled_by, "tabs-1-tab-1");
//! ```

pub mod aria;
pub mod descendants;
pub mod focus;
pub mod group;
pub mod navigator;
pub mod selection;

pub use aria::{PanelAttrs, TabAttrs};
pub use descendants::{Descendant, DescendantRegistry};
pub use focus::{FocusCoordinator, FocusIntent};
pub use group::{KeyResult, TabGroup, TabGroupOptions};
pub use navigator::{NavRequest, NavTargets};
pub use selection::{ChangeHandler, SelectionController, SelectionMode, SelectionState};

// The host seam, re-exported for downstream convenience.
pub use tabset_core::event;
pub use tabset_core::host::{FocusHost, NodeHandle};
pub use tabset_core::ids::GroupId;
