#![forbid(unsafe_code)]

//! Core: host seam and input types for the tabset widget.
//!
//! # Role in tabset
//! `tabset-core` is the boundary layer. It owns the canonical keyboard event
//! types, the traits an embedding renderer implements (node handles and the
//! focus primitive), and the compound-id scheme that links tabs to panels.
//!
//! # Primary responsibilities
//! - **Event**: canonical keyboard events consumed by the selection machine.
//! - **Host traits**: `NodeHandle` (document-order comparison) and
//!   `FocusHost` (real input-focus movement).
//! - **Ids**: stable unique group identifiers and the `{group}-tab-{i}` /
//!   `{group}-panel-{i}` id scheme.
//!
//! # How it fits in the system
//! The widget layer (`tabset`) consumes these types and stays renderer
//! agnostic: a DOM host, a terminal host, or a test double all plug in at
//! this seam without touching the state machine.

pub mod event;
pub mod host;
pub mod ids;
