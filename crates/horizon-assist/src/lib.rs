//! Horizon Assist — AT-SPI2 accessibility adapter for GUI applications.
//!
//! This crate exposes an application's widget tree to Linux screen readers
//! by speaking the AT-SPI2 protocol directly over the accessibility bus.
//! The host toolkit hands the adapter a flat snapshot of its widget tree
//! every update cycle; the adapter answers screen-reader queries against
//! that snapshot, emits change and focus notifications, and routes action
//! invocations back into the toolkit through a caller-supplied sink.
//!
//! # Example
//!
//! ```ignore
//! use horizon_assist::{
//!     AccessNode, AccessRole, ActionKind, AtspiAdapter, ApplicationIdentity,
//! };
//!
//! let mut adapter = AtspiAdapter::new(
//!     ApplicationIdentity::new("My Editor"),
//!     Box::new(|action: ActionKind, focus_id: u32| {
//!         // Deliver the action to the widget registered under focus_id.
//!     }),
//! );
//!
//! // Once per frame/update:
//! let nodes = vec![
//!     AccessNode::new(AccessRole::Group),
//!     AccessNode::new(AccessRole::Button)
//!         .with_parent(0)
//!         .with_label("Save")
//!         .with_focus_id(7),
//! ];
//! adapter.sync(nodes, Some(1));
//! ```
//!
//! # Scope
//!
//! The adapter serves the Accessible, Component, Action and Value
//! interfaces plus the root-only Application properties. Rich text,
//! tables, selection and the caching interfaces are intentionally not
//! implemented. On non-Linux platforms every entry point exists as a
//! documented no-op.

mod adapter;
pub mod atspi;
mod error;
mod node;
#[cfg(target_os = "linux")]
mod session;
mod snapshot;
#[cfg(target_os = "linux")]
mod wait;

pub use adapter::AtspiAdapter;
pub use error::{AdapterError, AdapterResult};
pub use node::{
    AccessNode, AccessRole, ActionKind, ActionSink, ApplicationIdentity, StateFlag, StateSet,
};
pub use snapshot::{ObjectTarget, TreeSnapshot};
