//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading shared state from Leptos
//! context providers installed by `App`.

pub mod navigation_bridge;
pub mod toast_host;
