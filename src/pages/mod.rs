//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates the session and
//! resource work to the containers in `state`.

pub mod dashboard;
pub mod login;
