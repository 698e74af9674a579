//! Page modules for the two screens the session holder switches between.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its request orchestration and delegates state transitions
//! to `state` and card rendering to `components`.

pub mod dashboard;
pub mod login;
