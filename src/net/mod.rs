//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the register/login/product-list calls and classifies
//! failures; `types` defines the JSON bodies exchanged with the backend.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
