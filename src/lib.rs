//! # fimoney
//!
//! Leptos + WASM single-page client for the FiMoney product catalog.
//!
//! The crate holds the session holder (`app`), the login and dashboard
//! pages, the REST client for the catalog backend, and the state models that
//! drive rendering. Browser-only glue (fetch, localStorage, console logging)
//! sits behind the `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
