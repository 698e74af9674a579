//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`session`, `login`, `products`) so each view
//! depends on a small focused model whose transitions are plain functions.

pub mod login;
pub mod products;
pub mod session;
