//! Reusable UI component modules.

pub mod product_card;
