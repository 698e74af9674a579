//! Product-list state for the dashboard.
//!
//! The dashboard fetches once per mount and lands in exactly one of
//! [`ProductsState`]'s three variants.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, CatalogApi, network_error_message};
use crate::net::types::{Product, ProductListResponse, User};

pub const FETCH_FAILED: &str = "Failed to fetch products";
pub const NO_PRODUCTS: &str = "No products found. Create your first product!";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductsState {
    #[default]
    Loading,
    Loaded {
        products: Vec<Product>,
        /// Catalog-wide count reported by the server, if any.
        total: Option<u64>,
    },
    Failed(String),
}

impl ProductsState {
    pub fn from_result(result: Result<ProductListResponse, ApiError>, config: &ClientConfig) -> Self {
        match result {
            Ok(list) => Self::Loaded { products: list.products, total: list.total },
            Err(e) => Self::Failed(failure_message(&e, config)),
        }
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Loaded { products, .. } => products,
            _ => &[],
        }
    }

    /// "Showing N of T products" when the server reported a total.
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Loaded { products, total: Some(total) } => {
                Some(format!("Showing {} of {total} products", products.len()))
            }
            _ => None,
        }
    }
}

/// Any HTTP failure gets the fixed fetch message; transport failures name the server.
pub fn failure_message(err: &ApiError, config: &ClientConfig) -> String {
    match err {
        ApiError::Http { .. } => FETCH_FAILED.to_owned(),
        ApiError::Transport(_) => network_error_message(config),
    }
}

/// Fetch the product list once with `user`'s bearer token.
pub async fn load_products<A: CatalogApi>(api: &A, user: &User, config: &ClientConfig) -> ProductsState {
    let result = api.list_products(&user.token).await;
    if let Err(e) = &result {
        leptos::logging::warn!("product list failed: {e}");
    }
    ProductsState::from_result(result, config)
}
