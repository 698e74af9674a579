//! Dashboard page listing the catalog's products.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing screen. It issues one product-list request on
//! mount and renders the result read-only; there is no polling or retry.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::config::ClientConfig;
use crate::net::types::{Product, User};
use crate::state::products::{NO_PRODUCTS, ProductsState};

/// Dashboard page: header with logout, then the product grid.
#[component]
pub fn DashboardPage(user: User, on_logout: Callback<()>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let products = RwSignal::new(ProductsState::Loading);

    #[cfg(feature = "csr")]
    {
        let user = user.clone();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpCatalogApi::new(config.clone());
            let state = crate::state::products::load_products(&api, &user, &config).await;
            let _ = products.try_set(state);
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let welcome = format!("Welcome, {}!", user.username);

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div class="header-content">
                    <h1>"FiMoney Dashboard"</h1>
                    <div class="user-info">
                        <span>{welcome}</span>
                        <button class="logout-button" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            <main class="dashboard-main">
                <div class="dashboard-content">
                    <section class="products-section">
                        <h2>"Products"</h2>
                        {move || match products.get() {
                            ProductsState::Loading => {
                                view! { <div class="loading">"Loading products..."</div> }.into_any()
                            }
                            ProductsState::Failed(message) => {
                                view! { <div class="error-message">{message}</div> }.into_any()
                            }
                            loaded @ ProductsState::Loaded { .. } => {
                                let summary = loaded.summary();
                                let items = loaded.products().to_vec();
                                view! { <ProductGrid products=items summary=summary/> }.into_any()
                            }
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}

/// Product cards in server order, or the empty-state message.
#[component]
fn ProductGrid(products: Vec<Product>, summary: Option<String>) -> impl IntoView {
    let cards = if products.is_empty() {
        view! {
            <div class="no-products">
                <p>{NO_PRODUCTS}</p>
            </div>
        }
        .into_any()
    } else {
        products
            .into_iter()
            .map(|product| view! { <ProductCard product=product/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        {summary.map(|text| view! { <p class="products-summary">{text}</p> })}
        <div class="products-grid">{cards}</div>
    }
}
