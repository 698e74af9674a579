//! Card for one catalog product on the dashboard grid.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

fn price_label(price: f64) -> String {
    format!("${price}")
}

fn quantity_label(quantity: i64) -> String {
    format!("Qty: {quantity}")
}

fn sku_label(sku: &str) -> String {
    format!("SKU: {sku}")
}

/// Read-only card showing name, type, SKU, description, quantity and price.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let Product { name, kind, sku, description, quantity, price, image_url, .. } = product;
    let alt = name.clone();

    view! {
        <div class="product-card">
            {image_url.map(|src| view! { <img class="product-image" src=src alt=alt/> })}
            <h3>{name}</h3>
            <p class="product-type">{kind}</p>
            <p class="product-sku">{sku_label(&sku)}</p>
            <p class="product-description">{description.unwrap_or_default()}</p>
            <div class="product-details">
                <span class="product-quantity">{quantity_label(quantity)}</span>
                <span class="product-price">{price_label(price)}</span>
            </div>
        </div>
    }
}
