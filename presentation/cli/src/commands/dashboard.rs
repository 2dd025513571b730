use business::domain::product::model::Product;
use business::domain::product::pricing::{format_percent, profit, profit_percent};
use business::domain::vendor::model::Vendor;

use crate::error_mapper::describe_code;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn show(container: &DependencyContainer, query: Option<&str>) -> anyhow::Result<()> {
    let mut dashboard = container.dashboard();
    dashboard.mount().await;

    let summary = dashboard.summary();
    println!("Vendors:  {}", summary.vendor_count);
    println!("Products: {}", summary.product_count);

    for (label, error) in [
        ("vendors", dashboard.vendors.error()),
        ("products", dashboard.products.error()),
    ] {
        if let Some(code) = error {
            println!("! Could not load {}: {}", label, describe_code(code));
        }
    }

    let products = dashboard.search_products(query.unwrap_or_default());
    if products.is_empty() {
        println!("\nNo products to show.");
        return Ok(());
    }

    println!();
    for product in products {
        println!("{}", product_line(product, dashboard.vendors.items()));
    }
    Ok(())
}

/// Vendor name for display; falls back to the raw id when it cannot be resolved.
pub fn vendor_label(product: &Product, vendors: &[Vendor]) -> String {
    let Some(vendor) = &product.vendor else {
        return "no vendor".to_string();
    };
    if let Some(name) = vendor.name() {
        return name.to_string();
    }
    vendors
        .iter()
        .find(|v| &v.id == vendor.id())
        .map(|v| v.name.clone())
        .unwrap_or_else(|| vendor.id().to_string())
}

pub fn product_line(product: &Product, vendors: &[Vendor]) -> String {
    let mut line = format!(
        "{}  {}  sell {:.2}  profit {:.2} ({}%)  vendor: {}",
        product.id,
        product.name,
        product.selling_price,
        profit(product),
        format_percent(profit_percent(product)),
        vendor_label(product, vendors),
    );
    if let Some(category) = &product.category {
        line.push_str(&format!("  Category: {}", category));
    }
    if let Some(thumbnail) = product.thumbnail_url() {
        line.push_str(&format!("  image: {}", thumbnail));
    }
    line
}
