use super::model::Product;

/// Margin per unit: selling price minus cost price (missing cost counts as 0).
pub fn profit(product: &Product) -> f64 {
    product.selling_price - product.cost_price.unwrap_or(0.0)
}

/// Margin relative to cost, in percent.
///
/// Returns 0 when there is no positive cost price, so the result is always finite.
pub fn profit_percent(product: &Product) -> f64 {
    let cost = product.cost_price.unwrap_or(0.0);
    if cost > 0.0 {
        profit(product) / cost * 100.0
    } else {
        0.0
    }
}

/// Percentage rounded to one decimal, as shown next to the profit.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}", percent)
}
