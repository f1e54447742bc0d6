use pantry_common::display::{DisplayBoard, DisplayBundle};
use pantry_common::product::Product;

/// One human-readable line per product, in snapshot order.
pub fn render_lines(products: &[Product], board: &DisplayBoard) -> Vec<String> {
    products
        .iter()
        .filter_map(|p| board.get(p.id).map(|b| render_line(p, b)))
        .collect()
}

fn render_line(product: &Product, bundle: &DisplayBundle) -> String {
    let mut line = format!("#{} {}:", product.id.0, product.name);
    match &bundle.display_price {
        Some(price) => line.push_str(&format!(" {}", price.display())),
        None => line.push_str(" no offers"),
    }
    if let Some(strike) = &bundle.strike_price {
        line.push_str(&format!(" (was {})", strike.display()));
    }
    if let Some(badge) = &bundle.discount_badge_text {
        line.push_str(&format!(" [{badge}]"));
    }
    match (&bundle.countdown_text, bundle.countdown_tier) {
        (Some(text), _) if text == pantry_common::countdown::EXPIRED_TEXT => {
            line.push_str(" discount expired")
        }
        (Some(text), Some(tier)) => line.push_str(&format!(" {text} left ({tier})")),
        _ => {}
    }
    line
}
