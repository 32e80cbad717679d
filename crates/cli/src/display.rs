//! Table rendering for products and orders.

use tabled::builder::Builder;
use tabled::settings::Style;

use orderdesk_catalog::Catalog;
use orderdesk_orders::Order;

use crate::input::format_price;

/// Render the catalog: id, name, price, available stock.
pub fn products_table(catalog: &Catalog) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Product ID", "Name", "Price", "Available"]);
    for product in catalog.products() {
        builder.push_record([
            product.id().to_string(),
            product.name().to_string(),
            format_price(product.unit_price()),
            product.stock().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// Render one committed order: a header row plus its line items.
pub fn order_table(order: &Order) -> String {
    let mut header = Builder::default();
    header.push_record(["Order ID", "Order Date", "Estimated Delivery", "Total Amount"]);
    header.push_record([
        order.id().to_string(),
        order.placed_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        order.delivery_due().format("%Y-%m-%d").to_string(),
        format_price(order.total()),
    ]);

    let mut lines = Builder::default();
    lines.push_record(["Product", "Quantity", "Subtotal"]);
    for line in order.lines() {
        lines.push_record([
            line.name.clone(),
            line.quantity.to_string(),
            format_price(line.subtotal()),
        ]);
    }

    let mut header = header.build();
    header.with(Style::sharp());
    let mut lines = lines.build();
    lines.with(Style::sharp());

    format!("{header}\n{lines}")
}
