use license_core::{LicenseOrder, describe_order_configuration};

use crate::utils::format_currency;

const NO_LICENSES: &str = "No licenses yet.\n";

/// Confirmation shown after a successful submission.
pub fn render_success(order: &LicenseOrder) -> String {
    let o = &order.order;
    format!(
        "✓ Order #{} placed\n  {} · {} · {}\n  {}\n  Customer: {}\n  Expires:  {}\n  Total:    {}\n",
        order.id,
        o.order_type.label(),
        o.edition.label(),
        o.license_model.label(),
        describe_order_configuration(order),
        o.customer_name,
        o.expiration_date,
        format_currency(o.total),
    )
}

/// "My licenses": one row per order, in the order given.
pub fn render_licenses(orders: &[LicenseOrder]) -> String {
    if orders.is_empty() {
        return NO_LICENSES.to_string();
    }

    let rows: Vec<[String; 6]> = orders
        .iter()
        .map(|order| {
            [
                order.id.to_string(),
                order.order.customer_name.clone(),
                order.order.edition.label().to_string(),
                describe_order_configuration(order),
                order.order.expiration_date.to_string(),
                format_currency(order.order.total),
            ]
        })
        .collect();

    let header = ["ID", "Customer", "Edition", "Configuration", "Expires", "Total"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_row(&header.map(String::from), &widths);
    out.push_str(&format_row(&widths.map(|w| "─".repeat(w)), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let pad = width - cell.chars().count();
            // Money is right-aligned.
            if i == cells.len() - 1 {
                format!("{}{}", " ".repeat(pad), cell)
            } else {
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
