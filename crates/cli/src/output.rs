use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use stock_dashboard_core::models::analytics::{CompanySummary, PriceSummary};
use stock_dashboard_core::models::series::CompanySeries;

/// One row per company: min, max, average and change over the period.
pub fn summary_table(rows: &[CompanySummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Company", "Min", "Max", "Average", "Change"]);

    for row in rows {
        let cells = match &row.summary {
            PriceSummary::Available(stats) => vec![
                Cell::new(&row.name),
                number(format!("{:.2}", stats.min)),
                number(format!("{:.2}", stats.max)),
                number(stats.avg_display()),
                number(stats.percent_change_display()),
            ],
            PriceSummary::NoData => vec![
                Cell::new(&row.name),
                Cell::new("No data available for this company."),
            ],
        };
        table.add_row(cells);
    }
    table
}

/// Bucket keys next to their averaged prices. Series whose timestamps do not
/// line up with the prices are listed by position.
pub fn series_table(company: &CompanySeries) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Period", "Price"]);

    for (i, price) in company.prices.iter().enumerate() {
        let period = if company.is_aligned() {
            company.timestamps[i].clone()
        } else {
            format!("Point {}", i + 1)
        };
        table.add_row(vec![Cell::new(period), number(format!("{price:.2}"))]);
    }
    table
}

fn number(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
