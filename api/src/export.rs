//! CSV rendering for the watchlist export.

use shared::entity::stocks::{Model, StockStatus};

/// Stored column names in schema order; this is the header row of every
/// export.
const COLUMNS: [&str; 12] = [
    "id",
    "symbol",
    "company_name",
    "sector",
    "entry_price",
    "target_price",
    "stop_loss",
    "risk_reward_ratio",
    "technical_signal",
    "reasoning",
    "added_date",
    "status",
];

/// Render the given stocks as a CSV document: header row plus one row per
/// stock, CRLF line endings, empty cell for NULL.
pub fn to_csv(stocks: &[Model]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push_str("\r\n");

    for stock in stocks {
        let row = [
            stock.id.to_string(),
            escape(&stock.symbol),
            opt_text(&stock.company_name),
            opt_text(&stock.sector),
            opt_decimal(stock.entry_price),
            opt_decimal(stock.target_price),
            opt_decimal(stock.stop_loss),
            opt_text(&stock.risk_reward_ratio),
            opt_text(&stock.technical_signal),
            opt_text(&stock.reasoning),
            stock.added_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            match stock.status {
                StockStatus::Active => "active".to_string(),
                StockStatus::Inactive => "inactive".to_string(),
            },
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    out
}

fn opt_text(field: &Option<String>) -> String {
    field.as_deref().map(escape).unwrap_or_default()
}

fn opt_decimal(field: Option<rust_decimal::Decimal>) -> String {
    field.map(|d| d.to_string()).unwrap_or_default()
}

/// Quote a field when it contains a comma, quote or line break; embedded
/// quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
