//! Kinds command: list every query kind

use search_dsl::QueryKind;
use search_dsl_core::VariantKind;
use starbase::AppResult;

/// `(json key, payload type)` for every query kind, in declaration order.
pub fn kind_table() -> Vec<(&'static str, &'static str)> {
    QueryKind::ALL
        .iter()
        .map(|kind| (kind.json_value(), kind.payload_schema().type_name))
        .collect()
}

/// Run the kinds command
pub fn run_kinds() -> AppResult {
    let table = kind_table();

    println!("{:<24} Payload", "Kind");
    println!("{}", "-".repeat(50));
    for (json_value, type_name) in &table {
        println!("{:<24} {}", json_value, type_name);
    }
    println!("\nTotal: {} query kind(s)", table.len());

    Ok(None)
}
