//! Describe command: print the schema of one query kind's payload

use search_dsl::QueryKind;
use search_dsl_core::{FieldRole, Schema, VariantKind};
use starbase::AppResult;

/// Render the schema entries of the payload of `kind`, or `None` for an unknown kind.
pub fn describe_kind(kind: &str) -> Option<String> {
    let kind = QueryKind::from_json_value(kind)?;
    Some(render_schema(kind.json_value(), kind.payload_schema()))
}

fn render_schema(json_value: &str, schema: &Schema) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", json_value, schema.type_name));

    for field in schema.entries() {
        let requiredness = if field.required { "required" } else { "optional" };
        let role = match field.role {
            FieldRole::Property => "",
            FieldRole::WrapperKey => "  [outer key]",
            FieldRole::SiblingKey => "  [sibling key]",
        };
        out.push_str(&format!("  {:<40} {}{}\n", field.name, requiredness, role));
    }

    if !schema.variants.is_empty() {
        out.push_str(&format!("  one of: {}\n", schema.variants.join(", ")));
    }
    if let Some(shortcut) = schema.shortcut {
        out.push_str(&format!("  shortcut: a bare value sets `{}`\n", shortcut));
    }
    out
}

/// Run the describe command
pub fn run_describe(kind: &str) -> AppResult {
    match describe_kind(kind) {
        Some(description) => {
            print!("{}", description);
            Ok(None)
        }
        None => {
            eprintln!("Error: unknown query kind `{}`", kind);
            eprintln!("Use 'search-dsl kinds' to list the supported kinds");
            Ok(Some(1))
        }
    }
}
