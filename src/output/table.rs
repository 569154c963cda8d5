//
//  adacord-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Table rendering helpers built on `comfy_table`.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::api::Row;

/// Builds a table with the standard preset from headers and rows.
pub fn data_table<I>(headers: &[&str], rows: I) -> Table
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h.to_uppercase())));
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Builds a table for fetched data rows.
///
/// Columns are the union of field names across all rows, in first-seen
/// order; rows missing a field show an empty cell.
pub fn rows_table(rows: &[Row]) -> Table {
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let rendered = rows.iter().map(|row| {
        columns
            .iter()
            .map(|col| match row.get(*col) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect()
    });

    data_table(&columns, rendered)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_rows_table_unions_columns_in_first_seen_order() {
        let rows: Vec<Row> = vec![
            json!({"name": "a", "field_1": "x"}).as_object().unwrap().clone(),
            json!({"name": "b", "field_2": 2}).as_object().unwrap().clone(),
        ];

        let table = rows_table(&rows);
        let rendered = table.to_string();

        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("FIELD_1"));
        assert!(rendered.contains("FIELD_2"));
        assert!(rendered.contains('a'));
        assert!(rendered.contains('2'));
    }

    #[test]
    fn test_data_table_renders_headers_uppercase() {
        let table = data_table(&["uuid", "name"], vec![vec!["1".into(), "b".into()]]);
        let rendered = table.to_string();

        assert!(rendered.contains("UUID"));
        assert!(rendered.contains("NAME"));
    }
}
