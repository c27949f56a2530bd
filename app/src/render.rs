//! Result table rendering
//!
//! Split in two halves: `TableModel` turns a query result into display-ready
//! text (testable off-browser), and `RenderTarget` writes a model into the
//! page.

use serde_json::Value;
use sqlplay_types::QueryResult;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTableCellElement};

/// Text shown in place of rows when a result is empty.
const EMPTY_PLACEHOLDER: &str = "No results found";

/// Cell text for a result value. Null renders as the literal `NULL`; all
/// other values use their default string form, with no type-specific
/// formatting.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Display-ready form of a query result: a header row plus either data rows
/// or a single placeholder row spanning all columns.
#[derive(Clone, Debug, PartialEq)]
pub struct TableModel {
    pub header: Vec<String>,
    pub body: TableBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// One row spanning all columns
    Placeholder(String),
    /// Formatted cell text, one inner Vec per row
    Rows(Vec<Vec<String>>),
}

impl TableModel {
    pub fn from_result(result: &QueryResult) -> Self {
        let header = result.columns.iter().map(|c| c.name.clone()).collect();
        let body = if result.is_empty() {
            TableBody::Placeholder(EMPTY_PLACEHOLDER.to_string())
        } else {
            TableBody::Rows(
                result
                    .rows
                    .iter()
                    .map(|row| row.iter().map(format_cell).collect())
                    .collect(),
            )
        };
        Self { header, body }
    }
}

/// The page regions the renderer owns: results container, results table and
/// elapsed-time display.
pub struct RenderTarget {
    document: Document,
    container: HtmlElement,
    table: Element,
    elapsed: Element,
}

impl RenderTarget {
    pub fn new(
        document: Document,
        container: HtmlElement,
        table: Element,
        elapsed: Element,
    ) -> Self {
        Self {
            document,
            container,
            table,
            elapsed,
        }
    }

    /// Replaces the rendered table with `result`. Prior content is cleared
    /// before the new rows go in, so a stale result is never left visible.
    pub fn render(&self, result: &QueryResult, elapsed_ms: f64) -> Result<(), JsValue> {
        self.table.set_inner_html("");
        self.show();
        self.elapsed
            .set_text_content(Some(&format!("Execution time: {elapsed_ms}ms")));
        self.render_model(&TableModel::from_result(result))
    }

    fn render_model(&self, model: &TableModel) -> Result<(), JsValue> {
        let header_row = self.document.create_element("tr")?;
        for name in &model.header {
            let th = self.document.create_element("th")?;
            th.set_text_content(Some(name));
            header_row.append_child(&th)?;
        }
        self.table.append_child(&header_row)?;

        match &model.body {
            TableBody::Placeholder(text) => {
                let row = self.document.create_element("tr")?;
                let cell: HtmlTableCellElement =
                    self.document.create_element("td")?.unchecked_into();
                cell.set_col_span(model.header.len().max(1) as u32);
                cell.set_text_content(Some(text));
                row.append_child(&cell)?;
                self.table.append_child(&row)?;
            }
            TableBody::Rows(rows) => {
                for cells in rows {
                    let row = self.document.create_element("tr")?;
                    for text in cells {
                        let td = self.document.create_element("td")?;
                        td.set_text_content(Some(text));
                        row.append_child(&td)?;
                    }
                    self.table.append_child(&row)?;
                }
            }
        }
        Ok(())
    }

    /// Empties the results table and elapsed display and hides the
    /// container. Safe to call repeatedly.
    pub fn clear(&self) {
        self.table.set_inner_html("");
        self.elapsed.set_text_content(Some(""));
        let _ = self.container.style().set_property("display", "none");
    }

    fn show(&self) {
        let _ = self.container.style().set_property("display", "block");
    }
}

#[cfg(test)]
mod tests {
    use super::{format_cell, TableBody, TableModel};
    use serde_json::json;
    use sqlplay_types::{ColumnSchema, QueryResult};

    fn column(name: &str) -> ColumnSchema {
        ColumnSchema {
            name: name.to_string(),
            data_type: "Int32".to_string(),
            nullable: true,
        }
    }

    #[test]
    fn null_renders_as_literal_null() {
        assert_eq!(format_cell(&json!(null)), "NULL");
    }

    #[test]
    fn values_use_default_string_form() {
        assert_eq!(format_cell(&json!("Alice")), "Alice");
        assert_eq!(format_cell(&json!(42)), "42");
        assert_eq!(format_cell(&json!(2.5)), "2.5");
        assert_eq!(format_cell(&json!(true)), "true");
    }

    #[test]
    fn zero_rows_become_one_placeholder_row() {
        let result = QueryResult {
            columns: vec![column("a"), column("b"), column("c")],
            rows: vec![],
        };
        let model = TableModel::from_result(&result);
        assert_eq!(model.header, vec!["a", "b", "c"]);
        assert_eq!(model.body, TableBody::Placeholder("No results found".to_string()));
    }

    #[test]
    fn rows_are_formatted_in_order() {
        let result = QueryResult {
            columns: vec![column("x")],
            rows: vec![vec![json!(1)], vec![json!(null)]],
        };
        let model = TableModel::from_result(&result);
        assert_eq!(
            model.body,
            TableBody::Rows(vec![
                vec!["1".to_string()],
                vec!["NULL".to_string()],
            ]),
        );
    }
}
