//! Browser-side renderer checks

#![cfg(target_arch = "wasm32")]

use serde_json::json;
use sqlplay_app::render::RenderTarget;
use sqlplay_types::{ColumnSchema, QueryResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn target() -> (RenderTarget, HtmlElement, Element, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    let table = document.create_element("table").unwrap();
    let elapsed = document.create_element("span").unwrap();
    let render_target = RenderTarget::new(
        document,
        container.clone(),
        table.clone(),
        elapsed.clone(),
    );
    (render_target, container, table, elapsed)
}

fn two_column_result(rows: Vec<Vec<serde_json::Value>>) -> QueryResult {
    let column = |name: &str, data_type: &str| ColumnSchema {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullable: true,
    };
    QueryResult {
        columns: vec![column("x", "Int32"), column("y", "Utf8")],
        rows,
    }
}

#[wasm_bindgen_test]
fn renders_header_and_rows() {
    let (target, _container, table, elapsed) = target();
    let result = two_column_result(vec![
        vec![json!(1), json!("a")],
        vec![json!(null), json!("b")],
    ]);
    target.render(&result, 1.23).unwrap();

    let rows = table.query_selector_all("tr").unwrap();
    assert_eq!(rows.length(), 3);
    assert_eq!(table.query_selector_all("th").unwrap().length(), 2);
    assert!(table.inner_html().contains("NULL"));
    assert_eq!(elapsed.text_content().unwrap(), "Execution time: 1.23ms");
}

#[wasm_bindgen_test]
fn zero_rows_render_one_placeholder_row() {
    let (target, _container, table, _elapsed) = target();
    target.render(&two_column_result(vec![]), 0.5).unwrap();

    let rows = table.query_selector_all("tr").unwrap();
    assert_eq!(rows.length(), 2);
    let cell = table.query_selector("td").unwrap().unwrap();
    assert_eq!(cell.get_attribute("colspan").as_deref(), Some("2"));
    assert_eq!(cell.text_content().unwrap(), "No results found");
}

#[wasm_bindgen_test]
fn clear_is_idempotent() {
    let (target, container, table, elapsed) = target();
    let result = two_column_result(vec![vec![json!(1), json!("a")]]);
    target.render(&result, 2.0).unwrap();

    target.clear();
    target.clear();
    assert_eq!(table.inner_html(), "");
    assert_eq!(elapsed.text_content().unwrap(), "");
    assert_eq!(container.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
fn render_replaces_prior_content() {
    let (target, _container, table, _elapsed) = target();
    target
        .render(&two_column_result(vec![vec![json!(1), json!("a")]]), 1.0)
        .unwrap();
    target
        .render(&two_column_result(vec![vec![json!(2), json!("b")]]), 1.0)
        .unwrap();

    let rows = table.query_selector_all("tr").unwrap();
    assert_eq!(rows.length(), 2);
    assert!(!table.inner_html().contains(">a<"));
    assert!(table.inner_html().contains(">b<"));
}
