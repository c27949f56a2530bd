//! DuckDB-WASM bindings and the per-page engine session.
//!
//! The engine boundary is four operations: pick a runtime bundle, spawn the
//! engine's worker, instantiate the engine against the bundle's module, and
//! open a connection that accepts SQL text. Everything behind those calls is
//! opaque; results come back as Arrow tables read structurally.

use sqlplay_types::{ColumnSchema, PlaygroundError, QueryResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(module = "@duckdb/duckdb-wasm")]
extern "C" {
    /// CDN bundle descriptors shipped with the engine package.
    #[wasm_bindgen(js_name = getJsDelivrBundles)]
    fn get_jsdelivr_bundles() -> JsValue;

    /// Picks the bundle best suited to the running browser.
    #[wasm_bindgen(js_name = selectBundle, catch)]
    async fn select_bundle(bundles: JsValue) -> Result<JsValue, JsValue>;

    /// Spawns the engine's background worker from a bundle script URL.
    #[wasm_bindgen(js_name = createWorker, catch)]
    async fn create_worker(url: String) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "@duckdb/duckdb-wasm")]
extern "C" {
    /// Logger sink that discards the engine's own log output.
    type VoidLogger;

    #[wasm_bindgen(constructor)]
    fn new() -> VoidLogger;
}

#[wasm_bindgen(module = "@duckdb/duckdb-wasm")]
extern "C" {
    /// Async engine handle; its work runs in the worker.
    type AsyncDuckDB;

    #[wasm_bindgen(constructor)]
    fn new(logger: VoidLogger, worker: &web_sys::Worker) -> AsyncDuckDB;

    #[wasm_bindgen(method, catch)]
    async fn instantiate(this: &AsyncDuckDB, main_module: String) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    async fn connect(this: &AsyncDuckDB) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "@duckdb/duckdb-wasm")]
extern "C" {
    /// One logical session for submitting SQL text.
    type AsyncDuckDBConnection;

    #[wasm_bindgen(method, catch)]
    async fn query(this: &AsyncDuckDBConnection, sql: &str) -> Result<JsValue, JsValue>;
}

// Structural views over plain engine objects; nothing here is imported by
// name, the methods dispatch dynamically.
#[wasm_bindgen]
extern "C" {
    type Bundle;

    #[wasm_bindgen(method, getter, js_name = mainWorker)]
    fn main_worker(this: &Bundle) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = mainModule)]
    fn main_module(this: &Bundle) -> String;

    type ResultTable;

    #[wasm_bindgen(method, getter)]
    fn schema(this: &ResultTable) -> ResultSchema;

    #[wasm_bindgen(method, js_name = toArray)]
    fn to_array(this: &ResultTable) -> js_sys::Array;

    type ResultSchema;

    #[wasm_bindgen(method, getter)]
    fn fields(this: &ResultSchema) -> js_sys::Array;

    type ResultField;

    #[wasm_bindgen(method, getter)]
    fn name(this: &ResultField) -> String;

    #[wasm_bindgen(method, getter, js_name = "type")]
    fn data_type(this: &ResultField) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn nullable(this: &ResultField) -> bool;
}

/// The per-page engine session: the engine handle plus its single open
/// connection. Exactly one exists per page; it is built once by the
/// bootstrap and owned by the controller for the page's lifetime.
pub struct Session {
    // Kept so the engine handle outlives the connection.
    _db: AsyncDuckDB,
    conn: AsyncDuckDBConnection,
}

impl Session {
    /// Boots the engine: bundle selection, worker spawn, instantiation, one
    /// connection. Any failure is terminal; there is no retry.
    pub async fn initialize() -> Result<Self, PlaygroundError> {
        let bundle: Bundle = select_bundle(get_jsdelivr_bundles())
            .await
            .map_err(init_error)?
            .unchecked_into();
        let worker_url = bundle.main_worker().ok_or_else(|| {
            PlaygroundError::Initialization("selected bundle has no worker script".to_string())
        })?;
        let worker: web_sys::Worker = create_worker(worker_url)
            .await
            .map_err(init_error)?
            .unchecked_into();
        let db = AsyncDuckDB::new(VoidLogger::new(), &worker);
        db.instantiate(bundle.main_module())
            .await
            .map_err(init_error)?;
        let conn: AsyncDuckDBConnection =
            db.connect().await.map_err(init_error)?.unchecked_into();
        log::info!("engine instantiated, connection open");
        Ok(Self { _db: db, conn })
    }

    /// Runs one SQL statement. The error string is the engine's message,
    /// verbatim.
    pub async fn query(&self, sql: &str) -> Result<QueryResult, String> {
        let table: ResultTable = self
            .conn
            .query(sql)
            .await
            .map_err(|err| js_error_message(&err))?
            .unchecked_into();
        Ok(table_to_result(&table))
    }
}

fn table_to_result(table: &ResultTable) -> QueryResult {
    let columns: Vec<ColumnSchema> = table
        .schema()
        .fields()
        .iter()
        .map(|field| {
            let field: ResultField = field.unchecked_into();
            ColumnSchema {
                name: field.name(),
                data_type: js_display(&field.data_type()),
                nullable: field.nullable(),
            }
        })
        .collect();

    let rows = table
        .to_array()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let cell = js_sys::Reflect::get(&row, &JsValue::from_str(&column.name))
                        .unwrap_or(JsValue::NULL);
                    js_cell_to_json(&cell)
                })
                .collect()
        })
        .collect();

    QueryResult { columns, rows }
}

/// Maps an Arrow cell value into JSON. 64-bit integers arrive as BigInt and
/// stay numeric when they fit an i64; everything unrecognized falls back to
/// its JS string form.
fn js_cell_to_json(value: &JsValue) -> serde_json::Value {
    if value.is_null() || value.is_undefined() {
        serde_json::Value::Null
    } else if let Some(b) = value.as_bool() {
        serde_json::Value::Bool(b)
    } else if let Some(n) = value.as_f64() {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    } else if let Some(s) = value.as_string() {
        serde_json::Value::String(s)
    } else if let Some(big) = value.dyn_ref::<js_sys::BigInt>() {
        match i64::try_from(big.clone()) {
            Ok(n) => serde_json::Value::Number(n.into()),
            Err(_) => serde_json::Value::String(js_display(value)),
        }
    } else {
        serde_json::Value::String(js_display(value))
    }
}

/// Default JS string form of a non-null value.
fn js_display(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| String::from(js_sys::Object::from(value.clone()).to_string()))
}

/// Extracts the message from a rejected engine promise.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown engine error".to_string())
}

fn init_error(err: JsValue) -> PlaygroundError {
    PlaygroundError::Initialization(js_error_message(&err))
}
