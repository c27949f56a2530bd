//! Result types produced by one SQL execution

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// Column metadata from a result schema
#[derive(Tsify, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ColumnSchema {
    /// Column name
    pub name: String,
    /// Data type as reported by the engine
    pub data_type: String,
    /// Whether column can be null
    pub nullable: bool,
}

/// Tabular result of one SQL execution
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct QueryResult {
    /// Column metadata, in result order
    pub columns: Vec<ColumnSchema>,
    /// Row data as JSON values; any cell may be null
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Number of data rows in the result
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the result has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A query result together with its wall-clock execution time
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Execution {
    /// Tabular result
    pub result: QueryResult,
    /// Elapsed time in milliseconds, rounded to two decimals
    pub elapsed_ms: f64,
}
