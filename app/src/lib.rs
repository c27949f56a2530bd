//! In-browser SQL playground over DuckDB-WASM
//!
//! This crate is the orchestration layer only: it boots the engine, loads
//! the bundled seed script, and wires the page controls to query execution.
//! All SQL parsing, planning and execution happens inside the engine.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod controller;
pub mod engine;
pub mod executor;
pub mod render;
pub mod seed;

use controller::Controller;
use sqlplay_types::{PlaygroundOptions, SampleQuery};

/// Demo schema and data, executed once at startup.
pub const SEED_SCRIPT: &str = include_str!("seed.sql");

/// Canned queries offered on the page. Each assumes the seed schema.
fn sample_catalog() -> Vec<SampleQuery> {
    [
        ("All Employees", "SELECT * FROM employees ORDER BY name;"),
        (
            "High Earners",
            "SELECT name, salary FROM employees WHERE salary > 80000 ORDER BY salary DESC;",
        ),
        (
            "Department Summary",
            "SELECT d.name, COUNT(e.id) as employee_count, AVG(e.salary) as avg_salary FROM departments d LEFT JOIN employees e ON d.name = e.department GROUP BY d.name;",
        ),
        (
            "Employees with Managers",
            "SELECT e.name as employee, m.name as manager FROM employees e LEFT JOIN employees m ON e.manager_id = m.id;",
        ),
    ]
    .into_iter()
    .map(|(name, query)| SampleQuery {
        name: name.to_string(),
        query: query.to_string(),
    })
    .collect()
}

/// Entry point; runs when the page loads the wasm module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Debug).ok();

    spawn_local(async {
        let options = PlaygroundOptions {
            samples: sample_catalog(),
            ..PlaygroundOptions::default()
        };
        Controller::boot(options).await;
    });
}
