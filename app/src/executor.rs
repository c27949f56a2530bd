//! Query execution with wall-clock timing

use crate::engine::Session;
use sqlplay_types::{Execution, PlaygroundError};

/// Rejects queries that are empty after trimming, before any engine call.
pub fn validate_query(sql: &str) -> Result<&str, PlaygroundError> {
    let trimmed = sql.trim();
    if trimmed.is_empty() {
        return Err(PlaygroundError::EmptyQuery);
    }
    Ok(trimmed)
}

/// Executes one free-form SQL string, timing the engine call.
///
/// The statement may be DDL or DML; whatever it changes is its own side
/// effect. Engine rejections come back with the engine's message verbatim,
/// unclassified.
pub async fn execute(session: &Session, sql: &str) -> Result<Execution, PlaygroundError> {
    let sql = validate_query(sql)?;
    let started = now();
    let result = session
        .query(sql)
        .await
        .map_err(PlaygroundError::QueryExecution)?;
    Ok(Execution {
        result,
        elapsed_ms: round_ms(now() - started),
    })
}

/// Rounds a millisecond reading to two decimal places.
fn round_ms(elapsed: f64) -> f64 {
    (elapsed * 100.0).round() / 100.0
}

/// Current reading of the page's performance clock, in milliseconds.
fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}
