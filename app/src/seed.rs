//! Seed script loading

use crate::engine::Session;
use sqlplay_types::PlaygroundError;

/// Splits a multi-statement SQL script on `;`, trimming fragments and
/// dropping empty ones.
///
/// The split is not SQL-aware: a semicolon inside a string literal or a
/// comment would split a statement in the middle. The bundled seed script is
/// written to contain neither.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// Executes every statement of `script` against `session`, strictly in
/// textual order; later statements may depend on earlier ones, so each is
/// awaited before the next is issued.
///
/// Stops at the first failure. Statements already executed are not rolled
/// back.
pub async fn load_seed(session: &Session, script: &str) -> Result<(), PlaygroundError> {
    let statements = split_statements(script);
    for (index, statement) in statements.iter().enumerate() {
        session
            .query(statement)
            .await
            .map_err(|message| PlaygroundError::SeedLoad {
                statement: index + 1,
                message,
            })?;
    }
    log::info!("seed loaded: {} statements", statements.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::split_statements;

    #[test]
    fn splits_in_textual_order() {
        let script =
            "CREATE TABLE t(x INT); INSERT INTO t VALUES (1); INSERT INTO t VALUES (2);";
        assert_eq!(
            split_statements(script),
            vec![
                "CREATE TABLE t(x INT)",
                "INSERT INTO t VALUES (1)",
                "INSERT INTO t VALUES (2)",
            ],
        );
    }

    #[test]
    fn drops_empty_fragments() {
        assert_eq!(split_statements("; ;\n;SELECT 1;;"), vec!["SELECT 1"]);
    }

    #[test]
    fn whitespace_only_script_yields_no_statements() {
        assert!(split_statements("").is_empty());
        assert!(split_statements("  \n\t  ").is_empty());
    }

    #[test]
    fn statements_keep_embedded_newlines() {
        let script = "CREATE TABLE t (\n    x INT\n);";
        assert_eq!(split_statements(script), vec!["CREATE TABLE t (\n    x INT\n)"]);
    }

    #[test]
    fn bundled_seed_script_splits_cleanly() {
        let statements = split_statements(crate::SEED_SCRIPT);
        assert!(!statements.is_empty());
        assert!(statements[0].to_ascii_uppercase().starts_with("CREATE TABLE"));
    }
}
