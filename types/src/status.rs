//! Status line notification types

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// Notification severity
#[derive(Tsify, Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub enum Severity {
    /// Progress information
    Info,
    /// Completed action
    Success,
    /// Recoverable problem, user action needed
    Warning,
    /// Failed action
    Error,
}

impl Severity {
    /// CSS class suffix applied to the status line
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether the status line clears this severity on its own after the
    /// configured window. Warnings and errors persist until replaced.
    pub fn auto_clears(self) -> bool {
        matches!(self, Severity::Info | Severity::Success)
    }
}

/// A user-facing status message
#[derive(Tsify, Serialize, Deserialize, Clone, Debug)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct StatusNotification {
    /// Message text
    pub message: String,
    /// Severity, drives styling and auto-clear
    pub severity: Severity,
}

impl StatusNotification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}
