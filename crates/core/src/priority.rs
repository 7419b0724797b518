//! Task / subtask priority domain.
//!
//! Same closed-mapping rules as [`crate::status`]: unmapped values are
//! rejected with [`CoreError::UnknownPriority`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Priority of a task or subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// All priorities, lowest first.
pub const ALL_PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

impl Priority {
    /// Backend enum code.
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// UI-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a backend enum code. Unmapped codes are rejected.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(CoreError::UnknownPriority(other.to_string())),
        }
    }

    /// Parse a UI label, case-insensitively. Unmapped labels are rejected.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(CoreError::UnknownPriority(other.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
