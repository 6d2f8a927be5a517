//! Configuration for pattern table construction.

/// Configuration applied when a pattern table is built.
///
/// Controls how the table identifies itself in log events and errors, and
/// an optional upper bound on the number of ordinary clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Human-readable table name.
    pub label: Option<String>,

    /// Maximum number of ordinary (non-terminal) clauses. `None` is unbounded.
    pub max_clauses: Option<usize>,
}

impl TableConfig {
    /// Creates a configuration with a label and no clause limit.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method to set the clause limit.
    #[must_use]
    pub fn with_max_clauses(mut self, limit: usize) -> Self {
        self.max_clauses = Some(limit);
        self
    }

    /// Checks a clause count against the configured limit.
    #[must_use]
    pub fn allows(&self, clauses: usize) -> bool {
        self.max_clauses.is_none_or(|limit| clauses <= limit)
    }
}
