//! Narrow interface over an array-data file.

use std::collections::HashMap;

use crate::error::{DashboardError, Result};

/// A source of named one-dimensional numeric arrays.
///
/// Implementors own whatever underlying handle backs the arrays and release
/// it on drop, so a loaded source never leaks a file descriptor even when a
/// read fails mid-way.
pub trait ArraySource {
    /// Read the full contents of a named variable.
    ///
    /// Fails with [`DashboardError::DataAccess`] when the variable is absent.
    fn variable(&self, name: &str) -> Result<Vec<f64>>;
}

/// In-memory source used by tests and demos.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    variables: HashMap<String, Vec<f64>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: &str, values: Vec<f64>) -> Self {
        self.variables.insert(name.to_string(), values);
        self
    }
}

impl ArraySource for MemorySource {
    fn variable(&self, name: &str) -> Result<Vec<f64>> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| DashboardError::access(format!("variable '{name}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_lookup() {
        let source = MemorySource::new().with_variable("xco2", vec![410.0, 411.5]);
        assert_eq!(source.variable("xco2").unwrap(), vec![410.0, 411.5]);

        let err = source.variable("time").unwrap_err();
        assert!(matches!(err, DashboardError::DataAccess(_)));
    }
}
