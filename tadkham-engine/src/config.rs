//! Configuration types for the engine

use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector for batches
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum total batch size in bytes before going parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 100_000, // 100KB
        }
    }
}

impl EngineConfig {
    /// Never spawn worker threads
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
        }
    }

    /// Go parallel on smaller batches
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 16 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = EngineConfig::default();
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.parallel_threshold, 100_000);

        let sequential = EngineConfig::sequential();
        assert_eq!(sequential.threads, Some(1));
        assert_eq!(sequential.parallel_threshold, usize::MAX);

        assert!(EngineConfig::fast().parallel_threshold < config.parallel_threshold);
    }
}
