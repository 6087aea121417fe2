//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{process_document, ExecutionMode, Executor, ProcessingOutput},
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use tadkham_core::Dictionary;

/// Multi-threaded executor that segments whole documents concurrently
///
/// Documents never share state, so outputs only need to be collected back
/// in input order. A dedicated pool is built once and shared by clones.
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelExecutor {
    /// Executor running on the global rayon pool
    pub fn global() -> Self {
        Self::default()
    }

    /// Create a parallel executor
    ///
    /// `None` uses the global rayon pool; `Some(n)` starts a pool of `n`
    /// workers that lives as long as the executor and its clones.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let Some(threads) = threads else {
            return Ok(Self::global());
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("tadkham-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ParallelError(format!("Failed to create thread pool: {e}")))?;
        log::debug!("started a pool of {threads} segmentation workers");

        Ok(Self {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Worker count of the pool batches run on
    pub fn current_num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn run(documents: &[&str], dict: &Dictionary) -> Vec<ProcessingOutput> {
        documents
            .par_iter()
            .enumerate()
            .map(|(i, text)| {
                log::trace!("segmenting document {i} ({} bytes)", text.len());
                process_document(text, dict, ExecutionMode::Parallel)
            })
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn process_batch(
        &self,
        documents: &[&str],
        dict: &Dictionary,
    ) -> Result<Vec<ProcessingOutput>> {
        Ok(match &self.pool {
            Some(pool) => pool.install(|| Self::run(documents, dict)),
            None => Self::run(documents, dict),
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
