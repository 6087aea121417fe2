//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{process_document, ExecutionMode, Executor, ProcessingOutput},
};
use tadkham_core::Dictionary;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process_batch(
        &self,
        documents: &[&str],
        dict: &Dictionary,
    ) -> Result<Vec<ProcessingOutput>> {
        Ok(documents
            .iter()
            .enumerate()
            .map(|(i, text)| {
                log::trace!("segmenting document {i} ({} bytes)", text.len());
                process_document(text, dict, ExecutionMode::Sequential)
            })
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
