//! Reconciliation jobs and batch processing across documents

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::Reconciliation;
use crate::segmenter::Segmenter;
use crate::types::ChangeRecord;

/// A revised document together with the change records claimed for it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// The revised text
    pub document: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "changeRecords"))]
    pub changes: Vec<ChangeRecord>,
}

impl Job {
    pub fn new(document: impl Into<String>, changes: Vec<ChangeRecord>) -> Self {
        Self {
            document: document.into(),
            changes,
        }
    }

    /// Decode a job from its JSON representation
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::ReconcileError::InvalidJob(e.to_string()))
    }

    /// Reconcile this job with the default segmenter
    pub fn reconcile(&self) -> Result<Reconciliation<'_>> {
        Segmenter::new().reconcile(&self.document, &self.changes)
    }
}

/// Reconcile independent jobs on the rayon thread pool.
///
/// Results come back in the same order as `jobs`.
#[cfg(feature = "parallel")]
pub fn reconcile_batch(jobs: &[Job]) -> Vec<Result<Reconciliation<'_>>> {
    reconcile_batch_with(jobs, |_| {})
}

/// Like [`reconcile_batch`], calling `on_done` with each job's index as it
/// finishes. Completion order is unspecified.
#[cfg(feature = "parallel")]
pub fn reconcile_batch_with<F>(jobs: &[Job], on_done: F) -> Vec<Result<Reconciliation<'_>>>
where
    F: Fn(usize) + Send + Sync,
{
    use rayon::prelude::*;

    let segmenter = Segmenter::new();
    jobs.par_iter()
        .enumerate()
        .map(|(index, job)| {
            let result = segmenter.reconcile(&job.document, &job.changes);
            on_done(index);
            result
        })
        .collect()
}
