use crate::core::Field;
use crate::task::CancelToken;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
struct FieldRun {
    sequence: u64,
    cancel: Option<CancelToken>,
}

/// Per-field run sequencing for validation tasks. Beginning a run cancels
/// the previous one's token; a completion counts only while its run id is
/// still the latest for that field, so an out-of-order completion can never
/// overwrite a newer result.
#[derive(Debug, Clone, Default)]
pub struct ValidationRuns {
    runs: IndexMap<Field, FieldRun>,
}

impl ValidationRuns {
    pub fn begin(&mut self, field: Field) -> (u64, CancelToken) {
        let run = self.runs.entry(field).or_default();
        if let Some(previous) = run.cancel.take() {
            previous.cancel();
        }
        run.sequence = run.sequence.saturating_add(1);
        let cancel = CancelToken::new();
        run.cancel = Some(cancel.clone());
        (run.sequence, cancel)
    }

    pub fn is_current(&self, field: Field, run_id: u64) -> bool {
        self.runs
            .get(&field)
            .is_some_and(|run| run.sequence == run_id)
    }
}
