use crate::core::{FIELDS, Field, Value};
use crate::form::{FormSchema, FormValues};
use crate::state::runs::ValidationRuns;
use crate::state::server::ServerMessage;
use crate::submit::SubmitOutcome;
use crate::task::{CancelToken, TaskInvocation, TaskKind};
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// The owned form state, driven exclusively through the reducer.
///
/// Two separate flags gate submission: `submit_enabled` is derived from
/// full-schema validation on every value change, and `in_flight` is true
/// exactly while a submission task is running. They are never conflated.
pub struct FormStore {
    schema: Arc<FormSchema>,
    values: FormValues,
    errors: IndexMap<Field, String>,
    submit_enabled: bool,
    phase: SubmitPhase,
    server: ServerMessage,
    runs: ValidationRuns,
    submit_sequence: u64,
}

impl FormStore {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let errors = FIELDS.iter().map(|field| (*field, String::new())).collect();
        Self {
            schema,
            values: FormValues::default(),
            errors,
            submit_enabled: false,
            phase: SubmitPhase::Idle,
            server: ServerMessage::default(),
            runs: ValidationRuns::default(),
            submit_sequence: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The field's current error, or `None` while it satisfies its rules.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors
            .get(&field)
            .filter(|error| !error.is_empty())
            .map(String::as_str)
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn in_flight(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.submit_enabled && !self.in_flight()
    }

    pub fn server(&self) -> &ServerMessage {
        &self.server
    }

    /// Apply one field edit: store the value, re-derive `submit_enabled`
    /// from the whole schema, and hand back the validation invocation for
    /// the edited field. Other fields' values and errors are untouched.
    pub fn apply_change(&mut self, field: Field, value: Value) -> TaskInvocation {
        self.values.set(field, value.clone());
        self.submit_enabled = self.schema.is_valid(&self.values);

        let (run_id, cancel) = self.runs.begin(field);
        TaskInvocation {
            kind: TaskKind::ValidateField { field, value },
            run_id,
            cancel,
        }
    }

    /// Store a validation result for `field` unless a newer run superseded
    /// it. Returns whether the result was applied.
    pub fn apply_validation(
        &mut self,
        field: Field,
        run_id: u64,
        result: Result<(), String>,
    ) -> bool {
        if !self.runs.is_current(field, run_id) {
            return false;
        }
        let entry = self.errors.entry(field).or_default();
        *entry = result.err().unwrap_or_default();
        true
    }

    /// Start a submission cycle. Rejected unless the form is valid and no
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<TaskInvocation> {
        if !self.can_submit() {
            return None;
        }

        self.server.clear();
        self.phase = SubmitPhase::Submitting;
        self.submit_sequence = self.submit_sequence.saturating_add(1);

        Some(TaskInvocation {
            kind: TaskKind::Submit {
                payload: self.values.clone(),
            },
            run_id: self.submit_sequence,
            cancel: CancelToken::new(),
        })
    }

    /// Finish a submission cycle. On acceptance the values reset to their
    /// defaults; on rejection they stay put so the user can correct and
    /// resubmit. Returns whether the values were reset.
    pub fn complete_submit(&mut self, run_id: u64, outcome: SubmitOutcome) -> bool {
        if run_id != self.submit_sequence {
            return false;
        }
        self.phase = SubmitPhase::Idle;

        match outcome {
            SubmitOutcome::Accepted { message } => {
                self.server.set_success(message);
                self.values = FormValues::default();
                self.submit_enabled = self.schema.is_valid(&self.values);
                true
            }
            SubmitOutcome::Rejected { message } => {
                self.server.set_failure(message);
                false
            }
        }
    }
}
