use crate::core::{Field, Value};
use crate::form::{FormSchema, FormValues};
use crate::submit::{RegistrationClient, SubmitOutcome};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between the store and the worker
/// running a superseded invocation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Run one field's rule chain against a candidate value.
    ValidateField { field: Field, value: Value },
    /// POST the payload snapshot to the registration endpoint.
    Submit { payload: FormValues },
}

#[derive(Debug, Clone)]
pub struct TaskInvocation {
    pub kind: TaskKind,
    pub run_id: u64,
    pub cancel: CancelToken,
}

#[derive(Debug, Clone)]
pub enum TaskOutput {
    Validation {
        field: Field,
        result: Result<(), String>,
    },
    Submission {
        outcome: SubmitOutcome,
    },
}

#[derive(Debug, Clone)]
pub struct TaskCompletion {
    pub run_id: u64,
    pub output: TaskOutput,
}

/// Run one invocation to completion. Returns `None` when the invocation was
/// cancelled; cancellation is checked again after the work so a token
/// cancelled mid-run is still honored.
pub fn execute_invocation(
    invocation: TaskInvocation,
    schema: &FormSchema,
    client: &RegistrationClient,
) -> Option<TaskCompletion> {
    if invocation.cancel.is_cancelled() {
        return None;
    }

    let output = match invocation.kind {
        TaskKind::ValidateField { field, value } => TaskOutput::Validation {
            field,
            result: schema.validate_field(field, &value),
        },
        TaskKind::Submit { payload } => TaskOutput::Submission {
            outcome: client.register(&payload),
        },
    };

    if invocation.cancel.is_cancelled() {
        return None;
    }

    Some(TaskCompletion {
        run_id: invocation.run_id,
        output,
    })
}
