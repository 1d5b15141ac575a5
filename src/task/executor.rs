use crate::form::FormSchema;
use crate::submit::RegistrationClient;
use crate::task::execution::{TaskCompletion, TaskInvocation, execute_invocation};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Runs invocations off the event loop, one thread per invocation, and
/// hands completions back over a channel drained by the runner.
pub struct TaskExecutor {
    schema: Arc<FormSchema>,
    client: Arc<RegistrationClient>,
    completion_tx: Sender<TaskCompletion>,
    completion_rx: Receiver<TaskCompletion>,
}

impl TaskExecutor {
    pub fn new(schema: Arc<FormSchema>, client: Arc<RegistrationClient>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<TaskCompletion>();
        Self {
            schema,
            client,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, invocation: TaskInvocation) {
        let schema = self.schema.clone();
        let client = self.client.clone();
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            if let Some(completion) = execute_invocation(invocation, &schema, &client) {
                let _ = completion_tx.send(completion);
            }
        });
    }

    pub fn drain_ready(&self) -> Vec<TaskCompletion> {
        let mut out = Vec::<TaskCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}
