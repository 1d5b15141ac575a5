use enroll::form::FormSchema;
use enroll::runtime::Runtime;
use enroll::state::AppState;
use enroll::submit::RegistrationClient;
use enroll::task::TaskExecutor;
use enroll::terminal::Terminal;
use std::io;
use std::sync::Arc;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let schema = Arc::new(FormSchema::registration());
    let client = Arc::new(RegistrationClient::new());
    let executor = TaskExecutor::new(schema.clone(), client);
    let state = AppState::registration(schema);
    let terminal = Terminal::new()?;

    Runtime::new(state, terminal, executor).run()
}
