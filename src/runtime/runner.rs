use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::AppState;
use crate::task::TaskExecutor;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Owns the event loop: terminal events and task completions in, reducer
/// effects out.
pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    executor: TaskExecutor,
    key_bindings: KeyBindings,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, executor: TaskExecutor) -> Self {
        Self {
            state,
            terminal,
            executor,
            key_bindings: KeyBindings::new(),
        }
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.state.should_exit() {
            for completion in self.executor.drain_ready() {
                self.process(Intent::TaskCompleted(completion))?;
            }

            match self.terminal.poll_event(POLL_TIMEOUT)? {
                Some(TerminalEvent::Key(key)) => {
                    let intent = self
                        .key_bindings
                        .resolve(key)
                        .unwrap_or(Intent::InputKey(key));
                    self.process(intent)?;
                }
                Some(TerminalEvent::Resize { .. }) => self.render()?,
                None => {}
            }
        }

        Ok(())
    }

    fn process(&mut self, intent: Intent) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Spawn(invocation) => self.executor.spawn(invocation),
                Effect::RequestRender => render_requested = true,
            }
        }

        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.state);
        self.terminal.render(&frame.lines, frame.cursor)
    }
}
