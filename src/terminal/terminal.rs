use crate::terminal::terminal_event::TerminalEvent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
        })
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide
        )
    }

    pub fn exit(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    /// Wait up to `timeout` for the next key press or resize. Returns `None`
    /// when the timeout elapses without one.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<TerminalEvent>> {
        if !poll(timeout)? {
            return Ok(None);
        }
        loop {
            match read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(TerminalEvent::Key(map_key_event(key))));
                }
                Event::Resize(width, height) => {
                    self.size = TerminalSize { width, height };
                    return Ok(Some(TerminalEvent::Resize { width, height }));
                }
                _ => {}
            }
            // Only keep reading while more events are already queued.
            if !poll(Duration::ZERO)? {
                return Ok(None);
            }
        }
    }

    /// Repaint the whole frame and place the cursor, if the focused widget
    /// wants one shown.
    pub fn render(&mut self, lines: &[SpanLine], cursor_pos: Option<CursorPos>) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::Hide,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;

        let height = self.size.height as usize;
        for (row, line) in lines.iter().take(height).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            self.render_line(line)?;
        }

        if let Some(pos) = cursor_pos {
            queue!(self.stdout, cursor::MoveTo(pos.col, pos.row), cursor::Show)?;
        }

        self.stdout.flush()
    }

    fn render_line(&mut self, line: &SpanLine) -> io::Result<()> {
        for span in line {
            let has_style =
                span.style.color.is_some() || span.style.background.is_some() || span.style.bold;

            if let Some(fg) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(fg)))?;
            }
            if let Some(bg) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(bg)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if has_style {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        _ => KeyCode::Other,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
