use crate::core::Field;
use crate::state::AppState;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(state: &AppState) -> RenderFrame {
        let mut frame = RenderFrame::default();
        let ctx = state.render_context();
        let mut row: u16 = 0;

        push(
            &mut frame,
            &mut row,
            vec![Span::styled(
                "Create an Account",
                Style::new().color(Color::Cyan).bold(),
            )],
        );
        push(&mut frame, &mut row, vec![]);

        if let Some(success) = state.store().server().success() {
            push(
                &mut frame,
                &mut row,
                vec![Span::styled(success, Style::new().color(Color::Green).bold())],
            );
            push(&mut frame, &mut row, vec![]);
        }
        if let Some(failure) = state.store().server().failure() {
            push(
                &mut frame,
                &mut row,
                vec![Span::styled(failure, Style::new().color(Color::Red).bold())],
            );
            push(&mut frame, &mut row, vec![]);
        }

        for widget in state.widgets() {
            let focused = ctx.is_focused(widget.id());
            let marker = if focused { "> " } else { "  " };

            if !widget.label().is_empty() {
                let label_style = if focused {
                    Style::new().color(Color::White).bold()
                } else {
                    Style::default()
                };
                push(
                    &mut frame,
                    &mut row,
                    vec![
                        Span::new("  "),
                        Span::styled(format!("{}:", widget.label()), label_style),
                    ],
                );
            }

            let out = widget.draw(&ctx);
            if focused && frame.cursor.is_none() {
                if let Some(local) = widget.cursor_pos() {
                    frame.cursor = Some(CursorPos {
                        col: local.col.saturating_add(4),
                        row: row.saturating_add(local.row),
                    });
                }
            }
            for (index, line) in out.lines.into_iter().enumerate() {
                // The focus marker sits on the input line itself.
                let prefix = if index == 0 {
                    format!("{marker}  ")
                } else {
                    "    ".to_string()
                };
                let mut indented: SpanLine = vec![Span::new(prefix)];
                indented.extend(line);
                push(&mut frame, &mut row, indented);
            }

            if let Some(error) = Field::from_id(widget.id()).and_then(|f| state.store().error(f)) {
                push(
                    &mut frame,
                    &mut row,
                    vec![
                        Span::new("    "),
                        Span::styled(format!("! {error}"), Style::new().color(Color::Red)),
                    ],
                );
            }
            push(&mut frame, &mut row, vec![]);
        }

        if state.store().in_flight() {
            push(
                &mut frame,
                &mut row,
                vec![Span::styled("submitting…", Style::new().color(Color::Yellow))],
            );
            push(&mut frame, &mut row, vec![]);
        }

        push(
            &mut frame,
            &mut row,
            vec![Span::styled(
                "Tab next · Shift+Tab prev · Space toggle · Enter submit · Esc quit",
                Style::new().color(Color::DarkGrey),
            )],
        );

        frame
    }
}

fn push(frame: &mut RenderFrame, row: &mut u16, line: SpanLine) {
    frame.lines.push(line);
    *row = row.saturating_add(1);
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::core::Field;
    use crate::form::FormSchema;
    use crate::form::schema::USERNAME_MIN;
    use crate::runtime::event::WidgetAction;
    use crate::state::AppState;
    use crate::ui::span::line_text;
    use std::sync::Arc;

    fn rendered_text(state: &AppState) -> String {
        Renderer::render(state)
            .lines
            .iter()
            .map(|line| line_text(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_title_fields_and_hint() {
        let state = AppState::registration(Arc::new(FormSchema::registration()));
        let text = rendered_text(&state);

        assert!(text.contains("Create an Account"));
        assert!(text.contains("Username:"));
        assert!(text.contains("Type Username"));
        assert!(text.contains("Favorite Language:"));
        assert!(text.contains("Favorite Food:"));
        assert!(text.contains("-- Select Favorite Food --"));
        assert!(text.contains("Agree to our terms"));
        assert!(text.contains("[ Submit ]"));
    }

    #[test]
    fn shows_inline_errors_under_their_field() {
        let mut state = AppState::registration(Arc::new(FormSchema::registration()));
        let invocations = state.handle_action(WidgetAction::ValueChanged {
            field: Field::Username,
            value: "ab".into(),
        });
        state.apply_completion(crate::task::TaskCompletion {
            run_id: invocations[0].run_id,
            output: crate::task::TaskOutput::Validation {
                field: Field::Username,
                result: Err(USERNAME_MIN.into()),
            },
        });

        let text = rendered_text(&state);
        assert!(text.contains(&format!("! {USERNAME_MIN}")));
    }
}
