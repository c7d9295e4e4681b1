use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use signin_core::FormState;
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(
    /// Which part of the form has focus
    Field,
    Email,
    Password,
    Submit
);

/// The widgets for entering credentials. The text lives here while it's being
/// edited; the app copies it into the `FormStore` after every keystroke.
#[derive(Debug, Default)]
pub struct AuthForm {
    /// Which field we're editing
    active: Field,

    /// Who are you?
    email: Input,

    /// What's your password? (Will be masked)
    password: Input,
}

impl AuthForm {
    /// Current email text
    pub fn email(&self) -> &str {
        self.email.value()
    }

    /// Current password text
    pub fn password(&self) -> &str {
        self.password.value()
    }

    /// Which field has focus
    pub fn active(&self) -> Field {
        self.active
    }

    /// Move focus or edit the focused input. Returns whether any text changed.
    pub fn handle_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.active = self.active.next();
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active = self.active.prev();
                false
            }
            _ => {
                let event = Event::Key(key);

                let input = match self.active {
                    Field::Email => &mut self.email,
                    Field::Password => &mut self.password,
                    Field::Submit => return false,
                };

                input
                    .handle_event(&event)
                    .is_some_and(|changed| changed.value)
            }
        }
    }

    /// Draw the form centered in `body_area`.
    pub fn render(&self, state: &FormState, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(12)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let fields = Layout::vertical(Constraint::from_lengths([3, 3, 3, 3]));
        let [email_area, password_area, submit_area, message_area] = fields.areas(popup_area);

        let editable = state.is_editable();

        render_input(
            frame,
            email_area,
            "Email",
            self.email.value(),
            &self.email,
            editable && self.active == Field::Email,
        );

        render_input(
            frame,
            password_area,
            "Password",
            &"*".repeat(self.password.value().chars().count()),
            &self.password,
            editable && self.active == Field::Password,
        );

        // SUBMIT
        {
            let label = if state.is_loading() {
                "Signing in…"
            } else {
                "Sign in"
            };

            let mut style = if state.can_submit() {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if self.active == Field::Submit {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let submit = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));

            frame.render_widget(submit, submit_area);
        }

        // ERROR
        if state.show_error() {
            let error = Paragraph::new(state.error_message())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });

            frame.render_widget(error, message_area);
        }
    }
}

/// Draw one bordered text input, placing the cursor in it if it has focus.
#[expect(clippy::cast_possible_truncation)]
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    shown: &str,
    input: &Input,
    focused: bool,
) {
    let width = area.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor
    let scroll = input.visual_scroll(width as usize);

    let border_style = if focused {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };

    let field = Paragraph::new(shown).scroll((0, scroll as u16)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );

    frame.render_widget(field, area);

    if focused {
        frame.set_cursor_position((
            area.x
                + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                + 1, // just past the end of the text
            area.y + 1, // +1 row for the border/title
        ));
    }
}
