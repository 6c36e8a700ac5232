//! Contact page: message form sent through the mail client.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::application::services::{ContactForm, ContactFormError};
use crate::presentation::commands::TextEdit;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Message => 3,
        }
    }

    const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form fields and focus of the contact page.
pub struct ContactScreenState {
    inputs: [TextInput; 4],
    focus: ContactField,
    editing: bool,
}

impl Default for ContactScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: [
                TextInput::new(" Nome * "),
                TextInput::new(" Email * "),
                TextInput::new(" Telefone "),
                TextInput::new(" Mensagem * "),
            ],
            focus: ContactField::default(),
            editing: false,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub const fn focus(&self) -> ContactField {
        self.focus
    }

    /// Starts typing into the focused field.
    pub fn start_editing(&mut self) {
        self.editing = true;
        self.sync_focus();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.sync_focus();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.sync_focus();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let focused = self.focus.index();
        for (index, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(self.editing && index == focused);
        }
    }

    pub fn apply_edit(&mut self, edit: TextEdit) {
        if self.editing {
            self.inputs[self.focus.index()].apply(edit);
        }
    }

    /// Current field values.
    #[must_use]
    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.inputs[ContactField::Name.index()].value().to_string(),
            email: self.inputs[ContactField::Email.index()].value().to_string(),
            phone: self.inputs[ContactField::Phone.index()].value().to_string(),
            message: self.inputs[ContactField::Message.index()].value().to_string(),
        }
    }

    /// Validates the form and returns the `mailto:` link for `recipient`.
    /// The fields are cleared only when the form is valid.
    ///
    /// # Errors
    /// Returns `ContactFormError` when a required field is empty.
    pub fn submit(&mut self, recipient: &str) -> Result<String, ContactFormError> {
        let form = self.form();
        form.validate()?;
        let link = form.mailto_link(recipient);

        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = ContactField::default();
        self.stop_editing();
        Ok(link)
    }
}

/// Renders the contact form.
pub struct ContactScreen<'a> {
    recipient: &'a str,
}

impl<'a> ContactScreen<'a> {
    #[must_use]
    pub const fn new(recipient: &'a str) -> Self {
        Self { recipient }
    }
}

impl StatefulWidget for ContactScreen<'_> {
    type State = ContactScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ContactScreenState) {
        let [intro, name, email, phone, message, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::raw(format!("Fale com a imobiliária: {}", self.recipient)),
            Line::styled(
                "Campos com * são obrigatórios.",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .render(intro, buf);

        for (input, field_area) in state.inputs.iter().zip([name, email, phone, message]) {
            input.render(field_area, buf);
        }

        let hint_text = if state.editing {
            "Enter envia a mensagem pelo seu cliente de email."
        } else {
            "Pressione Enter para preencher o formulário."
        };
        Paragraph::new(hint_text)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .render(hint, buf);
    }
}
