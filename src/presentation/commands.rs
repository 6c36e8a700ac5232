//! Key bindings and the commands they produce.

use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Listings,
    Favorites,
    Contact,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Listings, Self::Favorites, Self::Contact];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Listings => "Imóveis",
            Self::Favorites => "Favoritos",
            Self::Contact => "Contato",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Listings => Self::Favorites,
            Self::Favorites => Self::Contact,
            Self::Contact => Self::Listings,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Listings => Self::Contact,
            Self::Favorites => Self::Listings,
            Self::Contact => Self::Favorites,
        }
    }
}

/// Where keyboard input is currently going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Navigating the listing cards.
    Browse,
    /// Typing into a filter field (search or price bound).
    FilterField,
    /// Detail modal open.
    Detail,
    /// Typing into the contact form.
    ContactForm,
}

impl InputContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Browse => "NAVEGAR",
            Self::FilterField => "FILTRO",
            Self::Detail => "DETALHES",
            Self::ContactForm => "CONTATO",
        }
    }

    const fn accepts_text(self) -> bool {
        matches!(self, Self::FilterField | Self::ContactForm)
    }
}

/// Filter field that can receive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    MinPrice,
    MaxPrice,
}

/// Single text editing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}

/// Command dispatched from the key handler to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    ToggleHelp,
    NextPage,
    PreviousPage,
    ShowPage(Page),
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    Activate,
    CloseDetail,
    ToggleFavorite,
    FocusFilter(FilterField),
    CycleTransactionType,
    CyclePropertyType,
    CycleSort,
    ResetFilters,
    NextImage,
    PreviousImage,
    OpenImage,
    CallAgent,
    EmailAgent,
    FocusNextField,
    FocusPreviousField,
    Submit,
    Cancel,
    Edit(TextEdit),
}

/// Key binding shown in the hint bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub command: UiCommand,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, command: UiCommand, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            command,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Maps key events to commands, per input context.
pub struct CommandRegistry {
    global: Vec<Keybind>,
    browse: Vec<Keybind>,
    filter_field: Vec<Keybind>,
    detail: Vec<Keybind>,
    contact_form: Vec<Keybind>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let global = vec![
            Keybind::new(ctrl('c'), UiCommand::Quit, "Sair"),
            Keybind::new(key(KeyCode::F(1)), UiCommand::ToggleHelp, "Ajuda").hidden(),
        ];

        let browse = vec![
            Keybind::new(key(KeyCode::Char('q')), UiCommand::Quit, "Sair"),
            Keybind::new(key(KeyCode::Char('?')), UiCommand::ToggleHelp, "Ajuda"),
            Keybind::new(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT), UiCommand::ToggleHelp, "Ajuda").hidden(),
            Keybind::new(key(KeyCode::Tab), UiCommand::NextPage, "Página"),
            Keybind::new(key(KeyCode::BackTab), UiCommand::PreviousPage, "Página").hidden(),
            Keybind::new(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), UiCommand::PreviousPage, "Página").hidden(),
            Keybind::new(key(KeyCode::Char('1')), UiCommand::ShowPage(Page::Listings), "Imóveis").hidden(),
            Keybind::new(key(KeyCode::Char('2')), UiCommand::ShowPage(Page::Favorites), "Favoritos").hidden(),
            Keybind::new(key(KeyCode::Char('3')), UiCommand::ShowPage(Page::Contact), "Contato").hidden(),
            Keybind::new(key(KeyCode::Down), UiCommand::SelectNext, "Baixo").hidden(),
            Keybind::new(key(KeyCode::Char('j')), UiCommand::SelectNext, "Baixo").hidden(),
            Keybind::new(key(KeyCode::Up), UiCommand::SelectPrevious, "Cima").hidden(),
            Keybind::new(key(KeyCode::Char('k')), UiCommand::SelectPrevious, "Cima").hidden(),
            Keybind::new(key(KeyCode::Char('g')), UiCommand::SelectFirst, "Início").hidden(),
            Keybind::new(key(KeyCode::Home), UiCommand::SelectFirst, "Início").hidden(),
            Keybind::new(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), UiCommand::SelectLast, "Fim").hidden(),
            Keybind::new(key(KeyCode::End), UiCommand::SelectLast, "Fim").hidden(),
            Keybind::new(key(KeyCode::Enter), UiCommand::Activate, "Abrir"),
            Keybind::new(key(KeyCode::Char('f')), UiCommand::ToggleFavorite, "Favoritar"),
            Keybind::new(key(KeyCode::Char(' ')), UiCommand::ToggleFavorite, "Favoritar").hidden(),
            Keybind::new(key(KeyCode::Char('/')), UiCommand::FocusFilter(FilterField::Search), "Buscar"),
            Keybind::new(key(KeyCode::Char('t')), UiCommand::CycleTransactionType, "Transação"),
            Keybind::new(key(KeyCode::Char('p')), UiCommand::CyclePropertyType, "Tipo"),
            Keybind::new(key(KeyCode::Char('s')), UiCommand::CycleSort, "Ordenar"),
            Keybind::new(key(KeyCode::Char('m')), UiCommand::FocusFilter(FilterField::MinPrice), "Mín"),
            Keybind::new(key(KeyCode::Char('M')), UiCommand::FocusFilter(FilterField::MaxPrice), "Máx").hidden(),
            Keybind::new(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT), UiCommand::FocusFilter(FilterField::MaxPrice), "Máx"),
            Keybind::new(key(KeyCode::Char('r')), UiCommand::ResetFilters, "Limpar"),
        ];

        let filter_field = vec![
            Keybind::new(key(KeyCode::Enter), UiCommand::Submit, "Aplicar"),
            Keybind::new(key(KeyCode::Esc), UiCommand::Cancel, "Voltar"),
            Keybind::new(key(KeyCode::Tab), UiCommand::FocusNextField, "Próximo"),
            Keybind::new(key(KeyCode::BackTab), UiCommand::FocusPreviousField, "Anterior").hidden(),
            Keybind::new(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), UiCommand::FocusPreviousField, "Anterior").hidden(),
            Keybind::new(ctrl('u'), UiCommand::Edit(TextEdit::Clear), "Apagar"),
        ];

        let detail = vec![
            Keybind::new(key(KeyCode::Esc), UiCommand::CloseDetail, "Fechar"),
            Keybind::new(key(KeyCode::Char('q')), UiCommand::CloseDetail, "Fechar").hidden(),
            Keybind::new(key(KeyCode::Char('f')), UiCommand::ToggleFavorite, "Favoritar"),
            Keybind::new(key(KeyCode::Right), UiCommand::NextImage, "Foto →"),
            Keybind::new(key(KeyCode::Char('l')), UiCommand::NextImage, "Foto →").hidden(),
            Keybind::new(key(KeyCode::Left), UiCommand::PreviousImage, "Foto ←"),
            Keybind::new(key(KeyCode::Char('h')), UiCommand::PreviousImage, "Foto ←").hidden(),
            Keybind::new(key(KeyCode::Char('o')), UiCommand::OpenImage, "Abrir foto"),
            Keybind::new(key(KeyCode::Char('c')), UiCommand::CallAgent, "Ligar"),
            Keybind::new(key(KeyCode::Char('e')), UiCommand::EmailAgent, "Email"),
            Keybind::new(key(KeyCode::Down), UiCommand::SelectNext, "Rolar").hidden(),
            Keybind::new(key(KeyCode::Char('j')), UiCommand::SelectNext, "Rolar").hidden(),
            Keybind::new(key(KeyCode::Up), UiCommand::SelectPrevious, "Rolar").hidden(),
            Keybind::new(key(KeyCode::Char('k')), UiCommand::SelectPrevious, "Rolar").hidden(),
        ];

        let contact_form = vec![
            Keybind::new(key(KeyCode::Tab), UiCommand::FocusNextField, "Próximo"),
            Keybind::new(key(KeyCode::Down), UiCommand::FocusNextField, "Próximo").hidden(),
            Keybind::new(key(KeyCode::BackTab), UiCommand::FocusPreviousField, "Anterior").hidden(),
            Keybind::new(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), UiCommand::FocusPreviousField, "Anterior").hidden(),
            Keybind::new(key(KeyCode::Up), UiCommand::FocusPreviousField, "Anterior").hidden(),
            Keybind::new(ctrl('s'), UiCommand::Submit, "Enviar"),
            Keybind::new(key(KeyCode::Enter), UiCommand::Submit, "Enviar").hidden(),
            Keybind::new(key(KeyCode::Esc), UiCommand::Cancel, "Voltar"),
            Keybind::new(ctrl('u'), UiCommand::Edit(TextEdit::Clear), "Apagar"),
        ];

        Self {
            global,
            browse,
            filter_field,
            detail,
            contact_form,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bindings(&self, context: InputContext) -> &[Keybind] {
        match context {
            InputContext::Browse => &self.browse,
            InputContext::FilterField => &self.filter_field,
            InputContext::Detail => &self.detail,
            InputContext::ContactForm => &self.contact_form,
        }
    }

    /// Resolves a key press into a command.
    ///
    /// Context bindings win over global ones. In text contexts, unbound
    /// printable keys become text edits.
    #[must_use]
    pub fn resolve(&self, context: InputContext, key: KeyEvent) -> Option<UiCommand> {
        let bound = self
            .bindings(context)
            .iter()
            .chain(&self.global)
            .find(|k| k.key.code == key.code && k.key.modifiers == key.modifiers)
            .map(|k| k.command);

        if bound.is_some() || !context.accepts_text() {
            return bound;
        }

        Self::text_edit(key).map(UiCommand::Edit)
    }

    fn text_edit(key: KeyEvent) -> Option<TextEdit> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Some(TextEdit::Insert(c)),
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Left => Some(TextEdit::Left),
            KeyCode::Right => Some(TextEdit::Right),
            KeyCode::Home => Some(TextEdit::Home),
            KeyCode::End => Some(TextEdit::End),
            _ => None,
        }
    }

    /// Bindings shown in the hint bar for `context`.
    #[must_use]
    pub fn hints(&self, context: InputContext) -> Vec<Keybind> {
        let mut hints: Vec<Keybind> = Vec::new();
        for bind in self.bindings(context).iter().filter(|k| k.visible_in_bar) {
            if !hints.iter().any(|h| h.command == bind.command) {
                hints.push(bind.clone());
            }
        }
        hints
    }

    /// Every binding for `context`, including hidden ones, for the help overlay.
    #[must_use]
    pub fn all_bindings(&self, context: InputContext) -> Vec<&Keybind> {
        self.bindings(context).iter().chain(&self.global).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(InputContext::Browse, key(KeyCode::Char('q')), Some(UiCommand::Quit); "q quits while browsing")]
    #[test_case(InputContext::Browse, key(KeyCode::Char('f')), Some(UiCommand::ToggleFavorite); "f toggles favorite")]
    #[test_case(InputContext::Browse, key(KeyCode::Char('/')), Some(UiCommand::FocusFilter(FilterField::Search)); "slash focuses search")]
    #[test_case(InputContext::Browse, key(KeyCode::Char('x')), None; "unbound key while browsing")]
    #[test_case(InputContext::Detail, key(KeyCode::Esc), Some(UiCommand::CloseDetail); "esc closes detail")]
    #[test_case(InputContext::Detail, key(KeyCode::Right), Some(UiCommand::NextImage); "right arrow next image")]
    #[test_case(InputContext::FilterField, key(KeyCode::Char('q')), Some(UiCommand::Edit(TextEdit::Insert('q'))); "q is text in filter field")]
    #[test_case(InputContext::FilterField, key(KeyCode::Backspace), Some(UiCommand::Edit(TextEdit::Backspace)); "backspace edits")]
    #[test_case(InputContext::FilterField, key(KeyCode::Enter), Some(UiCommand::Submit); "enter applies filter")]
    #[test_case(InputContext::ContactForm, key(KeyCode::Char('f')), Some(UiCommand::Edit(TextEdit::Insert('f'))); "f is text in contact form")]
    #[test_case(InputContext::ContactForm, ctrl('s'), Some(UiCommand::Submit); "ctrl s submits form")]
    #[test_case(InputContext::ContactForm, ctrl('c'), Some(UiCommand::Quit); "global quit in text context")]
    fn test_resolve(context: InputContext, key: KeyEvent, expected: Option<UiCommand>) {
        let registry = CommandRegistry::new();
        assert_eq!(registry.resolve(context, key), expected);
    }

    #[test]
    fn test_ctrl_letters_are_not_text() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.resolve(InputContext::FilterField, ctrl('x')), None);
    }

    #[test]
    fn test_hints_skip_hidden_and_duplicates() {
        let registry = CommandRegistry::new();
        let hints = registry.hints(InputContext::Browse);

        let favorite_hints = hints
            .iter()
            .filter(|h| h.command == UiCommand::ToggleFavorite)
            .count();
        assert_eq!(favorite_hints, 1);
        assert!(hints.iter().all(|h| h.visible_in_bar));
        assert!(!hints.iter().any(|h| h.command == UiCommand::SelectNext));
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Listings.next(), Page::Favorites);
        assert_eq!(Page::Contact.next(), Page::Listings);
        assert_eq!(Page::Listings.previous(), Page::Contact);
    }
}
