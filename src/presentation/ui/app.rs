//! Main application orchestrator.

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::application::services::contact_link;
use crate::application::store::ListingStore;
use crate::application::use_cases::LoadListingsUseCase;
use crate::domain::entities::{Listing, ListingId};
use crate::domain::errors::LoadError;
use crate::domain::query::SortMode;
use crate::presentation::commands::{CommandRegistry, InputContext, Page, TextEdit, UiCommand};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::utils::centered_rect;
use crate::presentation::ui::{
    ContactScreen, ContactScreenState, DetailState, DetailView, ListingsScreen,
    ListingsScreenState,
};
use crate::presentation::widgets::{
    CardSelection, DatasetStatus, FooterBar, HeaderBar, ListingList, StatusBar, StatusMessage,
};
use crate::{NAME, VERSION};

const LOAD_FAILED_MESSAGE: &str =
    "Não foi possível carregar os imóveis. Tente novamente mais tarde.";
const NO_FAVORITES_MESSAGE: &str = "Você ainda não adicionou nenhum imóvel aos favoritos.";

/// Results from background work.
#[derive(Debug)]
enum Action {
    ListingsLoaded(Vec<Listing>),
    LoadFailed(LoadError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    const fn dataset_status(&self) -> DatasetStatus {
        match self {
            Self::Loading => DatasetStatus::Loading,
            Self::Ready => DatasetStatus::Ready,
            Self::Failed(_) => DatasetStatus::Failed,
        }
    }
}

/// Opens `mailto:`, `tel:` and image links outside the terminal.
pub type LinkOpener = Box<dyn Fn(&str) -> Result<(), String> + Send>;

fn open_with_system(link: &str) -> Result<(), String> {
    opener::open(link).map_err(|e| e.to_string())
}

pub struct App {
    running: bool,
    page: Page,
    load_state: LoadState,
    store: ListingStore,
    load_use_case: LoadListingsUseCase,
    registry: CommandRegistry,
    listings_screen: ListingsScreenState,
    favorites_selection: CardSelection,
    contact_screen: ContactScreenState,
    detail: Option<DetailState>,
    show_help: bool,
    status: Option<StatusMessage>,
    contact_email: String,
    open_link: LinkOpener,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    command_tx: mpsc::UnboundedSender<UiCommand>,
    command_rx: mpsc::UnboundedReceiver<UiCommand>,
}

impl App {
    #[must_use]
    pub fn new(
        store: ListingStore,
        load_use_case: LoadListingsUseCase,
        default_sort: SortMode,
        contact_email: impl Into<String>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            page: Page::default(),
            load_state: LoadState::Loading,
            store,
            load_use_case,
            registry: CommandRegistry::new(),
            listings_screen: ListingsScreenState::new(default_sort),
            favorites_selection: CardSelection::default(),
            contact_screen: ContactScreenState::new(),
            detail: None,
            show_help: false,
            status: None,
            contact_email: contact_email.into(),
            open_link: Box::new(open_with_system),
            action_tx,
            action_rx,
            command_tx,
            command_rx,
        }
    }

    /// Replaces the system link opener.
    #[must_use]
    pub fn with_link_opener(mut self, open_link: LinkOpener) -> Self {
        self.open_link = open_link;
        self
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_loading();

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(command) = self.command_rx.recv() => {
                    self.execute(command);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    match self.handle_event(&event) {
                        EventResult::Ignored => continue,
                        EventResult::Exit => self.running = false,
                        EventResult::Redraw => {}
                    }
                }

                else => break,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Fetches the dataset in the background; the result arrives as an `Action`.
    fn start_loading(&mut self) {
        self.load_state = LoadState::Loading;
        let use_case = self.load_use_case.clone();
        let tx = self.action_tx.clone();

        info!(source = %use_case.source_description(), "Loading listings");
        tokio::spawn(async move {
            let action = match use_case.execute().await {
                Ok(listings) => Action::ListingsLoaded(listings),
                Err(e) => Action::LoadFailed(e),
            };
            if tx.send(action).is_err() {
                debug!("Application closed before listings finished loading");
            }
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::ListingsLoaded(listings) => {
                info!(count = listings.len(), "Listings loaded");
                self.store.populate(listings);
                self.listings_screen
                    .set_options(self.store.transaction_types(), self.store.property_types());
                self.load_state = LoadState::Ready;
                self.status = Some(StatusMessage::info(format!(
                    "{} imóveis carregados",
                    self.store.len()
                )));
            }
            Action::LoadFailed(e) => {
                error!(error = %e, "Failed to load listings");
                self.load_state = LoadState::Failed(e.to_string());
                self.status = Some(StatusMessage::error(LOAD_FAILED_MESSAGE));
            }
        }
    }

    fn input_context(&self) -> InputContext {
        if self.detail.is_some() {
            return InputContext::Detail;
        }
        match self.page {
            Page::Listings => self.listings_screen.input_context(),
            Page::Favorites => InputContext::Browse,
            Page::Contact if self.contact_screen.is_editing() => InputContext::ContactForm,
            Page::Contact => InputContext::Browse,
        }
    }

    /// Maps a terminal event to a command and queues it for the loop.
    fn handle_event(&mut self, event: &Event) -> EventResult {
        if EventHandler::is_resize(event) {
            return EventResult::Redraw;
        }
        let Some(key) = EventHandler::key_press(event) else {
            return EventResult::Ignored;
        };
        let Some(command) = self.registry.resolve(self.input_context(), key) else {
            return EventResult::Ignored;
        };

        debug!(?command, "Dispatching command");
        if self.command_tx.send(command).is_err() {
            warn!("Command channel closed");
            return EventResult::Exit;
        }
        EventResult::Redraw
    }

    fn execute(&mut self, command: UiCommand) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match command {
            UiCommand::Quit => self.running = false,
            UiCommand::ToggleHelp => self.show_help = true,
            UiCommand::NextPage => self.show_page(self.page.next()),
            UiCommand::PreviousPage => self.show_page(self.page.previous()),
            UiCommand::ShowPage(page) => self.show_page(page),
            UiCommand::SelectNext
            | UiCommand::SelectPrevious
            | UiCommand::SelectFirst
            | UiCommand::SelectLast => self.move_selection(command),
            UiCommand::Activate => self.activate(),
            UiCommand::CloseDetail => self.detail = None,
            UiCommand::ToggleFavorite => self.toggle_favorite(),
            UiCommand::FocusFilter(field) => {
                if self.page == Page::Listings {
                    self.listings_screen.focus_field(field);
                }
            }
            UiCommand::CycleTransactionType
            | UiCommand::CyclePropertyType
            | UiCommand::CycleSort
            | UiCommand::ResetFilters => self.update_filters(command),
            UiCommand::NextImage | UiCommand::PreviousImage => self.step_image(command),
            UiCommand::OpenImage => self.open_current_image(),
            UiCommand::CallAgent => self.contact_agent(|listing| listing.phone.as_deref()),
            UiCommand::EmailAgent => self.contact_agent(|listing| listing.email.as_deref()),
            UiCommand::FocusNextField => match self.page {
                Page::Listings => self.listings_screen.focus_next_field(),
                Page::Contact => self.contact_screen.focus_next(),
                Page::Favorites => {}
            },
            UiCommand::FocusPreviousField => match self.page {
                Page::Listings => self.listings_screen.focus_previous_field(),
                Page::Contact => self.contact_screen.focus_previous(),
                Page::Favorites => {}
            },
            UiCommand::Submit => self.submit(),
            UiCommand::Cancel => match self.page {
                Page::Listings => self.listings_screen.stop_editing(),
                Page::Contact => self.contact_screen.stop_editing(),
                Page::Favorites => {}
            },
            UiCommand::Edit(edit) => self.edit(edit),
        }
    }

    fn show_page(&mut self, page: Page) {
        self.page = page;
        self.detail = None;
        self.listings_screen.stop_editing();
        self.contact_screen.stop_editing();
    }

    fn visible_ids(&self) -> Vec<ListingId> {
        let listings = match self.page {
            Page::Listings => self.store.query(self.listings_screen.query()),
            Page::Favorites => self.store.favorite_listings(),
            Page::Contact => Vec::new(),
        };
        listings.into_iter().map(|listing| listing.id).collect()
    }

    fn selected_id(&self) -> Option<ListingId> {
        let index = match self.page {
            Page::Listings => self.listings_screen.selected_index(),
            Page::Favorites => self.favorites_selection.selected(),
            Page::Contact => None,
        }?;
        self.visible_ids().get(index).copied()
    }

    fn move_selection(&mut self, command: UiCommand) {
        if let Some(detail) = self.detail.as_mut() {
            match command {
                UiCommand::SelectNext => detail.scroll_down(),
                UiCommand::SelectPrevious => detail.scroll_up(),
                _ => {}
            }
            return;
        }

        let len = self.visible_ids().len();
        let selection = match self.page {
            Page::Listings => self.listings_screen.selection_mut(),
            Page::Favorites => &mut self.favorites_selection,
            Page::Contact => return,
        };
        match command {
            UiCommand::SelectNext => selection.next(len),
            UiCommand::SelectPrevious => selection.previous(len),
            UiCommand::SelectFirst => selection.first(len),
            UiCommand::SelectLast => selection.last(len),
            _ => {}
        }
    }

    fn activate(&mut self) {
        if self.page == Page::Contact {
            self.contact_screen.start_editing();
            return;
        }
        if let Some(id) = self.selected_id() {
            debug!(id = %id, "Opening listing detail");
            self.detail = Some(DetailState::new(id));
        }
    }

    fn toggle_favorite(&mut self) {
        let id = match self.detail.as_ref() {
            Some(detail) => Some(detail.id()),
            None => self.selected_id(),
        };
        let Some(id) = id else {
            return;
        };

        let message = if self.store.toggle_favorite(id) {
            "Adicionado aos favoritos"
        } else {
            "Removido dos favoritos"
        };
        self.status = Some(StatusMessage::success(message));
    }

    fn update_filters(&mut self, command: UiCommand) {
        if self.page != Page::Listings {
            return;
        }
        match command {
            UiCommand::CycleTransactionType => self.listings_screen.cycle_transaction_type(),
            UiCommand::CyclePropertyType => self.listings_screen.cycle_property_type(),
            UiCommand::CycleSort => self.listings_screen.cycle_sort(),
            UiCommand::ResetFilters => {
                self.listings_screen.reset();
                self.status = Some(StatusMessage::info("Filtros limpos"));
            }
            _ => {}
        }
    }

    fn detail_listing(&self) -> Option<(&DetailState, &Listing)> {
        let detail = self.detail.as_ref()?;
        let listing = self.store.find(detail.id())?;
        Some((detail, listing))
    }

    fn step_image(&mut self, command: UiCommand) {
        let Some(count) = self.detail_listing().map(|(_, listing)| listing.images.len()) else {
            return;
        };
        if let Some(detail) = self.detail.as_mut() {
            if command == UiCommand::NextImage {
                detail.next_image(count);
            } else {
                detail.previous_image(count);
            }
        }
    }

    fn open_current_image(&mut self) {
        let url = self
            .detail_listing()
            .and_then(|(detail, listing)| detail.current_image(listing))
            .map(ToString::to_string);
        match url {
            Some(url) => {
                self.open(&url);
            }
            None => self.status = Some(StatusMessage::warning("Este imóvel não tem fotos")),
        }
    }

    fn contact_agent(&mut self, pick: impl Fn(&Listing) -> Option<&str>) {
        let contact = self
            .detail_listing()
            .and_then(|(_, listing)| pick(listing))
            .map(contact_link);
        match contact {
            Some(link) => {
                self.open(&link);
            }
            None => {
                self.status = Some(StatusMessage::warning("Contato do agente indisponível"));
            }
        }
    }

    fn submit(&mut self) {
        match self.page {
            Page::Listings => self.listings_screen.stop_editing(),
            Page::Contact => match self.contact_screen.submit(&self.contact_email) {
                Ok(link) => {
                    info!("Contact form submitted");
                    if self.open(&link) {
                        self.status = Some(StatusMessage::success(
                            "Mensagem pronta no seu cliente de email",
                        ));
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Contact form rejected");
                    self.status = Some(StatusMessage::error(
                        "Por favor, preencha todos os campos obrigatórios!",
                    ));
                }
            },
            Page::Favorites => {}
        }
    }

    fn edit(&mut self, edit: TextEdit) {
        match self.page {
            Page::Listings => self.listings_screen.apply_edit(edit),
            Page::Contact => self.contact_screen.apply_edit(edit),
            Page::Favorites => {}
        }
    }

    /// Hands `link` to the system; returns whether it was accepted.
    fn open(&mut self, link: &str) -> bool {
        debug!(link, "Opening external link");
        match (self.open_link)(link) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, link, "Failed to open link");
                self.status = Some(StatusMessage::error(format!("Não foi possível abrir {link}")));
                false
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            HeaderBar::new(NAME, VERSION)
                .active_page(self.page)
                .favorite_count(self.store.favorite_listings().len())
                .status(self.load_state.dataset_status()),
            header_area,
        );

        self.render_body(frame, body_area);

        let summary = format!(
            "{} imóveis · {} favoritos",
            self.store.len(),
            self.store.favorites().len()
        );
        frame.render_widget(
            StatusBar::new(self.status.as_ref()).right(summary),
            status_area,
        );

        let context = self.input_context();
        let hints = self.registry.hints(context);
        frame.render_widget(
            FooterBar::new(&hints)
                .context(context)
                .right_info(Some("F1 ajuda ")),
            footer_area,
        );

        if let Some((detail, listing)) = self.detail_listing() {
            let is_favorite = self.store.is_favorite(listing.id);
            frame.render_widget(DetailView::new(listing, is_favorite, detail), body_area);
        }

        if self.show_help {
            self.render_help(frame, body_area);
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if self.page == Page::Contact {
            frame.render_stateful_widget(
                ContactScreen::new(&self.contact_email),
                area,
                &mut self.contact_screen,
            );
            return;
        }

        match &self.load_state {
            LoadState::Loading => {
                frame.render_widget(
                    Paragraph::new("Carregando imóveis...")
                        .style(Style::default().fg(Color::Yellow))
                        .alignment(Alignment::Center),
                    centered_rect(60, 20, area),
                );
            }
            LoadState::Failed(reason) => {
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::styled(
                            LOAD_FAILED_MESSAGE,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Line::styled(reason.as_str(), Style::default().fg(Color::DarkGray)),
                    ])
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                    centered_rect(70, 30, area),
                );
            }
            LoadState::Ready => match self.page {
                Page::Listings => {
                    let results = self.store.query(self.listings_screen.query());
                    frame.render_stateful_widget(
                        ListingsScreen::new(&results, self.store.favorites())
                            .focused(self.detail.is_none()),
                        area,
                        &mut self.listings_screen,
                    );
                }
                Page::Favorites => {
                    let favorites = self.store.favorite_listings();
                    self.favorites_selection.clamp(favorites.len());
                    frame.render_stateful_widget(
                        ListingList::new(&favorites, self.store.favorites())
                            .title(Page::Favorites.title())
                            .empty_message(NO_FAVORITES_MESSAGE)
                            .focused(self.detail.is_none()),
                        area,
                        self.favorites_selection.state_mut(),
                    );
                }
                Page::Contact => {}
            },
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 80, area);
        let lines: Vec<Line> = self
            .registry
            .all_bindings(self.input_context())
            .into_iter()
            .map(|bind| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", FooterBar::format_key(&bind.key)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(bind.label.as_ref()),
                ])
            })
            .collect();

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Atalhos "),
            ),
            popup,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::application::services::contact::DEFAULT_AGENCY_EMAIL;
    use crate::application::store::{FAVORITES_KEY, FavoritesRepository};
    use crate::domain::ports::mocks::{MemoryKeyValueStore, MockDatasetSource};
    use crate::presentation::widgets::StatusLevel;

    const DATASET: &str = "id,title,location,price,transactionType,propertyType,images,phone,email\n\
        1,Casa térrea,Olinda,100,Venda,Casa,a.jpg;b.jpg,+55 81 90000-0000,ana@imob.com\n\
        2,Apartamento,Boa Viagem,300,Aluguel,Apartamento,,,\n\
        3,Cobertura,Casa Forte,200,Venda,Apartamento,,,";

    struct Harness {
        app: App,
        kv: Arc<MemoryKeyValueStore>,
        opened: Arc<Mutex<Vec<String>>>,
    }

    fn harness(source: MockDatasetSource) -> Harness {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = ListingStore::new(FavoritesRepository::new(kv.clone()));
        let use_case = LoadListingsUseCase::new(Arc::new(source));
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = opened.clone();

        let app = App::new(store, use_case, SortMode::DatasetOrder, DEFAULT_AGENCY_EMAIL)
            .with_link_opener(Box::new(move |link| {
                sink.lock().unwrap().push(link.to_string());
                Ok(())
            }));

        Harness { app, kv, opened }
    }

    async fn loaded() -> Harness {
        let mut h = harness(MockDatasetSource::with_text(DATASET));
        h.app.start_loading();
        let action = h.app.action_rx.recv().await.unwrap();
        h.app.handle_action(action);
        h
    }

    fn press(app: &mut App, code: KeyCode) {
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        app.handle_event(&event);
        while let Ok(command) = app.command_rx.try_recv() {
            app.execute(command);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_load_populates_store_and_options() {
        let h = loaded().await;

        assert_eq!(h.app.load_state, LoadState::Ready);
        assert_eq!(h.app.store.len(), 3);
        assert_eq!(
            h.app.status.as_ref().map(|s| s.text.as_str()),
            Some("3 imóveis carregados")
        );
    }

    #[tokio::test]
    async fn test_load_failure_is_terminal() {
        let mut h = harness(MockDatasetSource::failing(LoadError::network("offline")));
        h.app.start_loading();
        let action = h.app.action_rx.recv().await.unwrap();
        h.app.handle_action(action);

        assert!(matches!(h.app.load_state, LoadState::Failed(_)));
        assert!(h.app.store.is_empty());
        assert_eq!(
            h.app.status.as_ref().map(|s| s.text.as_str()),
            Some(LOAD_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_favorite_key_persists_selected_listing() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Down);
        press(&mut h.app, KeyCode::Down);
        press(&mut h.app, KeyCode::Char('f'));

        assert!(h.app.store.is_favorite(ListingId::from(2)));
        assert_eq!(h.kv.raw(FAVORITES_KEY).as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_search_filters_selection() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Char('/'));
        type_text(&mut h.app, "casa");
        press(&mut h.app, KeyCode::Enter);
        press(&mut h.app, KeyCode::End);

        assert_eq!(h.app.input_context(), InputContext::Browse);
        assert_eq!(h.app.visible_ids(), [ListingId::from(1), ListingId::from(3)]);
        assert_eq!(h.app.selected_id(), Some(ListingId::from(3)));
    }

    #[tokio::test]
    async fn test_sort_cycle_orders_by_price() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Char('s'));
        assert_eq!(
            h.app.visible_ids(),
            [ListingId::from(1), ListingId::from(3), ListingId::from(2)]
        );

        press(&mut h.app, KeyCode::Char('s'));
        assert_eq!(
            h.app.visible_ids(),
            [ListingId::from(2), ListingId::from(3), ListingId::from(1)]
        );
    }

    #[tokio::test]
    async fn test_detail_modal_actions() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Home);
        press(&mut h.app, KeyCode::Enter);
        assert_eq!(h.app.input_context(), InputContext::Detail);

        press(&mut h.app, KeyCode::Right);
        press(&mut h.app, KeyCode::Char('o'));
        press(&mut h.app, KeyCode::Char('c'));
        press(&mut h.app, KeyCode::Char('e'));
        press(&mut h.app, KeyCode::Char('f'));

        assert_eq!(
            *h.opened.lock().unwrap(),
            ["b.jpg", "tel:+55 81 90000-0000", "mailto:ana@imob.com"]
        );
        assert!(h.app.store.is_favorite(ListingId::from(1)));

        press(&mut h.app, KeyCode::Esc);
        assert!(h.app.detail.is_none());
    }

    #[tokio::test]
    async fn test_favorites_page_lists_only_favorites() {
        let mut h = loaded().await;
        h.app.store.toggle_favorite(ListingId::from(3));

        press(&mut h.app, KeyCode::Char('2'));
        press(&mut h.app, KeyCode::Home);

        assert_eq!(h.app.page, Page::Favorites);
        assert_eq!(h.app.visible_ids(), [ListingId::from(3)]);

        press(&mut h.app, KeyCode::Char('f'));
        assert!(h.app.visible_ids().is_empty());
    }

    #[tokio::test]
    async fn test_contact_form_submission() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Char('3'));
        press(&mut h.app, KeyCode::Enter);
        assert_eq!(h.app.input_context(), InputContext::ContactForm);

        press(&mut h.app, KeyCode::Enter);
        assert_eq!(
            h.app.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Error)
        );

        type_text(&mut h.app, "Ana");
        press(&mut h.app, KeyCode::Tab);
        type_text(&mut h.app, "ana@example.com");
        press(&mut h.app, KeyCode::Tab);
        press(&mut h.app, KeyCode::Tab);
        type_text(&mut h.app, "Oi");
        press(&mut h.app, KeyCode::Enter);

        let opened = h.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:contato@alphaprime.com?subject=Contato%20de%20Ana"));
    }

    #[tokio::test]
    async fn test_reset_key_clears_filters() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Char('t'));
        press(&mut h.app, KeyCode::Char('s'));
        press(&mut h.app, KeyCode::Char('s'));
        assert_eq!(h.app.visible_ids(), [ListingId::from(3), ListingId::from(1)]);

        press(&mut h.app, KeyCode::Char('r'));

        assert_eq!(
            h.app.visible_ids(),
            [ListingId::from(1), ListingId::from(2), ListingId::from(3)]
        );
        assert_eq!(
            h.app.status.as_ref().map(|s| s.text.as_str()),
            Some("Filtros limpos")
        );
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_next_command() {
        let mut h = loaded().await;

        press(&mut h.app, KeyCode::Char('?'));
        assert!(h.app.show_help);

        press(&mut h.app, KeyCode::Char('q'));
        assert!(!h.app.show_help);
        assert!(h.app.running);

        press(&mut h.app, KeyCode::Char('q'));
        assert!(!h.app.running);
    }
}
