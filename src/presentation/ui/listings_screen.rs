//! Listings page: filter bar and result cards.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::application::services::numeric::parse_price_bound;
use crate::domain::entities::{FavoriteSet, Listing};
use crate::domain::query::{ListingQuery, PriceRange, SortMode};
use crate::presentation::commands::{FilterField, InputContext, TextEdit};
use crate::presentation::widgets::{CardSelection, ListingList, TextInput};

const ALL_TRANSACTIONS: &str = "Todas";
const ALL_PROPERTY_TYPES: &str = "Todos";

/// Filter inputs, category options and card selection of the listings page.
pub struct ListingsScreenState {
    query: ListingQuery,
    default_sort: SortMode,
    search: TextInput,
    min_price: TextInput,
    max_price: TextInput,
    editing: Option<FilterField>,
    transaction_options: Vec<String>,
    property_options: Vec<String>,
    selection: CardSelection,
}

impl ListingsScreenState {
    #[must_use]
    pub fn new(default_sort: SortMode) -> Self {
        Self {
            query: ListingQuery::new().with_sort(default_sort),
            default_sort,
            search: TextInput::new(" Buscar ").placeholder("título ou localização"),
            min_price: TextInput::new(" Preço mín. ").placeholder("0"),
            max_price: TextInput::new(" Preço máx. ").placeholder("sem limite"),
            editing: None,
            transaction_options: Vec::new(),
            property_options: Vec::new(),
            selection: CardSelection::default(),
        }
    }

    /// Sets the values offered by the category selectors.
    pub fn set_options(&mut self, transaction: Vec<String>, property: Vec<String>) {
        self.transaction_options = transaction;
        self.property_options = property;
    }

    #[must_use]
    pub const fn query(&self) -> &ListingQuery {
        &self.query
    }

    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.editing.is_some() {
            InputContext::FilterField
        } else {
            InputContext::Browse
        }
    }

    pub fn selection_mut(&mut self) -> &mut CardSelection {
        &mut self.selection
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn focus_field(&mut self, field: FilterField) {
        self.editing = Some(field);
        self.sync_focus();
    }

    /// Leaves the filter field and returns to the cards.
    pub fn stop_editing(&mut self) {
        self.editing = None;
        self.sync_focus();
    }

    pub fn focus_next_field(&mut self) {
        self.editing = self.editing.map(|field| match field {
            FilterField::Search => FilterField::MinPrice,
            FilterField::MinPrice => FilterField::MaxPrice,
            FilterField::MaxPrice => FilterField::Search,
        });
        self.sync_focus();
    }

    pub fn focus_previous_field(&mut self) {
        self.editing = self.editing.map(|field| match field {
            FilterField::Search => FilterField::MaxPrice,
            FilterField::MinPrice => FilterField::Search,
            FilterField::MaxPrice => FilterField::MinPrice,
        });
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.search
            .set_focused(self.editing == Some(FilterField::Search));
        self.min_price
            .set_focused(self.editing == Some(FilterField::MinPrice));
        self.max_price
            .set_focused(self.editing == Some(FilterField::MaxPrice));
    }

    /// Edits the focused field; the query follows every keystroke.
    pub fn apply_edit(&mut self, edit: TextEdit) {
        let Some(field) = self.editing else {
            return;
        };
        match field {
            FilterField::Search => {
                self.search.apply(edit);
                self.query.search = self.search.value().to_string();
            }
            FilterField::MinPrice | FilterField::MaxPrice => {
                if field == FilterField::MinPrice {
                    self.min_price.apply(edit);
                } else {
                    self.max_price.apply(edit);
                }
                self.query.price = PriceRange::new(
                    parse_price_bound(self.min_price.value()),
                    parse_price_bound(self.max_price.value()),
                );
            }
        }
    }

    pub fn cycle_transaction_type(&mut self) {
        self.query.transaction_type =
            cycle_option(&self.transaction_options, self.query.transaction_type.as_deref());
    }

    pub fn cycle_property_type(&mut self) {
        self.query.property_type =
            cycle_option(&self.property_options, self.query.property_type.as_deref());
    }

    pub fn cycle_sort(&mut self) {
        self.query.sort = self.query.sort.next();
    }

    /// Clears every filter and restores the configured sort.
    pub fn reset(&mut self) {
        self.query.reset();
        self.query.sort = self.default_sort;
        self.search.clear();
        self.min_price.clear();
        self.max_price.clear();
        self.stop_editing();
        self.selection.first(1);
    }
}

/// Steps `None → first → … → last → None` through `options`.
fn cycle_option(options: &[String], current: Option<&str>) -> Option<String> {
    let next_index = match current {
        None => 0,
        Some(value) => match options.iter().position(|option| option == value) {
            Some(index) => index + 1,
            None => 0,
        },
    };
    options.get(next_index).cloned()
}

/// Renders the filter bar above the result cards.
pub struct ListingsScreen<'a> {
    results: &'a [&'a Listing],
    favorites: &'a FavoriteSet,
    focused: bool,
}

impl<'a> ListingsScreen<'a> {
    #[must_use]
    pub const fn new(results: &'a [&'a Listing], favorites: &'a FavoriteSet) -> Self {
        Self {
            results,
            favorites,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn selector_line(state: &ListingsScreenState) -> Line<'static> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let query = state.query();

        Line::from(vec![
            Span::styled(" Transação [t]: ", label),
            Span::styled(
                query
                    .transaction_type
                    .clone()
                    .unwrap_or_else(|| ALL_TRANSACTIONS.to_string()),
                value,
            ),
            Span::styled("   Tipo [p]: ", label),
            Span::styled(
                query
                    .property_type
                    .clone()
                    .unwrap_or_else(|| ALL_PROPERTY_TYPES.to_string()),
                value,
            ),
            Span::styled("   Ordenar [s]: ", label),
            Span::styled(query.sort.to_string(), value),
        ])
    }
}

impl StatefulWidget for ListingsScreen<'_> {
    type State = ListingsScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListingsScreenState) {
        let [inputs_area, selectors_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);

        let [search_area, min_area, max_area] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .areas(inputs_area);

        state.search.render(search_area, buf);
        state.min_price.render(min_area, buf);
        state.max_price.render(max_area, buf);
        Paragraph::new(Self::selector_line(state)).render(selectors_area, buf);

        state.selection.clamp(self.results.len());
        ListingList::new(self.results, self.favorites)
            .title("Imóveis")
            .empty_message("Nenhum imóvel encontrado com os filtros selecionados.")
            .focused(self.focused && state.editing.is_none())
            .render(list_area, buf, state.selection.state_mut());
    }
}
