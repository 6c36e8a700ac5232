//! Listing cards.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget, Wrap,
    },
};

use crate::application::services::{format_area, format_price};
use crate::domain::entities::{FavoriteSet, Listing};

const FAVORITE_ON: &str = "♥";
const FAVORITE_OFF: &str = "♡";

/// Bedroom, bathroom and area labels for the non-zero measurements.
#[must_use]
pub fn measurement_labels(listing: &Listing) -> Vec<String> {
    let mut labels = Vec::new();
    if listing.bedrooms > 0.0 {
        labels.push(format!("{} Quarto(s)", listing.bedrooms));
    }
    if listing.bathrooms > 0.0 {
        labels.push(format!("{} Banheiro(s)", listing.bathrooms));
    }
    if listing.area > 0.0 {
        labels.push(format_area(listing.area));
    }
    labels
}

#[must_use]
pub const fn favorite_marker(is_favorite: bool) -> &'static str {
    if is_favorite {
        FAVORITE_ON
    } else {
        FAVORITE_OFF
    }
}

fn card<'a>(listing: &'a Listing, is_favorite: bool) -> ListItem<'a> {
    let marker_style = if is_favorite {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![
        Span::styled(format!("{} ", favorite_marker(is_favorite)), marker_style),
        Span::styled(
            listing.title_or_empty(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(badge) = listing.badge.as_deref() {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!(" {badge} "),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ));
    }

    let price = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format_price(listing.price),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  📍 {}", listing.location_or_empty()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let mut lines = vec![Line::from(title), price];

    let measurements = measurement_labels(listing);
    if !measurements.is_empty() {
        lines.push(Line::styled(
            format!("  {}", measurements.join(" · ")),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::raw(""));

    ListItem::new(lines)
}

/// Selected card index, kept within the current result count.
#[derive(Debug, Default)]
pub struct CardSelection {
    state: ListState,
}

impl CardSelection {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Re-anchors the selection after the result set changed size.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub fn first(&mut self, len: usize) {
        self.state.select((len > 0).then_some(0));
    }

    pub fn last(&mut self, len: usize) {
        self.state.select(len.checked_sub(1));
    }
}

/// Scrollable list of listing cards.
pub struct ListingList<'a> {
    listings: &'a [&'a Listing],
    favorites: &'a FavoriteSet,
    title: &'a str,
    empty_message: &'a str,
    focused: bool,
}

impl<'a> ListingList<'a> {
    #[must_use]
    pub const fn new(listings: &'a [&'a Listing], favorites: &'a FavoriteSet) -> Self {
        Self {
            listings,
            favorites,
            title: "",
            empty_message: "",
            focused: true,
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for ListingList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ({}) ", self.title, self.listings.len()));

        if self.listings.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .listings
            .iter()
            .map(|listing| card(listing, self.favorites.contains(listing.id)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 44, 52)))
            .highlight_symbol("▌")
            .highlight_spacing(HighlightSpacing::Always);

        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ListingId;

    fn rendered(listings: &[&Listing], favorites: &FavoriteSet) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_selected(Some(0));

        ListingList::new(listings, favorites)
            .title("Imóveis")
            .empty_message("Nenhum imóvel encontrado.")
            .render(area, &mut buf, &mut state);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut selection = CardSelection::default();

        selection.clamp(3);
        assert_eq!(selection.selected(), Some(0));

        selection.previous(3);
        assert_eq!(selection.selected(), Some(0));

        selection.last(3);
        selection.next(3);
        assert_eq!(selection.selected(), Some(2));

        selection.clamp(1);
        assert_eq!(selection.selected(), Some(0));

        selection.clamp(0);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_measurement_labels_skip_zero_values() {
        let mut listing = Listing::new(1);
        listing.bedrooms = 3.0;
        listing.area = 85.5;

        assert_eq!(measurement_labels(&listing), ["3 Quarto(s)", "85.5 m²"]);
        assert!(measurement_labels(&Listing::new(2)).is_empty());
    }

    #[test]
    fn test_card_shows_favorite_marker_and_price() {
        let listing = Listing::new(7).with_title("Casa").with_price(1500.0);
        let favorites = FavoriteSet::from_ids([ListingId::from(7)]);

        let text = rendered(&[&listing], &favorites);

        assert!(text.contains("♥ Casa"));
        assert!(text.contains("R$"));
        assert!(text.contains("Imóveis (1)"));
    }

    #[test]
    fn test_empty_list_shows_message() {
        let text = rendered(&[], &FavoriteSet::new());

        assert!(text.contains("Nenhum imóvel encontrado."));
    }
}
