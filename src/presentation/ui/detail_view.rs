//! Listing detail modal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::services::format_price;
use crate::domain::entities::{Listing, ListingId};
use crate::presentation::ui::utils::centered_rect;
use crate::presentation::widgets::{favorite_marker, measurement_labels};

/// Which listing the modal shows and which photo is current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailState {
    id: ListingId,
    image_index: usize,
    scroll: u16,
}

impl DetailState {
    #[must_use]
    pub const fn new(id: ListingId) -> Self {
        Self {
            id,
            image_index: 0,
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    #[must_use]
    pub const fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn next_image(&mut self, image_count: usize) {
        if image_count > 0 {
            self.image_index = (self.image_index + 1) % image_count;
        }
    }

    pub fn previous_image(&mut self, image_count: usize) {
        if image_count > 0 {
            self.image_index = (self.image_index + image_count - 1) % image_count;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// URL of the current photo.
    #[must_use]
    pub fn current_image<'a>(&self, listing: &'a Listing) -> Option<&'a str> {
        listing.images.get(self.image_index).map(String::as_str)
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

/// Full record of one listing drawn over the current page.
pub struct DetailView<'a> {
    listing: &'a Listing,
    is_favorite: bool,
    state: &'a DetailState,
}

impl<'a> DetailView<'a> {
    #[must_use]
    pub const fn new(listing: &'a Listing, is_favorite: bool, state: &'a DetailState) -> Self {
        Self {
            listing,
            is_favorite,
            state,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let listing = self.listing;
        let mut lines = Vec::new();

        let mut title = vec![Span::styled(
            listing.title_or_empty(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(badge) = listing.badge.as_deref() {
            title.push(Span::raw("  "));
            title.push(Span::styled(
                format!(" {badge} "),
                Style::default().bg(Color::Yellow).fg(Color::Black),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::styled(
            format_price(listing.price),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));

        lines.push(field("📍 Localização: ", listing.location_or_empty()));
        if let Some(city_and_state) = listing.city_and_state() {
            lines.push(Line::from(vec![
                Span::styled("🏙️ Cidade: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(city_and_state),
            ]));
        }
        if let Some(kind) = listing.transaction_type.as_deref() {
            lines.push(field("Transação: ", kind));
        }
        if let Some(kind) = listing.property_type.as_deref() {
            lines.push(field("Tipo: ", kind));
        }
        if let Some(description) = listing.description.as_deref() {
            lines.push(field("📝 Descrição: ", description));
        }

        let measurements = measurement_labels(listing);
        if !measurements.is_empty() {
            lines.push(Line::raw(""));
            lines.push(heading("Detalhes"));
            lines.push(Line::raw(measurements.join("  ·  ")));
        }

        if !listing.images.is_empty() {
            lines.push(Line::raw(""));
            lines.push(heading("Galeria de Fotos"));
            if let Some(url) = self.state.current_image(listing) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("Foto {}/{}: ", self.state.image_index() + 1, listing.images.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(url, Style::default().fg(Color::Blue)),
                ]));
            }
        }

        if listing.has_features() {
            lines.push(Line::raw(""));
            lines.push(heading("Características"));
            for feature in &listing.features {
                lines.push(Line::raw(format!("  • {feature}")));
            }
        }

        lines.push(Line::raw(""));
        lines.push(heading("Agente Imobiliário"));
        if let Some(agent) = listing.agent.as_deref() {
            lines.push(Line::styled(agent, Style::default().add_modifier(Modifier::BOLD)));
        }
        if let Some(phone) = listing.phone.as_deref() {
            lines.push(field("📞 ", phone));
        }
        if let Some(email) = listing.email.as_deref() {
            lines.push(field("📧 ", email));
        }

        lines.push(Line::raw(""));
        let favorite_action = if self.is_favorite {
            "Remover dos Favoritos"
        } else {
            "Adicionar aos Favoritos"
        };
        lines.push(Line::styled(
            format!("{} {favorite_action} [f]", favorite_marker(self.is_favorite)),
            Style::default().fg(if self.is_favorite {
                Color::Red
            } else {
                Color::Gray
            }),
        ));

        lines
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(80, 85, area);
        if popup.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" Imóvel #{} ", self.listing.id));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));

        Clear.render(popup, buf);
        paragraph.render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with_images(count: usize) -> Listing {
        let mut listing = Listing::new(3).with_title("Casa de praia").with_price(450_000.0);
        listing.images = (0..count).map(|i| format!("https://img/{i}.jpg")).collect();
        listing
    }

    fn text_of(view: &DetailView) -> String {
        view.lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_image_navigation_wraps() {
        let listing = listing_with_images(3);
        let mut state = DetailState::new(listing.id);

        state.previous_image(3);
        assert_eq!(state.current_image(&listing), Some("https://img/2.jpg"));

        state.next_image(3);
        state.next_image(3);
        assert_eq!(state.current_image(&listing), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_image_navigation_without_images() {
        let listing = listing_with_images(0);
        let mut state = DetailState::new(listing.id);

        state.next_image(0);

        assert_eq!(state.image_index(), 0);
        assert_eq!(state.current_image(&listing), None);
    }

    #[test]
    fn test_lines_include_gallery_and_favorite_action() {
        let listing = listing_with_images(2);
        let state = DetailState::new(listing.id);

        let text = text_of(&DetailView::new(&listing, true, &state));

        assert!(text.contains("Casa de praia"));
        assert!(text.contains("Foto 1/2: https://img/0.jpg"));
        assert!(text.contains("Remover dos Favoritos"));
        assert!(!text.contains("Características"));
    }

    #[test]
    fn test_features_section_requires_non_empty_first_entry() {
        let mut listing = listing_with_images(0);
        listing.features = vec!["Piscina".to_string(), "Garagem".to_string()];
        let state = DetailState::new(listing.id);

        let text = text_of(&DetailView::new(&listing, false, &state));

        assert!(text.contains("Características"));
        assert!(text.contains("  • Garagem"));
        assert!(text.contains("Adicionar aos Favoritos"));
    }
}
