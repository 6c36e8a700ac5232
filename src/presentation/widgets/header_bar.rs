use crate::presentation::commands::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Dataset state shown at the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl DatasetStatus {
    const fn display_text(self) -> &'static str {
        match self {
            Self::Loading => "CARREGANDO",
            Self::Ready => "PRONTO",
            Self::Failed => "ERRO",
        }
    }

    const fn indicator(self) -> &'static str {
        match self {
            Self::Ready => "●",
            Self::Loading => "◐",
            Self::Failed => "○",
        }
    }
}

pub struct HeaderBarStyle {
    pub app_name: Style,
    pub version: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub status_ready: Style,
    pub status_loading: Style,
    pub status_failed: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            app_name: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            tab: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            status_ready: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            status_loading: Style::default().fg(Color::Yellow),
            status_failed: Style::default().fg(Color::Red),
        }
    }
}

/// Application name, page tabs and dataset status.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    active_page: Page,
    favorite_count: usize,
    status: DatasetStatus,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            active_page: Page::default(),
            favorite_count: 0,
            status: DatasetStatus::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn active_page(mut self, page: Page) -> Self {
        self.active_page = page;
        self
    }

    #[must_use]
    pub const fn favorite_count(mut self, count: usize) -> Self {
        self.favorite_count = count;
        self
    }

    #[must_use]
    pub const fn status(mut self, status: DatasetStatus) -> Self {
        self.status = status;
        self
    }

    const fn status_style(&self) -> Style {
        match self.status {
            DatasetStatus::Ready => self.style.status_ready,
            DatasetStatus::Loading => self.style.status_loading,
            DatasetStatus::Failed => self.style.status_failed,
        }
    }

    fn tab_label(&self, index: usize, page: Page) -> String {
        if page == Page::Favorites && self.favorite_count > 0 {
            format!(" {} {} ({}) ", index + 1, page.title(), self.favorite_count)
        } else {
            format!(" {} {} ", index + 1, page.title())
        }
    }

    fn build_left_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::styled(format!(" v{} ", self.version), self.style.version),
            Span::raw("│"),
        ];

        for (index, page) in Page::ALL.into_iter().enumerate() {
            let style = if page == self.active_page {
                self.style.tab_active
            } else {
                self.style.tab
            };
            spans.push(Span::styled(self.tab_label(index, page), style));
        }

        spans
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let left_line = Line::from(self.build_left_spans());
        let left_width = left_line.width() as u16;
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let status_text = format!(
            " {} {} ",
            self.status.indicator(),
            self.status.display_text()
        );
        let status_width = status_text.width() as u16;

        if status_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Span::styled(status_text, self.status_style())).render(right_area, buf);
        }
    }
}
