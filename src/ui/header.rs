use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Logo and basket button with the item counter.
pub struct Header<'a> {
    logo: &'a str,
    basket: &'a str,
    counter: &'a str,
    basket_focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(logo: &'a str, basket: &'a str, counter: &'a str) -> Self {
        Self {
            logo,
            basket,
            counter,
            basket_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.basket_focused = focused;
        self
    }

    pub fn widget(&self, locked: bool) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut basket_style = Style::default().fg(ACCENT);
        if self.basket_focused {
            basket_style = basket_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::REVERSED);
        }
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.logo, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("[ {} ]", self.basket), basket_style),
            Span::styled(" ", text_style),
            Span::styled(self.counter, Style::default().fg(ACCENT)),
        ]);

        let mut paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        if locked {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        paragraph
    }
}
