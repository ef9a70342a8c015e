use crate::ui::components::format_price;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const PAGE_HINTS: &[(&str, &str)] = &[
    ("Tab/Arrows", "Move"),
    ("Enter", "Open"),
    ("b", "Basket"),
    ("q", "Quit"),
];
const MODAL_HINTS: &[(&str, &str)] = &[
    ("Tab/Arrows", "Move"),
    ("Enter/Space", "Press"),
    ("Type", "Fill in"),
    ("Esc", "Close"),
];

/// Key hints on the left, running basket total on the right.
pub struct Footer {
    modal_open: bool,
    basket_total: u64,
}

impl Footer {
    pub fn new(modal_open: bool, basket_total: u64) -> Self {
        Self {
            modal_open,
            basket_total,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let total = format!("Σ {} ", format_price(self.basket_total));
        let total_width = u16::try_from(total.chars().count()).unwrap_or(u16::MAX);
        let [hints_area, total_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(total_width)])
                .areas(inner);

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        frame.render_widget(Paragraph::new(self.hints_line(dim)), hints_area);
        frame.render_widget(
            Paragraph::new(Span::styled(total, Style::default().fg(ACCENT))),
            total_area,
        );
    }

    fn hints_line(&self, style: Style) -> Line<'static> {
        let hints = if self.modal_open {
            MODAL_HINTS
        } else {
            PAGE_HINTS
        };
        let mut spans = vec![Span::styled(" ", style)];
        for (index, (key, action)) in hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", style));
            }
            spans.push(Span::styled(*key, style.remove_modifier(Modifier::DIM)));
            spans.push(Span::styled(format!(": {}", action), style));
        }
        Line::from(spans)
    }
}
