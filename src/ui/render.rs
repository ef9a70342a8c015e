use crate::ui::app::App;
use crate::ui::dom::{query_selector, Node, NodeKind, NodeRef};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    centered_rect, gallery_columns, gallery_rows, gallery_slot, layout_regions,
};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, CATEGORY_ADDITIONAL, CATEGORY_BUTTON, CATEGORY_HARD,
    CATEGORY_OTHER, CATEGORY_SOFT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::rc::Rc;

const BOLD_TEXT: [&str; 3] = ["modal__title", "card__title", "order-success__title"];

/// Draw the page and, on top, the modal. Returns the modal's area so mouse
/// clicks can be tested against it.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> Option<Rect> {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let shop = app.shop();
    let page = shop.page();
    let focused = app.focused();
    let locked = page.is_locked();

    let basket_button = query_selector(page.container(), ".header__basket");
    let logo = text_of(query_selector(page.container(), ".header__logo").as_ref());
    let basket_label = text_of(basket_button.as_ref());
    let counter = page.counter();
    let header_widget = Header::new(&logo, &basket_label, &counter)
        .focused(basket_button.is_some_and(|node| is_focused(&node, focused.as_ref())));
    frame.render_widget(header_widget.widget(locked), header);

    draw_gallery(frame, body, &page.catalog(), focused.as_ref(), locked);

    Footer::new(shop.modal().is_open(), shop.model().basket_total()).render(frame, footer);

    if !shop.modal().is_open() {
        return None;
    }

    let popup = centered_rect(60, 70, area);
    let mut lines = Vec::new();
    let mut focus_line = None;
    if let Some(content) = shop.modal().content() {
        collect_lines(&content, focused.as_ref(), &mut lines, &mut focus_line);
    }
    let inner_height = usize::from(popup.height.saturating_sub(2)).max(1);
    let scroll = match focus_line {
        Some(line) if line >= inner_height => line + 1 - inner_height,
        _ => 0,
    };

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Esc ✕ ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, popup);
    Some(popup)
}

fn draw_gallery(
    frame: &mut Frame<'_>,
    area: Rect,
    cards: &[NodeRef],
    focused: Option<&NodeRef>,
    locked: bool,
) {
    if cards.is_empty() {
        let waiting = Paragraph::new("Loading catalog…")
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM));
        frame.render_widget(waiting, area);
        return;
    }

    let columns = gallery_columns(area);
    let rows = gallery_rows(area);
    let focus_row = cards
        .iter()
        .position(|card| is_focused(card, focused))
        .map(|index| index / columns)
        .unwrap_or(0);
    let skip_rows = (focus_row + 1).saturating_sub(rows);

    for (index, card) in cards.iter().enumerate() {
        let Some(slot) = gallery_slot(area, index, skip_rows) else {
            continue;
        };
        let highlight = is_focused(card, focused);
        let mut border = Style::default().fg(GLOBAL_BORDER);
        if highlight {
            border = Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT);
        }

        let mut lines = Vec::new();
        for selector in [".card__category", ".card__title", ".card__price"] {
            if let Some(node) = query_selector(card, selector) {
                let spans = leaf_spans(&node.borrow(), false);
                lines.push(Line::from(spans));
            }
        }

        let mut widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .wrap(Wrap { trim: true });
        if locked {
            widget = widget.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(widget, slot);
    }
}

/// Lay a fragment out as lines: blocks stack, rows share one line.
fn collect_lines(
    node: &NodeRef,
    focused: Option<&NodeRef>,
    out: &mut Vec<Line<'static>>,
    focus_line: &mut Option<usize>,
) {
    let current = node.borrow();
    match current.kind {
        NodeKind::Block => {
            for child in &current.children {
                collect_lines(child, focused, out, focus_line);
            }
        }
        NodeKind::Row => {
            let mut contains_focus = false;
            let spans = inline_spans(node, focused, &mut contains_focus);
            if contains_focus {
                *focus_line = Some(out.len());
            }
            if !spans.is_empty() {
                out.push(Line::from(spans));
            }
        }
        _ => {
            let highlight = is_focused(node, focused);
            if highlight {
                *focus_line = Some(out.len());
            }
            let spans = leaf_spans(&current, highlight);
            if !spans.is_empty() {
                out.push(Line::from(spans));
            }
        }
    }
}

fn inline_spans(
    node: &NodeRef,
    focused: Option<&NodeRef>,
    contains_focus: &mut bool,
) -> Vec<Span<'static>> {
    let current = node.borrow();
    if !matches!(current.kind, NodeKind::Block | NodeKind::Row) {
        let highlight = is_focused(node, focused);
        *contains_focus |= highlight;
        return leaf_spans(&current, highlight);
    }

    let mut spans = Vec::new();
    for child in &current.children {
        let child_spans = inline_spans(child, focused, contains_focus);
        if child_spans.is_empty() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.extend(child_spans);
    }
    spans
}

fn leaf_spans(node: &Node, highlight: bool) -> Vec<Span<'static>> {
    let mut style = Style::default().fg(HEADER_TEXT);
    if highlight {
        style = style.add_modifier(Modifier::REVERSED);
    }

    match node.kind {
        NodeKind::Text => {
            if node.text.is_empty() {
                return Vec::new();
            }
            vec![Span::styled(node.text.clone(), text_style(node, style))]
        }
        NodeKind::Image => {
            if node.src.is_empty() {
                return Vec::new();
            }
            vec![Span::styled(
                format!("▣ {}", node.text),
                style.add_modifier(Modifier::DIM),
            )]
        }
        NodeKind::Button => {
            if node.disabled {
                style = style.add_modifier(Modifier::DIM);
            }
            if node.has_class("button_alt-active") {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            vec![Span::styled(format!("[ {} ]", node.text), style)]
        }
        NodeKind::Input => {
            let (shown, mut input_style) = if node.value.is_empty() {
                (node.placeholder.clone(), style.add_modifier(Modifier::DIM))
            } else {
                (node.value.clone(), style)
            };
            if highlight {
                input_style = input_style.remove_modifier(Modifier::DIM);
            }
            let cursor = if highlight { "▏" } else { " " };
            vec![Span::styled(
                format!("[ {:<28}{}]", shown, cursor),
                input_style,
            )]
        }
        NodeKind::Block | NodeKind::Row => Vec::new(),
    }
}

fn text_style(node: &Node, base: Style) -> Style {
    if node.has_class("form__errors") {
        return base.fg(STATUS_ERROR);
    }
    if node.has_class("card__price") || node.has_class("basket__price") {
        return base.fg(ACCENT);
    }
    if let Some(color) = category_color(node) {
        return base.fg(color);
    }
    if BOLD_TEXT.iter().any(|class| node.has_class(class)) {
        return base.add_modifier(Modifier::BOLD);
    }
    base
}

fn category_color(node: &Node) -> Option<Color> {
    node.classes.iter().find_map(|class| {
        match class.strip_prefix("card__category_")? {
            "soft" => Some(CATEGORY_SOFT),
            "hard" => Some(CATEGORY_HARD),
            "other" => Some(CATEGORY_OTHER),
            "additional" => Some(CATEGORY_ADDITIONAL),
            "button" => Some(CATEGORY_BUTTON),
            _ => None,
        }
    })
}

fn is_focused(node: &NodeRef, focused: Option<&NodeRef>) -> bool {
    focused.is_some_and(|focused| Rc::ptr_eq(focused, node))
}

fn text_of(node: Option<&NodeRef>) -> String {
    node.map(|node| node.borrow().text.clone())
        .unwrap_or_default()
}
