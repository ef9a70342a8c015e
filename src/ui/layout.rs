use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Header, gallery body and footer, top to bottom.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    (header, body, footer)
}

/// Popup rect taking the given share of `area`, centered both ways.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Slot of the `index`-th gallery tile, or `None` when it falls outside
/// `area` after skipping `skip_rows` rows.
pub fn gallery_slot(area: Rect, index: usize, skip_rows: usize) -> Option<Rect> {
    let columns = gallery_columns(area);
    let row = index / columns;
    let column = index % columns;
    if row < skip_rows {
        return None;
    }
    let y = area.y as usize + (row - skip_rows) * CARD_HEIGHT as usize;
    if y + CARD_HEIGHT as usize > area.bottom() as usize {
        return None;
    }
    Some(Rect {
        x: area.x + column as u16 * CARD_WIDTH,
        y: y as u16,
        width: CARD_WIDTH.min(area.width),
        height: CARD_HEIGHT,
    })
}

pub fn gallery_columns(area: Rect) -> usize {
    usize::from((area.width / CARD_WIDTH).max(1))
}

/// Rows that fit in `area`.
pub fn gallery_rows(area: Rect) -> usize {
    usize::from((area.height / CARD_HEIGHT).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn gallery_wraps_into_columns() {
        let area = Rect::new(0, 0, 90, 18);
        assert_eq!(gallery_columns(area), 3);
        assert_eq!(gallery_slot(area, 4, 0), Some(Rect::new(30, 6, 30, 6)));
        assert_eq!(gallery_slot(area, 9, 0), None);
        assert_eq!(gallery_slot(area, 4, 1), Some(Rect::new(30, 0, 30, 6)));
        assert_eq!(gallery_slot(area, 1, 1), None);
    }

    #[test]
    fn popup_is_centered_horizontally() {
        let popup = centered_rect(60, 70, Rect::new(0, 0, 100, 30));
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.height, 21);
    }

    #[test]
    fn narrow_area_clamps_tile_width() {
        for width in [5, 10, 25] {
            let area = Rect::new(2, 0, width, 12);
            assert_eq!(gallery_columns(area), 1);
            let slot = gallery_slot(area, 0, 0).unwrap();
            assert_eq!(slot.width, width);
            assert!(slot.right() <= area.right());
        }
    }
}
