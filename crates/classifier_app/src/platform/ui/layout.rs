use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::MAX_FORM_WIDTH;

pub(crate) struct FormAreas {
    pub title: Rect,
    pub body: Rect,
    pub hints: Rect,
}

pub(crate) struct DescribeAreas {
    pub selected: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub result: Rect,
    pub error: Rect,
}

/// Centers a column no wider than the form and splits it top to bottom.
pub(crate) fn form_areas(area: Rect) -> FormAreas {
    let column = centered_column(area, MAX_FORM_WIDTH);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(column);

    FormAreas {
        title: rows[0],
        body: rows[1],
        hints: rows[2],
    }
}

pub(crate) fn describe_areas(body: Rect) -> DescribeAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(body);

    DescribeAreas {
        selected: rows[0],
        input: rows[1],
        submit: rows[2],
        result: rows[3],
        error: rows[4],
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_capped_and_centered() {
        let areas = form_areas(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.title.width, MAX_FORM_WIDTH);
        assert_eq!(areas.title.x, (100 - MAX_FORM_WIDTH) / 2);
        assert_eq!(areas.hints.y, 29);
    }

    #[test]
    fn narrow_terminal_uses_full_width() {
        let areas = form_areas(Rect::new(0, 0, 40, 20));
        assert_eq!(areas.body.x, 0);
        assert_eq!(areas.body.width, 40);
    }
}
