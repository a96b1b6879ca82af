use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct FormAreas {
    pub title: Rect,
    pub notes_path: Rect,
    pub prompt: Rect,
    pub summary: Rect,
    pub share: Rect,
    pub status: Rect,
    pub hints: Rect,
}

/// Vertical split of the whole screen: two bordered one-line inputs, the
/// summary editor taking the rest, then three single-line strips.
pub fn form_areas(area: Rect) -> FormAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    FormAreas {
        title: chunks[0],
        notes_path: chunks[1],
        prompt: chunks[2],
        summary: chunks[3],
        share: chunks[4],
        status: chunks[5],
        hints: chunks[6],
    }
}

/// Centers a fixed-size box inside `area`, shrinking it to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_fits_inside_the_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let boxed = centered_box(62, 6, screen);
        assert_eq!(boxed, Rect::new(9, 9, 62, 6));

        let tiny = Rect::new(0, 0, 10, 3);
        let clamped = centered_box(62, 6, tiny);
        assert_eq!(clamped, Rect::new(0, 0, 10, 3));
    }

    #[test]
    fn form_areas_cover_the_screen_top_to_bottom() {
        let screen = Rect::new(0, 0, 80, 24);
        let areas = form_areas(screen);
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.notes_path.height, 3);
        assert_eq!(areas.prompt.height, 3);
        assert!(areas.summary.height >= 5);
        assert_eq!(areas.hints.y, 23);
    }
}
