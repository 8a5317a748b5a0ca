use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::ui::controls::Control;

const TITLE_BUTTON_WIDTH: u16 = 3;
const RESET_WIDTH: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3u16.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Every region of the counter screen, computed from the terminal area.
///
/// Rendering and mouse hit-testing both derive from this so a click always
/// lands on the button that was drawn there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub footer: Rect,
    pub ring: Rect,
    pub separator: Rect,
    title_decrement: Rect,
    title_increment: Rect,
    reset: Rect,
    decrement_by_10: Rect,
    increment_by_10: Rect,
    decrement: Rect,
    increment: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let (header, body, footer) = layout_regions(area);

        // Title buttons sit on the text row between the header's borders.
        let title_height = u16::from(header.height >= 2);
        let title_width = TITLE_BUTTON_WIDTH.min(header.width.saturating_sub(2));
        let title_decrement = Rect {
            x: header.x + 1u16.min(header.width),
            y: header.y + title_height,
            width: title_width,
            height: title_height,
        };
        let title_increment = Rect {
            x: (header.x + header.width)
                .saturating_sub(title_width + 1)
                .max(header.x),
            ..title_decrement
        };

        let [ring, separator, reset_row, boost_row, step_row] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .areas(body);

        let reset = centered_rect_by_size(reset_row, RESET_WIDTH, BUTTON_HEIGHT);
        let [decrement_by_10, increment_by_10] = button_pair(boost_row);
        let [decrement, increment] = button_pair(step_row);

        Self {
            header,
            footer,
            ring,
            separator,
            title_decrement,
            title_increment,
            reset,
            decrement_by_10,
            increment_by_10,
            decrement,
            increment,
        }
    }

    pub fn button(&self, control: Control) -> Rect {
        match control {
            Control::TitleDecrement => self.title_decrement,
            Control::TitleIncrement => self.title_increment,
            Control::Reset => self.reset,
            Control::DecrementBy10 => self.decrement_by_10,
            Control::IncrementBy10 => self.increment_by_10,
            Control::Decrement => self.decrement,
            Control::Increment => self.increment,
        }
    }

    /// The control under the cell at (`column`, `row`), if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::ALL
            .into_iter()
            .find(|control| self.button(*control).contains(position))
    }
}

/// Two equal-width buttons side by side with a one-column gutter around each.
fn button_pair(row: Rect) -> [Rect; 2] {
    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .horizontal_margin(1)
        .spacing(2u16)
        .areas(row);
    [left, right]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 60, 40))
    }

    #[test]
    fn regions_fill_the_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 60, 40));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 34);
        assert_eq!(footer.y, 37);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let layout = screen();
        for a in Control::ALL {
            for b in Control::ALL {
                if a != b {
                    assert!(
                        !layout.button(a).intersects(layout.button(b)),
                        "{:?} overlaps {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn hit_test_finds_each_button() {
        let layout = screen();
        for control in Control::ALL {
            let rect = layout.button(control);
            assert_eq!(layout.hit_test(rect.x, rect.y), Some(control));
        }
    }

    #[test]
    fn hit_test_misses_ring_and_footer() {
        let layout = screen();
        assert_eq!(layout.hit_test(layout.ring.x + 1, layout.ring.y + 1), None);
        assert_eq!(layout.hit_test(layout.footer.x + 1, layout.footer.y + 1), None);
    }

    #[test]
    fn title_buttons_sit_in_opposite_corners() {
        let layout = screen();
        let dec = layout.button(Control::TitleDecrement);
        let inc = layout.button(Control::TitleIncrement);
        assert_eq!(dec.y, 1);
        assert_eq!(inc.y, 1);
        assert_eq!(dec.x, 1);
        assert_eq!(inc.x + inc.width, 59);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 2, 2));
        let _ = layout.hit_test(0, 0);
    }
}
