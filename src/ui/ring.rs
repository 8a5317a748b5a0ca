//! Circular progress indicator drawn on a braille canvas.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Gauge, Paragraph, Widget};

use crate::ui::layout::centered_rect_by_size;

/// Below this many rows the ring is unreadable; a horizontal gauge is used.
const MIN_RING_ROWS: u16 = 7;
/// Samples along a full turn, per stroke radius.
const SAMPLES: usize = 360;
const INNER_RADIUS: f64 = 0.74;
const OUTER_RADIUS: f64 = 0.96;
const STROKES: usize = 5;

/// Ring that sweeps clockwise from twelve o'clock by `ratio` of a turn,
/// with the counter value printed in the middle.
pub struct ProgressRing<'a> {
    ratio: f64,
    color: Color,
    track: Color,
    label: &'a str,
    label_color: Color,
}

impl<'a> ProgressRing<'a> {
    pub fn new(ratio: f64, label: &'a str) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            color: Color::Reset,
            track: Color::DarkGray,
            label,
            label_color: Color::Reset,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn track(mut self, track: Color) -> Self {
        self.track = track;
        self
    }

    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }
}

impl Widget for ProgressRing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let label_style = Style::default()
            .fg(self.label_color)
            .add_modifier(Modifier::BOLD);
        let square = ring_square(area);

        if square.height < MIN_RING_ROWS {
            Gauge::default()
                .gauge_style(Style::default().fg(self.color).bg(self.track))
                .ratio(self.ratio)
                .label(self.label)
                .render(area, buf);
            return;
        }

        let track = arc_points(1.0);
        let arc = arc_points(self.ratio);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: self.track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &arc,
                    color: self.color,
                });
            })
            .render(square, buf);

        let label_width = self.label.chars().count() as u16 + 2;
        Paragraph::new(self.label)
            .style(label_style)
            .alignment(Alignment::Center)
            .render(centered_rect_by_size(square, label_width, 1), buf);
    }
}

/// Largest area inside `area` that looks square on a terminal (cells are
/// roughly twice as tall as wide), centered.
pub fn ring_square(area: Rect) -> Rect {
    let rows = area.height.min(area.width / 2);
    centered_rect_by_size(area, rows.saturating_mul(2), rows)
}

/// Points of a thick arc starting at twelve o'clock and sweeping clockwise
/// by `ratio` of a full turn, in canvas coordinates `[-1, 1]`.
pub fn arc_points(ratio: f64) -> Vec<(f64, f64)> {
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio <= 0.0 {
        return Vec::new();
    }

    let steps = (SAMPLES as f64 * ratio).ceil() as usize;
    let sweep = TAU * ratio;
    let mut points = Vec::with_capacity((steps + 1) * STROKES);
    for stroke in 0..STROKES {
        let radius =
            INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * stroke as f64 / (STROKES - 1) as f64;
        for step in 0..=steps {
            let angle = FRAC_PI_2 - sweep * step as f64 / steps as f64;
            points.push((radius * angle.cos(), radius * angle.sin()));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ratio_has_no_points() {
        assert!(arc_points(0.0).is_empty());
        assert!(arc_points(-1.0).is_empty());
    }

    #[test]
    fn arc_starts_at_twelve_and_goes_clockwise() {
        let points = arc_points(0.25);
        let (x0, y0) = points[0];
        assert!(x0.abs() < 1e-9);
        assert!(y0 > 0.0);
        // A quarter turn clockwise from twelve ends at three o'clock.
        let steps = points.len() / STROKES;
        let (x1, y1) = points[steps - 1];
        assert!(x1 > 0.0);
        assert!(y1.abs() < 1e-9);
    }

    #[test]
    fn points_stay_within_the_band() {
        for (x, y) in arc_points(1.0) {
            let radius = (x * x + y * y).sqrt();
            assert!(radius >= INNER_RADIUS - 1e-9);
            assert!(radius <= OUTER_RADIUS + 1e-9);
        }
    }

    #[test]
    fn ring_square_keeps_two_to_one_aspect() {
        let square = ring_square(Rect::new(0, 0, 100, 20));
        assert_eq!(square.height, 20);
        assert_eq!(square.width, 40);
        assert_eq!(square.x, 30);
    }

    #[test]
    fn renders_value_in_small_and_large_areas() {
        for area in [Rect::new(0, 0, 40, 3), Rect::new(0, 0, 40, 20)] {
            let mut buf = Buffer::empty(area);
            ProgressRing::new(0.42, "42").render(area, &mut buf);
            let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
            assert!(text.contains("42"), "label missing in {:?}", area);
        }
    }
}
