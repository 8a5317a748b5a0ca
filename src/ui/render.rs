use crate::ui::app::App;
use crate::ui::controls::Control;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::ScreenLayout;
use crate::ui::ring::ProgressRing;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BUTTON_BORDER, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::line;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let layout = ScreenLayout::compute(area);
    let view = app.view();
    let theme = app.theme();

    frame.render_widget(Header::new().widget(), layout.header);
    for control in [Control::TitleDecrement, Control::TitleIncrement] {
        draw_title_button(frame, layout.button(control), control, app.focus() == control);
    }

    frame.render_widget(Clear, layout.ring);
    let label = view.value.to_string();
    frame.render_widget(
        ProgressRing::new(app.displayed_ratio(), &label)
            .color(theme.band_color(view.color_band))
            .track(theme.track)
            .label_color(theme.primary),
        layout.ring,
    );

    let separator = line::HORIZONTAL.repeat(layout.separator.width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(GLOBAL_BORDER)),
        layout.separator,
    );

    for control in [
        Control::Reset,
        Control::DecrementBy10,
        Control::IncrementBy10,
        Control::Decrement,
        Control::Increment,
    ] {
        draw_button(frame, layout.button(control), control, app.focus() == control);
    }

    frame.render_widget(Footer::new().widget(layout.footer, app.focus()), layout.footer);
}

fn draw_title_button(frame: &mut Frame<'_>, area: Rect, control: Control, focused: bool) {
    if area.is_empty() {
        return;
    }
    let mut style = Style::default().fg(HEADER_TEXT);
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    frame.render_widget(Paragraph::new(Line::styled(control.label(), style)), area);
}

fn draw_button(frame: &mut Frame<'_>, area: Rect, control: Control, focused: bool) {
    if area.is_empty() {
        return;
    }

    // Reset is a text button; the stepped row is outlined; the unit row is filled.
    let (border_type, base) = match control {
        Control::Reset => (BorderType::Plain, Style::default()),
        Control::DecrementBy10 | Control::IncrementBy10 => {
            (BorderType::Rounded, Style::default())
        }
        _ => (BorderType::Thick, Style::default().bg(ACTIVE_HIGHLIGHT)),
    };
    let (border_color, text_style) = if focused {
        (HEADER_TEXT, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
    } else {
        (BUTTON_BORDER, Style::default().fg(HEADER_TEXT))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(
        Paragraph::new(Line::styled(control.label(), text_style))
            .alignment(Alignment::Center)
            .style(base)
            .block(block),
        area,
    );
}
