use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::metrics::Readout;
use crate::session::Session;

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let Some(reference) = self.reference() else {
            let idle = Paragraph::new(Span::styled(
                "Pick a difficulty to start typing",
                dim_bold_style,
            ))
            .alignment(Alignment::Center);
            idle.render(area, buf);
            return;
        };

        if self.is_completed() || self.is_stopped() {
            render_results(self, area, buf, bold_style, italic_style);
            return;
        }

        let readout = Readout::of(self);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let mut reference_occupied_lines =
            ((reference.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

        if reference.width() <= max_chars_per_line as usize {
            reference_occupied_lines = 1;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(
                        ((area.height as f64 - reference_occupied_lines as f64) / 2.0) as u16,
                    ),
                    Constraint::Length(2),
                    Constraint::Length(reference_occupied_lines),
                    Constraint::Length(
                        ((area.height as f64 - reference_occupied_lines as f64) / 2.0) as u16,
                    ),
                ]
                .as_ref(),
            )
            .split(area);

        let header = Paragraph::new(Span::styled(
            format!(
                "{} % err   {} ch/min   {} s",
                readout.error_rate_display(),
                readout.chars_per_min,
                readout.elapsed_secs,
            ),
            dim_bold_style,
        ))
        .alignment(Alignment::Center);
        header.render(chunks[1], buf);

        let widget = Paragraph::new(Line::from(reference_spans(
            self,
            reference,
            green_bold_style,
            red_bold_style,
            underlined_dim_bold_style,
            dim_bold_style,
        )))
        .alignment(if reference_occupied_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true });

        widget.render(chunks[2], buf);
    }
}

/// Split the reference into matched / mismatched / cursor / untouched spans.
/// The mismatch region shows what the user actually typed (spaces as a middle
/// dot so they stay visible), never more chars than the reference has left.
fn reference_spans<'a>(
    session: &Session,
    reference: &'a str,
    matched_style: Style,
    mismatch_style: Style,
    cursor_style: Style,
    rest_style: Style,
) -> Vec<Span<'a>> {
    let matched_len = session.matched_length();
    let mismatch_len = session.mismatched().chars().count();

    let matched: String = reference.chars().take(matched_len).collect();
    let typed_wrong: String = session
        .mismatched()
        .chars()
        .map(|c| if c == ' ' { '·' } else { c })
        .collect();
    let cursor = reference.chars().nth(matched_len + mismatch_len);
    let rest: String = reference
        .chars()
        .skip(matched_len + mismatch_len + cursor.map_or(0, |_| 1))
        .collect();

    let mut spans = Vec::with_capacity(4);
    if !matched.is_empty() {
        spans.push(Span::styled(matched, matched_style));
    }
    if !typed_wrong.is_empty() {
        spans.push(Span::styled(typed_wrong, mismatch_style));
    }
    if let Some(c) = cursor {
        spans.push(Span::styled(c.to_string(), cursor_style));
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest, rest_style));
    }
    spans
}

fn render_results(
    session: &Session,
    area: Rect,
    buf: &mut Buffer,
    bold_style: Style,
    italic_style: Style,
) {
    let readout = Readout::of(session);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(2)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let heading = if session.is_completed() {
        "done"
    } else {
        "stopped"
    };
    Paragraph::new(Span::styled(heading, bold_style))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let stats = Paragraph::new(Span::styled(
        format!(
            "{} ch/min   {} % err   {} s",
            readout.chars_per_min,
            readout.error_rate_display(),
            readout.elapsed_secs,
        ),
        bold_style,
    ))
    .alignment(Alignment::Center);
    stats.render(chunks[1], buf);

    let legend = Paragraph::new(Span::styled(
        "(r)etry / (n)ew / (esc)ape",
        italic_style,
    ))
    .alignment(Alignment::Center);
    legend.render(chunks[3], buf);
}
