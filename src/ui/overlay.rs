// Centered overlay box for end-of-match messages

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct OverlayMessage {
    pub lines: Vec<String>,
    pub style: OverlayStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayStyle {
    /// Neutral announcement (cyan border)
    Info,
    /// The human won (green border)
    Success,
}

impl OverlayMessage {
    pub fn info(lines: Vec<String>) -> Self {
        Self {
            lines,
            style: OverlayStyle::Info,
        }
    }

    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            style: OverlayStyle::Success,
        }
    }

    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Success => Color::Green,
        }
    }
}

/// Draw the message in a bordered box centered in `area`, clearing whatever
/// is underneath it.
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let widest = message
        .lines
        .iter()
        .map(|line| line.len() as u16)
        .max()
        .unwrap_or(0);

    let width = (widest + 6).min(area.width.saturating_sub(2));
    let height = (message.lines.len() as u16 + 2).min(area.height.saturating_sub(2));

    let overlay_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text: Vec<Line> = message.lines.iter().map(|l| Line::from(l.as_str())).collect();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, inner);
}
