use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::overlay::{self, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::state::{Aim, MatchState, Paddle};

// Row 0: scores, row 1: controls hint, row 2: aim indicators; the bordered
// field takes the rest.
const HEADER_ROWS: u16 = 3;

/// What occupies a terminal cell inside the field. The grid is rebuilt from
/// scratch every frame from the match state.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    CenterLine,
    Paddle,
    Ball,
}

pub fn render(
    frame: &mut Frame,
    state: &MatchState,
    display: &DisplayConfig,
    overlay_msg: Option<&OverlayMessage>,
) {
    let area = frame.area();
    if area.width < 16 || area.height < HEADER_ROWS + 4 {
        // Terminal too small to draw anything sensible
        return;
    }

    draw_header(frame, state, display, area);

    let field_area = Rect {
        x: area.x,
        y: area.y + HEADER_ROWS,
        width: area.width,
        height: area.height - HEADER_ROWS,
    };
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rgb(display.center_line_color)));
    let inner = border.inner(field_area);
    frame.render_widget(border, field_area);

    draw_field(frame, state, display, inner);

    if let Some(message) = overlay_msg {
        overlay::render_overlay(frame, message, area);
    }
}

fn draw_header(frame: &mut Frame, state: &MatchState, display: &DisplayConfig, area: Rect) {
    let scores = Paragraph::new(format!("{}  :  {}", state.left_score, state.right_score))
        .style(Style::default().fg(rgb(display.score_color)))
        .alignment(Alignment::Center);
    frame.render_widget(scores, row(area, 0));

    let hint = Paragraph::new("W/S move   A/D aim   C center   Space fire   Q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, row(area, 1));

    let left_aim = Paragraph::new(format!(" aim {}", aim_glyph(state.left_paddle.aim)))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Left);
    frame.render_widget(left_aim, row(area, 2));

    let right_aim = Paragraph::new(format!("{} aim ", aim_glyph(state.right_paddle.aim)))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(right_aim, row(area, 2));
}

fn aim_glyph(aim: Aim) -> char {
    match aim {
        Aim::Up => '▲',
        Aim::Center => '─',
        Aim::Down => '▼',
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: 1,
    }
}

fn draw_field(frame: &mut Frame, state: &MatchState, display: &DisplayConfig, inner: Rect) {
    let cols = inner.width as usize;
    let rows = inner.height as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    let mut grid = vec![vec![Cell::Empty; cols]; rows];

    // Dotted center line
    let mid = cols / 2;
    for (i, line) in grid.iter_mut().enumerate() {
        if i % 2 == 0 {
            line[mid] = Cell::CenterLine;
        }
    }

    for paddle in [&state.left_paddle, &state.right_paddle] {
        fill_paddle(&mut grid, state, paddle, cols, rows);
    }

    // Ball drawn as a square of one margin half-extent around its position
    let ball = state.ball.position;
    fill_rect(
        &mut grid,
        state,
        ball.x - state.ball_margin,
        ball.y - state.ball_margin,
        ball.x + state.ball_margin,
        ball.y + state.ball_margin,
        cols,
        rows,
        Cell::Ball,
    );

    let lines: Vec<Line> = grid
        .iter()
        .map(|cells| Line::from(row_spans(cells, display)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn fill_paddle(grid: &mut [Vec<Cell>], state: &MatchState, paddle: &Paddle, cols: usize, rows: usize) {
    fill_rect(
        grid,
        state,
        paddle.position.x,
        paddle.position.y,
        paddle.position.x + paddle.width,
        paddle.position.y + paddle.height,
        cols,
        rows,
        Cell::Paddle,
    );
}

#[allow(clippy::too_many_arguments)]
fn fill_rect(
    grid: &mut [Vec<Cell>],
    state: &MatchState,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    cols: usize,
    rows: usize,
    kind: Cell,
) {
    let (c0, c1) = cell_span(x0, x1, state.field_width, cols);
    let (r0, r1) = cell_span(y0, y1, state.field_height, rows);
    for line in grid.iter_mut().take(r1).skip(r0) {
        for cell in line.iter_mut().take(c1).skip(c0) {
            *cell = kind;
        }
    }
}

// Map a virtual-coordinate interval onto a half-open cell range, clamped
// into the grid.
fn cell_span(v0: f32, v1: f32, virtual_extent: f32, cells: usize) -> (usize, usize) {
    let scale = cells as f32 / virtual_extent;
    let start = (v0.max(0.0) * scale) as usize;
    let end = ((v1.max(0.0) * scale).ceil() as usize).min(cells);
    (start.min(cells), end)
}

fn row_spans(cells: &[Cell], display: &DisplayConfig) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run_start = 0;

    for i in 1..=cells.len() {
        if i == cells.len() || cells[i] != cells[run_start] {
            let kind = cells[run_start];
            let (glyph, color) = match kind {
                Cell::Empty => (' ', Color::Reset),
                Cell::CenterLine => ('┊', rgb(display.center_line_color)),
                Cell::Paddle => ('█', rgb(display.paddle_color)),
                Cell::Ball => ('█', rgb(display.ball_color)),
            };
            let text: String = std::iter::repeat(glyph).take(i - run_start).collect();
            spans.push(Span::styled(text, Style::default().fg(color)));
            run_start = i;
        }
    }

    spans
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}
