//! Board rendering for the serpent game.
//!
//! Uses half-block pixel rendering: each board cell maps to a colored pixel,
//! and pairs of vertical pixels are packed into one terminal row using the
//! `▀` (upper half block) character with fg=top, bg=bottom colors. Each cell
//! is 2 terminal columns wide to correct for character aspect ratio.

use super::common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use crate::constants::{BOARD_SIZE, TICK_INTERVAL_MS};
use crate::game::{Game, RoundOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀ — fg fills top half, bg fills bottom half
const FULL_BLOCK: char = '\u{2588}'; // █

/// Terminal columns per board cell.
const CELL_WIDTH: usize = 2;

// ── Palette ──────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const APPLE_COLOR: Color = Color::Rgb(255, 80, 40);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Render the game scene.
pub fn render_scene(frame: &mut Frame, area: Rect, game: &Game) {
    if game.outcome.is_some() {
        render_round_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(frame, area, " Serpent ", Color::LightGreen, 8, 16);

    render_board(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Slither!",
        Color::Green,
        &[("[Arrows]", "Move"), ("[Q]", "Quit")],
    );
    render_info_panel(frame, layout.info_panel, game);
}

/// Interpolated RGB color for a body segment, bright at the head end and
/// dimming toward the tail.
fn body_color(steps_from_head: usize, snake_len: usize) -> Color {
    let t = steps_from_head as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Render the board with half-block pixel rendering, score worked into the
/// top border.
fn render_board(frame: &mut Frame, area: Rect, game: &Game) {
    let grid = BOARD_SIZE as usize;

    // ── Build color grid (board coordinates) ────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid]; grid];

    let apple = game.apple.position;
    if apple.in_bounds() {
        pixels[apple.row as usize][apple.col as usize] = Some(APPLE_COLOR);
    }

    // Head is the back of the body; gradient dims toward the tail.
    let snake_len = game.snake.len();
    for (i, seg) in game.snake.body.iter().enumerate() {
        if !seg.in_bounds() {
            continue;
        }
        let steps_from_head = snake_len - 1 - i;
        pixels[seg.row as usize][seg.col as usize] = Some(if steps_from_head == 0 {
            HEAD_COLOR
        } else {
            body_color(steps_from_head, snake_len)
        });
    }

    // ── Layout dimensions ───────────────────────────────────────
    let content_rows = grid.div_ceil(2); // 2 board rows per terminal row
    let render_w = ((grid * CELL_WIDTH + 2) as u16).min(area.width);
    if render_w < 3 || area.height < 3 {
        return;
    }
    let inner_w = render_w as usize - 2; // chars between left/right border
    let border_color = Color::Rgb(80, 80, 80);

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = game.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_TL.to_string(),
            Style::default().fg(border_color),
        ));
        if pad_before > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_before).collect();
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(label, Style::default().fg(border_color)));
        spans.push(Span::styled(score_val, Style::default().fg(Color::White)));
        if pad_after > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_after).collect();
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(
            BORDER_TR.to_string(),
            Style::default().fg(border_color),
        ));

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(line, Rect::new(x_off, y_off, render_w, 1));
    }

    // ── Board rows (half-block pixel rendering) ─────────────────
    for term_row in 0..content_rows {
        let top_row = &pixels[term_row * 2];
        let bot_row = pixels.get(term_row * 2 + 1);

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        ));

        // Batch consecutive cells with the same style into one span.
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for col in 0..grid {
            // ▀ uses fg for the top half, bg for the bottom half
            let fg = top_row[col].unwrap_or(EMPTY_BG);
            let bg = bot_row.and_then(|r| r[col]).unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            for _ in 0..CELL_WIDTH {
                cur_text.push(HALF_TOP);
            }
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        ));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            let line = Paragraph::new(Line::from(spans));
            frame.render_widget(line, Rect::new(x_off, row_y, render_w, 1));
        }
    }

    // ── Bottom border ───────────────────────────────────────────
    {
        let bot_y = y_off + 1 + content_rows as u16;
        if bot_y < area.y + area.height {
            let mut s = String::new();
            s.push(BORDER_BL);
            for _ in 0..inner_w {
                s.push(BORDER_H);
            }
            s.push(BORDER_BR);
            let line = Paragraph::new(Line::from(Span::styled(
                s,
                Style::default().fg(border_color),
            )));
            frame.render_widget(line, Rect::new(x_off, bot_y, render_w, 1));
        }
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Record: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.record.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Board: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", BOARD_SIZE, BOARD_SIZE),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Tick:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}ms", TICK_INTERVAL_MS),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(Color::Rgb(
                    BODY_BRIGHT.0 as u8,
                    BODY_BRIGHT.1 as u8,
                    BODY_BRIGHT.2 as u8,
                )),
            ),
            Span::styled("Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(APPLE_COLOR)),
            Span::styled("Apple", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the round-over overlay. This is the restart control surface.
fn render_round_over(frame: &mut Frame, area: Rect, game: &Game) {
    let (result_type, title, message) = match game.outcome {
        Some(RoundOutcome::Win) => (
            GameResultType::Win,
            ":: THE BOARD IS FULL ::",
            format!("The serpent conquered every cell. {} apples eaten.", game.score),
        ),
        _ => (
            GameResultType::Loss,
            "THE SERPENT FALLS",
            if game.score == 0 {
                "Crashed before the first apple.".to_string()
            } else {
                format!("Crashed after {} apples.", game.score)
            },
        ),
    };

    let record_line = if game.new_record {
        format!("★ New record: {}", game.record)
    } else {
        format!("Record: {}", game.record)
    };

    render_game_over_overlay(frame, area, result_type, title, &message, &record_line);
}
