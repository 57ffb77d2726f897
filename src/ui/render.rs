use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::{winning_line, Board, Cell, Mark, MoveEntry, Outcome};
use crate::BOARD_SIDE;

use super::Screen;

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn draw_board(frame: &mut Frame, screen: &Screen, board: &Board, cursor: Option<usize>) {
    let frame_block = Block::default().borders(Borders::ALL).title("BOARD");
    frame.render_widget(frame_block, screen.board);

    let line = winning_line(board).map(|(line, _)| line);
    for y in 0..BOARD_SIDE {
        for x in 0..BOARD_SIDE {
            let i = Board::idx(x, y);
            let on_line = line.is_some_and(|l| l.contains(&i));
            draw_cell(frame, screen.cells[i], board.get(x, y), on_line, cursor == Some(i));
        }
    }
}

/// One board position: its mark (or blank) in a small box.
pub fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, on_line: bool, under_cursor: bool) {
    let mut block = Block::default().borders(Borders::ALL);
    if on_line {
        block = block
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Green));
    } else if under_cursor {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow));
    }

    let content = match cell.mark() {
        Some(mark) => Span::styled(mark.symbol(), mark_style(mark)),
        None => Span::raw(" "),
    };
    let paragraph = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

pub fn draw_status(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let style = match outcome {
        Outcome::Won(mark) => mark_style(mark),
        Outcome::Draw => Style::default().add_modifier(Modifier::BOLD),
        Outcome::InProgress { .. } => Style::default(),
    };
    let status = Paragraph::new(Line::from(Span::styled(outcome.status_line(), style)))
        .block(Block::default().title("STATUS").borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// History entries from `offset`; the displayed step in bold, the keyboard
/// cursor (when the list has focus) reversed.
pub fn draw_moves(
    frame: &mut Frame,
    area: Rect,
    moves: &[MoveEntry],
    offset: usize,
    cursor: Option<usize>,
) {
    let lines: Vec<Line> = moves
        .iter()
        .skip(offset)
        .map(|entry| {
            let mut style = Style::default();
            if entry.current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if cursor == Some(entry.step) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(entry.label.clone(), style))
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().title("MOVES").borders(Borders::ALL));
    frame.render_widget(list, area);
}

pub fn draw_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(vec![
        Line::raw("click/1-9 play"),
        Line::raw("←↑→↓ cursor"),
        Line::raw("enter/space select"),
        Line::raw("tab focus  q quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, area);
}
