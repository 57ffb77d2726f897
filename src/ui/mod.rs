mod render;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{App, Focus};
use crate::{
    BOARD_CELLS, BOARD_SIDE, CELL_H, CELL_W, CONTROLS_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
    MOVES_MIN_H, PLAY_H, PLAY_W, SIDEBAR_W, STATUS_H,
};

use render::{draw_board, draw_controls, draw_moves, draw_status};

/// Where everything sits for a given terminal area. Drawing and mouse hit
/// testing both read from this so they can't disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub board: Rect,
    pub cells: [Rect; BOARD_CELLS],
    pub status: Rect,
    pub moves: Rect,
    pub controls: Rect,
}

impl Screen {
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
            return None;
        }
        let inner = cabinet().inner(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PLAY_W), Constraint::Min(SIDEBAR_W)])
            .split(inner);

        let board = Rect::new(cols[0].x, cols[0].y, PLAY_W, PLAY_H.min(cols[0].height));
        let mut cells = [Rect::default(); BOARD_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (col, row) = ((i % BOARD_SIDE) as u16, (i / BOARD_SIDE) as u16);
            *cell = Rect::new(board.x + 1 + col * CELL_W, board.y + 1 + row * CELL_H, CELL_W, CELL_H);
        }

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STATUS_H),
                Constraint::Min(MOVES_MIN_H),
                Constraint::Length(CONTROLS_H),
            ])
            .split(cols[1]);

        Some(Self {
            board,
            cells,
            status: side[0],
            moves: side[1],
            controls: side[2],
        })
    }

    pub fn cell_at(&self, col: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|r| contains(*r, col, row))
    }

    pub fn moves_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }

    pub fn visible_moves(&self) -> usize {
        self.moves_inner().height as usize
    }

    /// History step under (`col`, `row`) given the list's scroll `offset`.
    pub fn move_at(&self, col: u16, row: u16, offset: usize, len: usize) -> Option<usize> {
        let list = self.moves_inner();
        if !contains(list, col, row) {
            return None;
        }
        let step = offset + (row - list.y) as usize;
        (step < len).then_some(step)
    }
}

/// First visible entry so that `anchor` stays on screen.
pub fn list_offset(len: usize, visible: usize, anchor: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    anchor.saturating_sub(visible - 1).min(len - visible)
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

fn cabinet() -> Block<'static> {
    Block::default()
        .title("TIC-TAC-TOE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
}

pub fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.size();

    let Some(screen) = Screen::compute(area) else {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("TIC-TAC-TOE"));
        frame.render_widget(msg, area);
        return;
    };

    frame.render_widget(cabinet(), area);

    let state = app.game.state();
    let cursor = (app.focus == Focus::Board).then_some(app.cursor);
    draw_board(frame, &screen, state.current(), cursor);
    draw_status(frame, screen.status, state.outcome());
    let list_cursor = (app.focus == Focus::Moves).then_some(app.list_cursor);
    let offset = list_offset(state.history().len(), screen.visible_moves(), app.list_anchor());
    draw_moves(frame, screen.moves, &state.moves(), offset, list_cursor);
    draw_controls(frame, screen.controls);
}
