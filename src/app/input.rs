use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use log::debug;
use ratatui::layout::Rect;

use crate::ui::{list_offset, Screen};
use crate::{Game, BOARD_CELLS, BOARD_SIDE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Board,
    Moves,
}

/// UI-side state around the game: which pane has the keyboard and where the cursors are.
pub struct App {
    pub game: Game,
    pub focus: Focus,
    pub cursor: usize,
    pub list_cursor: usize,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            focus: Focus::Board,
            cursor: BOARD_CELLS / 2,
            list_cursor: 0,
            should_quit: false,
        }
    }

    /// History entry the move list keeps in view.
    pub fn list_anchor(&self) -> usize {
        match self.focus {
            Focus::Board => self.game.state().step(),
            Focus::Moves => self.list_cursor,
        }
    }

    pub fn click_cell(&mut self, index: usize) -> bool {
        let accepted = self.game.handle_click(index);
        if accepted {
            self.list_cursor = self.game.state().step();
        }
        accepted
    }

    pub fn select_move(&mut self, step: usize) -> bool {
        let jumped = self.game.jump_to(step);
        if jumped {
            self.list_cursor = step;
        }
        jumped
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                let _ = self.click_cell(index);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => {
                    let _ = self.click_cell(self.cursor);
                }
                Focus::Moves => {
                    let _ = self.select_move(self.list_cursor);
                }
            },
            KeyCode::Up => self.shift(0, -1),
            KeyCode::Down => self.shift(0, 1),
            KeyCode::Left => self.shift(-1, 0),
            KeyCode::Right => self.shift(1, 0),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind, col: u16, row: u16, area: Rect) {
        if !matches!(kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let Some(screen) = Screen::compute(area) else {
            return;
        };
        if let Some(index) = screen.cell_at(col, row) {
            self.focus = Focus::Board;
            self.cursor = index;
            let _ = self.click_cell(index);
            return;
        }
        let len = self.game.state().history().len();
        let offset = list_offset(len, screen.visible_moves(), self.list_anchor());
        if let Some(step) = screen.move_at(col, row, offset, len) {
            self.focus = Focus::Moves;
            let _ = self.select_move(step);
        } else {
            debug!("click at ({col}, {row}) hit nothing");
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.list_cursor = self.game.state().step();
                Focus::Moves
            }
            Focus::Moves => Focus::Board,
        };
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        match self.focus {
            Focus::Board => {
                let side = BOARD_SIDE as i32;
                let x = (self.cursor as i32 % side + dx).clamp(0, side - 1);
                let y = (self.cursor as i32 / side + dy).clamp(0, side - 1);
                self.cursor = (y * side + x) as usize;
            }
            Focus::Moves => {
                let last = self.game.state().last_step() as i32;
                self.list_cursor = (self.list_cursor as i32 + dy).clamp(0, last) as usize;
            }
        }
    }
}
