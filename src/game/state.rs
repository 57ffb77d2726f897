use log::{debug, info};

use crate::game::{calculate_winner, move_label, Board, Mark, Placement};

/// One history entry: the snapshot plus the move that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub board: Board,
    pub placed: Option<Placement>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress { next: Mark },
    Won(Mark),
    Draw,
}

impl Outcome {
    pub fn status_line(self) -> String {
        match self {
            Outcome::InProgress { next } => format!("Next player: {}", next),
            Outcome::Won(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "Draw".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
    pub current: bool,
}

/// Immutable game value. Transitions return a new value; nothing is edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Turn>,
    step: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            history: vec![Turn {
                board: Board::new(),
                placed: None,
            }],
            step: 0,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    pub fn current(&self) -> &Board {
        &self.history[self.step].board
    }

    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self.current())
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Won(mark),
            None if self.current().is_full() => Outcome::Draw,
            None => Outcome::InProgress {
                next: self.next_mark(),
            },
        }
    }

    /// New state with the current player's mark at `index`, or `None` when the
    /// displayed board is decided, the cell is taken, or the index is off the board.
    pub fn play(&self, index: usize) -> Option<Self> {
        let board = self.current();
        if self.winner().is_some() || !board.at(index)?.is_empty() {
            return None;
        }
        let next = board.with_mark(index, self.next_mark());
        let mut history = self.history[..=self.step].to_vec();
        history.push(Turn {
            board: next,
            placed: Some(Placement::from_index(index)),
        });
        let step = history.len() - 1;
        Some(Self { history, step })
    }

    /// Same history, pointer moved to `step`. `None` when `step` is past the end.
    pub fn jump_to(&self, step: usize) -> Option<Self> {
        if step > self.last_step() {
            return None;
        }
        Some(Self {
            history: self.history.clone(),
            step,
        })
    }

    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, turn)| MoveEntry {
                step,
                label: move_label(step, turn.placed),
                current: step == self.step,
            })
            .collect()
    }
}

/// Owns the single live `GameState` and swaps it on every accepted transition.
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle_click(&mut self, index: usize) -> bool {
        match self.state.play(index) {
            Some(next) => {
                let placed = Placement::from_index(index);
                debug!(
                    "move #{}: {} at {}",
                    next.step(),
                    self.state.next_mark(),
                    placed
                );
                let dropped = self.state.last_step() - self.state.step();
                if dropped > 0 {
                    debug!("discarded {} later move(s)", dropped);
                }
                self.state = next;
                match self.state.outcome() {
                    Outcome::Won(mark) => info!("{} wins at move #{}", mark, self.state.step()),
                    Outcome::Draw => info!("draw at move #{}", self.state.step()),
                    Outcome::InProgress { .. } => {}
                }
                true
            }
            None => {
                debug!("ignored click on cell {} at step {}", index, self.state.step());
                false
            }
        }
    }

    pub fn jump_to(&mut self, step: usize) -> bool {
        match self.state.jump_to(step) {
            Some(next) => {
                info!("jump to step {}", step);
                self.state = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use proptest::prelude::*;

    fn play_all(clicks: &[usize]) -> Game {
        let mut game = Game::new();
        for &i in clicks {
            game.handle_click(i);
        }
        game
    }

    #[test]
    fn starts_with_single_empty_snapshot() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert_eq!(*state.current(), Board::new());
        assert!(state.x_is_next());
        assert_eq!(state.outcome().status_line(), "Next player: X");
    }

    #[test]
    fn accepted_move_appends_and_flips_turn() {
        let mut game = Game::new();
        assert!(game.handle_click(4));
        let state = game.state();
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step(), 1);
        assert!(!state.x_is_next());
        assert_eq!(state.current().at(4), Some(Cell::Filled(Mark::X)));
        assert_eq!(state.history()[0].board, Board::new());
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut game = play_all(&[4]);
        let before = game.state().clone();
        assert!(!game.handle_click(4));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn off_board_index_is_ignored() {
        let mut game = Game::new();
        assert!(!game.handle_click(9));
        assert_eq!(*game.state(), GameState::new());
    }

    #[test]
    fn winning_scenario_then_rejects() {
        let mut game = play_all(&[4, 0, 1, 3, 7]);
        let state = game.state().clone();
        assert_eq!(state.step(), 5);
        assert_eq!(state.history()[5].placed, Some(Placement { col: 2, row: 3 }));
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.outcome().status_line(), "Winner: X");
        assert_eq!(state.moves()[5].label, "#5 Col-2 Row-3");

        for i in [2, 5, 6, 8] {
            assert!(!game.handle_click(i));
        }
        assert_eq!(*game.state(), state);
    }

    #[test]
    fn jump_keeps_history_and_recomputes_turn() {
        let mut game = play_all(&[0, 1, 2, 3]);
        let history = game.state().history().to_vec();
        assert!(game.jump_to(1));
        assert_eq!(game.state().step(), 1);
        assert!(!game.state().x_is_next());
        assert_eq!(game.state().history(), &history[..]);
        assert!(game.jump_to(2));
        assert!(game.state().x_is_next());
    }

    #[test]
    fn jump_past_end_is_ignored() {
        let mut game = play_all(&[0, 1]);
        let before = game.state().clone();
        assert!(!game.jump_to(3));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn jump_to_current_step_is_allowed() {
        let mut game = play_all(&[0, 1]);
        assert!(game.jump_to(2));
        assert_eq!(game.state().step(), 2);
    }

    #[test]
    fn playing_after_jump_truncates_future() {
        let mut game = play_all(&[0, 1, 2, 3]);
        assert!(game.jump_to(1));
        assert!(game.handle_click(8));
        let state = game.state();
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.step(), 2);
        assert_eq!(state.current().at(8), Some(Cell::Filled(Mark::O)));
        assert_eq!(state.current().at(1), Some(Cell::Empty));
        assert_eq!(state.history()[2].placed, Some(Placement::from_index(8)));
    }

    #[test]
    fn metadata_stays_aligned_after_branching() {
        let mut game = play_all(&[0, 1, 2, 3, 4]);
        game.jump_to(2);
        game.handle_click(6);
        let labels: Vec<String> = game.state().moves().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "#1 Col-1 Row-1", "#2 Col-2 Row-1", "#3 Col-1 Row-3"]
        );
    }

    #[test]
    fn past_winning_step_is_playable_again() {
        let mut game = play_all(&[4, 0, 1, 3, 7]);
        assert!(game.jump_to(4));
        assert_eq!(game.state().winner(), None);
        assert!(game.handle_click(2));
        assert_eq!(game.state().history().len(), 6);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let game = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.state().winner(), None);
        assert_eq!(game.state().outcome(), Outcome::Draw);
        assert_eq!(game.state().outcome().status_line(), "Draw");
    }

    #[test]
    fn current_entry_is_flagged() {
        let mut game = play_all(&[0, 1, 2]);
        game.jump_to(1);
        let current: Vec<bool> = game.state().moves().iter().map(|m| m.current).collect();
        assert_eq!(current, vec![false, true, false, false]);
    }

    proptest! {
        #[test]
        fn accepted_moves_grow_history(clicks in proptest::collection::vec(0usize..9, 0..20)) {
            let mut game = Game::new();
            let mut accepted = 0;
            for i in clicks {
                let before = game.state().clone();
                if game.handle_click(i) {
                    accepted += 1;
                    prop_assert_eq!(game.state().x_is_next(), !before.x_is_next());
                    let diff = (0..9)
                        .filter(|&c| before.current().at(c) != game.state().current().at(c))
                        .count();
                    prop_assert_eq!(diff, 1);
                } else {
                    prop_assert_eq!(game.state(), &before);
                }
                prop_assert_eq!(game.state().history().len(), accepted + 1);
                prop_assert_eq!(game.state().step(), accepted);
                prop_assert_eq!(game.state().x_is_next(), game.state().step() % 2 == 0);
            }
        }

        #[test]
        fn jump_then_play_truncates(
            clicks in proptest::collection::vec(0usize..9, 1..12),
            target in 0usize..12,
            cell in 0usize..9,
        ) {
            let mut game = play_all(&clicks);
            let k = target.min(game.state().last_step());
            let history = game.state().history().to_vec();
            prop_assert!(game.jump_to(k));
            prop_assert_eq!(game.state().history(), &history[..]);
            prop_assert_eq!(game.state().x_is_next(), k % 2 == 0);
            if game.handle_click(cell) {
                prop_assert_eq!(game.state().history().len(), k + 2);
                prop_assert_eq!(&game.state().history()[..=k], &history[..=k]);
            }
        }
    }
}
