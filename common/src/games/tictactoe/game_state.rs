use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, Turn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    NotYourTurn,
    InvalidCell,
    OccupiedCell,
}

impl From<MoveRejection> for GameStatus {
    fn from(rejection: MoveRejection) -> Self {
        match rejection {
            MoveRejection::NotYourTurn => GameStatus::RejectedNotYourTurn,
            MoveRejection::InvalidCell => GameStatus::RejectedInvalidCell,
            MoveRejection::OccupiedCell => GameStatus::RejectedOccupiedCell,
        }
    }
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub player_mark: Mark,
    pub opponent_mark: Mark,
    pub next_turn: Turn,
}

impl TicTacToeGameState {
    pub fn new(player_mark: Mark) -> Self {
        let opponent_mark = player_mark
            .opponent()
            .expect("a game is created with X or O, never Empty");

        // X always makes the first move
        let next_turn = if player_mark == Mark::X {
            Turn::Player
        } else {
            Turn::Opponent
        };

        Self {
            board: Board::new(),
            player_mark,
            opponent_mark,
            next_turn,
        }
    }

    pub fn place_player_mark(&mut self, cell: usize) -> Result<(), MoveRejection> {
        if self.next_turn != Turn::Player {
            return Err(MoveRejection::NotYourTurn);
        }

        if cell >= CELL_COUNT {
            return Err(MoveRejection::InvalidCell);
        }

        if self.board.mark_at(cell) != Mark::Empty {
            return Err(MoveRejection::OccupiedCell);
        }

        self.board.set_mark(cell, self.player_mark);
        self.next_turn = Turn::Opponent;
        Ok(())
    }

    pub fn place_opponent_mark(&mut self, cell: usize) {
        debug_assert_eq!(self.board.mark_at(cell), Mark::Empty);

        self.board.set_mark(cell, self.opponent_mark);
        self.next_turn = Turn::Player;
    }
}
