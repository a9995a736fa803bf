use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    PlayerStarts,
    OpponentStartedFirst,
    InProgress,
    PlayerWins,
    OpponentWins,
    Draw,
    RejectedNoSession,
    RejectedNotYourTurn,
    RejectedInvalidCell,
    RejectedOccupiedCell,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWins | GameStatus::OpponentWins | GameStatus::Draw
        )
    }

    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameStatus::RejectedNoSession
                | GameStatus::RejectedNotYourTurn
                | GameStatus::RejectedInvalidCell
                | GameStatus::RejectedOccupiedCell
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUpdate {
    pub board: Option<Board>,
    pub next_turn: Option<Turn>,
    pub status: GameStatus,
    pub session_active: bool,
    pub winning_line: Option<WinningLine>,
}
