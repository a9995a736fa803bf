mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::calculate_move;
pub use game_state::{MoveRejection, TicTacToeGameState};
pub use types::{GameStatus, GameUpdate, Mark, Turn, WinningLine};
pub use win_detector::{WIN_COMBINATIONS, check_win, check_win_with_line};
