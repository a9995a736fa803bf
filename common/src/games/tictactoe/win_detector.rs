use super::board::Board;
use super::types::{Mark, WinningLine};

pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    check_win_with_line(board, mark).is_some()
}

pub fn check_win_with_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_COMBINATIONS
        .iter()
        .find(|combination| combination.iter().all(|&cell| board.mark_at(cell) == mark))
        .map(|&cells| WinningLine::new(mark, cells))
}
