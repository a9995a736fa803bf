use crate::games::RandomSource;

use super::board::Board;

pub fn calculate_move(board: &Board, rng: &mut impl RandomSource) -> Option<usize> {
    let available = board.available_cells();
    if available.is_empty() {
        return None;
    }
    Some(available[rng.pick_index(available.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::{CELL_COUNT, Mark};

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([Mark::X; CELL_COUNT]);
        let mut rng = SessionRng::from_random();
        assert_eq!(calculate_move(&board, &mut rng), None);
    }

    #[test]
    fn test_move_always_lands_on_an_empty_cell() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X);
        board.set_mark(4, Mark::O);
        board.set_mark(7, Mark::X);

        for seed in 0..100 {
            let mut rng = SessionRng::new(seed);
            let cell = calculate_move(&board, &mut rng).unwrap();
            assert_eq!(board.mark_at(cell), Mark::Empty);
        }
    }

    #[test]
    fn test_single_remaining_cell_is_forced() {
        let mut board = Board::from_cells([Mark::O; CELL_COUNT]);
        board.set_mark(6, Mark::Empty);

        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(&board, &mut rng), Some(6));
        }
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let mut board = Board::new();
        board.set_mark(4, Mark::X);

        let mut seen = [false; CELL_COUNT];
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            seen[calculate_move(&board, &mut rng).unwrap()] = true;
        }

        for cell in board.available_cells() {
            assert!(seen[cell], "cell {} was never chosen", cell);
        }
        assert!(!seen[4]);
    }
}
