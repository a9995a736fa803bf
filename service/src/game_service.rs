use std::collections::HashMap;
use std::sync::Mutex;

use xox_common::games::tictactoe::{
    GameStatus, GameUpdate, Mark, TicTacToeGameState, Turn, WinningLine, calculate_move,
    check_win_with_line,
};
use xox_common::games::{RandomSource, SessionRng};
use xox_common::{PlayerId, log, logger};

use crate::service_config::ServiceConfig;

pub struct GameService<R: RandomSource = SessionRng> {
    inner: Mutex<ServiceInner<R>>,
}

struct ServiceInner<R> {
    sessions: HashMap<PlayerId, TicTacToeGameState>,
    rng: R,
}

impl GameService<SessionRng> {
    pub fn new() -> Self {
        Self::with_rng(SessionRng::from_random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SessionRng::new(seed))
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        if config.log_prefix.is_some() {
            logger::init_logger(config.log_prefix.clone());
        }
        match config.rng_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for GameService<SessionRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> GameService<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            inner: Mutex::new(ServiceInner {
                sessions: HashMap::new(),
                rng,
            }),
        }
    }

    pub fn start_game(&self, player_id: PlayerId) -> GameUpdate {
        let mut inner = self.inner.lock().unwrap();
        let ServiceInner { sessions, rng } = &mut *inner;

        let player_mark = if rng.pick_bool() { Mark::X } else { Mark::O };
        let mut state = TicTacToeGameState::new(player_mark);

        let status = match state.next_turn {
            Turn::Player => GameStatus::PlayerStarts,
            Turn::Opponent => {
                let cell = calculate_move(&state.board, rng)
                    .expect("a fresh board always has available cells");
                state.place_opponent_mark(cell);
                GameStatus::OpponentStartedFirst
            }
        };

        let board = state.board;
        if sessions.insert(player_id, state).is_some() {
            log!("Player {} restarted their game as {}", player_id, player_mark);
        } else {
            log!("Player {} started a game as {}", player_id, player_mark);
        }

        GameUpdate {
            board: Some(board),
            next_turn: Some(Turn::Player),
            status,
            session_active: true,
            winning_line: None,
        }
    }

    pub fn apply_move(&self, player_id: PlayerId, cell: usize) -> GameUpdate {
        let mut inner = self.inner.lock().unwrap();
        let ServiceInner { sessions, rng } = &mut *inner;

        let Some(state) = sessions.get_mut(&player_id) else {
            return GameUpdate {
                board: None,
                next_turn: None,
                status: GameStatus::RejectedNoSession,
                session_active: false,
                winning_line: None,
            };
        };

        if let Err(rejection) = state.place_player_mark(cell) {
            return GameUpdate {
                board: Some(state.board),
                next_turn: Some(state.next_turn),
                status: rejection.into(),
                session_active: true,
                winning_line: None,
            };
        }

        // win before fullness, on every placement
        if let Some(line) = check_win_with_line(&state.board, state.player_mark) {
            return finish_game(sessions, player_id, GameStatus::PlayerWins, Some(line));
        }
        if state.board.is_full() {
            return finish_game(sessions, player_id, GameStatus::Draw, None);
        }

        let opponent_cell =
            calculate_move(&state.board, rng).expect("the draw check guarantees an empty cell");
        state.place_opponent_mark(opponent_cell);

        if let Some(line) = check_win_with_line(&state.board, state.opponent_mark) {
            return finish_game(sessions, player_id, GameStatus::OpponentWins, Some(line));
        }
        if state.board.is_full() {
            return finish_game(sessions, player_id, GameStatus::Draw, None);
        }

        GameUpdate {
            board: Some(state.board),
            next_turn: Some(Turn::Player),
            status: GameStatus::InProgress,
            session_active: true,
            winning_line: None,
        }
    }

    pub fn has_session(&self, player_id: PlayerId) -> bool {
        self.inner.lock().unwrap().sessions.contains_key(&player_id)
    }

    pub fn session_count(&self) -> usize {
        self.inner.lock().unwrap().sessions.len()
    }
}

fn finish_game(
    sessions: &mut HashMap<PlayerId, TicTacToeGameState>,
    player_id: PlayerId,
    status: GameStatus,
    winning_line: Option<WinningLine>,
) -> GameUpdate {
    let state = sessions
        .remove(&player_id)
        .expect("a finished session is still in the store");
    log!("Game over for player {}: {:?}", player_id, status);

    GameUpdate {
        board: Some(state.board),
        next_turn: None,
        status,
        session_active: false,
        winning_line,
    }
}
