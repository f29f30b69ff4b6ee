pub mod board;
pub mod bot_controller;
pub mod error;
pub mod logger;
pub mod search;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::choose_move;
pub use error::EngineError;
pub use search::best_move;
pub use session_rng::SessionRng;
pub use settings::EngineSettings;
pub use types::{Difficulty, GameStatus, Mark, Position};
pub use win_detector::{check_win, evaluate, has_won};
