use crate::board::Board;
use crate::error::EngineError;
use crate::log;
use crate::search::{LOSS_NEXT_PLY_SCORE, WIN_SCORE, best_move, score_root_move};
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Position};
use crate::win_detector::evaluate;

// The four corners are score-equivalent optimal openings; picking one at
// random keeps the first move from always landing on the same cell.
const OPENING_CORNERS: [Position; 4] = [
    Position { row: 0, col: 0 },
    Position { row: 0, col: 2 },
    Position { row: 2, col: 0 },
    Position { row: 2, col: 2 },
];

/// Selects the engine's move for `mark` at the requested difficulty.
///
/// Fails with `NoAvailableCell` when the board is full or the game is
/// already decided. The returned position always references an empty cell.
pub fn choose_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    if evaluate(board).is_game_over() {
        return Err(EngineError::NoAvailableCell);
    }

    match difficulty {
        Difficulty::Easy => easy_move(board, rng),
        Difficulty::Medium => medium_move(board, mark, rng),
        Difficulty::Hard => hard_move(board, mark, rng),
    }
}

fn easy_move(board: &Board, rng: &mut SessionRng) -> Result<Position, EngineError> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(EngineError::NoAvailableCell);
    }
    Ok(moves[rng.random_range(0..moves.len())])
}

// Careless in neutral positions, optimal exactly when a win is available
// this turn or the opponent threatens to win on the next ply.
fn medium_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Result<Position, EngineError> {
    let mut working = *board;
    let mut best_score = i32::MIN;
    let mut worst_score = i32::MAX;

    for pos in board.available_moves() {
        let score = score_root_move(&mut working, pos, mark);
        best_score = best_score.max(score);
        worst_score = worst_score.min(score);

        if best_score == WIN_SCORE || worst_score == LOSS_NEXT_PLY_SCORE {
            log!(
                "Medium tier escalating to optimal play (best {}, worst {})",
                best_score,
                worst_score
            );
            return hard_move(board, mark, rng);
        }
    }

    easy_move(board, rng)
}

fn hard_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Result<Position, EngineError> {
    if board.mark_count() == 0 && mark == Mark::first_to_move() {
        return Ok(OPENING_CORNERS[rng.random_range(0..OPENING_CORNERS.len())]);
    }

    best_move(board, mark).ok_or(EngineError::NoAvailableCell)
}
