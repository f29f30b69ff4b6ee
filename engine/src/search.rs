use crate::board::{BOARD_SIZE, Board};
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector::evaluate;

/// Score of a win delivered by the root placement itself (depth 0).
pub(crate) const WIN_SCORE: i32 = 10;

/// Sentinel for a loss the opponent can deliver on the very next ply. Scored
/// below every ordinary loss so the medium policy can tell the two apart.
pub(crate) const LOSS_NEXT_PLY_SCORE: i32 = -20;

/// Exhaustive minimax search for the strongest placement of `mark`.
///
/// Tries every available cell in row-major order, scores the position below
/// it and keeps the strict maximum, so ties go to the first cell encountered.
/// Returns `None` if the board has no available cell. The caller's board is
/// never touched; exploration runs on a private working copy.
pub fn best_move(board: &Board, mark: Mark) -> Option<Position> {
    let mut working = *board;
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in board.available_moves() {
        let score = score_root_move(&mut working, pos, mark);
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}

/// Places `mark` at `pos`, runs the minimizing recursion below it and undoes
/// the placement before returning.
pub(crate) fn score_root_move(board: &mut Board, pos: Position, mark: Mark) -> i32 {
    board.place(pos.row, pos.col, mark);
    let score = minimax(board, 0, i32::MIN, i32::MAX, false, mark);
    board.place(pos.row, pos.col, Mark::Empty);
    score
}

// `depth` counts plies placed below the root placement; the root placement
// itself is evaluated at depth 0, the opponent's first reply at depth 1.
// A faster win outscores a slower one, a delayed loss outscores an immediate
// one, and a loss deliverable at depth 1 collapses to the sentinel.
fn terminal_score(status: GameStatus, depth: i32, mark: Mark) -> i32 {
    match status.winner() {
        Some(winner) if winner == mark => WIN_SCORE - depth,
        Some(_) if depth == 1 => LOSS_NEXT_PLY_SCORE,
        Some(_) => depth - WIN_SCORE,
        None => 0,
    }
}

fn minimax(
    board: &mut Board,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    is_maximizing: bool,
    mark: Mark,
) -> i32 {
    let status = evaluate(board);
    if status.is_game_over() {
        return terminal_score(status, depth, mark);
    }

    let depth = depth + 1;

    if is_maximizing {
        let mut max_score = i32::MIN;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !board.is_available(row, col) {
                    continue;
                }

                board.place(row, col, mark);
                let score = minimax(board, depth, alpha, beta, false, mark);
                board.place(row, col, Mark::Empty);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    return max_score;
                }
            }
        }
        max_score
    } else {
        let opponent = mark.opponent().unwrap();
        let mut min_score = i32::MAX;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !board.is_available(row, col) {
                    continue;
                }

                board.place(row, col, opponent);
                let score = minimax(board, depth, alpha, beta, true, mark);
                board.place(row, col, Mark::Empty);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    return min_score;
                }
            }
        }
        min_score
    }
}
