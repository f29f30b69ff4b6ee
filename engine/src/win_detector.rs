use crate::board::Board;
use crate::types::{GameStatus, Mark};

// 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    for line in WIN_LINES {
        let (row, col) = line[0];
        let mark = board.get(row, col);
        if mark == Mark::Empty {
            continue;
        }
        if line.iter().all(|&(r, c)| board.get(r, c) == mark) {
            return Some(mark);
        }
    }
    None
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    check_win(board) == Some(mark)
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ => {
            if board.is_full() {
                GameStatus::Draw
            } else {
                GameStatus::InProgress
            }
        }
    }
}
