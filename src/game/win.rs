use super::{Board, Player};

/// Number of consecutive pieces that wins the game.
pub const WIN_LENGTH: usize = 4;

/// Check whether `player` has four-in-a-row anywhere on the board.
///
/// Scans every cell and tests the four runs that start there: horizontal
/// (rightward), vertical (downward), diagonal down-right, and diagonal
/// down-left. A run wins if all four positions are in bounds and carry the
/// player's piece. Leftward/upward runs need no separate check since every
/// such run is some other cell's rightward/downward run.
pub fn has_win(board: &Board, player: Player) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if run_is_won(board, player, row, col, 0, 1)
                || run_is_won(board, player, row, col, 1, 0)
                || run_is_won(board, player, row, col, 1, 1)
                || run_is_won(board, player, row, col, 1, -1)
            {
                return true;
            }
        }
    }
    false
}

/// Test one run of WIN_LENGTH cells from (row, col) along (d_row, d_col).
fn run_is_won(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> bool {
    (0..WIN_LENGTH as isize).all(|i| {
        let r = row as isize + d_row * i;
        let c = col as isize + d_col * i;
        r >= 0
            && c >= 0
            && (r as usize) < board.rows()
            && (c as usize) < board.cols()
            && board.get(r as usize, c as usize) == player.to_cell()
    })
}
