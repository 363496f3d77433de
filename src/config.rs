/// Cells along one side of the board.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells, addressed by flat index `0..NUM_CELLS`.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Every line that wins the game: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; BOARD_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Base score of a won position in the adversarial search.
pub const WIN_SCORE: i32 = 10;
/// Starting bound for the search; lies outside every reachable score.
pub const SCORE_BOUND: i32 = 1000;

/// Convert a flat cell index into `(row, col)`.
pub const fn to_coord(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Convert `(row, col)` into a flat cell index, if it lies on the board.
pub const fn to_index(row: usize, col: usize) -> Option<usize> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some(row * BOARD_SIZE + col)
    } else {
        None
    }
}
