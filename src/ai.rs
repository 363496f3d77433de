// Move selection for the computer opponent.
// Uses no_std and avoids heap allocations. Every strategy works on a scratch
// copy of the snapshot; trial marks go through `Trial`, which clears the cell
// again when dropped, so the scratch grid is restored on every exit path.

use core::ops::{Deref, DerefMut};

use rand::Rng;

use crate::{
    board::{empty_cells, has_won, is_full, Cells, GameState},
    common::{Cell, Side},
    config::{NUM_CELLS, SCORE_BOUND, WIN_SCORE},
    difficulty::Difficulty,
};

/// A mark placed on a scratch grid for as long as the guard lives.
struct Trial<'a> {
    cells: &'a mut Cells,
    index: usize,
}

impl<'a> Trial<'a> {
    fn place(cells: &'a mut Cells, index: usize, side: Side) -> Self {
        debug_assert!(cells[index].is_empty());
        cells[index] = Cell::from(side);
        Trial { cells, index }
    }
}

impl Deref for Trial<'_> {
    type Target = Cells;

    fn deref(&self) -> &Cells {
        self.cells
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Cells {
        self.cells
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.cells[self.index] = Cell::Empty;
    }
}

/// Pick the Opponent's next cell for `state` at the given difficulty.
///
/// Returns `None` when the game is over or no empty cell is left. The
/// snapshot itself is never modified.
pub fn select_move<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    if state.terminal {
        return None;
    }
    let choice = match difficulty {
        Difficulty::Easy => random_move(&state.cells, rng),
        Difficulty::Medium => heuristic_move(&state.cells, rng),
        Difficulty::Hard => best_move(&state.cells),
    };
    log::debug!("opponent ({}) selected {:?}", difficulty, choice);
    choice
}

/// Uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(cells: &Cells, rng: &mut R) -> Option<usize> {
    let mut moves = [0usize; NUM_CELLS];
    let mut count = 0;
    for idx in empty_cells(cells) {
        moves[count] = idx;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(moves[rng.random_range(0..count)])
}

/// First empty cell (scanning `0..9`) that completes a line for `side`.
pub fn immediate_win(cells: &Cells, side: Side) -> Option<usize> {
    let mut scratch = *cells;
    (0..NUM_CELLS).find(|&idx| {
        if !scratch[idx].is_empty() {
            return false;
        }
        let trial = Trial::place(&mut scratch, idx, side);
        has_won(&trial, side)
    })
}

/// One-ply heuristic: own win first, then block the Player, then random.
pub fn heuristic_move<R: Rng + ?Sized>(cells: &Cells, rng: &mut R) -> Option<usize> {
    immediate_win(cells, Side::Opponent)
        .or_else(|| immediate_win(cells, Side::Player))
        .or_else(|| random_move(cells, rng))
}

/// Minimax score of every empty cell as the Opponent's next move.
/// Occupied cells map to `None`.
pub fn move_scores(cells: &Cells) -> [Option<i32>; NUM_CELLS] {
    let mut scratch = *cells;
    let mut scores = [None; NUM_CELLS];
    for (idx, score) in scores.iter_mut().enumerate() {
        if !scratch[idx].is_empty() {
            continue;
        }
        let mut trial = Trial::place(&mut scratch, idx, Side::Opponent);
        *score = Some(minimax(&mut trial, 0, false));
    }
    scores
}

/// Highest scoring cell for the Opponent; ties keep the lowest index.
pub fn best_move(cells: &Cells) -> Option<usize> {
    let mut best_score = -SCORE_BOUND;
    let mut best = None;
    for (idx, score) in move_scores(cells).into_iter().enumerate() {
        if let Some(score) = score {
            if score > best_score {
                best_score = score;
                best = Some(idx);
            }
        }
    }
    best
}

/// Full-depth minimax. The Opponent maximises, the Player minimises.
///
/// `depth` counts plies since the real position; it only ranks faster wins
/// above slower ones.
pub fn minimax(cells: &mut Cells, depth: i32, maximizing: bool) -> i32 {
    if has_won(cells, Side::Opponent) {
        return WIN_SCORE - depth;
    }
    if has_won(cells, Side::Player) {
        return -WIN_SCORE + depth;
    }
    if is_full(cells) {
        return 0;
    }

    let side = if maximizing { Side::Opponent } else { Side::Player };
    let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
    for idx in 0..NUM_CELLS {
        if !cells[idx].is_empty() {
            continue;
        }
        let mut trial = Trial::place(cells, idx, side);
        let score = minimax(&mut trial, depth + 1, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
