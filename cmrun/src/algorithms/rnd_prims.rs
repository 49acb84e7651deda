use log::debug;
use rand::{seq::SliceRandom as _, Rng as _};

use super::{GenerationError, MazeAlgorithm, Random, MIN_SIZE};
use crate::{
    dims::Dims,
    gameboard::{Board, Maze},
};

/// Randomized Prim's-style frontier growth on a doubled lattice: passage
/// cells sit two steps apart, the cell between them becomes the connecting
/// corridor once its candidate is drawn from the frontier.
pub struct RndPrims;

impl MazeAlgorithm for RndPrims {
    fn generate(size: i32, rng: &mut Random) -> Result<Maze, GenerationError> {
        if size < MIN_SIZE {
            return Err(GenerationError::InvalidSize(size));
        }

        let mut board = Board::new(size);

        let start = Dims(0, rng.gen_range(1..size - 1));
        board.open(start);

        let mut frontier = discover_frontier(&mut board, start);
        while !frontier.is_empty() {
            let (candidate, between) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            board.open(candidate);
            board.open(between);
            frontier.extend(discover_frontier(&mut board, candidate));
        }

        let end = place_exit(&mut board, rng)?;

        debug!(
            "generated {0}x{0} maze, {1} passages",
            size,
            board.open_count()
        );
        Ok(Maze::new(board, start, end))
    }
}

/// Collects the distance-2 candidates of a freshly opened cell and commits
/// their tree edges. Edges are recorded here, at discovery time, not when the
/// candidate is opened: a cell that already carries an edge was discovered by
/// an earlier step and is filtered out, which is what keeps every interior
/// cell at exactly one inbound edge and the grown graph a tree.
fn discover_frontier(board: &mut Board, from: Dims) -> Vec<(Dims, Dims)> {
    let pairs = [
        (from + Dims(2, 0), from + Dims(1, 0)),
        (from - Dims(2, 0), from - Dims(1, 0)),
        (from + Dims(0, 2), from + Dims(0, 1)),
        (from - Dims(0, 2), from - Dims(0, 1)),
    ];

    let interior = 1..board.size() - 1;
    let mut discovered = Vec::with_capacity(4);
    for (candidate, between) in pairs {
        if !interior.contains(&candidate.0) || !interior.contains(&candidate.1) {
            continue;
        }
        if board.is_open(candidate) || board.has_edges(candidate) {
            continue;
        }
        board.connect(between, candidate);
        board.connect(from, between);
        discovered.push((candidate, between));
    }
    discovered
}

/// Opens the exit corridor on a uniformly chosen row whose interior cell at
/// column size−3 is open, and links it into the graph.
fn place_exit(board: &mut Board, rng: &mut Random) -> Result<Dims, GenerationError> {
    let size = board.size();
    let rows: Vec<i32> = (0..size)
        .filter(|&y| board.is_open(Dims(size - 3, y)))
        .collect();
    let &y = rows.choose(rng).ok_or(GenerationError::NoExitRow)?;

    board.open(Dims(size - 2, y));
    board.open(Dims(size - 1, y));
    board.connect(Dims(size - 1, y), Dims(size - 2, y));
    board.connect(Dims(size - 3, y), Dims(size - 2, y));

    Ok(Dims(size - 1, y))
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::algorithms::generate;

    /// Open cells reachable from `from` over the passage graph.
    fn reachable(board: &Board, from: Dims) -> HashSet<Dims> {
        let mut seen: HashSet<Dims> = [from].into_iter().collect();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            for &next in board.neighbors(current) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    #[test]
    fn sizes_below_minimum_are_rejected() {
        for size in [0, 1, 4] {
            assert_eq!(
                generate(size, Some(1)).unwrap_err(),
                GenerationError::InvalidSize(size)
            );
        }
    }

    #[test]
    fn open_cells_form_a_spanning_tree() {
        for size in [5, 6, 7, 11, 20] {
            for seed in 0..4 {
                let maze = generate(size, Some(seed)).unwrap();
                let board = maze.board();

                // tree: connected and exactly one fewer edge than vertices
                assert_eq!(
                    board.edge_count(),
                    board.open_count() - 1,
                    "size {size} seed {seed}"
                );
                assert_eq!(
                    reachable(board, maze.start()).len(),
                    board.open_count(),
                    "size {size} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn edges_connect_only_open_cells() {
        let maze = generate(9, Some(11)).unwrap();
        let board = maze.board();
        for y in 0..9 {
            for x in 0..9 {
                let pos = Dims(x, y);
                for &neighbor in board.neighbors(pos) {
                    assert!(board.is_open(pos) && board.is_open(neighbor));
                    assert_eq!((pos - neighbor).0.abs() + (pos - neighbor).1.abs(), 1);
                }
            }
        }
    }

    #[test]
    fn entrance_and_exit_sit_on_the_outer_columns() {
        for seed in 0..8 {
            let maze = generate(7, Some(seed)).unwrap();
            assert_eq!(maze.start().0, 0);
            assert_eq!(maze.end().0, 6);
            assert!(maze.board().is_open(maze.start()));
            assert!(maze.board().is_open(maze.end()));
            // the exit corridor is linked into the interior
            assert!(maze
                .board()
                .is_connected(maze.end(), maze.end() - Dims(1, 0)));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let first = generate(13, Some(99)).unwrap();
        let second = generate(13, Some(99)).unwrap();

        assert_eq!(first.start(), second.start());
        assert_eq!(first.end(), second.end());
        assert_eq!(first.render(None), second.render(None));
    }
}
