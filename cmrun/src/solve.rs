use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use log::debug;
use thiserror::Error;

use crate::{dims::Dims, gameboard::Maze};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("the exit cannot be reached from the entrance")]
    Unreachable,
}

/// Shortest escape route from the entrance to the exit, by hop count.
///
/// Breadth-first search over the passage graph. Visited flags and
/// predecessor links live in per-call maps, never on the maze itself, so
/// repeated escapes over one maze see no stale search state. Works the same
/// on generated (tree) and reconnected (possibly cyclic) graphs.
pub fn escape(maze: &Maze) -> Result<Vec<Dims>, EscapeError> {
    let board = maze.board();
    let (start, end) = (maze.start(), maze.end());

    let mut visited: HashSet<Dims> = HashSet::new();
    let mut prev: HashMap<Dims, Dims> = HashMap::new();
    let mut queue: VecDeque<Dims> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    'search: while let Some(current) = queue.pop_front() {
        for &next in board.neighbors(current) {
            if visited.insert(next) {
                prev.insert(next, current);
                if next == end {
                    // first discovery in breadth order is already shortest
                    break 'search;
                }
                queue.push_back(next);
            }
        }
    }

    if !visited.contains(&end) {
        return Err(EscapeError::Unreachable);
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(&before) = prev.get(&current) {
        path.push(before);
        current = before;
    }
    path.reverse();

    debug!("escape path of {} cells", path.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::generate,
        gameboard::{reconnect::reconnect, Board},
    };

    #[test]
    fn generated_mazes_always_escape() {
        for seed in 0..6 {
            let maze = generate(9, Some(seed)).unwrap();
            let path = escape(&maze).unwrap();

            assert_eq!(*path.first().unwrap(), maze.start());
            assert_eq!(*path.last().unwrap(), maze.end());
            for pair in path.windows(2) {
                assert!(maze.board().is_connected(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn path_is_shortest_in_a_cyclic_graph() {
        // fully open block: many routes exist, BFS must take the 2-hop row
        let mut board = Board::new(3);
        for y in 0..3 {
            for x in 0..3 {
                board.open(Dims(x, y));
            }
        }
        let maze = reconnect(board).unwrap();

        let path = escape(&maze).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(*path.first().unwrap(), maze.start());
        assert_eq!(*path.last().unwrap(), maze.end());
    }

    #[test]
    fn walled_off_exit_is_unreachable() {
        let mut board = Board::new(3);
        board.open(Dims(0, 0));
        board.open(Dims(1, 0));
        board.open(Dims(2, 2));
        let maze = reconnect(board).unwrap();

        assert_eq!(escape(&maze).unwrap_err(), EscapeError::Unreachable);
    }

    #[test]
    fn single_cell_route() {
        // entrance and exit can coincide on a 1x1 open board after a load
        let mut board = Board::new(1);
        board.open(Dims(0, 0));
        let maze = reconnect(board).unwrap();

        assert_eq!(escape(&maze).unwrap(), vec![Dims(0, 0)]);
    }
}
