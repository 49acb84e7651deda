use hashbrown::HashSet;
use log::debug;
use thiserror::Error;

use super::{cell::Way, Board, Maze};
use crate::dims::Dims;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconnectError {
    #[error("no open cell in the entrance column")]
    NoEntrance,
    #[error("no open cell in the exit column")]
    NoExit,
}

/// Rebuilds the passage graph of a freshly loaded board.
///
/// Only wall state survives serialization, so every pair of mutually open
/// 4-neighbors reachable from the entrance is reconnected here. Unlike a
/// freshly generated maze, the resulting graph may contain cycles whenever
/// the wall pattern admits more than one route between two passages.
///
/// The entrance is the first row (top to bottom) open on column 0, the exit
/// the first row open on the last column. The walk is an explicit stack with
/// a visited set, in the fixed [`Way`] order, so a given wall pattern always
/// reconnects to the same adjacency set.
pub fn reconnect(mut board: Board) -> Result<Maze, ReconnectError> {
    let size = board.size();
    let start = first_open_in_column(&board, 0).ok_or(ReconnectError::NoEntrance)?;
    let end = first_open_in_column(&board, size - 1).ok_or(ReconnectError::NoExit)?;

    let mut visited: HashSet<Dims> = HashSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        for way in Way::get_in_order() {
            let next = current + way.offset();
            if !board.is_open(next) {
                continue;
            }
            board.connect(current, next);
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    debug!(
        "reconnected {0}x{0} maze, {1} edges",
        size,
        board.edge_count()
    );
    Ok(Maze::new(board, start, end))
}

fn first_open_in_column(board: &Board, x: i32) -> Option<Dims> {
    (0..board.size()).map(|y| Dims(x, y)).find(|&pos| board.is_open(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency_set(board: &Board) -> Vec<(Dims, Vec<Dims>)> {
        let size = board.size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| Dims(x, y)))
            .map(|pos| {
                let mut neighbors = board.neighbors(pos).to_vec();
                neighbors.sort_by_key(|n| (n.1, n.0));
                (pos, neighbors)
            })
            .collect()
    }

    fn open_row(board: &mut Board, y: i32) {
        for x in 0..board.size() {
            board.open(Dims(x, y));
        }
    }

    #[test]
    fn corridor_reconnects_end_to_end() {
        let mut board = Board::new(3);
        open_row(&mut board, 1);

        let maze = reconnect(board).unwrap();
        assert_eq!(maze.start(), Dims(0, 1));
        assert_eq!(maze.end(), Dims(2, 1));
        assert!(maze.board().is_connected(Dims(0, 1), Dims(1, 1)));
        assert!(maze.board().is_connected(Dims(1, 1), Dims(2, 1)));
        assert_eq!(maze.board().edge_count(), 2);
    }

    #[test]
    fn all_open_pattern_reconnects_with_cycles() {
        let mut board = Board::new(3);
        for y in 0..3 {
            open_row(&mut board, y);
        }

        let maze = reconnect(board).unwrap();
        let board = maze.board();
        // 3x3 fully open: 12 geometric neighbor pairs, well past the 8 edges
        // a spanning tree would have
        assert_eq!(board.edge_count(), 12);
        assert!(board.edge_count() > board.open_count() - 1);
    }

    #[test]
    fn reconnection_is_deterministic() {
        let mut board = Board::new(4);
        open_row(&mut board, 1);
        open_row(&mut board, 2);
        board.open(Dims(0, 0));

        let first = reconnect(board.clone()).unwrap();
        let second = reconnect(board).unwrap();
        assert_eq!(adjacency_set(first.board()), adjacency_set(second.board()));
    }

    #[test]
    fn walled_entrance_column_is_rejected() {
        let mut board = Board::new(3);
        board.open(Dims(1, 1));
        board.open(Dims(2, 1));
        assert_eq!(reconnect(board).unwrap_err(), ReconnectError::NoEntrance);
    }

    #[test]
    fn walled_exit_column_is_rejected() {
        let mut board = Board::new(3);
        board.open(Dims(0, 1));
        board.open(Dims(1, 1));
        assert_eq!(reconnect(board).unwrap_err(), ReconnectError::NoExit);
    }

    #[test]
    fn disconnected_open_cells_stay_out_of_the_graph() {
        let mut board = Board::new(3);
        board.open(Dims(0, 0));
        board.open(Dims(2, 2));

        let maze = reconnect(board).unwrap();
        assert!(maze.board().neighbors(Dims(2, 2)).is_empty());
    }
}
