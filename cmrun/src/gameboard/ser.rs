use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use super::{Board, Maze};
use crate::dims::Dims;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write the maze file: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("first line {0:?} is not a valid maze size")]
    BadSize(String),
    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {col}: {token:?} is not a wall flag")]
    BadToken {
        row: usize,
        col: usize,
        token: String,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the file {0:?} does not exist")]
    NotFound(PathBuf),
    #[error("failed to read the maze file: {0}")]
    Io(#[from] io::Error),
    #[error("cannot load the maze, it has an invalid format: {0}")]
    Format(#[from] FormatError),
}

/// Writes the wall pattern of `maze` as text: the size on the first line,
/// then one line of `true`/`false` tokens per row. Adjacency, entrance and
/// exit are not persisted; [`reconnect`](super::reconnect::reconnect)
/// rebuilds them after a load.
pub fn save(maze: &Maze, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let board = maze.board();
    let size = board.size();

    let mut out = String::new();
    out.push_str(&size.to_string());
    out.push('\n');
    for y in 0..size {
        for x in 0..size {
            if x > 0 {
                out.push(' ');
            }
            out.push_str(if board.is_open(Dims(x, y)) {
                "false"
            } else {
                "true"
            });
        }
        out.push('\n');
    }

    fs::write(path.as_ref(), out)?;
    debug!("saved {0}x{0} maze to {1:?}", size, path.as_ref());
    Ok(())
}

/// Reads a wall pattern written by [`save`]. The returned board has an empty
/// passage graph; callers must reconnect it before solving.
pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_owned()));
    }

    let text = fs::read_to_string(path)?;
    let board = parse(&text)?;
    debug!("loaded {0}x{0} maze from {1:?}", board.size(), path);
    Ok(board)
}

fn parse(text: &str) -> Result<Board, FormatError> {
    let mut lines = text.lines();

    let size_line = lines.next().unwrap_or_default().trim();
    let size = size_line
        .parse::<i32>()
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| FormatError::BadSize(size_line.to_string()))?;

    let mut board = Board::new(size);
    let mut rows = 0;
    for (y, line) in lines.take(size as usize).enumerate() {
        let mut cols = 0;
        // rows may carry trailing tokens; everything past `size` is ignored
        for (x, token) in line.split_whitespace().take(size as usize).enumerate() {
            match token.parse::<bool>() {
                Ok(true) => {}
                Ok(false) => board.open(Dims(x as i32, y as i32)),
                Err(_) => {
                    return Err(FormatError::BadToken {
                        row: y,
                        col: x,
                        token: token.to_string(),
                    })
                }
            }
            cols += 1;
        }
        if cols < size as usize {
            return Err(FormatError::ShortRow {
                row: y,
                expected: size as usize,
                found: cols,
            });
        }
        rows += 1;
    }
    if rows < size as usize {
        return Err(FormatError::MissingRows {
            expected: size as usize,
            found: rows,
        });
    }

    Ok(board)
}
