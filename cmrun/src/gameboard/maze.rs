use hashbrown::HashSet;

use super::Board;
use crate::dims::Dims;

const WALL_GLYPH: &str = "██";
const OPEN_GLYPH: &str = "  ";
const PATH_GLYPH: &str = "//";

/// A playable maze: the board plus its entrance and exit.
///
/// `start` always sits on column 0 and `end` on column size−1; both are open.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) board: Board,
    pub(crate) start: Dims,
    pub(crate) end: Dims,
}

impl Maze {
    pub(crate) fn new(board: Board, start: Dims, end: Dims) -> Self {
        Maze { board, start, end }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn size(&self) -> i32 {
        self.board.size()
    }

    /// Text picture of the maze, two glyph columns per cell, one line per
    /// row. Cells on `path` are marked with the trail glyph. Pure; the maze
    /// is not touched.
    pub fn render(&self, path: Option<&[Dims]>) -> String {
        let on_path: HashSet<Dims> = path.unwrap_or(&[]).iter().copied().collect();

        let size = self.size();
        let mut out = String::with_capacity((size as usize * 2 + 1) * size as usize);
        for y in 0..size {
            for x in 0..size {
                let pos = Dims(x, y);
                out.push_str(if !self.board.is_open(pos) {
                    WALL_GLYPH
                } else if on_path.contains(&pos) {
                    PATH_GLYPH
                } else {
                    OPEN_GLYPH
                });
            }
            out.push('\n');
        }
        out
    }
}
