pub mod board;
pub mod cell;
pub mod maze;
pub mod reconnect;
pub mod ser;

pub use board::Board;
pub use cell::{Cell, Way};
pub use maze::Maze;
