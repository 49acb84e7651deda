pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod solve;

pub use dims::Dims;
pub use gameboard::{Board, Maze};
