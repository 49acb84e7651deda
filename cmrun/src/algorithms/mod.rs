pub mod rnd_prims;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::gameboard::Maze;

pub use rnd_prims::RndPrims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Smallest size whose exit column can always be reached from the interior.
/// Below it, column size−3 may not exist at all and exit placement would
/// have to guess.
pub const MIN_SIZE: i32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size {0}, the minimum is {MIN_SIZE}")]
    InvalidSize(i32),
    #[error("no row reaches the exit column")]
    NoExitRow,
}

pub trait MazeAlgorithm {
    fn generate(size: i32, rng: &mut Random) -> Result<Maze, GenerationError>;
}

/// Generates a maze with the default algorithm, seeded from `seed` when one
/// is given and from entropy otherwise.
pub fn generate(size: i32, seed: Option<u64>) -> Result<Maze, GenerationError> {
    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    RndPrims::generate(size, &mut rng)
}
