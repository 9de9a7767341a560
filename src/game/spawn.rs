use crate::game::board::Board;
use crate::game::get_empty_cells::empty_cells;
use crate::{Result, Twenty48Error};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Randomness used when spawning a tile.
///
/// Production code wraps a `rand` generator in [`RandomSource`]; tests can
/// implement this with fixed answers.
pub trait SpawnSource {
    /// An index in `0..candidates`. `candidates` is never zero.
    fn pick_cell(&mut self, candidates: usize) -> usize;

    /// A uniform sample in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

/// [`SpawnSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from `seed` if given, otherwise from the OS.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self {
                rng: StdRng::from_os_rng(),
            },
        }
    }
}

impl RandomSource<ThreadRng> {
    /// Source using the thread-local generator.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> SpawnSource for RandomSource<R> {
    fn pick_cell(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }

    fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Probability that a spawned tile is a 2 rather than a 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOdds {
    two_probability: f64,
}

impl SpawnOdds {
    pub const DEFAULT_TWO_PROBABILITY: f64 = 0.8;

    pub fn new(two_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&two_probability) {
            return Err(Twenty48Error::Config(format!(
                "spawn probability must be within [0, 1], got {}",
                two_probability
            )));
        }
        Ok(Self { two_probability })
    }

    pub fn two_probability(&self) -> f64 {
        self.two_probability
    }

    /// Tile value for a roll in `[0, 1)`.
    pub fn value_for(&self, roll: f64) -> u32 {
        if roll < self.two_probability {
            2
        } else {
            4
        }
    }
}

impl Default for SpawnOdds {
    fn default() -> Self {
        Self {
            two_probability: Self::DEFAULT_TWO_PROBABILITY,
        }
    }
}

/// Put a 2 or a 4 on a uniformly chosen empty cell.
///
/// A full board is returned unchanged.
pub fn spawn_tile<S: SpawnSource + ?Sized>(
    board: &Board,
    odds: SpawnOdds,
    source: &mut S,
) -> Board {
    let empty = empty_cells(board);
    if empty.is_empty() {
        log::debug!("No empty cell, skipping spawn");
        return *board;
    }

    let (row, col) = empty[source.pick_cell(empty.len())];
    let value = odds.value_for(source.roll());
    log::trace!("🎲 Spawned {} at ({}, {})", value, row, col);

    board.with_cell(row, col, Some(value))
}
