// This file declares the plants module and its submodules
//
// Each submodule holds the pattern generators for one family of plants.
// A family is an enum of styles; every style can draw itself from a
// `PlantParams`, and the registry wraps that behind `PlantProvider`.

// Random number generation, seeded per plant
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::block::TextBlock;

mod flower;
mod tree;

pub use flower::{random_flower, FlowerStyle};
pub use tree::{random_tree, TreeStyle};

/// Smallest and largest supported plant size
pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 3;

/// Parameters handed to a plant generator
///
/// **Rust Concept: Typed parameters instead of a string map**
/// Generators can't receive a misspelled key or a size that isn't a number;
/// the compiler checks every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantParams {
    /// Plant size, clamped to `MIN_SIZE..=MAX_SIZE` by the generators
    pub size: usize,

    /// Seed for this plant's random choices
    /// Same seed + same size = same picture
    pub seed: u64,

    /// Allow non-ASCII glyphs such as `✿`
    pub unicode: bool,
}

impl Default for PlantParams {
    fn default() -> Self {
        Self {
            size: MIN_SIZE,
            seed: 0,
            unicode: true,
        }
    }
}

impl PlantParams {
    /// Size clamped to the supported range
    pub fn clamped_size(&self) -> usize {
        self.size.clamp(MIN_SIZE, MAX_SIZE)
    }

    /// A fresh RNG for one plant
    ///
    /// Every generator builds its own, so plants never share random state.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// Anything that can draw a plant
///
/// Implemented for every `Fn(&PlantParams) -> TextBlock`, so both the built-in
/// generators and test closures can be registered.
pub trait PlantProvider {
    fn generate(&self, params: &PlantParams) -> TextBlock;
}

impl<F> PlantProvider for F
where
    F: Fn(&PlantParams) -> TextBlock,
{
    fn generate(&self, params: &PlantParams) -> TextBlock {
        self(params)
    }
}

/// Pick one element of a non-empty constant table
fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// `n` spaces
fn pad(n: usize) -> String {
    " ".repeat(n)
}
