use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::DareError;

/// Wishes the winner can draw from the box.
pub const DEFAULT_WISHES: [&str; 10] = [
    "Everyone has to say something nice about the person who made the wish.",
    "The team has to make up a song about that player and sing one line.",
    "Everyone has to repeat a funny phrase that you came up with.",
    "One of the players has to tell a short joke especially for you.",
    "Everyone has to make the weirdest face at the same time.",
    "One player has to compliment you as if it were a formal speech.",
    "Everyone has to call you the new “Bull” for the next round.",
    "The team has to come up with a new name or nickname for you.",
    "Everyone has to tell you why they would invite you to their team.",
    "One of the players has to read something like a show host in your honor.",
];

/// Source of uniform random indices.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is never zero. Callers reduce
    /// out-of-range values modulo `bound`.
    fn next_int(&mut self, bound: usize) -> usize;
}

/// `RandomSource` backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Reproducible sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Draw one entry uniformly from `catalog`.
pub fn pick_wish<'a, S>(catalog: &'a [S], rng: &mut dyn RandomSource) -> Result<&'a S, DareError> {
    if catalog.is_empty() {
        return Err(DareError::InvalidCatalog);
    }
    Ok(&catalog[draw_index(rng, catalog.len())])
}

/// Index in `[0, len)`; `len` must be non-zero.
fn draw_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    rng.next_int(len) % len
}

/// A fixed, non-empty list of wishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishCatalog {
    wishes: Vec<String>,
}

impl WishCatalog {
    /// Blank entries are dropped; nothing left is `InvalidCatalog`.
    pub fn new(wishes: Vec<String>) -> Result<Self, DareError> {
        let wishes: Vec<String> = wishes
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .collect();
        if wishes.is_empty() {
            return Err(DareError::InvalidCatalog);
        }
        Ok(Self { wishes })
    }

    pub fn entries(&self) -> &[String] {
        &self.wishes
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    /// Draw a wish. Repeats across calls are allowed.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> WishSelection {
        let index = draw_index(rng, self.wishes.len());
        tracing::debug!(index, "wish drawn");
        WishSelection {
            index,
            text: self.wishes[index].clone(),
        }
    }
}

impl Default for WishCatalog {
    fn default() -> Self {
        Self {
            wishes: DEFAULT_WISHES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// The wish currently shown in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishSelection {
    pub index: usize,
    pub text: String,
}
