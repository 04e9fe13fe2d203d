use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PieceKind;

/// Generates pieces with the 7-bag system.
///
/// A bag holds one of each of the seven kinds. Draws pop from the end of the
/// bag; when it runs dry the bag is refilled with all seven kinds in catalog
/// order and shuffled (Fisher-Yates via [`SliceRandom::shuffle`]). Every
/// aligned run of seven draws is therefore a permutation of all kinds: no
/// kind can repeat until the whole bag has been drawn.
#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: Pcg32,
    bag: ArrayVec<PieceKind, { PieceKind::LEN }>,
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed for the bag's random number generator. Two bags built from
/// the same seed draw the same piece sequence, which is what the tests and
/// the CLI's `--seed` flag rely on.
///
/// Serializes as a 32-character hex string; [`FromStr`] accepts the same
/// format so the seed can be passed on a command line.
#[derive(Debug, Clone, Copy)]
pub struct PieceSeed([u8; 16]);

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid hex seed: {hex_str:?}")))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

impl PieceBag {
    /// Creates a new piece bag with a random seed.
    ///
    /// For deterministic piece generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            bag: ArrayVec::new(),
        }
    }

    fn refill(&mut self) {
        let mut kinds = PieceKind::ALL;
        kinds.shuffle(&mut self.rng);
        self.bag.extend(kinds);
    }

    /// Draws the next piece, refilling the bag when it is empty.
    ///
    /// # Panics
    ///
    /// Panics if the bag is empty after a refill (cannot happen).
    pub fn pop_next(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        self.bag.pop().expect("refilled bag is never empty")
    }

    /// Discards the remaining bag contents so the next draw starts a freshly
    /// shuffled bag. Used when a session restarts.
    pub(crate) fn discard_remaining(&mut self) {
        self.bag.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn fixed_seed() -> PieceSeed {
        "0123456789abcdef0123456789abcdef".parse().unwrap()
    }

    #[test]
    fn test_each_bag_is_a_permutation() {
        let mut bag = PieceBag::new();
        for _ in 0..8 {
            let drawn: HashSet<PieceKind> = (0..PieceKind::LEN).map(|_| bag.pop_next()).collect();
            assert_eq!(drawn.len(), PieceKind::LEN);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceBag::with_seed(fixed_seed());
        let mut b = PieceBag::with_seed(fixed_seed());
        for _ in 0..30 {
            assert_eq!(a.pop_next(), b.pop_next());
        }
    }

    #[test]
    fn test_discard_remaining_starts_a_full_bag() {
        let mut bag = PieceBag::with_seed(fixed_seed());
        let _ = bag.pop_next();
        let _ = bag.pop_next();
        bag.discard_remaining();
        let drawn: HashSet<PieceKind> = (0..PieceKind::LEN).map(|_| bag.pop_next()).collect();
        assert_eq!(drawn.len(), PieceKind::LEN);
    }

    #[test]
    fn test_seed_display_round_trips() {
        let seed = fixed_seed();
        let parsed: PieceSeed = seed.to_string().parse().unwrap();
        assert_eq!(parsed.0, seed.0);
    }

    #[test]
    fn test_seed_serde_round_trip() {
        let seed: PieceSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: PieceSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed.0, deserialized.0);
    }

    #[test]
    fn test_seed_serde_known_value() {
        let seed = PieceSeed([0u8; 16]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"00000000000000000000000000000000\"");
    }

    #[test]
    fn test_seed_parse_errors() {
        assert!("0123".parse::<PieceSeed>().is_err());
        assert!(
            "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<PieceSeed>()
                .is_err()
        );
        assert!("".parse::<PieceSeed>().is_err());
    }
}
