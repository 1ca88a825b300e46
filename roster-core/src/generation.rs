//! Field-value generation for synthetic profiles.
//!
//! The factory depends only on [`NameGenerator`] and [`AgeGenerator`];
//! [`RandomProfileData`] is the stock implementation backed by `rand`.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Supplies plausible profile names.
pub trait NameGenerator {
    /// A full display name.
    fn generate_name(&self) -> String;
}

/// Supplies plausible ages within an inclusive range.
pub trait AgeGenerator {
    /// An age in `min..=max`.
    fn generate_age(&self, min: u32, max: u32) -> u32;
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Dmitri", "Elena", "Farah", "Gustavo",
    "Hana", "Ivan", "Jia", "Kofi", "Lena", "Mateo", "Nadia", "Omar",
    "Priya", "Quentin", "Rosa", "Sven", "Tariq", "Uma", "Viktor", "Wen",
    "Yara", "Zoltan",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barros", "Castillo", "Dubois", "Eriksen", "Fontaine",
    "Greco", "Haddad", "Ivanova", "Jensen", "Kowalski", "Lindqvist",
    "Moreau", "Nakamura", "Okafor", "Petrov", "Quinn", "Rossi", "Schmidt",
    "Tanaka", "Urban", "Vasquez", "Weber", "Xu", "Zielinski",
];

/// Random names and ages drawn from a seedable RNG.
#[derive(Debug)]
pub struct RandomProfileData {
    rng: Mutex<StdRng>,
}

impl Default for RandomProfileData {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProfileData {
    /// Generator seeded from the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Deterministic generator; equal seeds yield equal sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl NameGenerator for RandomProfileData {
    fn generate_name(&self) -> String {
        self.with_rng(|rng| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
            format!("{first} {last}")
        })
    }
}

impl AgeGenerator for RandomProfileData {
    fn generate_age(&self, min: u32, max: u32) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.with_rng(|rng| rng.random_range(low..=high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_stay_in_range() {
        let data = RandomProfileData::seeded(7);
        for _ in 0..500 {
            let age = data.generate_age(18, 65);
            assert!((18..=65).contains(&age));
        }
    }

    #[test]
    fn reversed_range_is_normalized() {
        let data = RandomProfileData::seeded(7);
        for _ in 0..100 {
            let age = data.generate_age(40, 30);
            assert!((30..=40).contains(&age));
        }
        assert_eq!(data.generate_age(25, 25), 25);
    }

    #[test]
    fn names_have_first_and_last() {
        let data = RandomProfileData::seeded(11);
        for _ in 0..50 {
            let name = data.generate_name();
            let (first, last) = name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }

    #[test]
    fn equal_seeds_repeat() {
        let a = RandomProfileData::seeded(42);
        let b = RandomProfileData::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate_name(), b.generate_name());
            assert_eq!(a.generate_age(1, 100), b.generate_age(1, 100));
        }
    }
}
