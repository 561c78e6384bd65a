// patterns.rs - Preset figures for seeding a universe

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Universe;

/// A named figure, cells addressed relative to its own bounding box.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (u32, u32) {
        let rows = self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Acorn",
        cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
    },
    Pattern {
        // period-10 spaceship
        name: "Copperhead",
        cells: &[
            (0, 5), (0, 7), (0, 8),
            (1, 4), (1, 11),
            (2, 3), (2, 4), (2, 8), (2, 11),
            (3, 0), (3, 1), (3, 3), (3, 9), (3, 10),
            (4, 0), (4, 1), (4, 3), (4, 9), (4, 10),
            (5, 3), (5, 4), (5, 8), (5, 11),
            (6, 4), (6, 11),
            (7, 5), (7, 7), (7, 8),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Refill `univ` from a seeded pseudo-random stream, roughly one third alive.
pub fn randomize(univ: &mut Universe, seed_value: u32) {
    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for cell in &mut univ.cells {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        *cell = ((seed % 3) == 0).into(); // ~33% chance of being alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn every_pattern_fits_the_default_universe() {
        for pattern in PATTERNS {
            assert!(
                Universe::from_pattern(64, 64, pattern).is_ok(),
                "{} should fit 64x64",
                pattern.name,
            );
        }
    }

    #[test]
    fn extents_match_the_figures() {
        let by_name = |name: &str| {
            PATTERNS
                .iter()
                .find(|p| p.name == name)
                .expect("pattern exists")
        };

        assert_eq!(by_name("Glider").extent(), (3, 3));
        assert_eq!(by_name("Blinker").extent(), (1, 3));
        assert_eq!(by_name("Pulsar").extent(), (13, 13));
        assert_eq!(by_name("Copperhead").extent(), (8, 12));
        assert_eq!(by_name("Gosper Glider Gun").extent(), (9, 36));
    }

    #[test]
    fn glider_is_placed_verbatim_in_its_own_extent() {
        let univ = Universe::from_pattern(3, 3, &PATTERNS[0]).unwrap();
        let alive = [(0u32, 2u32), (1, 0), (1, 2), (2, 1), (2, 2)];
        for cell in alive {
            assert_eq!(univ[cell], Cell::Alive);
        }
        assert_eq!(univ.population(), alive.len());
    }

    #[test]
    fn patterns_are_centered() {
        // Blinker is 1x3: centered in 5x5 it lands on row 2, cols 1..=3
        let univ = Universe::from_pattern(5, 5, &PATTERNS[1]).unwrap();
        assert_eq!(univ[(2, 1)], Cell::Alive);
        assert_eq!(univ[(2, 2)], Cell::Alive);
        assert_eq!(univ[(2, 3)], Cell::Alive);
        assert_eq!(univ.population(), 3);
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let pulsar = &PATTERNS[4];
        assert!(Universe::from_pattern(10, 10, pulsar).is_err());
        assert!(Universe::from_pattern(13, 13, pulsar).is_ok());
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = Universe::new(16, 16);
        let mut b = Universe::new(16, 16);
        randomize(&mut a, 42);
        randomize(&mut b, 42);
        assert_eq!(a, b);
        assert!(a.population() > 0);

        let mut c = Universe::new(16, 16);
        randomize(&mut c, 43);
        assert_ne!(a, c);
    }
}
