//! Level catalog.
//!
//! Layouts are plain geometric descriptors in a table indexed by level
//! number minus one. Every load instantiates fresh platforms and coins, so
//! collected state never carries over between attempts.

use alloc::vec::Vec;

use crate::{
    config::TOTAL_LEVELS,
    entity::{
        Coin,
        Platform,
    },
};

struct Ledge {
    x: u8,
    y: u8,
    width: u8,
}

struct Spot {
    x: u8,
    y: u8,
}

struct Layout {
    platforms: &'static [Ledge],
    coins: &'static [Spot],
}

const fn ledge(x: u8, y: u8, width: u8) -> Ledge {
    Ledge { x, y, width }
}

const fn spot(x: u8, y: u8) -> Spot {
    Spot { x, y }
}

const LAYOUTS: [Layout; TOTAL_LEVELS as usize] = [
    // 1: three loose ledges
    Layout {
        platforms: &[ledge(30, 40, 30), ledge(80, 30, 30), ledge(20, 20, 20)],
        coins: &[spot(40, 30), spot(90, 20), spot(35, 10)],
    },
    // 2: staircase to the top right
    Layout {
        platforms: &[
            ledge(20, 40, 20),
            ledge(50, 30, 20),
            ledge(80, 20, 20),
            ledge(110, 10, 15),
        ],
        coins: &[spot(25, 30), spot(55, 20), spot(85, 10), spot(115, 0)],
    },
    // 3: alternating heights
    Layout {
        platforms: &[
            ledge(10, 40, 20),
            ledge(40, 30, 20),
            ledge(70, 40, 20),
            ledge(100, 30, 20),
        ],
        coins: &[spot(15, 30), spot(45, 20), spot(75, 30), spot(105, 20)],
    },
    // 4: hills, with two coins left on the ground
    Layout {
        platforms: &[ledge(20, 35, 25), ledge(55, 20, 25), ledge(90, 35, 25)],
        coins: &[
            spot(30, 25),
            spot(65, 10),
            spot(100, 25),
            spot(45, 45),
            spot(80, 45),
        ],
    },
    // 5: up and over
    Layout {
        platforms: &[
            ledge(20, 40, 15),
            ledge(45, 30, 15),
            ledge(70, 20, 15),
            ledge(95, 30, 15),
            ledge(120, 40, 8),
        ],
        coins: &[
            spot(25, 30),
            spot(50, 20),
            spot(75, 10),
            spot(100, 20),
            spot(122, 30),
        ],
    },
];

/// Instantiate the platforms and coins of level `number`.
///
/// # Panics
///
/// Panics if `number` is outside `1..=TOTAL_LEVELS`.
#[must_use]
pub fn build_level(number: u8) -> (Vec<Platform>, Vec<Coin>) {
    assert!(
        (1..=TOTAL_LEVELS).contains(&number),
        "level number out of range"
    );
    let layout = &LAYOUTS[usize::from(number - 1)];

    let platforms = layout
        .platforms
        .iter()
        .map(|l| Platform::new(f32::from(l.x), f32::from(l.y), u16::from(l.width)))
        .collect();
    let coins = layout
        .coins
        .iter()
        .map(|s| Coin::new(f32::from(s.x), f32::from(s.y)))
        .collect();

    (platforms, coins)
}

/// One live instance of a level.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub number: u8,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
}

impl Level {
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=TOTAL_LEVELS`.
    #[must_use]
    pub fn load(number: u8) -> Self {
        let (platforms, coins) = build_level(number);
        info!(
            "level {} loaded: {} platforms, {} coins",
            number,
            platforms.len(),
            coins.len()
        );
        Self {
            number,
            platforms,
            coins,
        }
    }

    /// `true` once every coin is collected. Vacuously true with no coins.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        check_level_complete(&self.coins)
    }

    #[must_use]
    pub fn collected(&self) -> usize {
        self.coins.iter().filter(|c| c.is_collected()).count()
    }
}

#[must_use]
pub fn check_level_complete(coins: &[Coin]) -> bool {
    coins.iter().all(Coin::is_collected)
}
