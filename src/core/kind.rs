//! Game kinds and per-kind data storage.
//!
//! ## GameKind
//!
//! The three chance games the arcade offers.
//!
//! ## KindMap
//!
//! Fixed-size per-kind storage backed by an array for O(1) access.
//! Supports iteration and indexing by `GameKind`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Kind of chance game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// Flip a coin until it lands on the chosen side.
    Coin,
    /// Roll a die until it shows the lucky number.
    Dice,
    /// Guess a secret number with higher/lower hints.
    Number,
}

impl GameKind {
    /// Every kind, in menu order.
    pub const ALL: [GameKind; 3] = [GameKind::Coin, GameKind::Dice, GameKind::Number];

    /// Get the 0-based index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            GameKind::Coin => 0,
            GameKind::Dice => 1,
            GameKind::Number => 2,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameKind::Coin => "Flip a Coin",
            GameKind::Dice => "Roll a Dice",
            GameKind::Number => "Pick a Random Number",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::Coin => "coin",
            GameKind::Dice => "dice",
            GameKind::Number => "number",
        };
        f.write_str(name)
    }
}

/// Per-kind data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use luck_arcade::core::{GameKind, KindMap};
///
/// let mut wins: KindMap<u64> = KindMap::default();
/// wins[GameKind::Dice] += 1;
/// assert_eq!(wins[GameKind::Dice], 1);
/// assert_eq!(wins.values().sum::<u64>(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KindMap<T> {
    data: [T; 3],
}

impl<T> KindMap<T> {
    /// Get a reference to a kind's data.
    #[must_use]
    pub fn get(&self, kind: GameKind) -> &T {
        &self.data[kind.index()]
    }

    /// Get a mutable reference to a kind's data.
    pub fn get_mut(&mut self, kind: GameKind) -> &mut T {
        &mut self.data[kind.index()]
    }

    /// Iterate over values in kind order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<GameKind> for KindMap<T> {
    type Output = T;

    fn index(&self, kind: GameKind) -> &Self::Output {
        self.get(kind)
    }
}

impl<T> IndexMut<GameKind> for KindMap<T> {
    fn index_mut(&mut self, kind: GameKind) -> &mut Self::Output {
        self.get_mut(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index() {
        for (i, kind) in GameKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(format!("{}", GameKind::Dice), "dice");
    }

    #[test]
    fn test_kind_map_mutation() {
        let mut map: KindMap<u32> = KindMap::default();

        map[GameKind::Coin] = 3;
        *map.get_mut(GameKind::Number) += 2;

        assert_eq!(map[GameKind::Coin], 3);
        assert_eq!(map[GameKind::Dice], 0);
        assert_eq!(map[GameKind::Number], 2);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&GameKind::Number).unwrap();
        assert_eq!(json, "\"number\"");

        let mut map: KindMap<u64> = KindMap::default();
        map[GameKind::Dice] = 4;
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: KindMap<u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
