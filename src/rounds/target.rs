//! What a player aims for: a coin side, a die face, or a secret number
//! drawn from a difficulty-sized range.

use serde::{Deserialize, Serialize};

use crate::core::InputError;

/// Lowest die face.
pub const DIE_MIN: u32 = 1;
/// Highest die face.
pub const DIE_MAX: u32 = 6;

/// Side of a coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    /// Map a `uniform(0, 1)` draw to a side: 0 is Heads, anything else Tails.
    #[must_use]
    pub const fn from_draw(draw: u32) -> Self {
        if draw == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

impl std::fmt::Display for CoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinSide::Heads => f.write_str("Heads"),
            CoinSide::Tails => f.write_str("Tails"),
        }
    }
}

/// Number-guessing difficulty. Each level fixes the upper bound of the
/// secret number's range `[1, bound]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Every level, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Nightmare,
    ];

    /// Upper bound of the secret number.
    #[must_use]
    pub const fn bound(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 50,
            Difficulty::Hard => 100,
            Difficulty::Nightmare => 500,
        }
    }

    /// Look up a level by its 1-based menu position.
    pub fn from_level(level: u32) -> Result<Self, InputError> {
        usize::try_from(level)
            .ok()
            .and_then(|l| l.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InputError::OutOfRangeInput {
                value: i64::from(level),
                low: 1,
                high: Self::ALL.len() as i64,
            })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Nightmare => "Nightmare",
        };
        write!(f, "{} (1-{})", label, self.bound())
    }
}

/// Validate a die face chosen by the player.
pub fn check_face(face: u32) -> Result<u32, InputError> {
    if (DIE_MIN..=DIE_MAX).contains(&face) {
        Ok(face)
    } else {
        Err(InputError::OutOfRangeInput {
            value: i64::from(face),
            low: i64::from(DIE_MIN),
            high: i64::from(DIE_MAX),
        })
    }
}

/// Target of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Coin side the player picked.
    Side(CoinSide),
    /// Die face the player picked.
    Face(u32),
    /// Secret number the player must guess.
    Secret(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_mapping() {
        assert_eq!(CoinSide::from_draw(0), CoinSide::Heads);
        assert_eq!(CoinSide::from_draw(1), CoinSide::Tails);
    }

    #[test]
    fn test_difficulty_table() {
        let bounds: Vec<_> = Difficulty::ALL.iter().map(|d| d.bound()).collect();
        assert_eq!(bounds, vec![10, 50, 100, 500]);
        assert_eq!(Difficulty::Hard.to_string(), "Hard (1-100)");
    }

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::from_level(1), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(4), Ok(Difficulty::Nightmare));
        assert!(Difficulty::from_level(0).is_err());
        assert!(Difficulty::from_level(5).is_err());
    }

    #[test]
    fn test_check_face() {
        assert_eq!(check_face(4), Ok(4));
        assert_eq!(
            check_face(7),
            Err(InputError::OutOfRangeInput {
                value: 7,
                low: 1,
                high: 6
            })
        );
        assert!(check_face(0).is_err());
    }
}
