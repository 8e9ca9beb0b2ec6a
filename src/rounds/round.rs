//! Round state machine.
//!
//! ```text
//! AwaitingInput --hit--> Resolved(Win)
//! AwaitingInput --stop-> Resolved(Stop)
//! AwaitingInput --miss-> AwaitingInput
//! ```
//!
//! Coin and dice rounds draw a value per attempt and compare it with the
//! player's target. Number rounds draw their secret once, at creation, and
//! compare each guess against it. A resolved round rejects every further
//! attempt, so its attempt counter never changes again.

use serde::{Deserialize, Serialize};

use crate::core::{ArcadeError, ArcadeResult, GameKind, InputError, RandomSource};

use super::target::{check_face, CoinSide, Difficulty, Target, DIE_MAX, DIE_MIN};

/// Terminal outcome of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The player hit the target.
    Win,
    /// The player gave up (non-win).
    Stop,
}

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    AwaitingInput,
    Resolved(Resolution),
}

/// Direction hint after a wrong guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    TooLow,
    TooHigh,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::TooLow => f.write_str("too low"),
            Hint::TooHigh => f.write_str("too high"),
        }
    }
}

/// Judgement of one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Target hit; the round is won.
    Hit,
    /// Coin or dice draw that missed the target.
    Miss,
    /// Guess below the secret.
    TooLow,
    /// Guess above the secret.
    TooHigh,
}

impl Verdict {
    /// Compare a guess with the secret.
    #[must_use]
    pub fn judge_guess(guess: u32, secret: u32) -> Self {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Verdict::TooLow,
            std::cmp::Ordering::Greater => Verdict::TooHigh,
            std::cmp::Ordering::Equal => Verdict::Hit,
        }
    }

    #[must_use]
    pub fn is_hit(self) -> bool {
        self == Verdict::Hit
    }

    /// Hint for the player, if the verdict carries one.
    #[must_use]
    pub fn hint(self) -> Option<Hint> {
        match self {
            Verdict::TooLow => Some(Hint::TooLow),
            Verdict::TooHigh => Some(Hint::TooHigh),
            Verdict::Hit | Verdict::Miss => None,
        }
    }
}

/// One counted attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Game the attempt belongs to.
    pub kind: GameKind,
    /// 1-based attempt number within the round.
    pub number: u32,
    /// Drawn value (coin: 0 Heads / 1 Tails, dice: face) or the guess.
    pub value: u32,
    /// How the attempt was judged.
    pub verdict: Verdict,
}

/// A single game attempt sequence, from target selection to a terminal
/// outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    kind: GameKind,
    target: Target,
    difficulty: Option<Difficulty>,
    bound: u32,
    attempts: u32,
    state: RoundState,
}

impl Round {
    /// Start a coin round aiming for `side`.
    #[must_use]
    pub fn coin(side: CoinSide) -> Self {
        Self::new(GameKind::Coin, Target::Side(side), None, 1)
    }

    /// Start a dice round aiming for `face`. Faces outside 1-6 are rejected.
    pub fn dice(face: u32) -> Result<Self, InputError> {
        let face = check_face(face)?;
        Ok(Self::new(GameKind::Dice, Target::Face(face), None, DIE_MAX))
    }

    /// Start a number round, drawing the secret once from `[1, bound]`.
    pub fn number(difficulty: Difficulty, rng: &mut impl RandomSource) -> Self {
        let bound = difficulty.bound();
        let secret = rng.uniform(1, bound);
        Self::new(GameKind::Number, Target::Secret(secret), Some(difficulty), bound)
    }

    /// Start a number round with a known secret in `[1, bound]`.
    ///
    /// Used for the daily challenge, whose secret comes from the date.
    #[must_use]
    pub fn with_secret(secret: u32, bound: u32) -> Self {
        assert!(bound >= 1, "Bound must be at least 1");
        assert!((1..=bound).contains(&secret), "Secret must lie in 1..=bound");
        Self::new(GameKind::Number, Target::Secret(secret), None, bound)
    }

    fn new(kind: GameKind, target: Target, difficulty: Option<Difficulty>, bound: u32) -> Self {
        Self {
            kind,
            target,
            difficulty,
            bound,
            attempts: 0,
            state: RoundState::AwaitingInput,
        }
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Difficulty of a number round started from the table.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Upper bound of the draw or guess range.
    #[must_use]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Inclusive range of values an attempt may produce or submit.
    #[must_use]
    pub fn value_range(&self) -> std::ops::RangeInclusive<u32> {
        match self.kind {
            GameKind::Coin => 0..=1,
            GameKind::Dice => DIE_MIN..=DIE_MAX,
            GameKind::Number => 1..=self.bound,
        }
    }

    /// Attempts counted so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, RoundState::Resolved(_))
    }

    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        match self.state {
            RoundState::Resolved(resolution) => Some(resolution),
            RoundState::AwaitingInput => None,
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.resolution() == Some(Resolution::Win)
    }

    /// The secret of a number round.
    #[must_use]
    pub fn secret(&self) -> Option<u32> {
        match self.target {
            Target::Secret(secret) => Some(secret),
            Target::Side(_) | Target::Face(_) => None,
        }
    }

    /// Draw once for a coin or dice round and judge it against the target.
    pub fn draw(&mut self, rng: &mut impl RandomSource) -> ArcadeResult<Attempt> {
        self.ensure_open()?;
        let range = self.value_range();
        let value = match self.target {
            Target::Side(_) | Target::Face(_) => rng.uniform(*range.start(), *range.end()),
            Target::Secret(_) => return Err(ArcadeError::WrongKind(self.kind)),
        };
        let hit = match self.target {
            Target::Side(side) => CoinSide::from_draw(value) == side,
            Target::Face(face) => value == face,
            Target::Secret(_) => false,
        };
        let verdict = if hit { Verdict::Hit } else { Verdict::Miss };
        Ok(self.count(value, verdict))
    }

    /// Submit a guess for a number round.
    ///
    /// Guesses outside `[1, bound]` are rejected without being counted.
    pub fn guess(&mut self, guess: u32) -> ArcadeResult<Attempt> {
        self.ensure_open()?;
        let Target::Secret(secret) = self.target else {
            return Err(ArcadeError::WrongKind(self.kind));
        };
        if !self.value_range().contains(&guess) {
            return Err(InputError::OutOfRangeInput {
                value: i64::from(guess),
                low: 1,
                high: i64::from(self.bound),
            }
            .into());
        }
        Ok(self.count(guess, Verdict::judge_guess(guess, secret)))
    }

    /// Give up on the round.
    pub fn stop(&mut self) -> ArcadeResult<Resolution> {
        self.ensure_open()?;
        self.state = RoundState::Resolved(Resolution::Stop);
        Ok(Resolution::Stop)
    }

    fn ensure_open(&self) -> ArcadeResult<()> {
        if self.is_resolved() {
            Err(ArcadeError::RoundResolved(self.kind))
        } else {
            Ok(())
        }
    }

    fn count(&mut self, value: u32, verdict: Verdict) -> Attempt {
        self.attempts += 1;
        if verdict.is_hit() {
            self.state = RoundState::Resolved(Resolution::Win);
        }
        Attempt {
            kind: self.kind,
            number: self.attempts,
            value,
            verdict,
        }
    }
}
