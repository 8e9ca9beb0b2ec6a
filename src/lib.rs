//! # luck-arcade
//!
//! A small arcade of chance games: flip a coin, roll a die, guess a number.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: A `Session` holds every piece of mutable state (stats,
//!    rounds in progress, the daily challenge). Front-ends never share it.
//!
//! 2. **Injected Randomness**: Every engine draw goes through a
//!    `RandomSource`, and every date lookup through a `Clock`. Tests script
//!    both; production uses a seeded ChaCha stream and the local calendar.
//!
//! 3. **Invalid Input Is Free**: Bad input is rejected before it reaches a
//!    round, so it never counts as an attempt.
//!
//! ## Modules
//!
//! - `core`: Game kinds, RNG, clocks, configuration, errors
//! - `rounds`: Round engine for coin, dice, number and blitz
//! - `stats`: Attempt/win counters, streaks, attempt history
//! - `daily`: Date-seeded daily number challenge
//! - `session`: Ties the engine, stats and daily challenge together
//! - `console`: Line-based menu front-end
//! - `dashboard`: JSON-lines event front-end

pub mod core;
pub mod rounds;
pub mod stats;
pub mod daily;
pub mod session;
pub mod console;
pub mod dashboard;

// Re-export commonly used types
pub use crate::core::{
    GameKind, KindMap,
    ArcadeRng, RandomSource, ScriptedRng,
    Clock, FixedClock, SystemClock,
    ArcadeConfig, StreakPolicy,
    ArcadeError, ArcadeResult, InputError,
};

pub use crate::rounds::{
    Attempt, CoinSide, Difficulty, Hint, Resolution, Round, Target, Verdict,
    Blitz, BlitzRecord, BlitzReport,
};

pub use crate::stats::{BoundedHistory, Stats};

pub use crate::daily::DailyChallenge;

pub use crate::session::{BlitzOutcome, PlayReport, RoundSetup, Session};

pub use crate::console::{Console, EditorInput, LineSource, ScriptedInput};

pub use crate::dashboard::{Dashboard, DashboardEvent, DashboardResponse, DashboardView};
