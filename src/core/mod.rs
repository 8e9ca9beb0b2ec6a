//! Core building blocks: game kinds, RNG, dates, configuration, errors.
//!
//! Nothing here knows how a round is played. The round engine, stats and
//! session are built on top of these types.

pub mod kind;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;

pub use kind::{GameKind, KindMap};
pub use rng::{seeded_uniform, ArcadeRng, RandomSource, ScriptedRng};
pub use clock::{date_seed, Clock, FixedClock, SystemClock};
pub use config::{ArcadeConfig, ConfigError, StreakPolicy};
pub use error::{ArcadeError, ArcadeResult, InputError};
