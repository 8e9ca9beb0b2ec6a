//! Player session: the single owner of all mutable arcade state.
//!
//! Front-ends hold one `Session` and call into it for every player action.
//! The session runs the round engine, applies the results to `Stats`, keeps
//! the daily challenge current and records blitz runs. Nothing is global;
//! dropping the session discards everything.
//!
//! ## Randomness
//!
//! Engine draws come from the injected `RandomSource`. Decorative animation
//! frames come from a separate stream, so showing more or fewer frames never
//! changes an outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    ArcadeConfig, ArcadeError, ArcadeResult, ArcadeRng, Clock, GameKind, KindMap, RandomSource,
    StreakPolicy, SystemClock,
};
use crate::daily::DailyChallenge;
use crate::rounds::{
    Attempt, Blitz, BlitzRecord, BlitzReport, CoinSide, Difficulty, Resolution, Round, DIE_MAX,
    DIE_MIN,
};
use crate::stats::Stats;

/// How to start a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundSetup {
    Coin(CoinSide),
    Dice(u32),
    Number(Difficulty),
}

impl RoundSetup {
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            RoundSetup::Coin(_) => GameKind::Coin,
            RoundSetup::Dice(_) => GameKind::Dice,
            RoundSetup::Number(_) => GameKind::Number,
        }
    }
}

/// What one counted attempt did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub attempt: Attempt,
    /// `Some(Win)` when the attempt resolved its round.
    pub resolution: Option<Resolution>,
    /// Current streak after the attempt.
    pub streak: u32,
    /// The win landed the streak on a milestone.
    pub milestone: bool,
}

impl PlayReport {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.resolution == Some(Resolution::Win)
    }
}

/// What a blitz run did to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlitzOutcome {
    pub report: BlitzReport,
    pub record: BlitzRecord,
    pub streak: u32,
    pub milestone: bool,
}

/// One player's arcade session.
pub struct Session<R = ArcadeRng, C = SystemClock> {
    config: ArcadeConfig,
    rng: R,
    decor: ArcadeRng,
    clock: C,
    stats: Stats,
    rounds: KindMap<Option<Round>>,
    daily: DailyChallenge,
    blitz: BlitzRecord,
}

impl Session {
    /// Create a session on the system calendar, seeded from the config or
    /// from OS entropy.
    #[must_use]
    pub fn new(config: ArcadeConfig) -> Self {
        let base = config
            .seed
            .map_or_else(ArcadeRng::from_entropy, ArcadeRng::new);
        let rng = base.for_context("engine");
        Self::with_parts(config, rng, SystemClock)
    }
}

impl<R: RandomSource, C: Clock> Session<R, C> {
    /// Create a session with an explicit engine RNG and date source.
    pub fn with_parts(config: ArcadeConfig, rng: R, clock: C) -> Self {
        let decor = config
            .seed
            .map_or_else(ArcadeRng::from_entropy, ArcadeRng::new)
            .for_context("animation");
        let daily = DailyChallenge::for_date(clock.today(), config.daily_bound);
        let stats = Stats::new(config.history_capacity);

        Self {
            config,
            rng,
            decor,
            clock,
            stats,
            rounds: KindMap::default(),
            daily,
            blitz: BlitzRecord::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn blitz_record(&self) -> BlitzRecord {
        self.blitz
    }

    /// The in-progress round of a kind, if any.
    #[must_use]
    pub fn round(&self, kind: GameKind) -> Option<&Round> {
        self.rounds[kind].as_ref()
    }

    /// Start a round, replacing any unfinished round of the same kind.
    ///
    /// A replaced round is discarded without an outcome.
    pub fn start_round(&mut self, setup: RoundSetup) -> ArcadeResult<&Round> {
        let round = match setup {
            RoundSetup::Coin(side) => Round::coin(side),
            RoundSetup::Dice(face) => Round::dice(face)?,
            RoundSetup::Number(difficulty) => Round::number(difficulty, &mut self.rng),
        };
        let kind = setup.kind();
        if let Some(previous) = self.rounds[kind].take() {
            debug!(kind = %kind, attempts = previous.attempts(), "discarded unfinished round");
        }
        debug!(kind = %kind, setup = ?setup, "round started");
        Ok(&*self.rounds[kind].insert(round))
    }

    /// Draw once for the coin or dice round in progress.
    pub fn play(&mut self, kind: GameKind) -> ArcadeResult<PlayReport> {
        let round = self.rounds[kind]
            .as_mut()
            .ok_or(ArcadeError::NoActiveRound(kind))?;
        let attempt = round.draw(&mut self.rng)?;
        Ok(self.account(attempt))
    }

    /// Submit a guess to the number round in progress.
    pub fn guess(&mut self, guess: u32) -> ArcadeResult<PlayReport> {
        let kind = GameKind::Number;
        let round = self.rounds[kind]
            .as_mut()
            .ok_or(ArcadeError::NoActiveRound(kind))?;
        let attempt = round.guess(guess)?;
        Ok(self.account(attempt))
    }

    /// Give up the round in progress. Counts as a loss.
    pub fn stop(&mut self, kind: GameKind) -> ArcadeResult<Resolution> {
        let round = self.rounds[kind]
            .as_mut()
            .ok_or(ArcadeError::NoActiveRound(kind))?;
        let resolution = round.stop()?;
        let attempts = round.attempts();
        self.rounds[kind] = None;
        self.stats.record_outcome(kind, false);
        info!(kind = %kind, attempts, "round stopped");
        Ok(resolution)
    }

    /// Unwind the round in progress after a quit request.
    ///
    /// A round with attempts on it resolves as a loss; an untouched round is
    /// simply dropped. Returns the unwound round.
    pub fn abort(&mut self, kind: GameKind) -> Option<Round> {
        let mut round = self.rounds[kind].take()?;
        if round.attempts() > 0 && round.stop().is_ok() {
            self.stats.record_outcome(kind, false);
        }
        info!(kind = %kind, attempts = round.attempts(), "round aborted");
        Some(round)
    }

    /// Today's challenge, replaced first if the date rolled over.
    pub fn daily(&mut self) -> &DailyChallenge {
        self.refresh_daily();
        &self.daily
    }

    /// Guess today's number. Counts toward number-game stats.
    pub fn daily_guess(&mut self, guess: u32) -> ArcadeResult<PlayReport> {
        self.refresh_daily();
        let attempt = self.daily.guess(guess)?;
        let report = self.account(attempt);
        if report.is_win() {
            info!(date = %self.daily.date(), attempts = attempt.number, "daily challenge completed");
        }
        Ok(report)
    }

    /// Leave today's challenge without solving it.
    ///
    /// Attempts made since the last stop count as a lost number round. The
    /// challenge itself stays open for the rest of the day. Returns whether a
    /// loss was recorded.
    pub fn daily_stop(&mut self) -> bool {
        if !self.daily.settle_loss() {
            return false;
        }
        self.stats.record_outcome(GameKind::Number, false);
        info!(date = %self.daily.date(), attempts = self.daily.attempts(), "daily challenge left unsolved");
        true
    }

    /// Run a Time Attack Blitz on the dice.
    ///
    /// Any dice round in progress is discarded. The burst counts every roll
    /// as a dice attempt and every hit as a dice win; the streak grows by one
    /// if anything hit.
    pub fn blitz(&mut self, target: u32, rolls: u32) -> ArcadeResult<BlitzOutcome> {
        let blitz = Blitz::new(target, rolls)?;
        let report = blitz.run(&mut self.rng);

        self.rounds[GameKind::Dice] = None;
        self.stats.record_attempts(GameKind::Dice, u64::from(report.roll_count()));
        self.stats.record_wins(GameKind::Dice, u64::from(report.hits));
        let won = report.hits > 0;
        let streak = self.stats.record_streak(won);
        self.blitz.record(&report);

        info!(target, rolls, hits = report.hits, "blitz finished");
        Ok(BlitzOutcome {
            report,
            record: self.blitz,
            streak,
            milestone: won && self.stats.is_milestone(self.config.streak_milestone),
        })
    }

    /// Full reset: stats, unfinished rounds, blitz records and today's
    /// challenge progress.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.rounds = KindMap::default();
        self.blitz.reset();
        self.daily.reset_progress();
        info!("stats reset");
    }

    /// Decorative values for an animation before a coin or dice result.
    ///
    /// Drawn from the animation stream; never affects the engine's draws.
    pub fn decorative_frames(&mut self, kind: GameKind, count: usize) -> Vec<u32> {
        let (low, high) = match kind {
            GameKind::Coin => (0, 1),
            GameKind::Dice => (DIE_MIN, DIE_MAX),
            GameKind::Number => (1, self.config.daily_bound.max(1)),
        };
        (0..count).map(|_| self.decor.uniform(low, high)).collect()
    }

    fn refresh_daily(&mut self) {
        let today = self.clock.today();
        let previous = self.daily.date();
        if self.daily.refresh(today) {
            info!(from = %previous, to = %today, "daily challenge rolled over");
        }
    }

    fn account(&mut self, attempt: Attempt) -> PlayReport {
        let kind = attempt.kind;
        self.stats.record_attempt(kind);
        debug!(
            kind = %kind,
            attempt = attempt.number,
            value = attempt.value,
            verdict = ?attempt.verdict,
            "attempt counted"
        );

        if attempt.verdict.is_hit() {
            let streak = self.stats.record_outcome(kind, true);
            if self.rounds[kind].as_ref().is_some_and(Round::is_won) {
                self.rounds[kind] = None;
            }
            info!(kind = %kind, attempts = attempt.number, streak, "round won");
            return PlayReport {
                attempt,
                resolution: Some(Resolution::Win),
                streak,
                milestone: self.stats.is_milestone(self.config.streak_milestone),
            };
        }

        if self.config.streak_policy == StreakPolicy::OnEveryMiss {
            self.stats.record_streak(false);
        }
        PlayReport {
            attempt,
            resolution: None,
            streak: self.stats.streak_current(),
            milestone: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, ScriptedRng};
    use chrono::NaiveDate;

    fn session(draws: impl IntoIterator<Item = u32>) -> Session<ScriptedRng, FixedClock> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        Session::with_parts(ArcadeConfig::default().with_seed(1), ScriptedRng::new(draws), clock)
    }

    #[test]
    fn test_play_requires_round() {
        let mut s = session([]);
        assert_eq!(s.play(GameKind::Coin), Err(ArcadeError::NoActiveRound(GameKind::Coin)));
        assert_eq!(s.guess(3), Err(ArcadeError::NoActiveRound(GameKind::Number)));
    }

    #[test]
    fn test_coin_win_clears_round() {
        let mut s = session([1, 0]);
        s.start_round(RoundSetup::Coin(CoinSide::Heads)).unwrap();

        let miss = s.play(GameKind::Coin).unwrap();
        assert!(!miss.is_win());
        let win = s.play(GameKind::Coin).unwrap();

        assert!(win.is_win());
        assert_eq!(win.attempt.number, 2);
        assert_eq!(win.streak, 1);
        assert!(s.round(GameKind::Coin).is_none());
        assert_eq!(s.stats().attempts(GameKind::Coin), 2);
        assert_eq!(s.stats().wins(GameKind::Coin), 1);
    }

    #[test]
    fn test_stop_breaks_streak() {
        let mut s = session([3, 3, 1]);
        s.start_round(RoundSetup::Dice(3)).unwrap();
        s.play(GameKind::Dice).unwrap();
        s.start_round(RoundSetup::Dice(3)).unwrap();
        s.play(GameKind::Dice).unwrap();
        assert_eq!(s.stats().streak_current(), 2);

        s.start_round(RoundSetup::Dice(6)).unwrap();
        s.play(GameKind::Dice).unwrap();
        // A miss alone keeps the streak under the default policy
        assert_eq!(s.stats().streak_current(), 2);

        assert_eq!(s.stop(GameKind::Dice), Ok(Resolution::Stop));
        assert_eq!(s.stats().streak_current(), 0);
        assert_eq!(s.stats().streak_best(), 2);
        assert!(s.round(GameKind::Dice).is_none());
    }

    #[test]
    fn test_every_miss_policy() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let config = ArcadeConfig::default().with_streak_policy(StreakPolicy::OnEveryMiss);
        let mut s = Session::with_parts(config, ScriptedRng::new([2, 2, 5]), clock);

        s.start_round(RoundSetup::Dice(2)).unwrap();
        s.play(GameKind::Dice).unwrap();
        s.start_round(RoundSetup::Dice(2)).unwrap();
        s.play(GameKind::Dice).unwrap();
        s.start_round(RoundSetup::Dice(2)).unwrap();
        let miss = s.play(GameKind::Dice).unwrap();

        assert_eq!(miss.streak, 0);
        assert_eq!(s.stats().streak_best(), 2);
        assert!(s.round(GameKind::Dice).is_some());
    }

    #[test]
    fn test_abort_untouched_round_keeps_streak() {
        let mut s = session([4, 10]);
        s.start_round(RoundSetup::Dice(4)).unwrap();
        s.play(GameKind::Dice).unwrap();

        s.start_round(RoundSetup::Number(Difficulty::Easy)).unwrap();
        let round = s.abort(GameKind::Number).unwrap();

        assert_eq!(round.secret(), Some(10));
        assert_eq!(s.stats().streak_current(), 1);
        assert!(s.abort(GameKind::Number).is_none());
    }

    #[test]
    fn test_abort_after_attempts_is_loss() {
        let mut s = session([4, 10]);
        s.start_round(RoundSetup::Dice(4)).unwrap();
        s.play(GameKind::Dice).unwrap();

        s.start_round(RoundSetup::Number(Difficulty::Easy)).unwrap();
        s.guess(2).unwrap();
        let round = s.abort(GameKind::Number).unwrap();

        assert_eq!(round.resolution(), Some(Resolution::Stop));
        assert_eq!(s.stats().streak_current(), 0);
    }

    #[test]
    fn test_milestone_flag() {
        let mut s = session([1, 1, 1]);
        let mut last = None;
        for _ in 0..3 {
            s.start_round(RoundSetup::Dice(1)).unwrap();
            last = Some(s.play(GameKind::Dice).unwrap());
        }
        assert!(last.unwrap().milestone);
    }

    #[test]
    fn test_blitz_accounting() {
        let mut s = session([5, 2, 5, 5, 1, 3, 4]);
        s.start_round(RoundSetup::Dice(6)).unwrap();

        let outcome = s.blitz(5, 6).unwrap();

        assert_eq!(outcome.report.hits, 3);
        assert_eq!(outcome.streak, 1);
        assert_eq!(outcome.record.runs, 1);
        assert_eq!(outcome.record.best_hits, 3);
        assert_eq!(s.stats().attempts(GameKind::Dice), 6);
        assert_eq!(s.stats().wins(GameKind::Dice), 3);
        assert_eq!(s.stats().history().to_vec(), vec![6]);
        assert!(s.round(GameKind::Dice).is_none());
    }

    #[test]
    fn test_blitz_without_hits_breaks_streak() {
        let mut s = session([6, 1, 1, 1, 1, 1, 1]);
        s.start_round(RoundSetup::Dice(6)).unwrap();
        s.play(GameKind::Dice).unwrap();

        let outcome = s.blitz(6, 6).unwrap();

        assert_eq!(outcome.report.hits, 0);
        assert_eq!(outcome.streak, 0);
        assert_eq!(s.stats().streak_best(), 1);
    }

    #[test]
    fn test_invalid_blitz_leaves_state() {
        let mut s = session([]);
        assert!(s.blitz(3, 5).is_err());
        assert_eq!(s.blitz_record().runs, 0);
        assert_eq!(s.stats().total_attempts(), 0);
    }

    #[test]
    fn test_decorative_frames_do_not_consume_engine_draws() {
        let mut s = session([2]);
        let frames = s.decorative_frames(GameKind::Dice, 12);
        assert_eq!(frames.len(), 12);
        assert!(frames.iter().all(|f| (1..=6).contains(f)));

        s.start_round(RoundSetup::Dice(2)).unwrap();
        assert!(s.play(GameKind::Dice).unwrap().is_win());
    }

    #[test]
    fn test_daily_stop_is_a_loss() {
        let mut s = session([2]);
        s.start_round(RoundSetup::Dice(2)).unwrap();
        s.play(GameKind::Dice).unwrap();
        assert!(!s.daily_stop());
        assert_eq!(s.stats().streak_current(), 1);

        let target = s.daily().target();
        let wrong = if target == 1 { 2 } else { 1 };
        s.daily_guess(wrong).unwrap();
        s.daily_guess(wrong).unwrap();
        assert_eq!(s.stats().streak_current(), 1);

        assert!(s.daily_stop());
        assert_eq!(s.stats().streak_current(), 0);
        assert_eq!(s.stats().streak_best(), 1);
        assert!(!s.daily_stop());

        let win = s.daily_guess(target).unwrap();
        assert!(win.is_win());
        assert_eq!(win.attempt.number, 3);
    }

    #[test]
    fn test_reset_stats() {
        let mut s = session([1, 3]);
        s.start_round(RoundSetup::Dice(1)).unwrap();
        s.play(GameKind::Dice).unwrap();
        s.start_round(RoundSetup::Dice(2)).unwrap();
        s.play(GameKind::Dice).unwrap();
        let target = s.daily().target();
        s.daily_guess(target).unwrap();

        s.reset_stats();

        assert_eq!(s.stats().total_attempts(), 0);
        assert_eq!(s.stats().streak_best(), 0);
        assert!(s.stats().history().is_empty());
        assert!(s.round(GameKind::Dice).is_none());
        assert!(!s.daily().is_completed());
        assert_eq!(s.daily().target(), target);
    }
}
