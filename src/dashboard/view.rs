//! Render-ready snapshot of a session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Clock, GameKind, RandomSource};
use crate::rounds::{BlitzRecord, Difficulty};
use crate::session::Session;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    /// The submission was refused; state is unchanged.
    Rejected,
}

/// Message to show after an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Progress bar toward the next streak milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakMeter {
    pub current: u32,
    pub best: u32,
    pub next_milestone: u32,
    pub next_goal: u32,
    /// Whole percent toward `next_milestone`.
    pub percent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatus {
    pub date: NaiveDate,
    pub bound: u32,
    pub attempts: u32,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub kind: GameKind,
    pub attempts: u64,
    pub wins: u64,
    /// Attempts in the round in progress.
    pub round_attempts: u32,
}

/// Everything a dashboard renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_attempts: u64,
    pub total_wins: u64,
    /// Whole percent, absent before the first attempt.
    pub win_rate_percent: Option<u32>,
    pub streak: StreakMeter,
    /// Grand-total attempt samples, oldest first.
    pub history: Vec<u64>,
    pub games: Vec<KindSummary>,
    pub number_difficulty: Option<Difficulty>,
    pub daily: DailyStatus,
    pub blitz: BlitzRecord,
}

impl DashboardView {
    /// Capture the session. Refreshes the daily challenge first.
    pub fn capture<R: RandomSource, C: Clock>(session: &mut Session<R, C>) -> Self {
        let daily = session.daily();
        let daily = DailyStatus {
            date: daily.date(),
            bound: daily.bound(),
            attempts: daily.attempts(),
            completed: daily.is_completed(),
        };
        let step = session.config().streak_milestone;
        let stats = session.stats();

        let games = GameKind::ALL
            .into_iter()
            .map(|kind| KindSummary {
                kind,
                attempts: stats.attempts(kind),
                wins: stats.wins(kind),
                round_attempts: session.round(kind).map_or(0, |round| round.attempts()),
            })
            .collect();

        Self {
            total_attempts: stats.total_attempts(),
            total_wins: stats.total_wins(),
            win_rate_percent: stats.win_rate().map(|rate| (rate * 100.0).round() as u32),
            streak: StreakMeter {
                current: stats.streak_current(),
                best: stats.streak_best(),
                next_milestone: stats.next_milestone(step),
                next_goal: stats.next_goal(),
                percent: (stats.milestone_progress(step) * 100.0) as u32,
            },
            history: stats.history().to_vec(),
            games,
            number_difficulty: session
                .round(GameKind::Number)
                .and_then(|round| round.difficulty()),
            daily,
            blitz: session.blitz_record(),
        }
    }

    /// Summary for one game kind.
    #[must_use]
    pub fn game(&self, kind: GameKind) -> Option<&KindSummary> {
        self.games.iter().find(|summary| summary.kind == kind)
    }
}

/// Reply to one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub notice: Option<Notice>,
    /// Values to flash before the result: decorative frames for flips and
    /// rolls, the actual rolls for a blitz.
    pub frames: Vec<u32>,
    /// Play a celebration (win, or a blitz with hits).
    pub celebrate: bool,
    pub view: DashboardView,
}
