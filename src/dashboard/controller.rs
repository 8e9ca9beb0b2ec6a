//! Event handling for the dashboard.

use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::core::{ArcadeError, ArcadeRng, Clock, GameKind, InputError, RandomSource, SystemClock};
use crate::rounds::{CoinSide, Difficulty, Hint, Target};
use crate::session::{RoundSetup, Session};

use super::event::DashboardEvent;
use super::view::{DashboardResponse, DashboardView, Notice, NoticeLevel};

/// Event-driven front-end over a `Session`.
///
/// Rounds here never stop explicitly: the player keeps clicking until a
/// hit, so the session is expected to break streaks on every miss.
pub struct Dashboard<R = ArcadeRng, C = SystemClock> {
    session: Session<R, C>,
}

impl<R: RandomSource, C: Clock> Dashboard<R, C> {
    pub fn new(session: Session<R, C>) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session<R, C> {
        &self.session
    }

    /// Apply one event and render the result.
    ///
    /// Rejected submissions leave the session untouched.
    pub fn handle(&mut self, event: DashboardEvent) -> DashboardResponse {
        let mut frames = Vec::new();
        let result = match event {
            DashboardEvent::FlipCoin { side } => self.flip_coin(side, &mut frames),
            DashboardEvent::RollDice { lucky } => self.roll_dice(lucky, &mut frames),
            DashboardEvent::SubmitGuess { difficulty, guess } => self.submit_guess(difficulty, guess),
            DashboardEvent::NewNumber { difficulty } => self
                .session
                .start_round(RoundSetup::Number(difficulty))
                .map(|_| (Notice::new(NoticeLevel::Info, "New number picked! Start guessing."), false)),
            DashboardEvent::SubmitDaily { guess } => self.submit_daily(guess),
            DashboardEvent::StartBlitz { target, rolls } => self.start_blitz(target, rolls, &mut frames),
            DashboardEvent::ResetStats => {
                self.session.reset_stats();
                Ok((Notice::new(NoticeLevel::Info, "Stats cleared. Fresh start!"), false))
            }
            DashboardEvent::Snapshot => {
                return self.respond(None, Vec::new(), false);
            }
        };

        match result {
            Ok((notice, celebrate)) => self.respond(Some(notice), frames, celebrate),
            Err(err) => {
                let message = match err {
                    ArcadeError::DailyCompleted => "Daily challenge done. Come back tomorrow!".to_string(),
                    other => other.to_string(),
                };
                self.reject(message)
            }
        }
    }

    /// Render a rejection for a submission that never reached the session.
    pub fn reject(&mut self, message: impl Into<String>) -> DashboardResponse {
        self.respond(Some(Notice::new(NoticeLevel::Rejected, message)), Vec::new(), false)
    }

    /// Serve newline-delimited JSON: one event in, one response out.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = match serde_json::from_str::<DashboardEvent>(&line) {
                Ok(event) => self.handle(event),
                Err(err) => {
                    warn!(error = %err, "unreadable dashboard event");
                    let unknown = InputError::UnrecognizedCommand(line.trim().to_string());
                    self.reject(unknown.to_string())
                }
            };
            write_json_line(&mut output, &response)?;
        }
        Ok(())
    }

    fn flip_coin(&mut self, side: CoinSide, frames: &mut Vec<u32>) -> Result<(Notice, bool), ArcadeError> {
        if self.session.round(GameKind::Coin).map(|round| round.target()) != Some(Target::Side(side)) {
            self.session.start_round(RoundSetup::Coin(side))?;
        }
        let count = self.session.config().coin_frames;
        *frames = self.session.decorative_frames(GameKind::Coin, count);

        let report = self.session.play(GameKind::Coin)?;
        let shown = CoinSide::from_draw(report.attempt.value);
        if report.is_win() {
            let message = format!(
                "The coin shows {}! You guessed it in {} attempt(s).",
                shown, report.attempt.number
            );
            Ok((Notice::new(NoticeLevel::Success, message), true))
        } else {
            let message = format!("The coin shows {}. Try again!", shown);
            Ok((Notice::new(NoticeLevel::Info, message), false))
        }
    }

    fn roll_dice(&mut self, lucky: u32, frames: &mut Vec<u32>) -> Result<(Notice, bool), ArcadeError> {
        if self.session.round(GameKind::Dice).map(|round| round.target()) != Some(Target::Face(lucky)) {
            self.session.start_round(RoundSetup::Dice(lucky))?;
        }
        let count = self.session.config().dice_frames;
        *frames = self.session.decorative_frames(GameKind::Dice, count);

        let report = self.session.play(GameKind::Dice)?;
        let roll = report.attempt.value;
        if report.is_win() {
            let message = format!(
                "You rolled a {}! Jackpot in {} attempt(s).",
                roll, report.attempt.number
            );
            Ok((Notice::new(NoticeLevel::Success, message), true))
        } else {
            let message = format!("You rolled a {}. No match yet.", roll);
            Ok((Notice::new(NoticeLevel::Warning, message), false))
        }
    }

    fn submit_guess(&mut self, difficulty: Difficulty, guess: u32) -> Result<(Notice, bool), ArcadeError> {
        if !(1..=difficulty.bound()).contains(&guess) {
            return Err(InputError::OutOfRangeInput {
                value: i64::from(guess),
                low: 1,
                high: i64::from(difficulty.bound()),
            }
            .into());
        }
        let current = self.session.round(GameKind::Number).and_then(|round| round.difficulty());
        if current != Some(difficulty) {
            self.session.start_round(RoundSetup::Number(difficulty))?;
        }
        let secret = self
            .session
            .round(GameKind::Number)
            .and_then(|round| round.secret())
            .unwrap_or_default();

        let report = self.session.guess(guess)?;
        if report.is_win() {
            self.session.start_round(RoundSetup::Number(difficulty))?;
            let message = format!(
                "YOU NAILED IT! The number was {}. It took you {} attempt(s).",
                secret, report.attempt.number
            );
            return Ok((Notice::new(NoticeLevel::Success, message), true));
        }
        let message = match report.attempt.verdict.hint() {
            Some(Hint::TooLow) => "Too low! Aim higher.",
            _ => "Too high! Aim lower.",
        };
        Ok((Notice::new(NoticeLevel::Info, message), false))
    }

    fn submit_daily(&mut self, guess: u32) -> Result<(Notice, bool), ArcadeError> {
        let report = self.session.daily_guess(guess)?;
        if report.is_win() {
            let message = format!(
                "Daily cracked! The number was {}. Attempts: {}.",
                guess, report.attempt.number
            );
            return Ok((Notice::new(NoticeLevel::Success, message), true));
        }
        let message = match report.attempt.verdict.hint() {
            Some(Hint::TooLow) => "Too low for today's number.",
            _ => "Too high for today's number.",
        };
        Ok((Notice::new(NoticeLevel::Info, message), false))
    }

    fn start_blitz(&mut self, target: u32, rolls: u32, frames: &mut Vec<u32>) -> Result<(Notice, bool), ArcadeError> {
        let outcome = self.session.blitz(target, rolls)?;
        *frames = outcome.report.rolls.to_vec();

        let summary = format!(
            "Blitz over! You hit {} out of {}. Best: {}",
            outcome.report.hits,
            outcome.report.roll_count(),
            outcome.record.best_hits
        );
        if outcome.report.hits > 0 {
            Ok((Notice::new(NoticeLevel::Info, summary), true))
        } else {
            let message = format!("{}. No hits this time, go again!", summary);
            Ok((Notice::new(NoticeLevel::Warning, message), false))
        }
    }

    fn respond(&mut self, notice: Option<Notice>, frames: Vec<u32>, celebrate: bool) -> DashboardResponse {
        DashboardResponse {
            notice,
            frames,
            celebrate,
            view: DashboardView::capture(&mut self.session),
        }
    }
}

fn write_json_line(output: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcadeConfig, FixedClock, ScriptedRng, StreakPolicy};
    use chrono::NaiveDate;

    fn dashboard(draws: impl IntoIterator<Item = u32>) -> Dashboard<ScriptedRng, FixedClock> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let config = ArcadeConfig::default()
            .with_seed(9)
            .with_streak_policy(StreakPolicy::OnEveryMiss);
        Dashboard::new(Session::with_parts(config, ScriptedRng::new(draws), clock))
    }

    #[test]
    fn test_roll_until_lucky() {
        let mut dash = dashboard([2, 4]);

        let miss = dash.handle(DashboardEvent::RollDice { lucky: 4 });
        assert!(!miss.celebrate);
        assert_eq!(miss.frames.len(), 12);
        assert_eq!(miss.view.game(GameKind::Dice).unwrap().round_attempts, 1);

        let hit = dash.handle(DashboardEvent::RollDice { lucky: 4 });
        assert!(hit.celebrate);
        assert_eq!(hit.notice.unwrap().level, NoticeLevel::Success);
        assert_eq!(hit.view.total_attempts, 2);
        assert_eq!(hit.view.total_wins, 1);
        assert_eq!(hit.view.streak.current, 1);
        assert_eq!(hit.view.game(GameKind::Dice).unwrap().round_attempts, 0);
    }

    #[test]
    fn test_changing_lucky_number_restarts_round() {
        let mut dash = dashboard([2, 2]);
        dash.handle(DashboardEvent::RollDice { lucky: 5 });
        let response = dash.handle(DashboardEvent::RollDice { lucky: 6 });

        assert_eq!(response.view.game(GameKind::Dice).unwrap().round_attempts, 1);
        assert_eq!(response.view.game(GameKind::Dice).unwrap().attempts, 2);
    }

    #[test]
    fn test_invalid_face_rejected() {
        let mut dash = dashboard([]);
        let response = dash.handle(DashboardEvent::RollDice { lucky: 9 });

        let notice = response.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Rejected);
        assert_eq!(notice.message, "9 is outside 1-6");
        assert_eq!(response.view.total_attempts, 0);
    }

    #[test]
    fn test_guess_flow_with_hints() {
        // Secret 62 on Hard, then a fresh secret after the win
        let mut dash = dashboard([62, 7]);

        let low = dash.handle(DashboardEvent::SubmitGuess {
            difficulty: Difficulty::Hard,
            guess: 50,
        });
        assert_eq!(low.notice.unwrap().message, "Too low! Aim higher.");

        let high = dash.handle(DashboardEvent::SubmitGuess {
            difficulty: Difficulty::Hard,
            guess: 75,
        });
        assert_eq!(high.notice.unwrap().message, "Too high! Aim lower.");

        let win = dash.handle(DashboardEvent::SubmitGuess {
            difficulty: Difficulty::Hard,
            guess: 62,
        });
        assert!(win.celebrate);
        assert!(win.notice.unwrap().message.contains("The number was 62"));
        assert_eq!(win.view.game(GameKind::Number).unwrap().attempts, 3);
        assert_eq!(win.view.game(GameKind::Number).unwrap().round_attempts, 0);
        assert_eq!(win.view.number_difficulty, Some(Difficulty::Hard));
        assert_eq!(dash.session().round(GameKind::Number).unwrap().secret(), Some(7));
    }

    #[test]
    fn test_out_of_range_guess_not_counted() {
        let mut dash = dashboard([5]);
        let response = dash.handle(DashboardEvent::SubmitGuess {
            difficulty: Difficulty::Easy,
            guess: 11,
        });

        assert_eq!(response.notice.unwrap().level, NoticeLevel::Rejected);
        assert_eq!(response.view.total_attempts, 0);
        // The rejected guess did not open a round either
        assert!(dash.session().round(GameKind::Number).is_none());
    }

    #[test]
    fn test_daily_completed_rejects_more_guesses() {
        let mut dash = dashboard([]);
        let target = dash.session.daily().target();

        let win = dash.handle(DashboardEvent::SubmitDaily { guess: target });
        assert!(win.celebrate);
        assert!(win.view.daily.completed);

        let again = dash.handle(DashboardEvent::SubmitDaily { guess: target });
        let notice = again.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Rejected);
        assert_eq!(notice.message, "Daily challenge done. Come back tomorrow!");
        assert_eq!(again.view.daily.attempts, 1);
    }

    #[test]
    fn test_blitz_frames_are_the_rolls() {
        let mut dash = dashboard([3, 1, 3, 2, 6, 5]);
        let response = dash.handle(DashboardEvent::StartBlitz { target: 3, rolls: 6 });

        assert_eq!(response.frames, vec![3, 1, 3, 2, 6, 5]);
        assert!(response.celebrate);
        assert_eq!(response.view.blitz.best_hits, 2);
        assert_eq!(response.view.history, vec![6]);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let mut dash = dashboard([1]);
        dash.handle(DashboardEvent::FlipCoin {
            side: CoinSide::Tails,
        });

        let reset = dash.handle(DashboardEvent::ResetStats);
        assert_eq!(reset.view.total_attempts, 0);
        assert_eq!(reset.view.win_rate_percent, None);

        let snapshot = dash.handle(DashboardEvent::Snapshot);
        assert!(snapshot.notice.is_none());
        assert!(snapshot.frames.is_empty());
    }

    #[test]
    fn test_serve_json_lines() {
        let mut dash = dashboard([1]);
        let input = "{\"type\":\"flip_coin\",\"side\":\"Tails\"}\n\nnot json\n";
        let mut output = Vec::new();

        dash.serve(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: DashboardResponse = serde_json::from_str(lines[0]).unwrap();
        assert!(first.celebrate);
        let second: DashboardResponse = serde_json::from_str(lines[1]).unwrap();
        let notice = second.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Rejected);
        assert_eq!(notice.message, "unrecognized command 'not json'");
    }
}
