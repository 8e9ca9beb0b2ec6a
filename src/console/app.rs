//! Console menu loop.

use colored::Colorize;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use crate::core::{ArcadeError, ArcadeRng, Clock, GameKind, RandomSource, SystemClock};
use crate::rounds::{CoinSide, Difficulty, Hint, DIE_MAX, DIE_MIN};
use crate::rounds::{BLITZ_MAX_ROLLS, BLITZ_MIN_ROLLS};
use crate::session::{PlayReport, RoundSetup, Session};

use super::input::LineSource;
use super::prompt::{self, MenuChoice, Reply};

const MENU: &str = "
Luck Arcade
1. Flip a Coin (easy)
2. Roll a Dice (medium)
3. Pick a Random Number (hard)
4. Daily Challenge
5. Time Attack Blitz
6. Show stats
7. Reset stats
8. Exit
";

/// Why a console flow stopped early.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The player typed a quit word.
    #[error("quit requested")]
    Quit,

    /// Input ran out.
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Arcade(#[from] ArcadeError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

type Flow<T = ()> = Result<T, ConsoleError>;

/// Line-oriented front-end over a `Session`.
pub struct Console<I, W, R = ArcadeRng, C = SystemClock> {
    session: Session<R, C>,
    input: I,
    out: W,
    animate: bool,
}

impl<I: LineSource, W: Write, R: RandomSource, C: Clock> Console<I, W, R, C> {
    pub fn new(session: Session<R, C>, input: I, out: W) -> Self {
        Self {
            session,
            input,
            out,
            animate: true,
        }
    }

    /// Enable or disable decorative animation frames.
    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session<R, C> {
        &self.session
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run the menu until the player exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            "This is a luck-based game. Try your luck! Type q at any prompt to quit.".cyan()
        )?;

        loop {
            writeln!(self.out, "{}", MENU.bright_blue())?;
            let Some(line) = self.input.read_line("Choose an option (1-8 or q): ")? else {
                break;
            };
            let choice = match prompt::parse_menu(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.out, "{}", "Please choose 1-8, or q to exit.".yellow())?;
                    continue;
                }
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ConsoleError::Quit) => self.unwind(choice)?,
                Err(ConsoleError::EndOfInput) => {
                    self.unwind(choice)?;
                    break;
                }
                Err(ConsoleError::Arcade(err)) => {
                    writeln!(self.out, "{}", format!("Error: {}", err).red())?;
                }
                Err(ConsoleError::Io(err)) => return Err(err),
            }
        }

        writeln!(self.out, "{}", "Thanks for playing. Goodbye!".bright_blue())?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Flow {
        match choice {
            MenuChoice::Play(GameKind::Coin) => self.flip_coin(),
            MenuChoice::Play(GameKind::Dice) => self.roll_dice(),
            MenuChoice::Play(GameKind::Number) => self.pick_number(),
            MenuChoice::Daily => self.daily_challenge(),
            MenuChoice::Blitz => self.time_attack(),
            MenuChoice::Stats => Ok(self.show_stats()?),
            MenuChoice::Reset => self.reset_stats(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Abort whatever round the interrupted flow left open.
    fn unwind(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Play(kind) => {
                if let Some(secret) = self.session.abort(kind).and_then(|round| round.secret()) {
                    writeln!(self.out, "Exiting round. The number was {}.", secret)?;
                }
            }
            MenuChoice::Daily => {
                self.session.daily_stop();
            }
            _ => {}
        }
        writeln!(self.out, "{}", "Exiting to main menu.".dimmed())
    }

    fn flip_coin(&mut self) -> Flow {
        writeln!(
            self.out,
            "\n{}\n",
            "Welcome to the Coin Flip Challenge! Choose your side and see if luck is on your side!"
                .bold()
        )?;
        let side = match self.ask_number("Pick a side: 1 for Heads, 2 for Tails: ", 1..=2)? {
            1 => CoinSide::Heads,
            _ => CoinSide::Tails,
        };
        writeln!(self.out, "You chose {}. Flipping...", side)?;
        self.session.start_round(RoundSetup::Coin(side))?;

        loop {
            self.animate_frames(GameKind::Coin)?;
            let report = self.session.play(GameKind::Coin)?;
            let shown = CoinSide::from_draw(report.attempt.value);
            writeln!(self.out, "\n--- The coin shows {}! ---\n", shown)?;
            if report.is_win() {
                self.celebrate(
                    &format!(
                        "Congratulations! You guessed it in {} attempt(s).",
                        report.attempt.number
                    ),
                    &report,
                )?;
                return Ok(());
            }
            if !self.ask_yes_no("No luck this time. Flip again?")? {
                self.session.stop(GameKind::Coin)?;
                writeln!(self.out, "Stopping. The coin landed on {}.", shown)?;
                return Ok(());
            }
        }
    }

    fn roll_dice(&mut self) -> Flow {
        writeln!(
            self.out,
            "\n{}\n",
            "Roll a Dice: pick your lucky number and keep rolling until you hit it!".bold()
        )?;
        let lucky = self.ask_number("Enter your lucky number (1-6): ", DIE_MIN..=DIE_MAX)?;
        self.session.start_round(RoundSetup::Dice(lucky))?;

        loop {
            self.animate_frames(GameKind::Dice)?;
            let report = self.session.play(GameKind::Dice)?;
            writeln!(self.out, "\n>>> You rolled a {}! <<<\n", report.attempt.value)?;
            if report.is_win() {
                self.celebrate(
                    &format!(
                        "Jackpot! You hit {} in {} attempt(s).",
                        lucky, report.attempt.number
                    ),
                    &report,
                )?;
                return Ok(());
            }
            if !self.ask_yes_no("Missed. Roll again?")? {
                self.session.stop(GameKind::Dice)?;
                writeln!(self.out, "Stopping. Target was {}.", lucky)?;
                return Ok(());
            }
        }
    }

    fn pick_number(&mut self) -> Flow {
        writeln!(
            self.out,
            "\n{}\n",
            "Welcome to the Random Number Picker! Choose a difficulty and guess the secret number."
                .bold()
        )?;
        let level = self.ask_number("Select a level 1-4 (1=Easy, 4=Nightmare): ", 1..=4)?;
        let difficulty = Difficulty::from_level(level).map_err(ArcadeError::from)?;
        let bound = self
            .session
            .start_round(RoundSetup::Number(difficulty))?
            .bound();
        writeln!(
            self.out,
            "You picked {}. Guess a number between 1 and {}. Type q to quit.",
            difficulty, bound
        )?;

        loop {
            let guess = self.ask_number(&format!("Your guess (1-{}): ", bound), 1..=bound)?;
            let secret = self
                .session
                .round(GameKind::Number)
                .and_then(|round| round.secret())
                .unwrap_or_default();
            let report = self.session.guess(guess)?;
            if report.is_win() {
                self.celebrate(
                    &format!(
                        "\nYOU NAILED IT! {} was the number in {} attempt(s).\n",
                        secret, report.attempt.number
                    ),
                    &report,
                )?;
                return Ok(());
            }
            let hint = match report.attempt.verdict.hint() {
                Some(Hint::TooLow) => "Too low! Aim higher.",
                _ => "Too high! Aim lower.",
            };
            writeln!(self.out, "{}", hint.yellow())?;
            if !self.ask_yes_no("Guess again?")? {
                self.session.stop(GameKind::Number)?;
                writeln!(self.out, "Better luck next time. The number was {}.", secret)?;
                return Ok(());
            }
        }
    }

    fn daily_challenge(&mut self) -> Flow {
        let daily = self.session.daily();
        let (date, bound, attempts) = (daily.date(), daily.bound(), daily.attempts());
        if daily.is_completed() {
            writeln!(self.out, "{}", "Daily challenge done. Come back tomorrow!".green())?;
            return Ok(());
        }
        writeln!(
            self.out,
            "\n{}",
            format!("Daily Challenge for {} (1-{})", date, bound).bold()
        )?;
        writeln!(self.out, "Attempts so far today: {}", attempts)?;

        loop {
            let guess = self.ask_number(&format!("Daily guess (1-{}): ", bound), 1..=bound)?;
            let report = self.session.daily_guess(guess)?;
            if report.is_win() {
                self.celebrate(
                    &format!(
                        "Daily cracked! The number was {}. Attempts: {}.",
                        guess, report.attempt.number
                    ),
                    &report,
                )?;
                return Ok(());
            }
            let hint = match report.attempt.verdict.hint() {
                Some(Hint::TooLow) => "Too low for today's number.",
                _ => "Too high for today's number.",
            };
            writeln!(self.out, "{}", hint.yellow())?;
            if !self.ask_yes_no("Guess again?")? {
                self.session.daily_stop();
                writeln!(self.out, "Come back later today for another try.")?;
                return Ok(());
            }
        }
    }

    fn time_attack(&mut self) -> Flow {
        writeln!(
            self.out,
            "\n{}\n",
            "Time Attack Blitz: auto-rolls a burst of dice. Maximize hits on your number!".bold()
        )?;
        let target = self.ask_number("Pick your target (1-6): ", DIE_MIN..=DIE_MAX)?;

        let outcome = loop {
            let prompt = format!(
                "Number of rolls ({}-{}, even): ",
                BLITZ_MIN_ROLLS, BLITZ_MAX_ROLLS
            );
            let rolls = self.ask_number(&prompt, BLITZ_MIN_ROLLS..=BLITZ_MAX_ROLLS)?;
            match self.session.blitz(target, rolls) {
                Ok(outcome) => break outcome,
                Err(err @ ArcadeError::InvalidBlitzRolls { .. }) => {
                    writeln!(self.out, "{}", format!("{}.", err).yellow())?;
                }
                Err(err) => return Err(err.into()),
            }
        };

        // Rolls are already recorded; they replay here before the summary
        let total = outcome.report.roll_count();
        for (i, roll) in outcome.report.rolls.iter().enumerate() {
            writeln!(self.out, "Roll {}/{}: {}", i + 1, total, roll)?;
            self.pause()?;
        }
        writeln!(
            self.out,
            "Blitz over! You hit {} out of {}. Best: {}",
            outcome.report.hits, total, outcome.record.best_hits
        )?;
        if outcome.report.hits == 0 {
            writeln!(self.out, "{}", "No hits this time. Go again!".yellow())?;
        } else if outcome.milestone {
            writeln!(self.out, "{}", format!("Streak milestone: {}!", outcome.streak).magenta())?;
        }
        Ok(())
    }

    fn show_stats(&mut self) -> io::Result<()> {
        let step = self.session.config().streak_milestone;
        let daily_completed = self.session.daily().is_completed();
        let blitz = self.session.blitz_record();
        let stats = self.session.stats();

        let win_rate = stats
            .win_rate()
            .map_or_else(|| "-".to_string(), |rate| format!("{:.0}%", rate * 100.0));
        writeln!(self.out, "\n{}", "Stats".bold())?;
        writeln!(self.out, "Total attempts: {}", stats.total_attempts())?;
        writeln!(self.out, "Total wins: {}", stats.total_wins())?;
        writeln!(self.out, "Win rate: {}", win_rate)?;
        writeln!(
            self.out,
            "Streak: {} / {} best (next milestone {}, next goal {})",
            stats.streak_current(),
            stats.streak_best(),
            stats.next_milestone(step),
            stats.next_goal()
        )?;
        for kind in GameKind::ALL {
            writeln!(
                self.out,
                "  {}: {} attempts, {} wins",
                kind.label(),
                stats.attempts(kind),
                stats.wins(kind)
            )?;
        }
        writeln!(
            self.out,
            "Daily: {}",
            if daily_completed { "Completed" } else { "Open" }
        )?;
        writeln!(self.out, "Blitz runs: {} (best hits {})", blitz.runs, blitz.best_hits)?;
        if !stats.history().is_empty() {
            let trend: Vec<String> = stats.history().iter().map(|s| s.to_string()).collect();
            writeln!(
                self.out,
                "Attempts trend (last {}): {}",
                stats.history().capacity(),
                trend.join(" ")
            )?;
        }
        Ok(())
    }

    fn reset_stats(&mut self) -> Flow {
        if self.ask_yes_no("Reset all stats?")? {
            self.session.reset_stats();
            writeln!(self.out, "{}", "Stats cleared. Fresh start!".green())?;
        }
        Ok(())
    }

    fn celebrate(&mut self, message: &str, report: &PlayReport) -> Flow {
        writeln!(self.out, "{}", message.green().bold())?;
        if report.milestone {
            writeln!(
                self.out,
                "{}",
                format!("Streak milestone: {} wins in a row!", report.streak).magenta()
            )?;
        }
        Ok(())
    }

    fn animate_frames(&mut self, kind: GameKind) -> io::Result<()> {
        if !self.animate {
            return Ok(());
        }
        let count = match kind {
            GameKind::Coin => self.session.config().coin_frames,
            _ => self.session.config().dice_frames,
        };
        for value in self.session.decorative_frames(kind, count) {
            match kind {
                GameKind::Coin => write!(self.out, "\r{}   ", CoinSide::from_draw(value))?,
                _ => write!(self.out, "\r{}   ", value)?,
            }
            self.out.flush()?;
            self.pause()?;
        }
        writeln!(self.out)
    }

    fn pause(&mut self) -> io::Result<()> {
        if self.animate {
            self.out.flush()?;
            thread::sleep(Duration::from_millis(self.session.config().frame_delay_ms));
        }
        Ok(())
    }

    fn read(&mut self, prompt: &str) -> Flow<String> {
        self.input.read_line(prompt)?.ok_or(ConsoleError::EndOfInput)
    }

    fn ask_number(&mut self, prompt: &str, range: RangeInclusive<u32>) -> Flow<u32> {
        loop {
            let line = self.read(prompt)?;
            match prompt::parse_number(&line, range.clone()) {
                Ok(Reply::Value(value)) => return Ok(value),
                Ok(Reply::Quit) => return Err(ConsoleError::Quit),
                Err(err) => writeln!(self.out, "{}", prompt::advice(&err).yellow())?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Flow<bool> {
        let prompt = format!("{} (yes/no, q to quit): ", question);
        loop {
            let line = self.read(&prompt)?;
            match prompt::parse_yes_no(&line) {
                Ok(Reply::Value(answer)) => return Ok(answer),
                Ok(Reply::Quit) => return Err(ConsoleError::Quit),
                Err(err) => writeln!(self.out, "{}", prompt::advice(&err).yellow())?,
            }
        }
    }
}
