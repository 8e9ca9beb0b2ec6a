//! Parsing of console replies.
//!
//! Every prompt accepts `q`, `quit` or `exit`, which the caller turns into
//! a quit request. Everything else is validated here and rejected with an
//! `InputError` so the caller can ask again.

use std::ops::RangeInclusive;

use crate::core::{GameKind, InputError};

/// Words that abort the current round, or exit at the menu.
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// A reply that is either a value or a quit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Quit,
}

/// Top-level menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameKind),
    Daily,
    Blitz,
    Stats,
    Reset,
    Exit,
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True for any of the quit words, ignoring case and surrounding space.
#[must_use]
pub fn is_quit(raw: &str) -> bool {
    QUIT_WORDS.contains(&normalize(raw).as_str())
}

/// Parse a whole number that must fall inside `range`.
pub fn parse_number(raw: &str, range: RangeInclusive<u32>) -> Result<Reply<u32>, InputError> {
    let text = normalize(raw);
    if is_quit(&text) {
        return Ok(Reply::Quit);
    }
    let value: i64 = text
        .parse()
        .map_err(|_| InputError::NonNumericInput(raw.trim().to_string()))?;
    match u32::try_from(value) {
        Ok(number) if range.contains(&number) => Ok(Reply::Value(number)),
        _ => Err(InputError::OutOfRangeInput {
            value,
            low: i64::from(*range.start()),
            high: i64::from(*range.end()),
        }),
    }
}

/// Parse `y`/`yes`/`n`/`no`, case-insensitive.
pub fn parse_yes_no(raw: &str) -> Result<Reply<bool>, InputError> {
    match normalize(raw).as_str() {
        "y" | "yes" => Ok(Reply::Value(true)),
        "n" | "no" => Ok(Reply::Value(false)),
        text if is_quit(text) => Ok(Reply::Quit),
        _ => Err(InputError::UnrecognizedCommand(raw.trim().to_string())),
    }
}

/// Parse a menu selection. Quit words select `Exit`.
pub fn parse_menu(raw: &str) -> Result<MenuChoice, InputError> {
    let text = normalize(raw);
    let choice = match text.as_str() {
        "1" => MenuChoice::Play(GameKind::Coin),
        "2" => MenuChoice::Play(GameKind::Dice),
        "3" => MenuChoice::Play(GameKind::Number),
        "4" => MenuChoice::Daily,
        "5" => MenuChoice::Blitz,
        "6" => MenuChoice::Stats,
        "7" => MenuChoice::Reset,
        "8" => MenuChoice::Exit,
        text if is_quit(text) => MenuChoice::Exit,
        _ => return Err(InputError::UnrecognizedCommand(raw.trim().to_string())),
    };
    Ok(choice)
}

/// What to tell the player after rejected input.
#[must_use]
pub fn advice(err: &InputError) -> String {
    match err {
        InputError::NonNumericInput(_) => "Please enter a whole number.".to_string(),
        InputError::OutOfRangeInput { low, high, .. } => {
            format!("Please choose a number from {} to {}.", low, high)
        }
        InputError::UnrecognizedCommand(_) => "Please type yes or no.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_words() {
        for word in ["q", "QUIT", " exit ", "Q"] {
            assert!(is_quit(word), "{word} should quit");
        }
        assert!(!is_quit("quitter"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 4 ", 1..=6), Ok(Reply::Value(4)));
        assert_eq!(parse_number("q", 1..=6), Ok(Reply::Quit));
        assert_eq!(
            parse_number("four", 1..=6),
            Err(InputError::NonNumericInput("four".into()))
        );
        assert_eq!(
            parse_number("7", 1..=6),
            Err(InputError::OutOfRangeInput {
                value: 7,
                low: 1,
                high: 6
            })
        );
        assert_eq!(
            parse_number("-2", 1..=6),
            Err(InputError::OutOfRangeInput {
                value: -2,
                low: 1,
                high: 6
            })
        );
        assert!(matches!(
            parse_number("2.5", 1..=6),
            Err(InputError::NonNumericInput(_))
        ));
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Ok(Reply::Value(true)));
        assert_eq!(parse_yes_no("yes"), Ok(Reply::Value(true)));
        assert_eq!(parse_yes_no("No"), Ok(Reply::Value(false)));
        assert_eq!(parse_yes_no("exit"), Ok(Reply::Quit));
        assert_eq!(
            parse_yes_no("maybe"),
            Err(InputError::UnrecognizedCommand("maybe".into()))
        );
    }

    #[test]
    fn test_parse_menu() {
        assert_eq!(parse_menu("1"), Ok(MenuChoice::Play(GameKind::Coin)));
        assert_eq!(parse_menu("3"), Ok(MenuChoice::Play(GameKind::Number)));
        assert_eq!(parse_menu("5"), Ok(MenuChoice::Blitz));
        assert_eq!(parse_menu("8"), Ok(MenuChoice::Exit));
        assert_eq!(parse_menu("quit"), Ok(MenuChoice::Exit));
        assert!(parse_menu("9").is_err());
        assert!(parse_menu("").is_err());
    }

    #[test]
    fn test_advice() {
        let err = InputError::OutOfRangeInput {
            value: 0,
            low: 1,
            high: 10,
        };
        assert_eq!(advice(&err), "Please choose a number from 1 to 10.");
    }
}
