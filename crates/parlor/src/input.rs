//! Tokenizing raw console lines into coordinates.
//!
//! Parsers only check the token shape. Range and occupancy checks belong
//! to the rules, so `7,7` parses here and is rejected by the validator.

use parlor_connect_four::{COLS, ROWS};
use tracing::instrument;

/// Malformed console input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Blank line.
    #[display("No input")]
    Empty,

    /// A single numeric token.
    #[display("Only one number: {}", _0)]
    OneNumber(#[error(not(source))] String),

    /// A single non-numeric token.
    #[display("Only one word: {}", _0)]
    OneWord(#[error(not(source))] String),

    /// Anything else that is not exactly two numbers.
    #[display("Expected two numbers, got {:?}", tokens)]
    NotTwoNumbers {
        /// The tokens that were read.
        tokens: Vec<String>,
    },

    /// Not a column letter followed by a row digit.
    #[display("Expected a column letter and a row digit, got {:?}", _0)]
    BadDrop(#[error(not(source))] String),

    /// Not a column letter.
    #[display("Expected a column letter, got {:?}", _0)]
    BadColumn(#[error(not(source))] String),
}

/// Parses a tic-tac-toe move: two integers separated by commas and/or
/// whitespace, row first.
#[instrument]
pub fn parse_coords(line: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Err(InputError::Empty),
        [only] if is_number(only) => Err(InputError::OneNumber(only.to_string())),
        [only] => Err(InputError::OneWord(only.to_string())),
        [row, col] if is_number(row) && is_number(col) => row
            .parse()
            .ok()
            .zip(col.parse().ok())
            .ok_or_else(|| not_two_numbers(&tokens)),
        _ => Err(not_two_numbers(&tokens)),
    }
}

/// Parses a connect four drop such as `a1` into zero-based (column, row).
///
/// Letters are case-insensitive; row 1 is the bottom. Whitespace around
/// and between the two characters is ignored.
#[instrument]
pub fn parse_drop(line: &str) -> Result<(usize, usize), InputError> {
    let compact: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.as_slice() {
        [letter, digit] => column_index(*letter)
            .zip(row_index(*digit))
            .ok_or_else(|| InputError::BadDrop(line.trim().to_string())),
        _ => Err(InputError::BadDrop(line.trim().to_string())),
    }
}

/// Parses a connect four column letter; a trailing row digit is accepted
/// and ignored.
#[instrument]
pub fn parse_column(line: &str) -> Result<usize, InputError> {
    let compact: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    let col = match compact.as_slice() {
        [letter] => column_index(*letter),
        [letter, digit] => row_index(*digit).and(column_index(*letter)),
        _ => None,
    };
    col.ok_or_else(|| InputError::BadColumn(line.trim().to_string()))
}

/// True only for a `Y` or `y` answer.
pub fn parse_replay(line: &str) -> bool {
    matches!(line.trim(), "Y" | "y")
}

/// Board letter for a zero-based column.
pub fn column_letter(col: usize) -> char {
    (b'a' + col as u8) as char
}

fn column_index(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
        .filter(|&col| col < COLS)
}

fn row_index(digit: char) -> Option<usize> {
    digit
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&d| (1..=ROWS).contains(&d))
        .map(|d| d - 1)
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

fn not_two_numbers(tokens: &[&str]) -> InputError {
    InputError::NotTwoNumbers {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_separators() {
        assert_eq!(parse_coords("1,2"), Ok((1, 2)));
        assert_eq!(parse_coords(" 0 2 "), Ok((0, 2)));
        assert_eq!(parse_coords("2 , 1"), Ok((2, 1)));
        assert_eq!(parse_coords("2,,\t0"), Ok((2, 0)));
    }

    #[test]
    fn test_coords_out_of_range_still_parse() {
        assert_eq!(parse_coords("3,7"), Ok((3, 7)));
    }

    #[test]
    fn test_coords_malformed() {
        assert_eq!(parse_coords("   "), Err(InputError::Empty));
        assert_eq!(parse_coords("1"), Err(InputError::OneNumber("1".into())));
        assert_eq!(parse_coords("x"), Err(InputError::OneWord("x".into())));
        assert!(matches!(
            parse_coords("a,b"),
            Err(InputError::NotTwoNumbers { .. })
        ));
        assert!(matches!(
            parse_coords("-1,0"),
            Err(InputError::NotTwoNumbers { .. })
        ));
        assert!(matches!(
            parse_coords("1,2,0"),
            Err(InputError::NotTwoNumbers { .. })
        ));
        assert!(matches!(
            parse_coords("99999999999999999999999,0"),
            Err(InputError::NotTwoNumbers { .. })
        ));
    }

    #[test]
    fn test_drop_letters_and_rows() {
        assert_eq!(parse_drop("a1"), Ok((0, 0)));
        assert_eq!(parse_drop("G6"), Ok((6, 5)));
        assert_eq!(parse_drop("  c 3 "), Ok((2, 2)));
    }

    #[test]
    fn test_drop_malformed() {
        for bad in ["", "a", "h1", "a0", "a7", "1a", "a12", "aa"] {
            assert!(parse_drop(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_column_only() {
        assert_eq!(parse_column("d"), Ok(3));
        assert_eq!(parse_column("D4"), Ok(3));
        assert!(parse_column("h").is_err());
        assert!(parse_column("d9").is_err());
        assert!(parse_column("").is_err());
    }

    #[test]
    fn test_input_error_has_no_source() {
        use std::error::Error;

        let err = parse_coords("7").unwrap_err();
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Only one number: 7");
    }

    #[test]
    fn test_replay_answers() {
        assert!(parse_replay("y"));
        assert!(parse_replay(" Y \n"));
        assert!(!parse_replay("yes"));
        assert!(!parse_replay("n"));
        assert!(!parse_replay(""));
    }

    #[test]
    fn test_column_letters() {
        let letters: String = (0..COLS).map(column_letter).collect();
        assert_eq!(letters, "abcdefg");
    }
}
