//! Per-game console text: prompts, parsing and messages.

use crate::config::{ConsoleConfig, DropInput};
use crate::input::{self, InputError};
use crate::render::{ConnectFourView, TicTacToeView, drop_label};
use parlor_connect_four::{ConnectFour, DropMove, available_moves};
use parlor_core::{Board, Coord, MoveError, Player, Rules};
use parlor_tictactoe::TicTacToe;

/// Text surface of one game variant.
pub trait ConsoleVariant {
    /// Rules driving the session.
    type Rules: Rules;

    /// First line of every new game.
    fn banner(&self) -> &'static str;

    /// Question asked after a game ends.
    fn replay_prompt(&self) -> &'static str {
        "Another game? Enter Y or y for yes: "
    }

    /// When true, the final board is drawn after the outcome message
    /// instead of right after the winning move.
    fn announces_outcome_first(&self) -> bool {
        false
    }

    /// Draws the board.
    fn render(&self, board: &Board) -> String;

    /// Turn prompt, written without a trailing newline.
    fn prompt(&self, player: Player, board: &Board) -> String;

    /// Tokenizes one input line.
    fn parse(&self, line: &str) -> Result<<Self::Rules as Rules>::Move, InputError>;

    /// Feedback printed after a line parses, before validation.
    fn echo(&self, _mv: &<Self::Rules as Rules>::Move) -> Option<String> {
        None
    }

    /// Message for malformed input.
    fn describe_input_error(&self, err: &InputError) -> String;

    /// Message for a move the rules rejected.
    fn describe_rejection(&self, err: &MoveError) -> String;
}

fn turn_header(player: Player) -> String {
    format!("{player}'s turn.\nWhere do you want your {player} placed?\n")
}

const TTT_INVALID: &str = "Invalid entry: try again.\nRow & column numbers must be either 0, 1, or 2.";

/// Tic-tac-toe console.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeConsole;

impl ConsoleVariant for TicTacToeConsole {
    type Rules = TicTacToe;

    fn banner(&self) -> &'static str {
        "New Game: X goes first."
    }

    fn replay_prompt(&self) -> &'static str {
        "Another game? Enter Y or y for yes.\n"
    }

    fn announces_outcome_first(&self) -> bool {
        true
    }

    fn render(&self, board: &Board) -> String {
        TicTacToeView(board).to_string()
    }

    fn prompt(&self, player: Player, _board: &Board) -> String {
        format!(
            "{}Please enter row number and column number separated by a comma.\n",
            turn_header(player)
        )
    }

    fn parse(&self, line: &str) -> Result<Coord, InputError> {
        input::parse_coords(line).map(|(row, col)| Coord::new(row, col))
    }

    fn echo(&self, mv: &Coord) -> Option<String> {
        Some(format!(
            "You have entered row #{}\n{:>20} #{}",
            mv.row, "and column", mv.col
        ))
    }

    fn describe_input_error(&self, err: &InputError) -> String {
        match err {
            InputError::OneNumber(n) => format!(
                "You entered only one number: {n}\nPlease enter two numbers 0, 1, or 2, for example: 1,2"
            ),
            InputError::OneWord(w) => format!(
                "You entered only one alphabet: {w}\nUse numbers 0, 1, or 2, for example: 1,2"
            ),
            InputError::NotTwoNumbers { tokens } => format!(
                "You have entered row #{}\n{:>20} #{}\n{}",
                tokens.first().map(String::as_str).unwrap_or_default(),
                "and column",
                tokens.get(1).map(String::as_str).unwrap_or_default(),
                TTT_INVALID
            ),
            _ => TTT_INVALID.to_string(),
        }
    }

    fn describe_rejection(&self, err: &MoveError) -> String {
        match err {
            MoveError::CellOccupied { .. } => {
                "That cell is already taken.\nPlease make another selection.".to_string()
            }
            _ => TTT_INVALID.to_string(),
        }
    }
}

/// Connect four console.
#[derive(Debug, Clone)]
pub struct ConnectFourConsole {
    drop_input: DropInput,
    show_available_moves: bool,
}

impl ConnectFourConsole {
    /// Creates the console from its configuration.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            drop_input: *config.drop_input(),
            show_available_moves: *config.show_available_moves(),
        }
    }
}

impl Default for ConnectFourConsole {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl ConsoleVariant for ConnectFourConsole {
    type Rules = ConnectFour;

    fn banner(&self) -> &'static str {
        "New Game: X goes first"
    }

    fn render(&self, board: &Board) -> String {
        ConnectFourView(board).to_string()
    }

    fn prompt(&self, player: Player, board: &Board) -> String {
        let mut prompt = turn_header(player);
        if self.show_available_moves {
            let labels: Vec<String> = available_moves(board).into_iter().map(drop_label).collect();
            prompt.push_str(&format!(
                "Available positions are: [{}]\n\n",
                labels.join(", ")
            ));
        }
        prompt.push_str(match self.drop_input {
            DropInput::ExplicitRow => "Please enter column-letter and row-number (e.g., a1): ",
            DropInput::ColumnOnly => "Please enter a column letter (e.g., a): ",
        });
        prompt
    }

    fn parse(&self, line: &str) -> Result<DropMove, InputError> {
        match self.drop_input {
            DropInput::ExplicitRow => {
                input::parse_drop(line).map(|(col, row)| DropMove::At { col, row })
            }
            DropInput::ColumnOnly => input::parse_column(line).map(DropMove::Column),
        }
    }

    fn describe_input_error(&self, _err: &InputError) -> String {
        "Invalid entry: try again.".to_string()
    }

    fn describe_rejection(&self, _err: &MoveError) -> String {
        "Invalid entry: try again.".to_string()
    }
}
