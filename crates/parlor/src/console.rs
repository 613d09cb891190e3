//! Line-based game loop over any reader and writer.
//!
//! The loop dispatches on the session phase: it reads a move while a move
//! is expected, shows the outcome when a game ends, and asks whether to
//! play again. End of input is treated as a "no" to every question.

use crate::input::parse_replay;
use crate::variants::ConsoleVariant;
use parlor_core::{Outcome, Phase, PhaseError, Rules, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// Failure of the interactive loop itself (never a rule violation).
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),
    /// The loop asked the session for a transition it could not make.
    #[display("Session out of step: {}", _0)]
    Phase(PhaseError),
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Games started, including one abandoned at end of input.
    pub games: usize,
    /// Games that reached a win or draw.
    pub completed: usize,
}

/// Terminal endpoints.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes text followed by a newline.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes a prompt and reads one line; `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Plays games of one variant until the players decline a replay.
#[instrument(skip_all, fields(variant = <V::Rules as Rules>::NAME))]
pub fn run<V, R, W>(variant: &V, console: &mut Console<R, W>) -> Result<SessionSummary, ConsoleError>
where
    V: ConsoleVariant,
    R: BufRead,
    W: Write,
{
    let mut session = Session::<V::Rules>::new();
    let mut summary = SessionSummary {
        games: 1,
        completed: 0,
    };
    announce_game(variant, console, &session)?;

    loop {
        match session.phase() {
            Phase::AwaitingMove(player) => {
                let Some(line) = console.ask(&variant.prompt(player, session.board()))? else {
                    info!("End of input during a game");
                    break;
                };

                let mv = match variant.parse(&line) {
                    Ok(mv) => mv,
                    Err(e) => {
                        debug!(error = %e, "Malformed input");
                        console.say(variant.describe_input_error(&e))?;
                        console.say("")?;
                        continue;
                    }
                };

                if let Some(echo) = variant.echo(&mv) {
                    console.say(echo)?;
                }

                match session.submit(mv) {
                    Ok(placement) => {
                        console.say("Thank you for your selection.")?;
                        console.say("")?;
                        if !(placement.outcome.is_terminal() && variant.announces_outcome_first()) {
                            console.say(variant.render(session.board()))?;
                        }
                    }
                    Err(e) => {
                        console.say(variant.describe_rejection(&e))?;
                        console.say("")?;
                    }
                }
            }
            Phase::GameOver(_) => {
                let outcome = session.request_replay()?;
                summary.completed += 1;
                console.say(outcome_message(outcome))?;
                console.say("")?;
                if variant.announces_outcome_first() {
                    console.say(variant.render(session.board()))?;
                }
            }
            Phase::AwaitingReplayDecision => {
                let answer = console.ask(variant.replay_prompt())?;
                console.say("")?;
                let again = answer.as_deref().is_some_and(parse_replay);

                if session.decide_replay(again)? == Phase::Terminated {
                    break;
                }
                summary.games += 1;
                announce_game(variant, console, &session)?;
            }
            Phase::Terminated => break,
            actual @ Phase::Evaluating => {
                return Err(PhaseError {
                    expected: "AwaitingMove",
                    actual,
                }
                .into());
            }
        }
    }

    console.say("Thank you for playing!")?;
    info!(games = summary.games, completed = summary.completed, "Session finished");
    Ok(summary)
}

fn announce_game<V, R, W>(
    variant: &V,
    console: &mut Console<R, W>,
    session: &Session<V::Rules>,
) -> io::Result<()>
where
    V: ConsoleVariant,
    R: BufRead,
    W: Write,
{
    console.say("")?;
    console.say(variant.banner())?;
    console.say("")?;
    console.say(variant.render(session.board()))
}

fn outcome_message(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(player) => format!("{player} IS THE WINNER!!!"),
        None if outcome.is_terminal() => "DRAW! NOBODY WINS!".to_string(),
        None => String::new(),
    }
}
