//! Terminal presentation surface.

use std::io::{self, BufRead, Write};

use crate::pile::CardPile;
use crate::presenter::{Notice, Presenter, TableView};
use crate::result::{Outcome, RoundSummary};

const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// Deal another round.
    Again,
    /// Stop playing.
    Quit,
    /// The answer was neither yes nor no. The session ends.
    Invalid,
}

/// A [`Presenter`] that reads answers from `input` and writes the table to
/// `output`.
///
/// Answers are trimmed and matched case-insensitively against `y` and `n`.
#[derive(Debug)]
pub struct ConsoleTable<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleTable<R, W> {
    /// Creates a console table over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the table and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed, lowercased line. Returns `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn write_hands(&mut self, house: &CardPile, player: &CardPile) -> io::Result<()> {
        writeln!(
            self.output,
            "######################################\n\
             \t         House Holds:\n\
             ######################################\n\
             {house}\n"
        )?;
        writeln!(
            self.output,
            "--------------------------------------\n\
             \t          You Hold:\n\
             --------------------------------------\n\
             {player}\n"
        )?;
        self.output.flush()
    }

    /// Asks whether to play another round.
    ///
    /// `y` clears the screen, `n` says goodbye, anything else ends the
    /// session with a notice. End of input counts as `n` without a message.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_replay(&mut self) -> io::Result<Replay> {
        writeln!(self.output, "\nWould you like to play again? (Y/N)\n")?;
        self.output.flush()?;

        let replay = match self.read_answer()?.as_deref() {
            None => return Ok(Replay::Quit),
            Some("y") => {
                write!(self.output, "{CLEAR_SCREEN}")?;
                Replay::Again
            }
            Some("n") => {
                writeln!(self.output, "Thanks for playing! Goodbye!")?;
                Replay::Quit
            }
            Some(_) => {
                writeln!(self.output, "Invalid input. Exiting the game.")?;
                Replay::Invalid
            }
        };

        self.output.flush()?;
        Ok(replay)
    }
}

impl<R: BufRead, W: Write> Presenter for ConsoleTable<R, W> {
    fn display(&mut self, table: &TableView<'_>) -> io::Result<()> {
        self.write_hands(table.house, table.player)
    }

    fn request_draw(&mut self, _table: &TableView<'_>) -> io::Result<bool> {
        writeln!(
            self.output,
            "|---------------------------------------------------|\n\
             | Would you like to draw another card? Type Y or N  |\n\
             |---------------------------------------------------|"
        )?;
        self.output.flush()?;

        loop {
            match self.read_answer()?.as_deref() {
                Some("y") => return Ok(true),
                Some("n") => return Ok(false),
                Some(_) => {
                    writeln!(self.output, "Invalid input. Please type 'Y' or 'N'.")?;
                    self.output.flush()?;
                }
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input closed while waiting for a draw decision",
                    ));
                }
            }
        }
    }

    fn notice(&mut self, notice: Notice) -> io::Result<()> {
        writeln!(self.output, "{notice}")?;
        self.output.flush()
    }

    fn announce_outcome(&mut self, summary: &RoundSummary) -> io::Result<()> {
        let house: CardPile = summary.house.iter().copied().collect();
        let player: CardPile = summary.player.iter().copied().collect();
        self.write_hands(&house, &player)?;

        writeln!(
            self.output,
            "House Score: {}, Your Score: {}",
            summary.house_score, summary.player_score
        )?;

        let (banner, reason) = match summary.outcome {
            Outcome::PlayerBust => ("House Wins!", "You Busted"),
            Outcome::HouseBust => ("You Win!", "House Busted"),
            Outcome::PlayerHigher => ("You Win!", "Your Score is Higher"),
            Outcome::HouseHigher => ("House Wins!", "House Score is Higher"),
            Outcome::Tie => ("It's a Tie", "Both Scores are Equal"),
        };
        let rule = "-".repeat(banner.len() + 2);
        writeln!(self.output, "|{rule}|\n| {banner} |\n|{rule}|\n({reason})")?;

        writeln!(self.output, "\nThanks for playing BlackJack!\n")?;
        self.output.flush()
    }
}
