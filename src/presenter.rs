//! The contract between the engine and whatever shows the game to a human.

use core::fmt;
use std::io;

use crate::pile::CardPile;
use crate::result::RoundSummary;

/// Read-only snapshot of the table passed to the presenter.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The house's cards. The hole card stays face down until the round ends.
    pub house: &'a CardPile,
    /// The player's cards.
    pub player: &'a CardPile,
    /// Cards left in the draw deck.
    pub cards_remaining: usize,
}

/// User-facing messages about deck exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The deck was empty when the round was started.
    DeckEmptyAtStart,
    /// Fewer than four cards were left for the initial deal.
    NotEnoughCards,
    /// The deck was empty when play began.
    DeckEmptyAtPlay,
    /// The deck ran out during play.
    DeckDepleted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DeckEmptyAtStart => "Deck is empty. Cannot start the game.",
            Self::NotEnoughCards => "Not enough cards to deal. Ending the game.",
            Self::DeckEmptyAtPlay => "Deck is empty. Game cannot proceed.",
            Self::DeckDepleted => "Deck depleted. Ending the game.",
        })
    }
}

/// A presentation surface driven by [`Game`](crate::Game).
///
/// The surface never holds engine state: everything it shows is handed to it
/// as plain data.
pub trait Presenter {
    /// Called once when a round is created, with the empty table.
    fn bind(&mut self, _table: &TableView<'_>) {}

    /// Shows both hands, honoring each card's visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be written to.
    fn display(&mut self, table: &TableView<'_>) -> io::Result<()>;

    /// Blocks until the player chooses to draw (`true`) or stand (`false`).
    ///
    /// Invalid answers are handled by the surface itself.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn request_draw(&mut self, table: &TableView<'_>) -> io::Result<bool>;

    /// Reports a deck-exhaustion message.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be written to.
    fn notice(&mut self, notice: Notice) -> io::Result<()>;

    /// Reports the end of the round. Called exactly once per round.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be written to.
    fn announce_outcome(&mut self, summary: &RoundSummary) -> io::Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn bind(&mut self, table: &TableView<'_>) {
        (**self).bind(table);
    }

    fn display(&mut self, table: &TableView<'_>) -> io::Result<()> {
        (**self).display(table)
    }

    fn request_draw(&mut self, table: &TableView<'_>) -> io::Result<bool> {
        (**self).request_draw(table)
    }

    fn notice(&mut self, notice: Notice) -> io::Result<()> {
        (**self).notice(notice)
    }

    fn announce_outcome(&mut self, summary: &RoundSummary) -> io::Result<()> {
        (**self).announce_outcome(summary)
    }
}
