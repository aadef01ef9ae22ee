//! Game engine and round state.

use log::warn;

use crate::card::Card;
use crate::error::{PileError, RoundError};
use crate::hand::calculate_score;
use crate::options::GameOptions;
use crate::pile::{CardPile, IndexSource, SeededSource};
use crate::presenter::{Notice, Presenter, TableView};
use crate::result::{Outcome, RoundSummary};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::Phase;

/// A single round of blackjack between the house and one player.
///
/// The game owns the draw deck, both hands, the index source used to pick
/// cards, and the presenter it reports to. Run a round with [`Game::start`],
/// [`Game::play`] and [`Game::end`]; start a fresh round by creating a new
/// game.
///
/// # Example
///
/// ```
/// use std::io;
///
/// use hole21::{Game, GameOptions, Notice, Presenter, RoundSummary, SeededSource, TableView};
///
/// struct AlwaysStand;
///
/// impl Presenter for AlwaysStand {
///     fn display(&mut self, _table: &TableView<'_>) -> io::Result<()> {
///         Ok(())
///     }
///     fn request_draw(&mut self, _table: &TableView<'_>) -> io::Result<bool> {
///         Ok(false)
///     }
///     fn notice(&mut self, _notice: Notice) -> io::Result<()> {
///         Ok(())
///     }
///     fn announce_outcome(&mut self, _summary: &RoundSummary) -> io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut game = Game::new(AlwaysStand, GameOptions::default(), SeededSource::new(7));
/// game.start().unwrap();
/// game.play().unwrap();
/// let summary = game.end().unwrap();
/// assert_eq!(summary.player.len(), 2);
/// ```
pub struct Game<P, S = SeededSource> {
    deck: CardPile,
    house: CardPile,
    player: CardPile,
    house_done: bool,
    player_done: bool,
    phase: Phase,
    options: GameOptions,
    source: S,
    presenter: P,
}

impl<P: Presenter, S: IndexSource> Game<P, S> {
    /// Creates a round with a freshly built deck and binds the presenter.
    #[must_use]
    pub fn new(presenter: P, options: GameOptions, source: S) -> Self {
        let deck = CardPile::full_deck(options.decks);
        Self::with_deck(presenter, options, deck, source)
    }

    /// Creates a round that draws from `deck` instead of a fresh deck.
    #[must_use]
    pub fn with_deck(presenter: P, options: GameOptions, deck: CardPile, source: S) -> Self {
        let mut game = Self {
            deck,
            house: CardPile::new(),
            player: CardPile::new(),
            house_done: false,
            player_done: false,
            phase: Phase::NotStarted,
            options,
            source,
            presenter,
        };

        let table = TableView {
            house: &game.house,
            player: &game.player,
            cards_remaining: game.deck.len(),
        };
        game.presenter.bind(&table);
        game
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, PileError> {
        self.deck.remove_random(&mut self.source)
    }

    /// Shows the current table on the presenter.
    fn refresh(&mut self) -> Result<(), RoundError> {
        let table = TableView {
            house: &self.house,
            player: &self.player,
            cards_remaining: self.deck.len(),
        };
        self.presenter.display(&table)?;
        Ok(())
    }

    fn report(&mut self, notice: Notice) -> Result<(), RoundError> {
        warn!("{notice}");
        self.presenter.notice(notice)?;
        Ok(())
    }

    /// Whether `start` found an empty deck and left the round undealt.
    fn is_skipped(&self) -> bool {
        self.phase == Phase::NotStarted && self.deck.is_empty()
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the options this round was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the draw deck.
    pub const fn deck(&self) -> &CardPile {
        &self.deck
    }

    /// Returns the house's cards.
    pub const fn house(&self) -> &CardPile {
        &self.house
    }

    /// Returns the player's cards.
    pub const fn player(&self) -> &CardPile {
        &self.player
    }

    /// Returns whether the house has finished its turn.
    pub const fn house_done(&self) -> bool {
        self.house_done
    }

    /// Returns whether the player has finished their turn.
    pub const fn player_done(&self) -> bool {
        self.player_done
    }

    /// Returns whether both sides have finished.
    pub const fn is_finished(&self) -> bool {
        self.house_done && self.player_done
    }

    /// Returns a snapshot of the table.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            house: &self.house,
            player: &self.player,
            cards_remaining: self.deck.len(),
        }
    }

    /// Scores both hands as they stand now.
    pub fn summary(&self) -> RoundSummary {
        let house_score = calculate_score(self.house.cards());
        let player_score = calculate_score(self.player.cards());

        RoundSummary {
            house: self.house.cards().to_vec(),
            player: self.player.cards().to_vec(),
            house_score,
            player_score,
            outcome: Outcome::decide(player_score, house_score),
        }
    }

    /// Returns the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the round and returns the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
