//! Card piles and the random index sources used to draw from them.

use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::PileError;

/// Supplies the position of the next card to remove from a pile.
///
/// Implementations must return an index in `0..len`. `len` is never zero.
pub trait IndexSource {
    /// Picks an index in `0..len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform index source backed by a seeded `ChaCha8` generator.
///
/// Every remaining card has the same chance of being picked on each call, so
/// repeated draws behave like a Fisher-Yates shuffle dealt one card at a time.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Index source that plays back a fixed script.
///
/// The script repeats once exhausted. An empty script always picks index 0,
/// so cards come out in pile order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedIndices {
    /// Creates a source that yields `script` in order.
    #[must_use]
    pub const fn new(script: Vec<usize>) -> Self {
        Self { script, next: 0 }
    }
}

impl IndexSource for ScriptedIndices {
    fn pick(&mut self, _len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.next % self.script.len()];
        self.next += 1;
        index
    }
}

/// An ordered collection of cards.
///
/// Used for the draw deck and for each side's hand. Cards are appended at the
/// end and removed from random positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPile {
    cards: Vec<Card>,
}

impl CardPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding `decks` full decks, every card face up.
    ///
    /// Cards are enumerated rank by rank, each rank in suit order.
    #[must_use]
    pub fn full_deck(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for rank in MIN_RANK..=MAX_RANK {
                for suit in Suit::ALL {
                    cards.push(Card::in_range(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Adds a card to the end of the pile.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at the position picked by `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the pile has no cards, or
    /// [`PileError::IndexOutOfRange`] if `source` picks past the end.
    pub fn remove_random<S: IndexSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Card, PileError> {
        let len = self.cards.len();
        if len == 0 {
            return Err(PileError::Empty);
        }

        let index = source.pick(len);
        if index >= len {
            return Err(PileError::IndexOutOfRange { index, len });
        }

        Ok(self.cards.remove(index))
    }

    /// Returns the cards in the pile.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card added to the pile.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns a mutable reference to the first card added to the pile.
    pub fn first_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders each card on its own line.
    ///
    /// Face-down cards render as `?`.
    #[must_use]
    pub fn render(&self) -> String {
        self.cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Card> for CardPile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
