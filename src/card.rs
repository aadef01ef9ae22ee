//! Card types and deck utilities.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::CardError;

/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace.
pub const ACE: u8 = 14;

/// Lowest valid rank.
pub const MIN_RANK: u8 = 2;
/// Highest valid rank.
pub const MAX_RANK: u8 = ACE;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const RANK_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for an index in `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Two cards are equal when rank and suit match; whether a card is face up
/// does not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `2..=14`.
    pub const fn new(rank: u8, suit: Suit, face_up: bool) -> Result<Self, CardError> {
        if !matches!(rank, MIN_RANK..=MAX_RANK) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self {
            rank,
            suit,
            face_up,
        })
    }

    /// Creates a new card from a rank and a suit index (0 = Clubs, 1 = Diamonds,
    /// 2 = Hearts, 3 = Spades).
    ///
    /// # Errors
    ///
    /// Returns an error if the rank or the suit index is out of range.
    pub const fn from_indices(rank: u8, suit_index: u8, face_up: bool) -> Result<Self, CardError> {
        match Suit::from_index(suit_index) {
            Some(suit) => Self::new(rank, suit, face_up),
            None => Err(CardError::InvalidSuit(suit_index)),
        }
    }

    /// Face-up card for a rank already known to lie in `2..=14`.
    pub(crate) const fn in_range(rank: u8, suit: Suit) -> Self {
        debug_assert!(matches!(rank, MIN_RANK..=MAX_RANK));
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Returns the rank (2-10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face up or face down.
    pub const fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        RANK_NAMES[(self.rank - MIN_RANK) as usize]
    }

    /// Compares two cards by rank only.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{} of {}", self.rank_name(), self.suit)
        } else {
            f.write_str("?")
        }
    }
}
