//! Round result types.

use crate::card::Card;
use crate::hand::busts;

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player wins.
    Player,
    /// The house wins.
    House,
    /// Neither side wins.
    Tie,
}

/// How the round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21. Checked first, so it applies even if the house
    /// busted too.
    PlayerBust,
    /// House went over 21.
    HouseBust,
    /// Player scored higher.
    PlayerHigher,
    /// House scored higher.
    HouseHigher,
    /// Both scores are equal.
    Tie,
}

impl Outcome {
    /// Decides the round from the final scores.
    #[must_use]
    pub fn decide(player_score: u32, house_score: u32) -> Self {
        if busts(player_score) {
            Self::PlayerBust
        } else if busts(house_score) {
            Self::HouseBust
        } else if player_score > house_score {
            Self::PlayerHigher
        } else if player_score < house_score {
            Self::HouseHigher
        } else {
            Self::Tie
        }
    }

    /// Returns the side that won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::PlayerBust | Self::HouseHigher => Winner::House,
            Self::HouseBust | Self::PlayerHigher => Winner::Player,
            Self::Tie => Winner::Tie,
        }
    }
}

/// Final state of a round, handed to the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The house's cards, hole card revealed.
    pub house: Vec<Card>,
    /// The player's cards.
    pub player: Vec<Card>,
    /// The house's final score.
    pub house_score: u32,
    /// The player's final score.
    pub player_score: u32,
    /// How the round was decided.
    pub outcome: Outcome,
}
