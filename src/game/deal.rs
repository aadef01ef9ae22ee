use log::debug;

use crate::error::RoundError;
use crate::hand::calculate_score;
use crate::pile::IndexSource;
use crate::presenter::{Notice, Presenter};

use super::{Game, Phase};

/// Cards needed for the initial deal: two per side.
const INITIAL_DEAL: usize = 4;

impl<P: Presenter, S: IndexSource> Game<P, S> {
    /// Deals the opening hands and shows the table.
    ///
    /// The house gets a face-down hole card followed by a face-up card; the
    /// player gets two face-up cards. An empty deck leaves the round
    /// untouched. Fewer than four cards end both turns without dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the presenter
    /// fails.
    pub fn start(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::NotStarted {
            return Err(RoundError::InvalidState);
        }

        if self.deck.is_empty() {
            return self.report(Notice::DeckEmptyAtStart);
        }

        self.phase = Phase::Dealing;
        self.deal_initial_cards()?;
        self.phase = Phase::Playing;

        self.refresh()
    }

    fn deal_initial_cards(&mut self) -> Result<(), RoundError> {
        if self.deck.len() < INITIAL_DEAL {
            self.house_done = true;
            self.player_done = true;
            return self.report(Notice::NotEnoughCards);
        }

        let mut hole = self.draw()?;
        hole.set_face_up(false);
        self.house.add(hole);

        let up = self.draw()?;
        self.house.add(up);

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add(card);
        }

        debug!(
            "dealt hole card {} of {}, up card {up}, player score {}",
            hole.rank_name(),
            hole.suit(),
            calculate_score(self.player.cards())
        );
        Ok(())
    }
}
