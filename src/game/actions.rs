use log::debug;

use crate::error::RoundError;
use crate::hand::{busts, calculate_score};
use crate::pile::IndexSource;
use crate::presenter::{Notice, Presenter, TableView};

use super::{Game, Phase};

impl<P: Presenter, S: IndexSource> Game<P, S> {
    /// Asks the player whether to draw and applies the answer.
    ///
    /// A bust ends the turn for both sides. Standing, or asking for a card
    /// from an empty deck, ends the player's turn.
    ///
    /// Returns `true` if a card was drawn.
    fn player_step(&mut self) -> Result<bool, RoundError> {
        let table = TableView {
            house: &self.house,
            player: &self.player,
            cards_remaining: self.deck.len(),
        };
        let wants_card = self.presenter.request_draw(&table)?;

        if wants_card && !self.deck.is_empty() {
            let card = self.draw()?;
            self.player.add(card);

            let score = calculate_score(self.player.cards());
            debug!("player draws {card}, score {score}");
            if busts(score) {
                self.player_done = true;
                self.house_done = true;
            }
            return Ok(true);
        }

        debug!("player stands");
        self.player_done = true;
        Ok(false)
    }

    /// Alternates house and player turns until both are done.
    ///
    /// Each iteration lets the house act, then the player, refreshing the
    /// table after every card drawn. Running out of cards stops the loop
    /// where it is; sides that have not finished are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards were never dealt or the round is already
    /// resolved. A round skipped for an empty deck only reports the empty
    /// deck. Presenter failures are passed through.
    pub fn play(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::Playing && !self.is_skipped() {
            return Err(RoundError::InvalidState);
        }

        if self.deck.is_empty() {
            return self.report(Notice::DeckEmptyAtPlay);
        }

        while !self.is_finished() {
            if self.deck.is_empty() {
                self.report(Notice::DeckDepleted)?;
                break;
            }

            if !self.house_done && self.house_step()? {
                self.refresh()?;
            }

            if !self.player_done && self.player_step()? {
                self.refresh()?;
            }
        }

        Ok(())
    }
}
