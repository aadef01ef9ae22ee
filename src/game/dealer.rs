use log::{debug, info};

use crate::error::RoundError;
use crate::hand::calculate_score;
use crate::pile::IndexSource;
use crate::presenter::Presenter;
use crate::result::RoundSummary;

use super::{Game, Phase};

impl<P: Presenter, S: IndexSource> Game<P, S> {
    /// Runs one step of the house policy.
    ///
    /// The house draws a single card while its score is below
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions::dealer_stands_on)
    /// and the deck has cards; otherwise it is done.
    ///
    /// Returns `true` if a card was drawn.
    pub(super) fn house_step(&mut self) -> Result<bool, RoundError> {
        let score = calculate_score(self.house.cards());

        if !self.deck.is_empty() && score < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.house.add(card);
            debug!("house draws {card} on {score}");
            return Ok(true);
        }

        debug!("house stands on {score}");
        self.house_done = true;
        Ok(false)
    }

    /// Reveals the hole card and announces the outcome.
    ///
    /// Returns the same summary handed to the presenter.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards were never dealt or the round was
    /// already resolved, or if the presenter fails.
    pub fn end(&mut self) -> Result<RoundSummary, RoundError> {
        if self.phase != Phase::Playing && !self.is_skipped() {
            return Err(RoundError::InvalidState);
        }

        if let Some(hole) = self.house.first_mut() {
            hole.set_face_up(true);
        }
        self.phase = Phase::Resolved;

        let summary = self.summary();
        info!(
            "round over: house {}, player {}, {:?}",
            summary.house_score, summary.player_score, summary.outcome
        );

        self.presenter.announce_outcome(&summary)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::card::{Card, KING, Suit};
    use crate::options::GameOptions;
    use crate::pile::{CardPile, ScriptedIndices};
    use crate::presenter::{Notice, Presenter, TableView};
    use crate::result::RoundSummary;

    use super::*;

    struct Quiet;

    impl Presenter for Quiet {
        fn display(&mut self, _table: &TableView<'_>) -> io::Result<()> {
            Ok(())
        }

        fn request_draw(&mut self, _table: &TableView<'_>) -> io::Result<bool> {
            Ok(false)
        }

        fn notice(&mut self, _notice: Notice) -> io::Result<()> {
            Ok(())
        }

        fn announce_outcome(&mut self, _summary: &RoundSummary) -> io::Result<()> {
            Ok(())
        }
    }

    fn deck(ranks: &[u8]) -> CardPile {
        ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Hearts, true).unwrap())
            .collect()
    }

    fn dealt_game(ranks: &[u8]) -> Game<Quiet, ScriptedIndices> {
        let mut game = Game::with_deck(
            Quiet,
            GameOptions::default(),
            deck(ranks),
            ScriptedIndices::default(),
        );
        game.start().unwrap();
        game
    }

    #[test]
    fn house_on_sixteen_draws_exactly_one_card() {
        // hole 10, up 6, player 9 + 8, then a 2 for the house
        let mut game = dealt_game(&[10, 6, 9, 8, 2, 5]);
        assert_eq!(calculate_score(game.house().cards()), 16);

        assert!(game.house_step().unwrap());
        assert_eq!(game.house().len(), 3);
        assert_eq!(game.deck().len(), 1);
        assert!(!game.house_done());

        assert!(!game.house_step().unwrap());
        assert_eq!(game.house().len(), 3);
        assert!(game.house_done());
    }

    #[test]
    fn house_on_seventeen_stands_without_drawing() {
        let mut game = dealt_game(&[KING, 7, 9, 8, 2]);

        assert!(!game.house_step().unwrap());
        assert!(game.house_done());
        assert_eq!(game.house().len(), 2);
        assert_eq!(game.deck().len(), 1);
    }

    #[test]
    fn house_stands_when_deck_is_empty() {
        let mut game = dealt_game(&[2, 3, 9, 8]);

        assert!(!game.house_step().unwrap());
        assert!(game.house_done());
    }

    #[test]
    fn stand_threshold_follows_options() {
        let mut game = Game::with_deck(
            Quiet,
            GameOptions::default().with_dealer_stands_on(19),
            deck(&[KING, 8, 9, 8, 2]),
            ScriptedIndices::default(),
        );
        game.start().unwrap();

        assert!(game.house_step().unwrap());
        assert_eq!(calculate_score(game.house().cards()), 20);
    }

    #[test]
    fn end_reveals_hole_card_once() {
        let mut game = dealt_game(&[KING, 7, 9, 8]);
        assert!(!game.house().cards()[0].face_up());

        let summary = game.end().unwrap();
        assert!(game.house().cards()[0].face_up());
        assert!(summary.house.iter().all(Card::face_up));
        assert_eq!(game.phase(), Phase::Resolved);
        assert!(matches!(game.end(), Err(RoundError::InvalidState)));
    }
}
