//! Hand scoring.

use crate::card::{ACE, Card, JACK, KING};

/// Highest score that does not bust.
pub const BLACKJACK: u32 = 21;

pub(crate) const fn busts(score: u32) -> bool {
    score > BLACKJACK
}

fn card_value(rank: u8) -> u32 {
    match rank {
        ACE => 11,
        JACK..=KING => 10,
        _ => u32::from(rank),
    }
}

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card_value(card.rank());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the score of a set of cards.
///
/// Aces count as 11 unless that would bust the hand, in which case they
/// drop to 1 one at a time. The result does not depend on card order or on
/// whether cards are face up.
#[must_use]
pub fn calculate_score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the cards score over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    busts(calculate_score(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{QUEEN, Suit};

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks
            .iter()
            .zip(Suit::ALL.into_iter().cycle())
            .map(|(&rank, suit)| Card::new(rank, suit, true).unwrap())
            .collect()
    }

    #[test]
    fn scores_reference_hands() {
        assert_eq!(calculate_score(&cards(&[ACE, ACE, 9])), 21);
        assert_eq!(calculate_score(&cards(&[KING, QUEEN])), 20);
        assert_eq!(calculate_score(&cards(&[ACE, KING])), 21);
        assert_eq!(calculate_score(&cards(&[10, 9, 5])), 24);
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn aces_drop_to_one_as_needed() {
        assert_eq!(calculate_score(&cards(&[ACE, ACE])), 12);
        assert_eq!(calculate_score(&cards(&[ACE, ACE, ACE, ACE])), 14);
        assert_eq!(calculate_score(&cards(&[ACE, 6, 9])), 16);
        assert_eq!(calculate_score(&cards(&[ACE, ACE, KING, QUEEN])), 22);
    }

    #[test]
    fn score_ignores_card_order() {
        let hand = cards(&[ACE, 5, ACE, JACK, 3]);
        let expected = calculate_score(&hand);

        let mut reversed = hand.clone();
        reversed.reverse();
        assert_eq!(calculate_score(&reversed), expected);

        for shift in 0..hand.len() {
            let mut rotated = hand.clone();
            rotated.rotate_left(shift);
            assert_eq!(calculate_score(&rotated), expected);
        }
    }

    #[test]
    fn score_ignores_visibility() {
        let mut hand = cards(&[KING, 7]);
        hand[0].set_face_up(false);
        assert_eq!(calculate_score(&hand), 17);
    }

    #[test]
    fn soft_and_bust_flags() {
        assert!(is_soft(&cards(&[ACE, 6])));
        assert!(!is_soft(&cards(&[ACE, 6, KING])));
        assert!(is_bust(&cards(&[10, 9, 5])));
        assert!(!is_bust(&cards(&[ACE, ACE, 9])));
        assert!(!busts(BLACKJACK));
        assert!(busts(BLACKJACK + 1));
    }
}
