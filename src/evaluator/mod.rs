pub(crate) mod detector;
mod face_counts;
mod straight_info;
mod suit_counts;

pub use face_counts::FaceCounts;
pub use straight_info::StraightInfo;
pub use suit_counts::SuitCounts;

use crate::cards::Card;
use crate::hand::{HandError, PokerHand};
use log::debug;
use std::fmt;

/// Poker hand type from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandType {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandType {
    /// Resolution order used by [`evaluate`], strongest first.
    pub const BY_PRIORITY: [HandType; 9] = [
        HandType::StraightFlush,
        HandType::FourOfAKind,
        HandType::FullHouse,
        HandType::Flush,
        HandType::Straight,
        HandType::ThreeOfAKind,
        HandType::TwoPair,
        HandType::OnePair,
        HandType::HighCard,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::OnePair => "One Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a hand: the first hand type, in priority order, whose predicate
/// holds. Falls back to [`HandType::HighCard`].
///
/// ```
/// use poker_hands::evaluator::{evaluate, HandType};
/// use poker_hands::hand::PokerHand;
///
/// let hand: PokerHand = "CA DA HK SK C2".parse().unwrap();
/// assert!(hand.is_one_pair());
/// assert_eq!(evaluate(&hand), HandType::TwoPair);
/// ```
pub fn evaluate(hand: &PokerHand) -> HandType {
    use detector::DETECTORS;

    let hand_type = DETECTORS
        .iter()
        .find(|d| d.detect(hand))
        .map_or(HandType::HighCard, |d| d.hand_type());
    debug!("{hand} -> {hand_type}");
    hand_type
}

/// Build a hand from exactly five cards and classify it.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandType, HandError> {
    let hand = PokerHand::try_new(cards)?;
    Ok(evaluate(&hand))
}

impl PokerHand {
    /// See [`evaluate`].
    pub fn evaluate(&self) -> HandType {
        evaluate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;

    fn eval(s: &str) -> HandType {
        let hand: PokerHand = s.parse().expect("valid hand");
        hand.evaluate()
    }

    #[test]
    fn evaluate_all_types() {
        assert_eq!(eval("HT HJ HQ HK HA"), HandType::StraightFlush);
        assert_eq!(eval("C9 D9 H9 S9 CA"), HandType::FourOfAKind);
        assert_eq!(eval("C3 D3 H3 SJ CJ"), HandType::FullHouse);
        assert_eq!(eval("HK HT H8 H6 H3"), HandType::Flush);
        assert_eq!(eval("C6 D7 H8 S9 CT"), HandType::Straight);
        assert_eq!(eval("CQ DQ HQ ST C2"), HandType::ThreeOfAKind);
        assert_eq!(eval("CJ DJ C9 H9 S2"), HandType::TwoPair);
        assert_eq!(eval("HA DA ST C9 D2"), HandType::OnePair);
        assert_eq!(eval("HA DK S7 C5 D2"), HandType::HighCard);
    }

    #[test]
    fn wheel_is_high_card() {
        assert_eq!(eval("CA D2 H3 S4 C5"), HandType::HighCard);
        assert_eq!(eval("HA H2 H3 H4 H5"), HandType::Flush);
    }

    #[test]
    fn unshuffled_deck_deals_a_straight_flush() {
        let mut deck = Deck::standard();
        let hand = PokerHand::deal_from(&mut deck).unwrap();
        assert_eq!(hand.evaluate(), HandType::StraightFlush);
        // next five are S5..S9
        let hand = PokerHand::deal_from(&mut deck).unwrap();
        assert_eq!(hand.to_string(), "S5, S6, S7, S8, S9");
        assert_eq!(hand.evaluate(), HandType::StraightFlush);
    }

    #[test]
    fn labels() {
        assert_eq!(HandType::FourOfAKind.to_string(), "Four of a Kind");
        assert_eq!(HandType::ThreeOfAKind.label(), "Three of a Kind");
        assert_eq!(HandType::HighCard.to_string(), "High Card");
    }

    #[test]
    fn strength_order_matches_priority() {
        let mut sorted = HandType::BY_PRIORITY;
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, HandType::BY_PRIORITY);
        assert!(HandType::StraightFlush > HandType::HighCard);
    }

    #[test]
    fn evaluate_cards_checks_size() {
        let four = parse_cards("C2 C3 C4 C5").unwrap();
        assert_eq!(evaluate_cards(&four), Err(HandError::InvalidSize(4)));
        let five = parse_cards("C2 C3 C4 C5 C6").unwrap();
        assert_eq!(evaluate_cards(&five), Ok(HandType::StraightFlush));
    }
}
