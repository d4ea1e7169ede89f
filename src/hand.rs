use crate::cards::{parse_cards, Card, CardParseError};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{FaceCounts, StraightInfo, SuitCounts};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a poker hand needs exactly 5 cards, got {0}")]
    InvalidSize(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Five cards, sorted by the card order, with their suit and face summaries.
///
/// The summaries are computed once when the hand is built; every rank
/// predicate is a pure function of them.
///
/// ```
/// use poker_hands::deck::Deck;
/// use poker_hands::hand::PokerHand;
///
/// let mut deck = Deck::standard();
/// let hand = PokerHand::deal_from(&mut deck).unwrap();
/// assert_eq!(hand.to_string(), "ST, SJ, SQ, SK, SA");
/// assert!(hand.is_straight_flush());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PokerHand {
    cards: [Card; 5],
    suit_counts: SuitCounts,
    face_counts: FaceCounts,
}

impl PokerHand {
    pub const SIZE: usize = 5;

    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let mut sorted: [Card; 5] =
            cards.try_into().map_err(|_| HandError::InvalidSize(cards.len()))?;
        sorted.sort();
        Ok(Self {
            cards: sorted,
            suit_counts: SuitCounts::from_cards(&sorted),
            face_counts: FaceCounts::from_cards(&sorted),
        })
    }

    /// Deal five cards off the top of `deck` and build a hand from them.
    ///
    /// Running out of cards, partway or entirely, is `DeckError::Empty`; the
    /// deck is left untouched in that case.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, HandError> {
        let cards = deck.deal_n(Self::SIZE).map_err(|e| match e {
            DeckError::NotEnoughCards { .. } => DeckError::Empty,
            other => other,
        })?;
        Self::try_new(&cards)
    }

    /// The cards in ascending card order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn suit_counts(&self) -> &SuitCounts {
        &self.suit_counts
    }

    pub fn face_counts(&self) -> &FaceCounts {
        &self.face_counts
    }

    pub fn is_flush(&self) -> bool {
        self.suit_counts.flush_suit().is_some()
    }

    pub fn is_straight(&self) -> bool {
        StraightInfo::detect(&self.face_counts).is_straight
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.face_counts.any_with(4)
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.face_counts.any_with(3)
    }

    /// Trips plus exactly one other face. Four of a kind never matches since
    /// no face counts three.
    pub fn is_full_house(&self) -> bool {
        self.is_three_of_a_kind() && self.face_counts.distinct() == 2
    }

    pub fn is_two_pair(&self) -> bool {
        self.face_counts.faces_with(2).len() == 2
    }

    /// At least one face counted twice. Also true for two pair and full house;
    /// `evaluate` relies on priority order to tell them apart.
    pub fn is_one_pair(&self) -> bool {
        self.face_counts.any_with(2)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for PokerHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::try_new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};

    fn hand(s: &str) -> PokerHand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn wrong_card_count_is_rejected() {
        let cards = parse_cards("C2 C3 C4 C5").unwrap();
        assert_eq!(PokerHand::try_new(&cards), Err(HandError::InvalidSize(4)));
        let cards = parse_cards("C2 C3 C4 C5 C6 C7").unwrap();
        assert_eq!(PokerHand::try_new(&cards), Err(HandError::InvalidSize(6)));
        assert_eq!(PokerHand::try_new(&[]), Err(HandError::InvalidSize(0)));
    }

    #[test]
    fn cards_are_sorted_suit_first() {
        let h = hand("SA H2 C9 D3 CT");
        assert_eq!(h.to_string(), "C9, CT, D3, H2, SA");
    }

    #[test]
    fn summaries_are_zero_filled() {
        let h = hand("SA H2 C9 D3 CT");
        assert_eq!(h.suit_counts().get(Suit::Clubs), 2);
        assert_eq!(h.suit_counts().get(Suit::Spades), 1);
        assert_eq!(h.face_counts().get(Face::King), 0);
        assert_eq!(h.face_counts().iter().count(), 13);
    }

    #[test]
    fn straight_predicates() {
        assert!(hand("C6 D7 H8 S9 CT").is_straight());
        assert!(!hand("C2 D3 H4 S5 C7").is_straight());
        assert!(!hand("CA D2 H3 S4 C5").is_straight());
        assert!(!hand("C6 D7 H8 S9 CT").is_flush());
    }

    #[test]
    fn flush_ignores_faces() {
        let h = hand("C2 C9 CK C4 C7");
        assert!(h.is_flush());
        assert!(!h.is_straight_flush());
    }

    #[test]
    fn full_house_predicates() {
        let h = hand("CA DA HA SK CK");
        assert!(h.is_full_house());
        assert!(h.is_three_of_a_kind());
        assert!(!h.is_two_pair());
        assert!(h.is_one_pair());
    }

    #[test]
    fn four_of_a_kind_is_not_a_full_house() {
        let h = hand("CA DA HA SA CK");
        assert!(h.is_four_of_a_kind());
        assert!(!h.is_full_house());
        assert!(!h.is_three_of_a_kind());
    }

    #[test]
    fn two_pair_predicates() {
        let h = hand("CA DA HK SK C2");
        assert!(h.is_two_pair());
        assert!(h.is_one_pair());
        assert!(!h.is_three_of_a_kind());
    }

    #[test]
    fn deal_from_deck() {
        let mut deck = Deck::standard();
        let h = PokerHand::deal_from(&mut deck).unwrap();
        assert_eq!(deck.len(), 47);
        assert!(h.is_straight_flush());
    }

    #[test]
    fn deal_from_short_deck_fails() {
        let mut deck = Deck::standard();
        deck.deal_n(49).unwrap();
        let err = PokerHand::deal_from(&mut deck).unwrap_err();
        assert_eq!(err, HandError::Deck(DeckError::Empty));
        assert_eq!(deck.len(), 3);

        deck.deal_n(3).unwrap();
        assert_eq!(PokerHand::deal_from(&mut deck), Err(HandError::Deck(DeckError::Empty)));
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!("C2 C3 XX C5 C6".parse::<PokerHand>(), Err(HandError::CardParse(_))));
    }
}
