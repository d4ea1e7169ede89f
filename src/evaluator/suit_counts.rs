use crate::cards::{Card, Suit};

/// Number of cards per suit, indexed by `Suit::index`. Every suit is present,
/// absent suits count zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuitCounts([u8; 4]);

impl SuitCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            let slot = &mut counts[card.suit().index()];
            *slot = slot.saturating_add(1);
        }
        Self(counts)
    }

    pub fn get(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    /// `(suit, count)` pairs in canonical suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, u8)> + '_ {
        Suit::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// The suit shared by all five cards, if any.
    pub fn flush_suit(&self) -> Option<Suit> {
        self.iter().find(|&(_, count)| count == 5).map(|(s, _)| s)
    }
}
