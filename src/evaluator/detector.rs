use super::HandType;
use crate::hand::PokerHand;

/// Strategy pattern: each detector knows one hand type and how to spot it.
pub trait CategoryDetector {
    fn hand_type(&self) -> HandType;
    fn detect(&self, hand: &PokerHand) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive faces, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn hand_type(&self) -> HandType {
        HandType::StraightFlush
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_straight_flush()
    }
}

/// Four of a Kind: four cards of the same face
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn hand_type(&self) -> HandType {
        HandType::FourOfAKind
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_four_of_a_kind()
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn hand_type(&self) -> HandType {
        HandType::FullHouse
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_full_house()
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn hand_type(&self) -> HandType {
        HandType::Flush
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_flush()
    }
}

/// Straight: five consecutive faces
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn hand_type(&self) -> HandType {
        HandType::Straight
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_straight()
    }
}

/// Three of a Kind: three cards of the same face
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn hand_type(&self) -> HandType {
        HandType::ThreeOfAKind
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_three_of_a_kind()
    }
}

/// Two Pair: two different faces, each twice
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn hand_type(&self) -> HandType {
        HandType::TwoPair
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_two_pair()
    }
}

/// One Pair: some face twice
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn hand_type(&self) -> HandType {
        HandType::OnePair
    }

    fn detect(&self, hand: &PokerHand) -> bool {
        hand.is_one_pair()
    }
}

/// High Card: fallback, always matches
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn hand_type(&self) -> HandType {
        HandType::HighCard
    }

    fn detect(&self, _hand: &PokerHand) -> bool {
        true
    }
}

/// All detectors in priority order (highest to lowest). The last one always
/// matches.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
