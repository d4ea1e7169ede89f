use poker_hands::cards::{Card, Face, Suit};
use poker_hands::deck::Deck;
use poker_hands::evaluator::{evaluate, evaluate_cards, HandType};
use poker_hands::hand::{HandError, PokerHand};

fn hand(cards: [Card; 5]) -> PokerHand {
    PokerHand::try_new(&cards).expect("five cards")
}

#[test]
fn category_straight_flush() {
    let h = hand([
        Card::new(Suit::Spades, Face::Ace),
        Card::new(Suit::Spades, Face::King),
        Card::new(Suit::Spades, Face::Queen),
        Card::new(Suit::Spades, Face::Jack),
        Card::new(Suit::Spades, Face::Ten),
    ]);
    assert_eq!(evaluate(&h), HandType::StraightFlush);
    assert_eq!(evaluate(&h).label(), "Straight Flush");
}

#[test]
fn category_four_of_a_kind() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Nine),
        Card::new(Suit::Diamonds, Face::Nine),
        Card::new(Suit::Hearts, Face::Nine),
        Card::new(Suit::Spades, Face::Nine),
        Card::new(Suit::Clubs, Face::Ace),
    ]);
    assert_eq!(evaluate(&h), HandType::FourOfAKind);
}

#[test]
fn category_full_house() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Ace),
        Card::new(Suit::Diamonds, Face::Ace),
        Card::new(Suit::Hearts, Face::Ace),
        Card::new(Suit::Spades, Face::King),
        Card::new(Suit::Clubs, Face::King),
    ]);
    assert!(h.is_full_house());
    assert!(h.is_three_of_a_kind());
    assert!(!h.is_two_pair());
    assert_eq!(evaluate(&h), HandType::FullHouse);
}

#[test]
fn category_flush() {
    let h = hand([
        Card::new(Suit::Clubs, Face::King),
        Card::new(Suit::Clubs, Face::Ten),
        Card::new(Suit::Clubs, Face::Eight),
        Card::new(Suit::Clubs, Face::Six),
        Card::new(Suit::Clubs, Face::Three),
    ]);
    assert!(h.is_flush());
    assert_eq!(evaluate(&h), HandType::Flush);
}

#[test]
fn category_straight() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Six),
        Card::new(Suit::Diamonds, Face::Seven),
        Card::new(Suit::Hearts, Face::Eight),
        Card::new(Suit::Spades, Face::Nine),
        Card::new(Suit::Clubs, Face::Ten),
    ]);
    assert!(h.is_straight());
    assert_eq!(evaluate(&h), HandType::Straight);
}

#[test]
fn gapped_run_is_not_a_straight() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Two),
        Card::new(Suit::Diamonds, Face::Three),
        Card::new(Suit::Hearts, Face::Four),
        Card::new(Suit::Spades, Face::Five),
        Card::new(Suit::Clubs, Face::Seven),
    ]);
    assert!(!h.is_straight());
    assert_eq!(evaluate(&h), HandType::HighCard);
}

#[test]
fn category_three_of_a_kind() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Queen),
        Card::new(Suit::Diamonds, Face::Queen),
        Card::new(Suit::Hearts, Face::Queen),
        Card::new(Suit::Spades, Face::Ten),
        Card::new(Suit::Clubs, Face::Two),
    ]);
    assert!(!h.is_full_house());
    assert_eq!(evaluate(&h), HandType::ThreeOfAKind);
}

#[test]
fn category_two_pair_beats_one_pair_check() {
    let h = hand([
        Card::new(Suit::Clubs, Face::Ace),
        Card::new(Suit::Diamonds, Face::Ace),
        Card::new(Suit::Hearts, Face::King),
        Card::new(Suit::Spades, Face::King),
        Card::new(Suit::Clubs, Face::Two),
    ]);
    assert!(h.is_two_pair());
    assert!(h.is_one_pair());
    assert_eq!(evaluate(&h), HandType::TwoPair);
}

#[test]
fn category_pair() {
    let h = hand([
        Card::new(Suit::Hearts, Face::Ace),
        Card::new(Suit::Diamonds, Face::Ace),
        Card::new(Suit::Spades, Face::Ten),
        Card::new(Suit::Clubs, Face::Nine),
        Card::new(Suit::Diamonds, Face::Two),
    ]);
    assert_eq!(evaluate(&h), HandType::OnePair);
}

#[test]
fn category_high_card() {
    let h = hand([
        Card::new(Suit::Hearts, Face::Ace),
        Card::new(Suit::Diamonds, Face::King),
        Card::new(Suit::Spades, Face::Seven),
        Card::new(Suit::Clubs, Face::Five),
        Card::new(Suit::Diamonds, Face::Two),
    ]);
    assert_eq!(evaluate(&h), HandType::HighCard);
}

#[test]
fn unshuffled_deck_top_five_is_a_straight_flush() {
    let mut deck = Deck::standard();
    let h = PokerHand::deal_from(&mut deck).unwrap();
    assert_eq!(h.to_string(), "ST, SJ, SQ, SK, SA");
    assert_eq!(h.evaluate(), HandType::StraightFlush);
}

#[test]
fn evaluate_cards_rejects_wrong_sizes() {
    let cards = [Card::new(Suit::Clubs, Face::Two); 6];
    assert_eq!(evaluate_cards(&cards), Err(HandError::InvalidSize(6)));
    assert_eq!(evaluate_cards(&cards[..3]), Err(HandError::InvalidSize(3)));
}
