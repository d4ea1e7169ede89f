//! poker-hands: playing-card deck simulation and five-card hand classification
//!
//! - A `Card` is a suit + face value; cards order by suit, then face
//! - A `Deck` holds the 52 cards, shuffles (seedable) and deals from its end
//! - A `PokerHand` is exactly five cards; `evaluate` names its best rank
//! - Errors are `Result`s, never panics
//!
//! ## Quick start
//! ```
//! use poker_hands::deck::Deck;
//! use poker_hands::evaluator::HandType;
//! use poker_hands::hand::PokerHand;
//!
//! let mut deck = Deck::standard();
//! let hand = PokerHand::deal_from(&mut deck).unwrap();
//! assert_eq!(hand.evaluate(), HandType::StraightFlush);
//!
//! deck.shuffle_seeded(7);
//! let hand = PokerHand::deal_from(&mut deck).unwrap();
//! println!("{hand}: {}", hand.evaluate());
//! ```
//!
//! ## Binary
//! Run the scripted demo, or the interactive deal table, with:
//! ```sh
//! cargo run --bin poker-hands -- --seed 42
//! cargo run --bin poker-hands -- --interactive
//! ```

pub mod cards;
pub mod deck;
pub mod demo;
pub mod evaluator;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
