//! Scripted walkthrough: show a fresh deck, deal from it unshuffled, then run
//! a few shuffle rounds and classify the hands dealt after each.

use crate::deck::Deck;
use crate::hand::{HandError, PokerHand};
use log::info;
use rand::Rng;
use std::io::{self, Write};

const RULE: &str = "---------------------------------------------------";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DemoError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Shape of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of shuffle rounds after the unshuffled deal.
    pub rounds: usize,
    /// Hands dealt and classified per shuffle round.
    pub hands_per_round: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { rounds: 2, hands_per_round: 3 }
    }
}

impl DemoConfig {
    /// Cards the walkthrough deals in total.
    pub fn cards_needed(&self) -> usize {
        (1 + self.rounds * self.hands_per_round) * PokerHand::SIZE
    }
}

/// Run the walkthrough, writing to `out` and shuffling with `rng`.
///
/// Runs out of cards surface as [`DemoError::Hand`]; nothing is dealt past an
/// empty deck.
pub fn run<W, R>(out: &mut W, rng: &mut R, config: &DemoConfig) -> Result<(), DemoError>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    info!(
        "demo: {} rounds x {} hands ({} cards)",
        config.rounds,
        config.hands_per_round,
        config.cards_needed()
    );
    writeln!(out, "{RULE}")?;
    writeln!(out, "Poker hands demo")?;
    writeln!(out, "{RULE}")?;

    let mut deck = Deck::standard();
    writeln!(out, "Standard deck: {deck}")?;
    deal_and_show(out, &mut deck)?;
    writeln!(out)?;
    writeln!(out, "An unshuffled deck always deals a straight flush first.")?;
    writeln!(out)?;

    for round in 0..config.rounds {
        if round > 0 {
            writeln!(out, "Shuffling the deck again...")?;
        }
        deck.shuffle_with(rng);
        writeln!(out, "Shuffled deck: {deck}")?;
        writeln!(out)?;
        for _ in 0..config.hands_per_round {
            deal_and_show(out, &mut deck)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn deal_and_show<W: Write + ?Sized>(out: &mut W, deck: &mut Deck) -> Result<(), DemoError> {
    writeln!(out, "Dealing 5 cards...")?;
    let hand = PokerHand::deal_from(deck)?;
    writeln!(out, "Sorted hand: {hand}")?;
    writeln!(out, "Best rank: {}", hand.evaluate())?;
    Ok(())
}
