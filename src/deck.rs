use crate::cards::{Card, Face, Suit};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal from an empty deck")]
    Empty,
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Full deck, suit-major then face-minor: C2, C3, ..., CA, D2, ..., SA.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for s in Suit::ALL {
            for f in Face::ALL {
                cards.push(Card::new(s, f));
            }
        }
        debug!("new deck with {} cards", cards.len());
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterate over a snapshot of the current order.
    ///
    /// The iterator owns its copy, so dealing or shuffling afterwards does not
    /// change what it yields.
    pub fn iter(&self) -> DeckIter {
        DeckIter { cards: self.cards.clone(), index: 0 }
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Backward Fisher-Yates shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        debug!("shuffled {} cards", self.cards.len());
    }

    /// Remove and return the top card.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Deal `n` cards in deal order. Nothing is dealt if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, remaining: self.cards.len() });
        }
        (0..n).map(|_| self.deal()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
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

/// Finite, snapshot iterator over a deck's cards. Yields `None` once exhausted.
#[derive(Debug, Clone)]
pub struct DeckIter {
    cards: Vec<Card>,
    index: usize,
}

impl Iterator for DeckIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let card = self.cards.get(self.index).copied()?;
        self.index += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cards.len() - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DeckIter {}

impl std::iter::FusedIterator for DeckIter {}

impl<'a> IntoIterator for &'a Deck {
    type Item = Card;
    type IntoIter = DeckIter;

    fn into_iter(self) -> DeckIter {
        self.iter()
    }
}
