use std::fmt;
use std::str::FromStr;

/// Four suits, ordered C < D < H < S. Suit is the primary key of the card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// Canonical suit symbols; a suit's index is its position here.
    pub const SYMBOLS: &'static str = "CDHS";

    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(char),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c)),
        }
    }
}

/// Card faces from Two (low) to Ace (high). Aces only play high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Face {
    /// Canonical face symbols; a face's index is its position here.
    pub const SYMBOLS: &'static str = "23456789TJQKA";

    pub const ALL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Face::Two => '2',
            Face::Three => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
            Face::Ace => 'A',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceParseError {
    #[error("invalid face: '{0}'")]
    Invalid(char),
}

impl TryFrom<char> for Face {
    type Error = FaceParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Face::Two),
            '3' => Ok(Face::Three),
            '4' => Ok(Face::Four),
            '5' => Ok(Face::Five),
            '6' => Ok(Face::Six),
            '7' => Ok(Face::Seven),
            '8' => Ok(Face::Eight),
            '9' => Ok(Face::Nine),
            'T' => Ok(Face::Ten),
            'J' => Ok(Face::Jack),
            'Q' => Ok(Face::Queen),
            'K' => Ok(Face::King),
            'A' => Ok(Face::Ace),
            _ => Err(FaceParseError::Invalid(c)),
        }
    }
}

/// Raised when a card is built from symbols outside the fixed suit/face sets.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card: suit '{suit}', face '{face}'")]
    Invalid { suit: char, face: char },
}

/// A playing card: suit + face.
///
/// Cards order by suit first, then by face, so every club sorts below every
/// diamond regardless of face.
///
/// ```
/// use poker_hands::cards::{Card, Face, Suit};
///
/// let card = Card::new(Suit::Clubs, Face::Ace);
/// assert_eq!(card.to_string(), "CA");
/// assert!(card < Card::new(Suit::Diamonds, Face::Two));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    // Field order drives the derived ordering.
    suit: Suit,
    face: Face,
}

impl Card {
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    /// Build a card from its suit and face symbols.
    ///
    /// ```
    /// use poker_hands::cards::{Card, CardError};
    ///
    /// assert_eq!(Card::try_from_symbols('H', 'T').unwrap().to_string(), "HT");
    /// assert_eq!(
    ///     Card::try_from_symbols('X', 'T'),
    ///     Err(CardError::Invalid { suit: 'X', face: 'T' })
    /// );
    /// ```
    pub fn try_from_symbols(suit: char, face: char) -> Result<Self, CardError> {
        match (Suit::try_from(suit), Face::try_from(face)) {
            (Ok(s), Ok(f)) => Ok(Self::new(s, f)),
            _ => Err(CardError::Invalid { suit, face }),
        }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn face(self) -> Face {
        self.face
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.face)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("expected two symbols (suit then face), got '{0}'")]
    Length(String),
    #[error(transparent)]
    Card(#[from] CardError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(face), None) => Ok(Card::try_from_symbols(suit, face)?),
            _ => Err(CardParseError::Length(s.to_string())),
        }
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_hands::cards::{parse_cards, Card, Face, Suit};
///
/// let cards = parse_cards("SA, DK HT").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Spades, Face::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Diamonds, Face::King));
/// assert_eq!(cards[2], Card::new(Suit::Hearts, Face::Ten));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
