use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the face value used by the ranking engine, so
/// `Rank::Jack.value() == 11` and `Rank::Ace.value() == 14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Rejection for malformed card input: out-of-range numeric values or
/// unparseable text. Raised at construction so the ranking engine only
/// ever sees well-formed cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("rank must be 2..=14, got {0}")]
    InvalidRank(u8),
    #[error("suit must be 0..=3, got {0}")]
    InvalidSuit(u8),
    #[error("cannot parse card: '{0}'")]
    Unparseable(String),
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        let r = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return Err(CardError::InvalidRank(v)),
        };
        Ok(r)
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let r = match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardError::Unparseable(c.to_string())),
        };
        Ok(r)
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(CardError::Unparseable(s.to_string())),
        }
    }
}

/// Four suits. Ordering is fixed (H < D < C < S) so sorted views are
/// deterministic, but carries no hand-strength meaning: suits only ever
/// matter for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Suit::Hearts),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Clubs),
            3 => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(v)),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            's' => Ok(Suit::Spades),
            _ => Err(CardError::Unparseable(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Pure value type, equality by value.
///
/// ```
/// use handrank::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(Card::from_values(14, 3), Ok(card));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from raw numeric values, rejecting anything outside
    /// rank 2..=14 or suit 0..=3.
    pub fn from_values(rank: u8, suit: u8) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let suit_ch = match t.chars().last() {
            Some(c) if t.len() >= 2 => c,
            _ => return Err(CardError::Unparseable(s.to_string())),
        };
        let rank = Rank::from_str(&t[..t.len() - suit_ch.len_utf8()])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use handrank::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_from_value_bounds() {
        assert_eq!(Rank::try_from(2), Ok(Rank::Two));
        assert_eq!(Rank::try_from(14), Ok(Rank::Ace));
        assert_eq!(Rank::try_from(1), Err(CardError::InvalidRank(1)));
        assert_eq!(Rank::try_from(15), Err(CardError::InvalidRank(15)));
    }

    #[test]
    fn suit_from_value_bounds() {
        assert_eq!(Suit::try_from(0u8), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from(3u8), Ok(Suit::Spades));
        assert_eq!(Suit::try_from(4u8), Err(CardError::InvalidSuit(4)));
    }

    #[test]
    fn card_from_values_rejects_garbage() {
        assert!(Card::from_values(14, 0).is_ok());
        assert_eq!(Card::from_values(1, 0), Err(CardError::InvalidRank(1)));
        assert_eq!(Card::from_values(10, 9), Err(CardError::InvalidSuit(9)));
    }

    #[test]
    fn rank_display_and_parse() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
    }

    #[test]
    fn card_display_and_parse() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("qh").unwrap(), Card::new(Rank::Queen, Suit::Hearts));
        assert!(Card::from_str("Z!").is_err());
        assert!(Card::from_str("A").is_err());
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("2h, 7d Ks").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(xs[1], Card::new(Rank::Seven, Suit::Diamonds));
        assert_eq!(xs[2], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn suit_indices_match_layout() {
        for (i, s) in Suit::ALL.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }
}
