use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// The uppercase token used in card ids, e.g. `HEARTS`.
    pub fn id(&self) -> &'static str {
        match self {
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

    /// The single-letter token used in card ids, e.g. `J`.
    pub fn id(&self) -> &'static str {
        match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// One of the 12 table cards. The canonical string id is `SUIT-RANK`,
/// e.g. `HEARTS-J`, and is the only form the CSV interface accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit.id(), self.rank.id())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .split_once('-')
            .ok_or_else(|| GameError::UnknownCard(s.to_string()))?;
        let suit = Suit::ALL
            .into_iter()
            .find(|c| c.id() == suit)
            .ok_or_else(|| GameError::UnknownCard(s.to_string()))?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.id() == rank)
            .ok_or_else(|| GameError::UnknownCard(s.to_string()))?;
        Ok(Card::new(suit, rank))
    }
}

impl TryFrom<String> for Card {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// The fixed 12-card deck: 3 suits by 4 ranks, created once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Deck;

impl Deck {
    pub const SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

    pub fn cards() -> [Card; Deck::SIZE] {
        let mut cards = [Card::new(Suit::Hearts, Rank::Jack); Deck::SIZE];
        let mut i = 0;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards[i] = Card::new(suit, rank);
                i += 1;
            }
        }
        cards
    }
}
