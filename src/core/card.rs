//! Card values: suit, color, rank and the two board sentinels.
//!
//! A `Card` is a plain `Copy` value with structural equality. Two cards
//! with the same value, suit and color are indistinguishable, which is
//! exactly what the rules need: nothing in the game tracks card identity.
//!
//! ## Sentinels
//!
//! - `Dead`: placed over a royal (and its armor) when the royal is killed.
//!   Occupies the slot permanently.
//! - `Used`: placed over a spent Ace or Joker.
//!
//! Both are face-down backs and contribute 0 to any sum.

use serde::{Deserialize, Serialize};

/// Card suit. `Joker` and `Back` are not real suits but keep every
/// card representable with the same three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Joker,
    Back,
}

impl Suit {
    /// The four playing suits in deck-construction order.
    pub const PLAYING: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Natural color of a playing suit. Jokers and backs are black unless
    /// the card says otherwise.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs | Suit::Joker | Suit::Back => CardColor::Black,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Joker | Suit::Back => "",
        }
    }

    /// Base code point of the suit's row in the Unicode playing-card block.
    const fn unicode_base(self) -> Option<u32> {
        match self {
            Suit::Spades => Some(0x1F0A0),
            Suit::Hearts => Some(0x1F0B0),
            Suit::Diamonds => Some(0x1F0C0),
            Suit::Clubs => Some(0x1F0D0),
            Suit::Joker | Suit::Back => None,
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardColor {
    Red,
    Black,
}

/// What is printed on the card.
///
/// `Number` only ever holds 2..=10; use [`CardValue::number`] to build one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardValue {
    Ace,
    Number(u8),
    Jack,
    Queen,
    King,
    Joker,
    Dead,
    Used,
}

impl CardValue {
    /// All thirteen ranks of a suit in deck-construction order.
    pub const RANKS: [CardValue; 13] = [
        CardValue::Ace,
        CardValue::Number(2),
        CardValue::Number(3),
        CardValue::Number(4),
        CardValue::Number(5),
        CardValue::Number(6),
        CardValue::Number(7),
        CardValue::Number(8),
        CardValue::Number(9),
        CardValue::Number(10),
        CardValue::Jack,
        CardValue::Queen,
        CardValue::King,
    ];

    /// Build a numbered value.
    ///
    /// # Panics
    ///
    /// Panics if `n` is outside 2..=10.
    #[must_use]
    pub fn number(n: u8) -> Self {
        assert!((2..=10).contains(&n), "numbered card out of range: {n}");
        CardValue::Number(n)
    }

    /// Combat/stacking value.
    ///
    /// Aces, Jokers and both sentinels count as 0; royals count 11, 12, 13.
    #[must_use]
    pub const fn numeric(self) -> u8 {
        match self {
            CardValue::Number(n) => n,
            CardValue::Jack => 11,
            CardValue::Queen => 12,
            CardValue::King => 13,
            CardValue::Ace | CardValue::Joker | CardValue::Dead | CardValue::Used => 0,
        }
    }

    /// Ordering key for rank comparisons: Ace sorts lowest (1), then 2..=13.
    /// Jokers and sentinels sort below everything.
    #[must_use]
    pub const fn rank_order(self) -> u8 {
        match self {
            CardValue::Ace => 1,
            other => other.numeric(),
        }
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(self, CardValue::Jack | CardValue::Queen | CardValue::King)
    }

    /// 2..=10.
    #[must_use]
    pub const fn is_numbered(self) -> bool {
        matches!(self, CardValue::Number(_))
    }

    /// Dead or Used marker.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, CardValue::Dead | CardValue::Used)
    }

    /// Column offset inside a Unicode suit row (Knight at 0xC is skipped).
    const fn unicode_offset(self) -> Option<u32> {
        match self {
            CardValue::Ace => Some(0x1),
            CardValue::Number(n) => Some(n as u32),
            CardValue::Jack => Some(0xB),
            CardValue::Queen => Some(0xD),
            CardValue::King => Some(0xE),
            CardValue::Joker | CardValue::Dead | CardValue::Used => None,
        }
    }

    fn label(self) -> String {
        match self {
            CardValue::Ace => "A".to_string(),
            CardValue::Number(n) => n.to_string(),
            CardValue::Jack => "J".to_string(),
            CardValue::Queen => "Q".to_string(),
            CardValue::King => "K".to_string(),
            CardValue::Joker => "Joker".to_string(),
            CardValue::Dead => "DEAD".to_string(),
            CardValue::Used => "USED".to_string(),
        }
    }
}

/// A single playing card (or sentinel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: CardValue,
    pub suit: Suit,
    pub color: CardColor,
}

/// Unicode card back, shown for sentinels.
pub const CARD_BACK: char = '\u{1F0A0}';

/// Unicode joker glyph.
pub const JOKER_GLYPH: char = '\u{1F0DF}';

impl Card {
    /// A regular suited card; color follows the suit.
    #[must_use]
    pub const fn new(value: CardValue, suit: Suit) -> Self {
        Self {
            value,
            suit,
            color: suit.color(),
        }
    }

    /// A numbered card, 2..=10.
    #[must_use]
    pub fn numbered(n: u8, suit: Suit) -> Self {
        Self::new(CardValue::number(n), suit)
    }

    /// A Joker of the given color.
    #[must_use]
    pub const fn joker(color: CardColor) -> Self {
        Self {
            value: CardValue::Joker,
            suit: Suit::Joker,
            color,
        }
    }

    /// Fresh DEAD sentinel.
    #[must_use]
    pub const fn dead() -> Self {
        Self {
            value: CardValue::Dead,
            suit: Suit::Back,
            color: CardColor::Black,
        }
    }

    /// Fresh USED sentinel.
    #[must_use]
    pub const fn used() -> Self {
        Self {
            value: CardValue::Used,
            suit: Suit::Back,
            color: CardColor::Black,
        }
    }

    /// See [`CardValue::numeric`].
    #[must_use]
    pub const fn numeric(&self) -> u8 {
        self.value.numeric()
    }

    #[must_use]
    pub const fn is_royal(&self) -> bool {
        self.value.is_royal()
    }

    #[must_use]
    pub const fn is_numbered(&self) -> bool {
        self.value.is_numbered()
    }

    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.value, CardValue::Ace)
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.value, CardValue::Joker)
    }

    #[must_use]
    pub const fn is_dead(&self) -> bool {
        matches!(self.value, CardValue::Dead)
    }

    #[must_use]
    pub const fn is_used(&self) -> bool {
        matches!(self.value, CardValue::Used)
    }

    /// Glyph from the Unicode playing-card block.
    #[must_use]
    pub fn unicode(&self) -> char {
        if self.is_joker() {
            return JOKER_GLYPH;
        }
        match (self.suit.unicode_base(), self.value.unicode_offset()) {
            (Some(base), Some(offset)) => char::from_u32(base + offset).unwrap_or(CARD_BACK),
            _ => CARD_BACK,
        }
    }
}

/// A slot was empty: no card present. Distinct from a sentinel.
#[must_use]
pub fn is_empty_card(card: Option<&Card>) -> bool {
    card.is_none()
}

/// The slot holds a DEAD sentinel.
#[must_use]
pub fn is_royal_dead(card: Option<&Card>) -> bool {
    card.is_some_and(Card::is_dead)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value.label(), self.suit.symbol())
    }
}
