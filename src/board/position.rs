//! Board positions and the fixed geometry tables.
//!
//! ```text
//!              UL-R   UM-R   UR-R
//!      LU-R  [ UL ] [ UM ] [ UR ]  RU-R
//!      LM-R  [ ML ] [ MM ] [ MR ]  RM-R
//!      LB-R  [ BL ] [ BM ] [ BR ]  RB-R
//!              BL-R   BM-R   BR-R
//! ```
//!
//! Each family is its own enum so that a royal slot can never be passed
//! where a grid slot is expected. Every table below is an exhaustive
//! `match`, so adding or renaming a slot fails to compile until all tables
//! are updated.
//!
//! Position keys (`upperLeft`, `leftUpperRoyal`, `ace3`, ...) are the
//! strings hosts use to name slots; they round-trip through `Display` and
//! `FromStr`.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

macro_rules! slot_family {
    (
        $(#[$meta:meta])*
        $name:ident [$count:literal] {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every slot of this family in board order.
            pub const ALL: [$name; $count] = [$($name::$variant),+];

            /// 0-based position within the family.
            #[must_use]
            pub const fn ordinal(self) -> usize {
                self as usize
            }

            /// Host-facing key.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let position: BoardPosition = s.parse()?;
                $name::try_from(position)
            }
        }
    };
}

slot_family! {
    /// The 3×3 grid of numbered-card stacks, in deal order.
    GridPosition [9] {
        UpperLeft => "upperLeft",
        UpperMiddle => "upperMiddle",
        UpperRight => "upperRight",
        MiddleLeft => "middleLeft",
        MiddleMiddle => "middleMiddle",
        MiddleRight => "middleRight",
        BottomLeft => "bottomLeft",
        BottomMiddle => "bottomMiddle",
        BottomRight => "bottomRight",
    }
}

slot_family! {
    /// The 12 royal slots around the grid. The first word is the side of
    /// the grid, the second the row or column along that side.
    RoyalPosition [12] {
        UpperLeft => "upperLeftRoyal",
        UpperMiddle => "upperMiddleRoyal",
        UpperRight => "upperRightRoyal",
        LeftUpper => "leftUpperRoyal",
        LeftMiddle => "leftMiddleRoyal",
        LeftBottom => "leftBottomRoyal",
        RightUpper => "rightUpperRoyal",
        RightMiddle => "rightMiddleRoyal",
        RightBottom => "rightBottomRoyal",
        BottomLeft => "bottomLeftRoyal",
        BottomMiddle => "bottomMiddleRoyal",
        BottomRight => "bottomRightRoyal",
    }
}

slot_family! {
    /// Armor slots, one behind each royal slot.
    ArmorPosition [12] {
        UpperLeft => "upperLeftArmor",
        UpperMiddle => "upperMiddleArmor",
        UpperRight => "upperRightArmor",
        LeftUpper => "leftUpperArmor",
        LeftMiddle => "leftMiddleArmor",
        LeftBottom => "leftBottomArmor",
        RightUpper => "rightUpperArmor",
        RightMiddle => "rightMiddleArmor",
        RightBottom => "rightBottomArmor",
        BottomLeft => "bottomLeftArmor",
        BottomMiddle => "bottomMiddleArmor",
        BottomRight => "bottomRightArmor",
    }
}

slot_family! {
    /// Joker slots.
    JokerPosition [2] {
        Joker1 => "joker1",
        Joker2 => "joker2",
    }
}

slot_family! {
    /// Ace slots.
    AcePosition [4] {
        Ace1 => "ace1",
        Ace2 => "ace2",
        Ace3 => "ace3",
        Ace4 => "ace4",
    }
}

/// Any slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPosition {
    Grid(GridPosition),
    Royal(RoyalPosition),
    Armor(ArmorPosition),
    Joker(JokerPosition),
    Ace(AcePosition),
    /// Staging stack for royals awaiting placement.
    RoyalsToBePlaced,
}

/// Total number of slots on the board.
pub const BOARD_SLOTS: usize = 9 + 12 + 12 + 2 + 4 + 1;

const ROYAL_BASE: usize = 9;
const ARMOR_BASE: usize = ROYAL_BASE + 12;
const JOKER_BASE: usize = ARMOR_BASE + 12;
const ACE_BASE: usize = JOKER_BASE + 2;
const STAGING_INDEX: usize = ACE_BASE + 4;

const STAGING_KEY: &str = "royalsToBePlaced";

impl BoardPosition {
    /// Dense index in 0..BOARD_SLOTS.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            BoardPosition::Grid(p) => p.ordinal(),
            BoardPosition::Royal(p) => ROYAL_BASE + p.ordinal(),
            BoardPosition::Armor(p) => ARMOR_BASE + p.ordinal(),
            BoardPosition::Joker(p) => JOKER_BASE + p.ordinal(),
            BoardPosition::Ace(p) => ACE_BASE + p.ordinal(),
            BoardPosition::RoyalsToBePlaced => STAGING_INDEX,
        }
    }

    /// Host-facing key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            BoardPosition::Grid(p) => p.key(),
            BoardPosition::Royal(p) => p.key(),
            BoardPosition::Armor(p) => p.key(),
            BoardPosition::Joker(p) => p.key(),
            BoardPosition::Ace(p) => p.key(),
            BoardPosition::RoyalsToBePlaced => STAGING_KEY,
        }
    }

    /// Every slot, ordered by [`BoardPosition::index`].
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        GridPosition::ALL
            .into_iter()
            .map(BoardPosition::Grid)
            .chain(RoyalPosition::ALL.into_iter().map(BoardPosition::Royal))
            .chain(ArmorPosition::ALL.into_iter().map(BoardPosition::Armor))
            .chain(JokerPosition::ALL.into_iter().map(BoardPosition::Joker))
            .chain(AcePosition::ALL.into_iter().map(BoardPosition::Ace))
            .chain(std::iter::once(BoardPosition::RoyalsToBePlaced))
    }

    const fn family(self) -> &'static str {
        match self {
            BoardPosition::Grid(_) => "grid",
            BoardPosition::Royal(_) => "royal",
            BoardPosition::Armor(_) => "armor",
            BoardPosition::Joker(_) => "joker",
            BoardPosition::Ace(_) => "ace",
            BoardPosition::RoyalsToBePlaced => "staging",
        }
    }
}

impl std::fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for BoardPosition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardPosition::all()
            .find(|p| p.key() == s)
            .ok_or_else(|| EngineError::UnknownPosition(s.to_string()))
    }
}

macro_rules! family_conversions {
    ($family:ident, $variant:ident, $expected:literal) => {
        impl From<$family> for BoardPosition {
            fn from(position: $family) -> Self {
                BoardPosition::$variant(position)
            }
        }

        impl TryFrom<BoardPosition> for $family {
            type Error = EngineError;

            fn try_from(position: BoardPosition) -> Result<Self, Self::Error> {
                match position {
                    BoardPosition::$variant(p) => Ok(p),
                    other => Err(EngineError::WrongPositionKind {
                        position: format!("{} ({})", other.key(), other.family()),
                        expected: $expected,
                    }),
                }
            }
        }
    };
}

family_conversions!(GridPosition, Grid, "grid");
family_conversions!(RoyalPosition, Royal, "royal");
family_conversions!(ArmorPosition, Armor, "armor");
family_conversions!(JokerPosition, Joker, "joker");
family_conversions!(AcePosition, Ace, "ace");

// =============================================================================
// Geometry tables
// =============================================================================

/// One shot: placing on the firing grid slot fires the two payload cards
/// at `royal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attack {
    pub royal: RoyalPosition,
    pub payload: [GridPosition; 2],
}

impl GridPosition {
    /// Shots fired when a card lands on this slot.
    ///
    /// Only edge slots fire, across the row or column to the royal on the
    /// far side. The centre fires nothing.
    #[must_use]
    pub fn attacks(self) -> &'static [Attack] {
        use GridPosition as G;
        use RoyalPosition as R;

        match self {
            G::UpperLeft => &[
                Attack { royal: R::RightUpper, payload: [G::UpperMiddle, G::UpperRight] },
                Attack { royal: R::BottomLeft, payload: [G::MiddleLeft, G::BottomLeft] },
            ],
            G::UpperMiddle => &[Attack { royal: R::BottomMiddle, payload: [G::MiddleMiddle, G::BottomMiddle] }],
            G::UpperRight => &[
                Attack { royal: R::LeftUpper, payload: [G::UpperMiddle, G::UpperLeft] },
                Attack { royal: R::BottomRight, payload: [G::MiddleRight, G::BottomRight] },
            ],
            G::MiddleLeft => &[Attack { royal: R::RightMiddle, payload: [G::MiddleMiddle, G::MiddleRight] }],
            G::MiddleMiddle => &[],
            G::MiddleRight => &[Attack { royal: R::LeftMiddle, payload: [G::MiddleMiddle, G::MiddleLeft] }],
            G::BottomLeft => &[
                Attack { royal: R::RightBottom, payload: [G::BottomMiddle, G::BottomRight] },
                Attack { royal: R::UpperLeft, payload: [G::MiddleLeft, G::UpperLeft] },
            ],
            G::BottomMiddle => &[Attack { royal: R::UpperMiddle, payload: [G::MiddleMiddle, G::UpperMiddle] }],
            G::BottomRight => &[
                Attack { royal: R::LeftBottom, payload: [G::BottomMiddle, G::BottomLeft] },
                Attack { royal: R::UpperRight, payload: [G::MiddleRight, G::UpperRight] },
            ],
        }
    }

    /// Royal slots this grid slot can shoot at.
    pub fn firing_lines(self) -> impl Iterator<Item = RoyalPosition> {
        self.attacks().iter().map(|a| a.royal)
    }
}

impl RoyalPosition {
    /// The armor slot paired with this royal.
    #[must_use]
    pub const fn armor(self) -> ArmorPosition {
        use ArmorPosition as A;
        use RoyalPosition as R;

        match self {
            R::UpperLeft => A::UpperLeft,
            R::UpperMiddle => A::UpperMiddle,
            R::UpperRight => A::UpperRight,
            R::LeftUpper => A::LeftUpper,
            R::LeftMiddle => A::LeftMiddle,
            R::LeftBottom => A::LeftBottom,
            R::RightUpper => A::RightUpper,
            R::RightMiddle => A::RightMiddle,
            R::RightBottom => A::RightBottom,
            R::BottomLeft => A::BottomLeft,
            R::BottomMiddle => A::BottomMiddle,
            R::BottomRight => A::BottomRight,
        }
    }

    /// The grid slot directly inside this royal, used for placement
    /// priority.
    #[must_use]
    pub const fn adjacent_grid(self) -> GridPosition {
        use GridPosition as G;
        use RoyalPosition as R;

        match self {
            R::UpperLeft | R::LeftUpper => G::UpperLeft,
            R::UpperMiddle => G::UpperMiddle,
            R::UpperRight | R::RightUpper => G::UpperRight,
            R::LeftMiddle => G::MiddleLeft,
            R::LeftBottom | R::BottomLeft => G::BottomLeft,
            R::RightMiddle => G::MiddleRight,
            R::RightBottom | R::BottomRight => G::BottomRight,
            R::BottomMiddle => G::BottomMiddle,
        }
    }
}

impl ArmorPosition {
    /// The royal slot this armor protects.
    #[must_use]
    pub const fn royal(self) -> RoyalPosition {
        use ArmorPosition as A;
        use RoyalPosition as R;

        match self {
            A::UpperLeft => R::UpperLeft,
            A::UpperMiddle => R::UpperMiddle,
            A::UpperRight => R::UpperRight,
            A::LeftUpper => R::LeftUpper,
            A::LeftMiddle => R::LeftMiddle,
            A::LeftBottom => R::LeftBottom,
            A::RightUpper => R::RightUpper,
            A::RightMiddle => R::RightMiddle,
            A::RightBottom => R::RightBottom,
            A::BottomLeft => R::BottomLeft,
            A::BottomMiddle => R::BottomMiddle,
            A::BottomRight => R::BottomRight,
        }
    }
}
