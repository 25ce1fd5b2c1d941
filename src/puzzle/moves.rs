use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{state::Configuration, symbol::Symbol};

////////////////////////////////////////////////////////////////////////////////

/// Legal move of a rabbit into the free stone.
///
/// East-bound rabbits only move right, west-bound rabbits only move left.
/// A rabbit either slides onto the adjacent free stone or jumps over
/// exactly one rabbit of the other kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// `E_` -> `_E`
    SlideRight,

    /// `EW_` -> `_WE`
    JumpRight,

    /// `_W` -> `W_`
    SlideLeft,

    /// `_EW` -> `WE_`
    JumpLeft,
}

impl Move {
    /// All moves in the order the generator tries them.
    /// Depth-first search relies on this order.
    pub const ALL: [Move; 4] = [
        Move::SlideRight,
        Move::JumpRight,
        Move::SlideLeft,
        Move::JumpLeft,
    ];

    // position of the rabbit which lands on the free stone
    fn source(&self, state: &Configuration, empty: usize) -> Option<usize> {
        let at = |offset: isize| {
            empty
                .checked_add_signed(offset)
                .and_then(|i| state.get(i))
        };
        let found = match self {
            Move::SlideRight => at(-1) == Some(Symbol::East),
            Move::JumpRight => at(-2) == Some(Symbol::East) && at(-1) == Some(Symbol::West),
            Move::SlideLeft => at(1) == Some(Symbol::West),
            Move::JumpLeft => at(1) == Some(Symbol::East) && at(2) == Some(Symbol::West),
        };
        found.then_some(empty.wrapping_add_signed(self.offset()))
    }

    /// Signed distance from the free stone to the moving rabbit.
    pub fn offset(&self) -> isize {
        match self {
            Move::SlideRight => -1,
            Move::JumpRight => -2,
            Move::SlideLeft => 1,
            Move::JumpLeft => 2,
        }
    }

    /// Applies the move, or returns `None` if the move is not legal in the state.
    pub fn apply(&self, state: &Configuration) -> Option<Configuration> {
        let empty = state.empty_slot()?;
        let source = self.source(state, empty)?;
        Some(state.swapped(empty, source))
    }

    /// Finds the move which transforms `from` into `to`.
    pub fn between(from: &Configuration, to: &Configuration) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|m| m.apply(from).as_ref() == Some(to))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::SlideRight => "slide right",
            Move::JumpRight => "jump right",
            Move::SlideLeft => "slide left",
            Move::JumpLeft => "jump left",
        };
        write!(f, "{}", name)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Returns all configurations reachable from `state` in one legal move,
/// in the order of [`Move::ALL`].
///
/// A configuration without the free stone has no successors.
pub fn successors(state: &Configuration) -> Vec<Configuration> {
    Move::ALL.iter().filter_map(|m| m.apply(state)).collect()
}

////////////////////////////////////////////////////////////////////////////////
