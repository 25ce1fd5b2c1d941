use std::fmt::Display;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////

/// Content of a single stone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    /// Rabbit which can only move to the right.
    East,

    /// Rabbit which can only move to the left.
    West,

    /// The free stone.
    Empty,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::East => 'E',
            Symbol::West => 'W',
            Symbol::Empty => '_',
        }
    }

    pub fn is_rabbit(&self) -> bool {
        !matches!(self, Symbol::Empty)
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'E' => Ok(Symbol::East),
            'W' => Ok(Symbol::West),
            '_' => Ok(Symbol::Empty),
            other => Err(other),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

////////////////////////////////////////////////////////////////////////////////
