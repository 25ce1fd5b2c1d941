use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{
    error::{ParseError, ParseResult},
    symbol::Symbol,
};

////////////////////////////////////////////////////////////////////////////////

/// Arrangement of rabbits and the free stone at one point of the search.
///
/// Configuration is immutable: moves produce new configurations
/// (see [`Configuration::swapped`]) and equality is plain sequence equality,
/// so configurations can be used as keys of the visited set.
///
/// Parsing only checks the alphabet. Configurations without the free stone
/// or with several free stones can be built; they are handled best-effort
/// by the move generator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    symbols: Box<[Symbol]>,
}

impl Configuration {
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Symbol> {
        self.symbols.get(i).copied()
    }

    /// Position of the first free stone.
    pub fn empty_slot(&self) -> Option<usize> {
        self.symbols.iter().position(|s| *s == Symbol::Empty)
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|s| **s == symbol).count()
    }

    /// Copy of the configuration with stones `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut symbols = self.symbols.clone();
        symbols.swap(i, j);
        Self { symbols }
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::try_from(c).map_err(|symbol| ParseError::UnknownSymbol { symbol, position })
            })
            .collect::<ParseResult<Box<[Symbol]>>>()?;
        Ok(Self { symbols })
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in self.symbols.iter() {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
