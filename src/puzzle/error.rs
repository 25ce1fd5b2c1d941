use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Represents failure to read a configuration from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Character is not one of `E`, `W` or `_`.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// Offending character
        symbol: char,
        /// Index of the character in the input
        position: usize,
    },
}

////////////////////////////////////////////////////////////////////////////////

pub type ParseResult<T> = Result<T, ParseError>;
