//! Errors raised when the board API is used outside its contract.

use std::fmt;

use crate::field::Field;

/// A misuse of [`Board`](crate::board::Board). These signal a bug in the
/// caller, not an outcome of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The field does not fit on the board.
    FieldOutOfBounds {
        /// The offending field.
        field: Field,
        /// Board size.
        size: u16,
    },
    /// The board already carries its one queen.
    FieldAlreadySet {
        /// The queen already on the board.
        existing: Field,
        /// The field that was rejected.
        attempted: Field,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutOfBounds { field, size } => {
                write!(f, "the field {field} doesn't fit on the board with size {size}")
            }
            Self::FieldAlreadySet {
                existing,
                attempted,
            } => write!(
                f,
                "cannot set {attempted}: the board already has its field set at {existing}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let out = BoardError::FieldOutOfBounds {
            field: Field::new(4, 1),
            size: 4,
        };
        assert_eq!(
            out.to_string(),
            "the field (4,1) doesn't fit on the board with size 4"
        );

        let twice = BoardError::FieldAlreadySet {
            existing: Field::new(1, 1),
            attempted: Field::new(2, 2),
        };
        assert_eq!(
            twice.to_string(),
            "cannot set (2,2): the board already has its field set at (1,1)"
        );
    }
}
