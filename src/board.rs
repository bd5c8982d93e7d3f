use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::field::Field;
use crate::line::Line;
use crate::render;

/// Bitboard for a single queen: its own square plus, once marked, every square
/// it threatens.
///
/// Squares are numbered row by row, so on a board of size 3:
///
/// ```text
/// 2 | 6 7 8
/// 1 | 3 4 5
/// 0 | 0 1 2
///   +------
///     0 1 2
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: u16,
    field: Option<Field>,
    bits: Bitboard,
}

impl Board {
    pub fn new(size: u16) -> Self {
        Board {
            size,
            field: None,
            bits: Bitboard::empty(size as usize * size as usize),
        }
    }

    /// A board holding the queen on `field` together with all squares it
    /// threatens.
    pub fn queen(size: u16, field: Field) -> Result<Self, BoardError> {
        let mut board = Board::new(size);
        board.set_field_with_threats(field)?;
        Ok(board)
    }

    /// Same as [`Board::queen`] for callers that only generate in-range fields.
    #[inline]
    pub(crate) fn queen_in_range(size: u16, field: Field) -> Self {
        debug_assert!(field.is_valid(size));
        let mut board = Board::new(size);
        board.field = Some(field);
        board.bits.set(field.to_index(size));
        board.mark_threats(field);
        board
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    /// The queen this board belongs to, if set.
    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn bits(&self) -> &Bitboard {
        &self.bits
    }

    #[inline]
    pub fn field_to_index(&self, field: Field) -> usize {
        field.to_index(self.size)
    }

    #[inline]
    pub fn index_to_field(&self, index: usize) -> Field {
        Field::from_index(index, self.size)
    }

    fn validate(&self, field: Field) -> Result<(), BoardError> {
        if field.is_valid(self.size) {
            Ok(())
        } else {
            Err(BoardError::FieldOutOfBounds {
                field,
                size: self.size,
            })
        }
    }

    /// Set the queen's own square. A board holds exactly one queen.
    pub fn set_field(&mut self, field: Field) -> Result<(), BoardError> {
        if let Some(existing) = self.field {
            return Err(BoardError::FieldAlreadySet {
                existing,
                attempted: field,
            });
        }
        self.validate(field)?;

        self.field = Some(field);
        self.bits.set(self.field_to_index(field));
        Ok(())
    }

    /// Mark every square on the rank, the file and both diagonals of `field`.
    /// Diagonal squares falling off the board are skipped.
    pub fn mark_threatened_squares(&mut self, field: Field) -> Result<(), BoardError> {
        self.validate(field)?;
        self.mark_threats(field);
        Ok(())
    }

    pub fn set_field_with_threats(&mut self, field: Field) -> Result<(), BoardError> {
        self.set_field(field)?;
        self.mark_threats(field);
        Ok(())
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    fn mark_threats(&mut self, field: Field) {
        let size = self.size;

        for i in 0..size {
            self.bits.set(Field::new(i, field.row()).to_index(size));
            self.bits.set(Field::new(field.column(), i).to_index(size));
        }

        let diagonals = [
            Line::ascending_diagonal(field),
            Line::descending_diagonal(field),
        ];
        for column in 0..size {
            for line in &diagonals {
                let row = line.value(column as i32);
                if (0..size as i32).contains(&row) {
                    self.bits.set(Field::new(column, row as u16).to_index(size));
                }
            }
        }
    }

    /// Whether the square of `field` is set.
    pub fn is_set(&self, field: Field) -> Result<bool, BoardError> {
        self.validate(field)?;
        Ok(self.bits.get(self.field_to_index(field)))
    }

    /// Whether this board shares any set square with `other`.
    #[inline]
    pub fn intersects(&self, other: &Bitboard) -> bool {
        self.bits.intersects(other)
    }

    /// Combined bitboard of all `boards`; all clear for an empty slice.
    pub fn union(size: u16, boards: &[Board]) -> Bitboard {
        Bitboard::union_all(
            size as usize * size as usize,
            boards.iter().map(|b| &b.bits),
        )
    }

    /// The queen of every board that has one, in order.
    pub fn set_fields(boards: &[Board]) -> Vec<Field> {
        boards.iter().filter_map(|b| b.field).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(f, self.size, |field| {
            self.bits.get(field.to_index(self.size))
        })
    }
}
