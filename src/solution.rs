use std::fmt;

use crate::board::Board;
use crate::field::Field;
use crate::render;

/// Why a list of fields is not a valid placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementViolation {
    /// The placement does not hold one queen per column.
    WrongLength { expected: usize, actual: usize },
    /// The queen at position `index` is not in column `index`.
    ColumnOutOfOrder { index: usize, field: Field },
    /// A queen lies off the board.
    OutOfBounds { field: Field, size: u16 },
    /// Two queens share a row.
    SharedRow(Field, Field),
    /// Two queens share a diagonal.
    SharedDiagonal(Field, Field),
    /// Three queens lie on one straight line.
    Collinear(Field, Field, Field),
}

impl fmt::Display for PlacementViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} queens, found {actual}")
            }
            Self::ColumnOutOfOrder { index, field } => {
                write!(f, "queen {index} is at {field}, not in column {index}")
            }
            Self::OutOfBounds { field, size } => {
                write!(f, "queen {field} doesn't fit on the board with size {size}")
            }
            Self::SharedRow(a, b) => write!(f, "queens {a} and {b} share a row"),
            Self::SharedDiagonal(a, b) => write!(f, "queens {a} and {b} share a diagonal"),
            Self::Collinear(a, b, c) => write!(f, "queens {a}, {b} and {c} are in one line"),
        }
    }
}

impl std::error::Error for PlacementViolation {}

/// Check that `fields` place one queen per column of a `size × size` board,
/// with no two queens attacking each other and no three in one line.
pub fn verify_placement(size: u16, fields: &[Field]) -> Result<(), PlacementViolation> {
    if fields.len() != size as usize {
        return Err(PlacementViolation::WrongLength {
            expected: size as usize,
            actual: fields.len(),
        });
    }

    for (index, &field) in fields.iter().enumerate() {
        if !field.is_valid(size) {
            return Err(PlacementViolation::OutOfBounds { field, size });
        }
        if field.column() as usize != index {
            return Err(PlacementViolation::ColumnOutOfOrder { index, field });
        }
    }

    for (i, &a) in fields.iter().enumerate() {
        for &b in &fields[i + 1..] {
            if a.row() == b.row() {
                return Err(PlacementViolation::SharedRow(a, b));
            }
            if a.shares_diagonal(&b) {
                return Err(PlacementViolation::SharedDiagonal(a, b));
            }
        }
    }

    for (i, &a) in fields.iter().enumerate() {
        for (j, &b) in fields.iter().enumerate().skip(i + 1) {
            for &c in &fields[j + 1..] {
                if Field::collinear(a, b, c) {
                    return Err(PlacementViolation::Collinear(a, b, c));
                }
            }
        }
    }

    Ok(())
}

/// A complete placement: one queen per column, column `i` at index `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    size: u16,
    fields: Vec<Field>,
}

impl Solution {
    pub(crate) fn new(size: u16, fields: Vec<Field>) -> Self {
        debug_assert_eq!(fields.len(), size as usize);
        Solution { size, fields }
    }

    /// Build a solution from the row of each column, rejecting anything that
    /// is not a valid placement.
    pub fn from_rows(rows: &[u16]) -> Result<Self, PlacementViolation> {
        let size = u16::try_from(rows.len()).map_err(|_| PlacementViolation::WrongLength {
            expected: u16::MAX as usize,
            actual: rows.len(),
        })?;
        let fields: Vec<Field> = rows
            .iter()
            .enumerate()
            .map(|(column, &row)| Field::new(column as u16, row))
            .collect();
        verify_placement(size, &fields)?;
        Ok(Solution { size, fields })
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Row of the queen in each column.
    pub fn rows(&self) -> Vec<u16> {
        self.fields.iter().map(|f| f.row()).collect()
    }

    /// The queen of `column`, if the column is on the board.
    pub fn queen_in_column(&self, column: u16) -> Option<Field> {
        self.fields.get(column as usize).copied()
    }

    /// One threat board per queen, in column order.
    pub fn to_boards(&self) -> Vec<Board> {
        self.fields
            .iter()
            .map(|&f| Board::queen_in_range(self.size, f))
            .collect()
    }

    pub fn verify(&self) -> Result<(), PlacementViolation> {
        verify_placement(self.size, &self.fields)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(f, self.size, |field| {
            self.queen_in_column(field.column()) == Some(field)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(rows: &[u16]) -> Vec<Field> {
        rows.iter()
            .enumerate()
            .map(|(c, &r)| Field::new(c as u16, r))
            .collect()
    }

    #[test]
    fn test_from_rows_accepts_known_solution() {
        let solution = Solution::from_rows(&[1, 3, 0, 2]).expect("valid placement");
        assert_eq!(solution.size(), 4);
        assert_eq!(solution.rows(), vec![1, 3, 0, 2]);
        assert_eq!(solution.queen_in_column(2), Some(Field::new(2, 0)));
        assert_eq!(solution.queen_in_column(4), None);
        assert!(solution.verify().is_ok());
    }

    #[test]
    fn test_display() {
        let solution = Solution::from_rows(&[1, 3, 0, 2]).expect("valid placement");
        let expected = concat!(
            "3  | · * · · \n",
            "2  | · · · * \n",
            "1  | * · · · \n",
            "0  | · · * · \n",
            "   | 0 1 2 3 \n",
        );
        assert_eq!(solution.to_string(), expected);
    }

    #[test]
    fn test_empty_placement() {
        assert!(verify_placement(0, &[]).is_ok());
        let solution = Solution::from_rows(&[]).expect("empty board");
        assert_eq!(solution.to_string(), "   | \n");
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            verify_placement(4, &fields(&[1, 3, 0])),
            Err(PlacementViolation::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_out_of_bounds_and_order() {
        assert_eq!(
            Solution::from_rows(&[0, 5]),
            Err(PlacementViolation::OutOfBounds {
                field: Field::new(1, 5),
                size: 2
            })
        );
        let swapped = vec![Field::new(1, 0), Field::new(0, 1)];
        assert_eq!(
            verify_placement(2, &swapped),
            Err(PlacementViolation::ColumnOutOfOrder {
                index: 0,
                field: Field::new(1, 0)
            })
        );
    }

    #[test]
    fn test_attacks() {
        assert_eq!(
            Solution::from_rows(&[1, 3, 1, 2]),
            Err(PlacementViolation::SharedRow(Field::new(0, 1), Field::new(2, 1)))
        );
        assert_eq!(
            Solution::from_rows(&[0, 3, 2, 1]),
            Err(PlacementViolation::SharedDiagonal(
                Field::new(0, 0),
                Field::new(2, 2)
            ))
        );
    }

    #[test]
    fn test_collinear() {
        // classic 5-queens solution with three queens on the slope-2 line
        assert_eq!(
            Solution::from_rows(&[0, 2, 4, 1, 3]),
            Err(PlacementViolation::Collinear(
                Field::new(0, 0),
                Field::new(1, 2),
                Field::new(2, 4)
            ))
        );
    }

    #[test]
    fn test_to_boards() {
        let solution = Solution::from_rows(&[1, 3, 0, 2]).expect("valid placement");
        let boards = solution.to_boards();
        assert_eq!(boards.len(), 4);
        assert_eq!(Board::set_fields(&boards), solution.fields().to_vec());
        // each queen stays off every other queen's threats
        for (i, board) in boards.iter().enumerate() {
            for (j, &queen) in solution.fields().iter().enumerate() {
                if i != j {
                    assert_eq!(board.is_set(queen), Ok(false));
                }
            }
        }
    }

    #[test]
    fn test_violation_messages() {
        let err = PlacementViolation::Collinear(Field::new(0, 0), Field::new(2, 1), Field::new(4, 2));
        assert_eq!(err.to_string(), "queens (0,0), (2,1) and (4,2) are in one line");
        let err = PlacementViolation::WrongLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 4 queens, found 3");
    }
}
