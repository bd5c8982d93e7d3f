use std::fmt;

/// One square of the board, in chess terms: the column is the file and the
/// row is the rank.
///
/// Ordering is by column first, then by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Field {
    column: u16,
    row: u16,
}

impl Field {
    pub const fn new(column: u16, row: u16) -> Self {
        Field { column, row }
    }

    #[inline]
    pub const fn column(&self) -> u16 {
        self.column
    }

    #[inline]
    pub const fn row(&self) -> u16 {
        self.row
    }

    pub fn from_index(index: usize, size: u16) -> Self {
        let s = size as usize;
        Field {
            column: (index % s) as u16,
            row: (index / s) as u16,
        }
    }

    #[inline]
    pub fn to_index(&self, size: u16) -> usize {
        self.row as usize * size as usize + self.column as usize
    }

    #[inline]
    pub fn is_valid(&self, size: u16) -> bool {
        self.column < size && self.row < size
    }

    /// True if the three fields lie on one straight line of any slope.
    ///
    /// Exact integer cross product, so there is no tolerance involved.
    #[inline]
    pub fn collinear(a: Field, b: Field, c: Field) -> bool {
        let (c1, r1) = (a.column as i64, a.row as i64);
        let (c2, r2) = (b.column as i64, b.row as i64);
        let (c3, r3) = (c.column as i64, c.row as i64);
        (r2 - r1) * (c3 - c1) == (r3 - r1) * (c2 - c1)
    }

    /// True if both fields lie on one of the ±45° diagonals through each other.
    #[inline]
    pub fn shares_diagonal(&self, other: &Field) -> bool {
        self.column.abs_diff(other.column) == self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_equality() {
        let field = Field::new(1, 2);
        assert_eq!(field.column(), 1);
        assert_eq!(field.row(), 2);
        assert_eq!(field, Field::new(1, 2));
        assert_ne!(field, Field::new(2, 1));
        assert_eq!(field.to_string(), "(1,2)");
    }

    #[test]
    fn test_ordering_column_then_row() {
        let mut fields = vec![
            Field::new(1, 1),
            Field::new(2, 1),
            Field::new(0, 1),
            Field::new(0, 0),
        ];
        fields.sort();
        assert_eq!(
            fields,
            vec![
                Field::new(0, 0),
                Field::new(0, 1),
                Field::new(1, 1),
                Field::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_index_mapping_3x3() {
        assert_eq!(Field::new(0, 0).to_index(3), 0);
        assert_eq!(Field::new(1, 0).to_index(3), 1);
        assert_eq!(Field::new(2, 0).to_index(3), 2);
        assert_eq!(Field::new(2, 1).to_index(3), 5);
        assert_eq!(Field::new(2, 2).to_index(3), 8);

        assert_eq!(Field::from_index(0, 3), Field::new(0, 0));
        assert_eq!(Field::from_index(5, 3), Field::new(2, 1));
        assert_eq!(Field::from_index(8, 3), Field::new(2, 2));
    }

    #[test]
    fn test_index_mapping_is_a_bijection() {
        for size in 1..=12u16 {
            for row in 0..size {
                for column in 0..size {
                    let field = Field::new(column, row);
                    let index = field.to_index(size);
                    assert!(index < size as usize * size as usize);
                    assert_eq!(Field::from_index(index, size), field);
                }
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Field::new(0, 0).is_valid(1));
        assert!(Field::new(3, 3).is_valid(4));
        assert!(!Field::new(4, 0).is_valid(4));
        assert!(!Field::new(0, 4).is_valid(4));
    }

    #[test]
    fn test_collinear() {
        // a1, c2, e3: not attacking, but in one line
        assert!(Field::collinear(
            Field::new(0, 0),
            Field::new(2, 1),
            Field::new(4, 2)
        ));
        assert!(Field::collinear(
            Field::new(0, 3),
            Field::new(1, 2),
            Field::new(3, 0)
        ));
        assert!(!Field::collinear(
            Field::new(0, 1),
            Field::new(1, 3),
            Field::new(2, 0)
        ));
    }

    #[test]
    fn test_shares_diagonal() {
        assert!(Field::new(0, 0).shares_diagonal(&Field::new(3, 3)));
        assert!(Field::new(0, 3).shares_diagonal(&Field::new(3, 0)));
        assert!(!Field::new(0, 1).shares_diagonal(&Field::new(1, 3)));
    }
}
