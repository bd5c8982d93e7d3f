use std::fmt;

use crate::field::Field;

pub(crate) const SET_SQUARE: char = '*';
pub(crate) const EMPTY_SQUARE: char = '·';

/// Width of one label column: the digits of the largest index plus a space.
fn cell_width(size: u16) -> usize {
    size.saturating_sub(1).to_string().len() + 1
}

/// Draw a `size × size` grid, highest row first, with row labels on the left
/// and a trailing row of column labels.
pub(crate) fn write_grid<F>(f: &mut fmt::Formatter<'_>, size: u16, is_set: F) -> fmt::Result
where
    F: Fn(Field) -> bool,
{
    let w = cell_width(size);

    for row in (0..size).rev() {
        write!(f, "{:<w$} | ", row)?;
        for column in 0..size {
            let c = if is_set(Field::new(column, row)) {
                SET_SQUARE
            } else {
                EMPTY_SQUARE
            };
            write!(f, "{:<w$}", c)?;
        }
        writeln!(f)?;
    }

    // Column numbers
    write!(f, "{:<w$} | ", "")?;
    for column in 0..size {
        write!(f, "{:<w$}", column)?;
    }
    writeln!(f)
}
