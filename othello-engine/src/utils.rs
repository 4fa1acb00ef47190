//! Miscellaneous project utilities.

use crate::location::COLUMN_LABELS;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `rows * cols` characters into a pretty grid with column letters and
/// 1-based row numbers. `piece_iter` must yield exactly `rows * cols` items, row-major.
pub fn format_grid<T: Iterator<Item = char>>(
    rows: usize,
    cols: usize,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    let label_width = rows.to_string().len();

    write!(f, "{:width$}", "", width = label_width + 2)?;
    for (i, label) in COLUMN_LABELS.chars().take(cols).enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", label)?;
    }

    for row in 0..rows {
        write!(f, "\n{:>width$} ", row + 1, width = label_width + 1)?;
        for _ in 0..cols {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
