//! Console layout of statistics and arrays.
//!
//! ```
//! # use u8kit::{report::ArrayDisplay, Statistics};
//! let mut data = [4u8, 1, 3, 2];
//! let stats = Statistics::compute(&mut data).unwrap();
//!
//! assert_eq!(ArrayDisplay(&data).to_string(), "[ 4, 3, 2, 1 ]");
//! assert!(stats.to_string().contains("Median   = 2"));
//! ```

use core::fmt;

use crate::stats::Statistics;

/// Writes the labelled statistics table, one `Label = value` line per query.
///
/// # Errors
///
/// Returns `fmt::Error` if the writer fails.
pub fn write_statistics<W: fmt::Write>(w: &mut W, stats: &Statistics) -> fmt::Result {
    writeln!(w, "Statistics")?;
    writeln!(w, "What     Value")?;
    writeln!(w, "{:<8} = {}", "Median", stats.median)?;
    writeln!(w, "{:<8} = {}", "Mean", stats.mean)?;
    writeln!(w, "{:<8} = {}", "Max", stats.maximum)?;
    writeln!(w, "{:<8} = {}", "Min", stats.minimum)
}

/// Writes `arr` as a bracketed, comma-separated list.
///
/// # Errors
///
/// Returns `fmt::Error` if the writer fails.
pub fn write_array<W: fmt::Write>(w: &mut W, arr: &[u8]) -> fmt::Result {
    w.write_str("[ ")?;
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        write!(w, "{value}")?;
    }
    w.write_str(" ]")
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statistics(f, self)
    }
}

/// `Display` adapter rendering a byte array as `[ a, b, c ]`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayDisplay<'a>(pub &'a [u8]);

impl fmt::Display for ArrayDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self.0)
    }
}
