//! Lump sum vs. annuity comparison and verdict formatting

mod comparator;
mod format;

pub use comparator::{
    compare, evaluate, ComparisonInput, ComparisonResult, OptionComparator, PreferredOption,
};
pub use format::format_currency;
