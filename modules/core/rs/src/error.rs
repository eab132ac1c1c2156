use derive_more::{Display, Error};

/// Conditions that collection operations report instead of producing a result.
///
/// Operations return `eyre::Result`; the report wraps one of these variants, so callers that
/// need to react to a specific condition can `downcast_ref::<IterateError>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum IterateError {
    /// An argument is outside of its domain, e.g. a negative count.
    #[display("Invalid argument '{name}': {value} (must be non-negative)")]
    InvalidArgument { name: &'static str, value: isize },

    /// An inclusive range [from, to] doesn't fit into a container of the given size.
    #[display("Range [{from}, {to}] is out of bounds for a container of size {size}")]
    OutOfBounds { from: isize, to: isize, size: usize },

    /// A cursor was advanced past its last element.
    #[display("Cursor is exhausted")]
    Exhausted,
}

impl IterateError {
    pub fn negative_count(value: isize) -> Self {
        Self::InvalidArgument {
            name: "count",
            value,
        }
    }
}
