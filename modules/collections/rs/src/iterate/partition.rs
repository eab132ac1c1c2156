use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Outcome of a single-pass split: elements that satisfied the predicate and those that did
/// not, each in their original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Constructor, Getters, Dissolve)]
pub struct Partition<F> {
    selected: F,
    rejected: F,
}
