pub use iterate::Partition;
pub use primitive::{PrimitiveIndexed, PrimitiveIterable, PrimitiveList, ReversedView};

pub mod iterate;
pub mod primitive;
