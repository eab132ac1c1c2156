pub use capability::{classify, plan, Access, Capability, Indexer, Plan, FAST_PATH_THRESHOLD};
pub use container::Container;
pub use cursor::Cursor;
pub use edit::{Compact, Edit};
pub use error::IterateError;

mod capability;
mod container;
mod cursor;
mod edit;
mod error;
pub mod num;
pub mod render;
