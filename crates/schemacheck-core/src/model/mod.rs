pub mod attribute;
pub mod path;
pub mod snapshot;
pub mod tree;
pub mod validation;

pub use attribute::{AttributeKind, AttributeNode, DefaultValue, Elem};
pub use path::{AttributePath, Violation};
pub use snapshot::Snapshot;
pub use tree::{AttributeTree, Timeouts};
pub use validation::validate_snapshot;
