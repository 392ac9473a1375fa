//! Tree model: directory listing, header/source pairing, ordering.

pub mod builder;
pub mod pairing;
pub mod sort;

pub use builder::TreeModelBuilder;
pub use sort::{label_cmp, sort_nodes};
