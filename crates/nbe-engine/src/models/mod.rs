pub mod meta;
pub mod tree;

pub use meta::{CategoryMeta, ExampleMeta, META_FILE, RootMeta};
pub use tree::{Category, Example, Implementation, Root, title_case};
