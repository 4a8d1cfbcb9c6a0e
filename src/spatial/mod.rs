mod range_query;
mod quadtree;

pub use range_query::*;
pub use quadtree::*;
