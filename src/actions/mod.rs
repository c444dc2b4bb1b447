//! User-triggered actions that leave the graph: random search and story generation.

pub mod random_query;
pub mod story;
