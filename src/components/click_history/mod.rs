mod component;
mod storage;
mod store;

pub use component::ClickHistoryList;
pub use storage::LocalStorage;
pub use store::{ClickHistory, HistoryStore};
