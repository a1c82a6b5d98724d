mod check_item;

pub use check_item::{CheckItem, CheckItemState};
