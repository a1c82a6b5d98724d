pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod input;
pub mod layout;
pub mod render;
pub mod reveal;
pub mod terminal;
pub mod text;
pub mod types;
pub mod widgets;

pub use buffer::Buffer;
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use input::process_events;
pub use layout::{LayoutResult, Rect};
pub use reveal::{collect_element_ids, Easing, RevealMask, RevealState};
pub use terminal::Terminal;
pub use types::*;
pub use widgets::{CheckItem, CheckItemState};
