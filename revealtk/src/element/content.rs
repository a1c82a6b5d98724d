use std::time::Duration;

use crate::reveal::Easing;

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Two stacked layers with a circular wipe between them. The over layer
    /// is visible inside a circle whose radius follows `target` via
    /// `RevealState`; the under layer shows everywhere else.
    Reveal {
        under: Box<super::Element>,
        over: Box<super::Element>,
        target: f32,
        duration: Duration,
        easing: Easing,
    },
}
