//! Checklist row that wipes to its checked look with a circular reveal.
//!
//! The widget is fully controlled: the host owns the checked value and the
//! widget only requests a toggle through the callback on a completed tap.

use std::time::Duration;

use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::reveal::Easing;
use crate::types::{Align, Border, Edges, Justify, Size, Style, TextAlign, Theme};

const ROW_HEIGHT: u16 = 5;
const HORIZONTAL_PADDING: u16 = 2;
const INDICATOR_WIDTH: u16 = 5;
const INDICATOR_HEIGHT: u16 = 3;
const CHECK_GLYPH: &str = "✓";

/// Reveal fraction shown while a press is in progress, from either side.
const PRESSED_PREVIEW: f32 = 0.12;

const WIPE_DURATION: Duration = Duration::from_millis(350);

/// Declarative description of one checklist row.
#[derive(Debug, Clone)]
pub struct CheckItem {
    id: String,
    text: String,
    checked: bool,
}

impl CheckItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            checked: false,
        }
    }

    /// Set the checked value. The host is the single source of truth; the
    /// widget never flips this itself.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Build the element tree for the current frame. Both looks are built
    /// every time; the reveal container decides what shows through.
    pub fn view(&self, state: &CheckItemState, theme: &Theme) -> Element {
        Element::reveal(
            row_layer(&self.text, false, theme),
            row_layer(&self.text, true, theme),
        )
        .id(self.id.clone())
        .width(Size::Fill)
        .height(Size::Fixed(ROW_HEIGHT))
        .clickable(true)
        .reveal_target(state.reveal_target(self.checked))
        .reveal_timing(WIPE_DURATION, Easing::EaseInOut)
    }
}

/// One row look, parameterized by which side of the wipe it is.
fn row_layer(text: &str, checked: bool, theme: &Theme) -> Element {
    let (bg, fg) = if checked {
        (theme.foreground, theme.background)
    } else {
        (theme.background, theme.foreground)
    };

    let mut label_style = Style::new().foreground(fg);
    if checked {
        label_style = label_style.bold();
    }

    let indicator = if checked {
        // Filled state: bare checkmark, tinted like the label, no border.
        Element::text(CHECK_GLYPH)
            .width(Size::Fixed(INDICATOR_WIDTH))
            .height(Size::Fixed(1))
            .text_align(TextAlign::Center)
            .style(Style::new().foreground(fg))
    } else {
        Element::box_()
            .width(Size::Fixed(INDICATOR_WIDTH))
            .height(Size::Fixed(INDICATOR_HEIGHT))
            .style(Style::new().border(Border::Rounded).border_color(theme.border))
    };

    Element::row()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::horizontal(HORIZONTAL_PADDING))
        .justify(Justify::SpaceBetween)
        .align(Align::Center)
        .style(
            Style::new()
                .background(bg)
                .border(Border::Rounded)
                .border_color(theme.border),
        )
        .child(Element::text(text).height(Size::Fixed(1)).style(label_style))
        .child(indicator)
}

/// Transient gesture state for one `CheckItem` instance.
#[derive(Debug, Default)]
pub struct CheckItemState {
    finger_down: bool,
}

impl CheckItemState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.finger_down
    }

    /// Target reveal fraction for the current `(finger_down, checked)` pair.
    /// A press in progress holds a partial preview regardless of `checked`;
    /// otherwise the row rests fully open or fully closed.
    pub fn reveal_target(&self, checked: bool) -> f32 {
        if self.finger_down {
            PRESSED_PREVIEW
        } else if checked {
            1.0
        } else {
            0.0
        }
    }

    /// Feed one event through the widget's gesture logic.
    ///
    /// A release only requests a toggle when a press was registered first;
    /// a stray release (pointer entering already released) does nothing.
    /// The callback fires at most once per call and receives `!checked`.
    pub fn on_event(
        &mut self,
        item_id: &str,
        event: &Event,
        checked: bool,
        mut on_checked_change: impl FnMut(bool),
    ) {
        match event {
            Event::Press {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } if target == item_id => {
                self.finger_down = true;
            }
            Event::Release {
                button: MouseButton::Left,
                ..
            } => {
                if self.finger_down {
                    on_checked_change(!checked);
                }
                self.finger_down = false;
            }
            _ => {}
        }
    }
}
