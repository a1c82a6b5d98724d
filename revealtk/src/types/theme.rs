use super::Color;

/// Color tokens supplied by the host application. Widgets read these and
/// never define colors of their own.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Resting surface behind content (the "unchecked" row background).
    pub background: Color,
    /// Primary content color (the "unchecked" label, inverted when checked).
    pub foreground: Color,
    /// Thin outlines: row border, empty indicator box.
    pub border: Color,
    /// Screen backdrop behind the widgets.
    pub surface: Color,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            background: Color::rgb(255, 255, 255),
            foreground: Color::rgb(0, 0, 0),
            border: Color::rgb(229, 229, 229),
            surface: Color::rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
