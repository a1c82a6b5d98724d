use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::event::Event;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Convert raw crossterm events into high-level events with hit-tested
/// targets. Pointer targets are resolved against the last rendered layout.
pub fn process_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &LayoutResult,
) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                // Only key presses; some terminals also report release/repeat.
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;

                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        events.push(Event::Press {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }

                    MouseEventKind::Up(button) => {
                        let target = hit_test(layout, root, x, y);
                        events.push(Event::Release {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }

                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        events.push(Event::MouseMove { x, y });
                    }

                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }

            _ => {}
        }
    }

    events
}
