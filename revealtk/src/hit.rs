use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    clickable_only: bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    match &element.content {
        Content::Children(children) => {
            for child in children.iter().rev() {
                if let Some(id) = hit_test_element(layout, child, x, y, clickable_only) {
                    return Some(id);
                }
            }
        }
        Content::Reveal { under, over, .. } => {
            // Layers are presentation only; unless one of them is itself
            // clickable, hits fall through to the reveal element (the whole
            // row is the tap target).
            for layer in [over.as_ref(), under.as_ref()] {
                if let Some(id) = hit_test_element(layout, layer, x, y, clickable_only) {
                    return Some(id);
                }
            }
        }
        _ => {}
    }

    if element.clickable || !clickable_only {
        Some(element.id.clone())
    } else {
        None
    }
}
