use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    if element.position == Position::Absolute {
        let x = element.left.max(0) as u16;
        let y = element.top.max(0) as u16;
        let width = resolve_size(element.width, available.width, element, true);
        let height = resolve_size(element.height, available.height, element, false);
        let rect = Rect::new(x, y, width, height);
        result.insert(element.id.clone(), rect);
        layout_children(element, rect, result);
        return;
    }

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    match &element.content {
        Content::Reveal { under, over, .. } => {
            // Both layers occupy the full element rect; the wipe decides
            // which one is visible per cell.
            for layer in [under.as_ref(), over.as_ref()] {
                let width = resolve_size(layer.width, rect.width, layer, true);
                let height = resolve_size(layer.height, rect.height, layer, false);
                let layer_rect = Rect::new(rect.x, rect.y, width, height);
                result.insert(layer.id.clone(), layer_rect);
                layout_children(layer, layer_rect, result);
            }
        }
        Content::Children(children) if !children.is_empty() => {
            flex_children(element, children, rect, result);
        }
        _ => {}
    }
}

fn flex_children(
    element: &Element,
    children: &[Element],
    rect: Rect,
    result: &mut LayoutResult,
) {
    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();
    let absolute: Vec<&Element> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();

    let inner = inner_rect(element, rect);
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed and auto sizes, count Fill children.
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = element.gap * flow.len().saturating_sub(1) as u16;

    for child in &flow {
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Resolve every child's main-axis size.
    let sizes: Vec<u16> = flow
        .iter()
        .map(|child| {
            let main = if is_row { child.width } else { child.height };
            match main {
                Size::Fixed(n) => n,
                Size::Auto => estimate_size(child, is_row),
                Size::Fill => fill_size,
            }
        })
        .collect();

    let used: u16 = sizes.iter().sum::<u16>() + gap_total;
    let extra = main_size.saturating_sub(used);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::End => (extra, element.gap),
        Justify::SpaceBetween => {
            if flow.len() > 1 {
                (0, extra / (flow.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects.
    let mut offset = start_offset;
    for (child, &main) in flow.iter().zip(&sizes) {
        let cross_spec = if is_row { child.height } else { child.width };
        let cross = match cross_spec {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill => cross_size,
            Size::Auto => estimate_size(child, !is_row).min(cross_size),
        };

        let cross_offset = match element.align {
            Align::Start => 0,
            Align::Center => (cross_size.saturating_sub(cross)) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let clamped_main = main.min(main_size.saturating_sub(offset));

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset,
                inner.y + cross_offset,
                clamped_main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset,
                cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + between_gap;
    }

    for child in absolute {
        layout_element(child, rect, result);
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|l| display_width(l) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                let gap_total = element.gap * (children.len().saturating_sub(1)) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::Reveal { under, over, .. } => estimate_size(under, is_width)
            .max(estimate_size(over, is_width)),
        Content::None => 0,
    };

    content + padding + border
}
