use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::reveal::{RevealMask, RevealState};
use crate::text::{align_offset, char_width, display_width};
use crate::types::{Border, Rgb, TextStyle};

/// A render item: an element with its effective z-index, tree order, clip
/// rect, and the reveal mask inherited from an enclosing over layer.
struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
    clip: Option<Rect>,
    mask: Option<RevealMask>,
}

pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    reveal: &RevealState,
) {
    let mut render_list: Vec<RenderItem> = Vec::new();
    collect_elements(
        root,
        layout,
        &mut render_list,
        0,
        root.z_index,
        None,
        None,
        reveal,
    );

    // Stable sort preserves tree order for equal z-index.
    render_list.sort_by_key(|item| (item.z_index, item.tree_order));

    let count = render_list.len();
    for item in render_list {
        render_single_element(item.element, layout, buf, item.clip, item.mask);
    }
    log::trace!("rendered {count} elements");
}

#[allow(clippy::too_many_arguments)]
fn collect_elements<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    list: &mut Vec<RenderItem<'a>>,
    tree_order: usize,
    parent_z_index: i16,
    parent_clip: Option<Rect>,
    parent_mask: Option<RevealMask>,
    reveal: &RevealState,
) -> usize {
    let mut order = tree_order;
    let effective_z = element.z_index.max(parent_z_index);

    list.push(RenderItem {
        element,
        z_index: effective_z,
        tree_order: order,
        clip: parent_clip,
        mask: parent_mask,
    });
    order += 1;

    match &element.content {
        Content::Children(children) => {
            for child in children {
                order = collect_elements(
                    child,
                    layout,
                    list,
                    order,
                    effective_z,
                    parent_clip,
                    parent_mask,
                    reveal,
                );
            }
        }
        Content::Reveal {
            under,
            over,
            target,
            ..
        } => {
            // Interpolated fraction; before the first RevealState::update
            // the declared target stands in.
            let fraction = reveal
                .fraction(&element.id)
                .unwrap_or(*target)
                .clamp(0.0, 1.0);

            // Both layers are clipped to the reveal element's rect.
            let layer_clip = layout.get(&element.id).map(|rect| match parent_clip {
                Some(clip) => rect.intersect(clip),
                None => *rect,
            });

            if fraction < 1.0 {
                order = collect_elements(
                    under,
                    layout,
                    list,
                    order,
                    effective_z,
                    layer_clip,
                    parent_mask,
                    reveal,
                );
            }

            if fraction > 0.0 {
                // A full reveal needs no mask; a partial one clips the over
                // layer to the wipe circle. Nested reveals replace the
                // inherited mask rather than intersecting with it.
                let mask = if fraction >= 1.0 {
                    parent_mask
                } else {
                    layout
                        .get(&element.id)
                        .map(|rect| RevealMask::for_rect(*rect, fraction))
                        .or(parent_mask)
                };
                order = collect_elements(
                    over,
                    layout,
                    list,
                    order,
                    effective_z,
                    layer_clip,
                    mask,
                    reveal,
                );
            }
        }
        _ => {}
    }

    order
}

fn render_single_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Option<Rect>,
    mask: Option<RevealMask>,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let visible = match clip {
        Some(clip_rect) => {
            let clipped = rect.intersect(clip_rect);
            if clipped.is_empty() {
                return;
            }
            clipped
        }
        None => rect,
    };

    if let Some(bg) = element.style.background {
        fill_rect(buf, visible, bg.to_rgb(), mask);
    }

    render_border(element, rect, buf, clip, mask);

    if let Content::Text(text) = &element.content {
        render_text(text, element, rect, buf, clip, mask);
    }
}

fn masked(mask: Option<RevealMask>, x: u16, y: u16) -> bool {
    mask.is_none_or(|m| m.contains(x, y))
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb, mask: Option<RevealMask>) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if !masked(mask, x, y) {
                continue;
            }
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

/// Write a single glyph, preserving the existing cell background when the
/// element has none of its own.
#[allow(clippy::too_many_arguments)]
fn put_cell(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    ch: char,
    fg: Rgb,
    bg: Option<Rgb>,
    style: TextStyle,
    clip: Option<Rect>,
    mask: Option<RevealMask>,
) {
    if let Some(c) = clip {
        if !c.contains(x, y) {
            return;
        }
    }
    if !masked(mask, x, y) {
        return;
    }
    let bg = bg.or_else(|| buf.get(x, y).map(|cell| cell.bg));
    let Some(bg) = bg else { return };
    buf.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
}

fn border_glyphs(border: Border) -> Option<[char; 6]> {
    // [horizontal, vertical, top-left, top-right, bottom-left, bottom-right]
    match border {
        Border::None => None,
        Border::Single => Some(['─', '│', '┌', '┐', '└', '┘']),
        Border::Rounded => Some(['─', '│', '╭', '╮', '╰', '╯']),
    }
}

fn render_border(
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    clip: Option<Rect>,
    mask: Option<RevealMask>,
) {
    let Some([h, v, tl, tr, bl, br]) = border_glyphs(element.style.border) else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .border_color
        .or(element.style.foreground)
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let bg = element.style.background.map(|c| c.to_rgb());
    let style = TextStyle::new();

    let top = rect.y;
    let bottom = rect.bottom() - 1;
    let left = rect.x;
    let right = rect.right() - 1;

    put_cell(buf, left, top, tl, fg, bg, style, clip, mask);
    put_cell(buf, right, top, tr, fg, bg, style, clip, mask);
    put_cell(buf, left, bottom, bl, fg, bg, style, clip, mask);
    put_cell(buf, right, bottom, br, fg, bg, style, clip, mask);

    for x in left + 1..right {
        put_cell(buf, x, top, h, fg, bg, style, clip, mask);
        put_cell(buf, x, bottom, h, fg, bg, style, clip, mask);
    }
    for y in top + 1..bottom {
        put_cell(buf, left, y, v, fg, bg, style, clip, mask);
        put_cell(buf, right, y, v, fg, bg, style, clip, mask);
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    clip: Option<Rect>,
    mask: Option<RevealMask>,
) {
    let fg = element
        .style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = element.style.background.map(|c| c.to_rgb());

    let border = if element.style.border == Border::None {
        0
    } else {
        1
    };
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    if inner.is_empty() {
        return;
    }

    let max_width = inner.width as usize;

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }

        let x_offset = if element.text_align == crate::types::TextAlign::Left {
            0
        } else {
            align_offset(display_width(line), max_width, element.text_align) as u16
        };
        let mut x = inner.x + x_offset;

        for ch in line.chars() {
            let ch_w = char_width(ch);

            if ch_w == 0 {
                // Zero-width char (combining mark, etc.)
                continue;
            }

            if x + ch_w as u16 > inner.right() {
                break;
            }

            put_cell(
                buf,
                x,
                y,
                ch,
                fg,
                explicit_bg,
                element.style.text_style,
                clip,
                mask,
            );

            // Wide chars (CJK) occupy the following cell as well.
            if ch_w == 2 {
                let cont_x = x + 1;
                let in_clip = clip.is_none_or(|c| c.contains(cont_x, y));
                if in_clip && masked(mask, cont_x, y) {
                    if let Some(existing_bg) = buf.get(cont_x, y).map(|cell| cell.bg) {
                        let mut continuation = Cell::new(' ')
                            .with_fg(fg)
                            .with_bg(explicit_bg.unwrap_or(existing_bg))
                            .with_style(element.style.text_style);
                        continuation.wide_continuation = true;
                        buf.set(cont_x, y, continuation);
                    }
                }
            }

            x += ch_w as u16;
        }
    }
}
