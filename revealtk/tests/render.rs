use std::time::Duration;

use revealtk::layout::layout;
use revealtk::render::render_to_buffer;
use revealtk::reveal::{Easing, RevealState};
use revealtk::{
    Border, Buffer, Color, Element, Position, Rect, Rgb, Size, Style, TextAlign,
};

const RED: Color = Color::rgb(200, 40, 40);
const GREEN: Color = Color::rgb(40, 200, 40);

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    let mut reveal = RevealState::new();
    reveal.update(root);
    render_to_buffer(root, &result, &mut buf, &reveal);
    buf
}

fn bg_at(buf: &Buffer, x: u16, y: u16) -> Rgb {
    buf.get(x, y).unwrap().bg
}

#[test]
fn test_background_fill() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .style(Style::new().background(RED));

    let buf = render(&root, 10, 4);

    assert_eq!(bg_at(&buf, 0, 0), Rgb::new(200, 40, 40));
    assert_eq!(bg_at(&buf, 9, 3), Rgb::new(200, 40, 40));
}

#[test]
fn test_fill_stops_at_element_rect() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(2))
        .style(Style::new().background(RED));

    let buf = render(&root, 10, 4);

    assert_eq!(bg_at(&buf, 4, 1), Rgb::new(200, 40, 40));
    // Default cell outside the element
    assert_eq!(bg_at(&buf, 5, 1), Rgb::new(0, 0, 0));
}

#[test]
fn test_rounded_border_glyphs() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .style(Style::new().border(Border::Rounded).border_color(RED));

    let buf = render(&root, 10, 4);

    assert_eq!(buf.get(0, 0).unwrap().char, '╭');
    assert_eq!(buf.get(9, 0).unwrap().char, '╮');
    assert_eq!(buf.get(0, 3).unwrap().char, '╰');
    assert_eq!(buf.get(9, 3).unwrap().char, '╯');
    assert_eq!(buf.get(5, 0).unwrap().char, '─');
    assert_eq!(buf.get(0, 2).unwrap().char, '│');
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(200, 40, 40));
}

#[test]
fn test_single_border_glyphs() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .style(Style::new().border(Border::Single));

    let buf = render(&root, 10, 4);

    assert_eq!(buf.get(0, 0).unwrap().char, '┌');
    assert_eq!(buf.get(9, 3).unwrap().char, '┘');
}

#[test]
fn test_text_foreground_and_style() {
    let root = Element::text("hi")
        .id("t")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .style(Style::new().foreground(GREEN).bold());

    let buf = render(&root, 10, 1);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'h');
    assert_eq!(cell.fg, Rgb::new(40, 200, 40));
    assert!(cell.style.bold);
}

#[test]
fn test_text_center_alignment() {
    let root = Element::text("hi")
        .id("t")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .text_align(TextAlign::Center);

    let buf = render(&root, 10, 1);

    assert_eq!(buf.get(4, 0).unwrap().char, 'h');
    assert_eq!(buf.get(5, 0).unwrap().char, 'i');
}

#[test]
fn test_text_keeps_underlying_background() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .style(Style::new().background(RED))
        .child(Element::text("hi").id("t").height(Size::Fixed(1)));

    let buf = render(&root, 10, 1);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'h');
    assert_eq!(cell.bg, Rgb::new(200, 40, 40));
}

#[test]
fn test_higher_z_index_renders_on_top() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .child(
            Element::box_()
                .id("above")
                .position(Position::Absolute)
                .left(0)
                .top(0)
                .z_index(2)
                .width(Size::Fixed(10))
                .height(Size::Fixed(4))
                .style(Style::new().background(GREEN)),
        )
        .child(
            Element::box_()
                .id("below")
                .position(Position::Absolute)
                .left(0)
                .top(0)
                .z_index(1)
                .width(Size::Fixed(10))
                .height(Size::Fixed(4))
                .style(Style::new().background(RED)),
        );

    let buf = render(&root, 10, 4);

    assert_eq!(bg_at(&buf, 5, 2), Rgb::new(40, 200, 40));
}

// =============================================================================
// Reveal Rendering Tests
// =============================================================================

fn wipe(target: f32) -> Element {
    Element::reveal(
        Element::box_()
            .id("under")
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(RED)),
        Element::box_()
            .id("over")
            .width(Size::Fill)
            .height(Size::Fill)
            .style(Style::new().background(GREEN)),
    )
    .id("wipe")
    .width(Size::Fixed(21))
    .height(Size::Fixed(7))
    .reveal_target(target)
    .reveal_timing(Duration::ZERO, Easing::Linear)
}

#[test]
fn test_reveal_closed_shows_only_under_layer() {
    let buf = render(&wipe(0.0), 21, 7);

    for (x, y) in [(0, 0), (10, 3), (20, 6)] {
        assert_eq!(bg_at(&buf, x, y), Rgb::new(200, 40, 40));
    }
}

#[test]
fn test_reveal_open_shows_only_over_layer() {
    let buf = render(&wipe(1.0), 21, 7);

    for (x, y) in [(0, 0), (10, 3), (20, 6)] {
        assert_eq!(bg_at(&buf, x, y), Rgb::new(40, 200, 40));
    }
}

#[test]
fn test_partial_reveal_is_a_centered_circle() {
    let buf = render(&wipe(0.5), 21, 7);

    // Over layer at the center, under layer at the corners
    assert_eq!(bg_at(&buf, 10, 3), Rgb::new(40, 200, 40));
    assert_eq!(bg_at(&buf, 0, 0), Rgb::new(200, 40, 40));
    assert_eq!(bg_at(&buf, 20, 6), Rgb::new(200, 40, 40));
}

#[test]
fn test_reveal_layers_clip_to_element_rect() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(21))
        .height(Size::Fixed(10))
        .child(wipe(1.0));

    let buf = render(&root, 21, 10);

    assert_eq!(bg_at(&buf, 10, 3), Rgb::new(40, 200, 40));
    // Below the reveal element nothing is painted
    assert_eq!(bg_at(&buf, 10, 8), Rgb::new(0, 0, 0));
}
