use revealtk::reveal::RevealState;
use revealtk::{
    Buffer, CheckItem, CheckItemState, Content, Event, Key, Modifiers, MouseButton, Rect, Theme,
    hit_test, layout, render,
};

fn press(target: &str) -> Event {
    Event::Press {
        target: Some(target.to_string()),
        x: 5,
        y: 2,
        button: MouseButton::Left,
    }
}

fn release() -> Event {
    Event::Release {
        target: Some("item".to_string()),
        x: 5,
        y: 2,
        button: MouseButton::Left,
    }
}

/// Layout and paint one widget into a fresh 40x5 buffer. Reduced motion
/// keeps the reveal at its target so assertions see the resting look.
fn render_item(item: &CheckItem, state: &CheckItemState) -> Buffer {
    let theme = Theme::default();
    let root = item.view(state, &theme);
    let layout = layout::layout(&root, Rect::new(0, 0, 40, 5));

    let mut reveal = RevealState::new();
    reveal.set_reduced_motion(true);
    reveal.update(&root);

    let mut buf = Buffer::new(40, 5);
    render::render_to_buffer(&root, &layout, &mut buf, &reveal);
    buf
}

fn count_char(buf: &Buffer, ch: char) -> usize {
    let mut count = 0;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if buf.get(x, y).map(|cell| cell.char) == Some(ch) {
                count += 1;
            }
        }
    }
    count
}

// =============================================================================
// Reveal Target Rule Tests
// =============================================================================

#[test]
fn test_target_rests_closed_when_unchecked() {
    let state = CheckItemState::new();
    assert_eq!(state.reveal_target(false), 0.0);
}

#[test]
fn test_target_rests_open_when_checked() {
    let state = CheckItemState::new();
    assert_eq!(state.reveal_target(true), 1.0);
}

#[test]
fn test_press_holds_partial_preview_from_either_side() {
    let mut state = CheckItemState::new();
    state.on_event("item", &press("item"), false, |_| {});

    assert!(state.is_pressed());
    assert_eq!(state.reveal_target(false), 0.12);
    assert_eq!(state.reveal_target(true), 0.12);
}

#[test]
fn test_view_carries_target() {
    let theme = Theme::default();
    let state = CheckItemState::new();

    let unchecked = CheckItem::new("item", "Task").view(&state, &theme);
    let Content::Reveal { target, .. } = unchecked.content else {
        panic!("expected reveal content");
    };
    assert_eq!(target, 0.0);

    let checked = CheckItem::new("item", "Task")
        .checked(true)
        .view(&state, &theme);
    let Content::Reveal { target, .. } = checked.content else {
        panic!("expected reveal content");
    };
    assert_eq!(target, 1.0);
}

// =============================================================================
// Gesture Tests
// =============================================================================

#[test]
fn test_tap_toggles_exactly_once() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    state.on_event("item", &press("item"), false, |v| calls.push(v));
    state.on_event("item", &release(), false, |v| calls.push(v));

    assert_eq!(calls, vec![true]);
    assert!(!state.is_pressed());
}

#[test]
fn test_tap_requests_uncheck_when_checked() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    state.on_event("item", &press("item"), true, |v| calls.push(v));
    state.on_event("item", &release(), true, |v| calls.push(v));

    assert_eq!(calls, vec![false]);
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    state.on_event("item", &release(), false, |v| calls.push(v));

    assert!(calls.is_empty());
    assert!(!state.is_pressed());
}

#[test]
fn test_press_on_other_element_is_ignored() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    state.on_event("item", &press("sibling"), false, |v| calls.push(v));
    assert!(!state.is_pressed());

    state.on_event("item", &release(), false, |v| calls.push(v));
    assert!(calls.is_empty());
}

#[test]
fn test_non_left_button_is_ignored() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    let right_press = Event::Press {
        target: Some("item".to_string()),
        x: 5,
        y: 2,
        button: MouseButton::Right,
    };
    state.on_event("item", &right_press, false, |v| calls.push(v));
    assert!(!state.is_pressed());

    let right_release = Event::Release {
        target: Some("item".to_string()),
        x: 5,
        y: 2,
        button: MouseButton::Right,
    };
    state.on_event("item", &right_release, false, |v| calls.push(v));
    assert!(calls.is_empty());
}

#[test]
fn test_key_events_do_not_affect_gesture() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    let key = Event::Key {
        key: Key::Enter,
        modifiers: Modifiers::default(),
    };
    state.on_event("item", &key, false, |v| calls.push(v));

    assert!(calls.is_empty());
    assert!(!state.is_pressed());
}

#[test]
fn test_repeated_press_then_single_release_toggles_once() {
    let mut state = CheckItemState::new();
    let mut calls: Vec<bool> = Vec::new();

    state.on_event("item", &press("item"), false, |v| calls.push(v));
    state.on_event("item", &press("item"), false, |v| calls.push(v));
    state.on_event("item", &release(), false, |v| calls.push(v));

    assert_eq!(calls, vec![true]);
}

#[test]
fn test_whole_row_is_the_tap_target() {
    let theme = Theme::default();
    let state = CheckItemState::new();
    let root = CheckItem::new("item", "Task").view(&state, &theme);
    let layout = layout::layout(&root, Rect::new(0, 0, 40, 5));

    // Over the label, over the indicator, and over empty row space all
    // resolve to the row itself.
    assert_eq!(hit_test(&layout, &root, 4, 2).as_deref(), Some("item"));
    assert_eq!(hit_test(&layout, &root, 33, 2).as_deref(), Some("item"));
    assert_eq!(hit_test(&layout, &root, 20, 2).as_deref(), Some("item"));
    assert_eq!(hit_test(&layout, &root, 0, 0).as_deref(), Some("item"));
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_unchecked_row_renders_light_look() {
    let item = CheckItem::new("item", "Task");
    let state = CheckItemState::new();
    let buf = render_item(&item, &state);

    // White background in the row interior
    let interior = buf.get(20, 2).unwrap();
    assert_eq!(interior.bg, revealtk::Rgb::new(255, 255, 255));

    // Label in plain black text
    let label = buf.get(3, 2).unwrap();
    assert_eq!(label.char, 'T');
    assert_eq!(label.fg, revealtk::Rgb::new(0, 0, 0));
    assert!(!label.style.bold);

    // No checkmark; two rounded boxes (row border plus empty indicator)
    assert_eq!(count_char(&buf, '✓'), 0);
    assert_eq!(count_char(&buf, '╭'), 2);
}

#[test]
fn test_checked_row_renders_inverted_look() {
    let item = CheckItem::new("item", "Task").checked(true);
    let state = CheckItemState::new();
    let buf = render_item(&item, &state);

    // Black background in the row interior
    let interior = buf.get(20, 2).unwrap();
    assert_eq!(interior.bg, revealtk::Rgb::new(0, 0, 0));

    // Label in bold white text
    let label = buf.get(3, 2).unwrap();
    assert_eq!(label.char, 'T');
    assert_eq!(label.fg, revealtk::Rgb::new(255, 255, 255));
    assert!(label.style.bold);

    // Checkmark replaces the bordered indicator box
    assert_eq!(count_char(&buf, '✓'), 1);
    assert_eq!(count_char(&buf, '╭'), 1);
}

#[test]
fn test_pressed_row_shows_partial_wipe() {
    let item = CheckItem::new("item", "Task");
    let mut state = CheckItemState::new();
    state.on_event("item", &press("item"), false, |_| {});

    let buf = render_item(&item, &state);

    // The checked look peeks through at the center while the edges keep
    // the unchecked look.
    assert_eq!(buf.get(20, 2).unwrap().bg, revealtk::Rgb::new(0, 0, 0));
    assert_eq!(buf.get(5, 2).unwrap().bg, revealtk::Rgb::new(255, 255, 255));
}

#[test]
fn test_host_driven_toggle_moves_the_wipe() {
    let theme = Theme::default();
    let state = CheckItemState::new();

    let mut reveal = RevealState::new();
    reveal.set_reduced_motion(true);

    // Host renders unchecked, then flips the value without any pointer
    // input. The reveal follows the new target.
    let unchecked = CheckItem::new("item", "Task").view(&state, &theme);
    reveal.update(&unchecked);
    assert_eq!(reveal.fraction("item"), Some(0.0));

    let checked = CheckItem::new("item", "Task")
        .checked(true)
        .view(&state, &theme);
    reveal.update(&checked);
    assert_eq!(reveal.fraction("item"), Some(1.0));
}
