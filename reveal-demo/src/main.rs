//! Host screen: one checklist row, vertically centered, toggled by tapping.
//!
//! Owns the single piece of application state (the checked flag) and hands
//! the widget a callback that writes the new value back. `q` or Escape
//! quits. Logs go to a file because the terminal itself is the UI; set
//! `REVEAL_LOG=debug` for more detail, pass `--reduced-motion` to complete
//! wipes instantly.

use std::fs::File;
use std::io;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use revealtk::{
    CheckItem, CheckItemState, Edges, Element, Event, Justify, Key, RevealState, Size, Style,
    Terminal, Theme, collect_element_ids, process_events,
};

const ITEM_ID: &str = "demo-item";
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
    #[error("logger setup: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> Result<(), AppError> {
    let level = std::env::var("REVEAL_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    WriteLogger::init(level, Config::default(), File::create("reveal-demo.log")?)?;

    let reduced_motion = std::env::args().any(|arg| arg == "--reduced-motion");

    let theme = Theme::default();
    let mut item_state = CheckItemState::new();
    let mut checked = false;

    let mut reveal = RevealState::new();
    reveal.set_reduced_motion(reduced_motion);

    let mut term = Terminal::new()?;

    loop {
        let item = CheckItem::new(ITEM_ID, "This is some text").checked(checked);
        let root = ui(&item, &item_state, &theme);

        reveal.update(&root);
        term.render(&root, &reveal)?;
        reveal.cleanup(&collect_element_ids(&root));

        // Keep repainting while a wipe is in flight, otherwise sleep until
        // the next input.
        let timeout = if reveal.is_animating() {
            Some(FRAME)
        } else {
            None
        };
        let raw = term.poll(timeout)?;
        let events = process_events(&raw, &root, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                _ => {
                    item_state.on_event(ITEM_ID, event, checked, |new_checked| {
                        log::info!("checked -> {new_checked}");
                        checked = new_checked;
                    });
                }
            }
        }
    }
}

fn ui(item: &CheckItem, state: &CheckItemState, theme: &Theme) -> Element {
    Element::col()
        .id("screen")
        .width(Size::Fill)
        .height(Size::Fill)
        .justify(Justify::Center)
        .padding(Edges::horizontal(6))
        .style(Style::new().background(theme.surface))
        .child(item.view(state, theme))
}
