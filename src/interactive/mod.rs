//! Interactive TUI
//!
//! Three panels mirroring the helper's uses: subword search, word lookup and random
//! suggestions.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Panel, run_tui};
