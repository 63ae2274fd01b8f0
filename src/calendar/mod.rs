//! iCalendar text generation
//!
//! - `uid`: deterministic event identifiers
//! - `event`: one `VEVENT` block per whole-day event

mod event;
mod uid;

pub use event::{escape_text, render_event};
pub use uid::event_uid;

/// First lines of every calendar file
pub const CALENDAR_BEGIN: &str = "BEGIN:VCALENDAR\nVERSION:2.0\n";

/// Last line of every calendar file
pub const CALENDAR_END: &str = "END:VCALENDAR\n";
