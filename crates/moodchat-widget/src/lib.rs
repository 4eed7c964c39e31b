//! # Moodchat widget
//!
//! The chat widget without any UI toolkit attached.
//!
//! [`WidgetState`] owns what the five bound elements display (input text,
//! emotion selector, transcript, mood line, scroll position).
//! [`ChatWidget::submit`] runs one form submission against it: the
//! synchronous part (guard, user entry, clear input, mood line) followed by
//! the request and, when it succeeds, the assistant entry.
//!
//! Front-ends plug their own reactive container in through
//! [`WidgetHandle`].

pub mod state;
pub mod widget;

pub use state::{mood_display_text, WidgetState, MOOD_DISPLAY_PREFIX};
pub use widget::{ChatWidget, SubmitOutcome, WidgetHandle};
