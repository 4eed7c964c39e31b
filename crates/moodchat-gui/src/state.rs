use std::rc::Rc;

use dioxus::prelude::*;
use moodchat_widget::{ChatWidget, WidgetHandle, WidgetState};

/// Widget state held in a Dioxus signal.
///
/// Writes go through the signal so every bound element re-renders.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalHandle(pub Signal<WidgetState>);

impl WidgetHandle for SignalHandle {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// The submit handler, shared by reference so it can be passed as a prop.
#[derive(Clone)]
pub struct SharedWidget(pub Rc<ChatWidget>);

impl PartialEq for SharedWidget {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
