pub mod chat_box;
pub mod chat_form;
pub mod mood_display;
