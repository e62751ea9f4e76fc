pub mod clipboard;
pub mod display;
