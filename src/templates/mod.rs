pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{button, card, field_widget};
pub use layouts::desktop::desktop_layout;
