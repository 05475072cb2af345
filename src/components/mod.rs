pub mod layout;

pub use layout::{AppLayout, ThemeToggle};
