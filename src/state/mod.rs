mod theme;

pub use theme::*;
