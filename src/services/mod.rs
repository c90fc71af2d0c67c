pub use outside_click::*;
pub use theme::*;

mod outside_click;
mod theme;
