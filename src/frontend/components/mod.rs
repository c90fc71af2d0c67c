//! Reusable UI components for the WakaWaka frontend

mod app_bar;

pub use app_bar::{AppBar, AppBarView};
