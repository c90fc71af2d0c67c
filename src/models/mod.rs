pub use app_bar_state::*;
pub use click_origin::*;
pub use dropdown::*;
pub use menu::*;

mod app_bar_state;
mod click_origin;
mod dropdown;
mod menu;
