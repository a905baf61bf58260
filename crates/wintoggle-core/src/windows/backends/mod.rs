//! Window backend implementations.

mod kwin;
mod x11;

pub use kwin::{KwinBackend, parse_resource_class, parse_window_list};
pub use x11::{X11Backend, is_x11_window_id, parse_wm_class, xprop_reports_hidden};
