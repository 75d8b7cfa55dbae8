pub mod gesture;
pub mod surface;
pub mod view;

pub use surface::MapSurface;
pub use view::{ClientRect, client_to_viewbox, layout_size};
