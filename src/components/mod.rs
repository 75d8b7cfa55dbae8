pub mod app;
pub mod geo_map;
pub mod legend;
pub mod map_controls;
pub mod map_page;
pub mod nav;
pub mod region_panel;

pub use app::App;
