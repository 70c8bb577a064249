pub mod contact_panel;
pub mod cursor_layer;
pub mod error_banner;
pub mod fandom_filter;
pub mod featured_grid;
pub mod hero;
pub mod pager_controls;
pub mod product_grid;
pub mod stats_strip;
pub mod type_filter;
