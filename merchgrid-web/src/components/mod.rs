pub mod footer;
pub mod header;
pub mod ripple_button;
pub mod ui;
