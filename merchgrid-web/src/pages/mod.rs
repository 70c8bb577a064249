pub mod fandom;
pub mod home;
pub mod not_found;
