pub mod encoding;
pub mod error;
pub mod filters;
pub mod frame;
pub mod options;
pub mod resolution;
pub mod suggestion;
pub mod wallpaper;
