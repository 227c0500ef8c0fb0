pub mod imaging;
pub mod timeout;
pub mod wallpaper_store;
