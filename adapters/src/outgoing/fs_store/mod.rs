pub mod wallpaper_store_fs;
