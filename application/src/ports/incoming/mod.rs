pub mod wallpaper;
