pub mod imaging_image;
