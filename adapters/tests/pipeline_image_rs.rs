use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgb, RgbImage, imageops};
use jpeg_encoder::{ColorType, Encoder};

use domain::{
    options::{OutputFormat, ProcessingOptions},
    resolution::{Orientation, Resolution, TargetResolutions},
};
use wallforge_adapters::outgoing::image_rs::imaging_image::ImageRsImagingAdapter;
use wallforge_application::wallpaper::pipeline::WallpaperPipeline;

fn pipeline() -> WallpaperPipeline {
    WallpaperPipeline::new(Arc::new(ImageRsImagingAdapter::new()))
}

fn small_targets() -> TargetResolutions {
    TargetResolutions::new(Resolution::new(40, 24), Resolution::new(24, 40))
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x * 4) as u8, (y * 5) as u8, 128]))
}

fn png_bytes(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// JPEG stored as `width`x`height` pixels whose EXIF says "rotate 90 degrees
/// clockwise to display".
fn jpeg_rotated_cw(width: u16, height: u16) -> Vec<u8> {
    let exif: &[u8] = &[
        b'E', b'x', b'i', b'f', 0, 0, // header
        b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, // little-endian TIFF
        0x01, 0x00, // one entry
        0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, // orientation 6
        0x00, 0x00, 0x00, 0x00,
    ];
    let pixels = [30u8, 160, 90].repeat(usize::from(width) * usize::from(height));

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, 90);
    encoder.add_app_segment(1, exif).unwrap();
    encoder.encode(&pixels, width, height, ColorType::Rgb).unwrap();
    bytes
}

fn no_filters(resolutions: TargetResolutions) -> ProcessingOptions {
    ProcessingOptions {
        resolutions,
        apply_blur: false,
        output_format: OutputFormat::Png,
        ..ProcessingOptions::default()
    }
}

#[test]
fn disabled_filters_match_a_plain_lanczos_resize() {
    let source = gradient(64, 48);

    let wallpaper = pipeline()
        .run(&png_bytes(&source), &no_filters(small_targets()))
        .unwrap();

    let output = image::load_from_memory(&wallpaper.bytes).unwrap().into_rgb8();
    let reference = imageops::resize(&source, 40, 24, imageops::FilterType::Lanczos3);
    assert_eq!(wallpaper.orientation, Orientation::Landscape);
    assert_eq!(output.dimensions(), (40, 24));
    assert_eq!(output.into_raw(), reference.into_raw());
}

#[test]
fn exif_rotated_landscape_pixels_become_a_portrait_wallpaper() {
    let jpeg = jpeg_rotated_cw(64, 32);

    let wallpaper = pipeline()
        .run(&jpeg, &no_filters(TargetResolutions::default()))
        .unwrap();

    assert_eq!(wallpaper.orientation, Orientation::Portrait);
    assert_eq!(wallpaper.resolution, Resolution::new(1080, 1920));
    let output = image::load_from_memory(&wallpaper.bytes).unwrap();
    assert_eq!((output.width(), output.height()), (1080, 1920));
}

#[test]
fn grayscale_output_has_equal_channels_everywhere() {
    let options = ProcessingOptions {
        grayscale: true,
        ..no_filters(small_targets())
    };

    let wallpaper = pipeline()
        .run(&png_bytes(&gradient(64, 48)), &options)
        .unwrap();

    let output = image::load_from_memory(&wallpaper.bytes).unwrap().into_rgb8();
    assert_eq!(output.dimensions(), (40, 24));
    assert!(output.pixels().all(|Rgb([r, g, b])| r == g && g == b));

    let first = output.get_pixel(0, 0);
    assert!(output.pixels().any(|pixel| pixel != first));
}
