use std::io::Cursor;

use image::{
    DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageError, ImageReader,
    RgbImage,
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    metadata::Orientation as ExifOrientation,
};
use jpeg_encoder::{ColorType, Encoder as JpegEncoder};
use tracing::{debug, instrument, trace};

use domain::{
    encoding::{EncodeParams, PngCompression},
    error::DomainError,
    filters::{BLUR_RADIUS, FilterStep, percent_to_factor},
    frame::{RGB_CHANNELS, RgbFrame},
    resolution::Resolution,
};
use wallforge_application::{error::AppResult, ports::outgoing::imaging::ImagingPort};

/// ITU-R 601-2 luma weights in 16.16 fixed point.
const LUMA_RED: u32 = 19_595;
const LUMA_GREEN: u32 = 38_470;
const LUMA_BLUE: u32 = 7_471;
const LUMA_ROUNDING: u32 = 0x8000;

/// `ImagingPort` backed by the `image` crate, with `jpeg-encoder` for
/// progressive JPEG output.
#[derive(Clone, Copy, Default)]
pub struct ImageRsImagingAdapter;

impl ImageRsImagingAdapter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(image), fields(input_bytes = image.len()))]
    fn decode_impl(image: &[u8]) -> AppResult<RgbFrame> {
        let mut decoder = open_decoder(image)?;
        let orientation = read_orientation(&mut decoder);

        let mut decoded = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(&e))?;
        decoded.apply_orientation(orientation);
        debug!(
            width = decoded.width(),
            height = decoded.height(),
            ?orientation,
            "Decoded source image"
        );

        frame_from_rgb(decoded.into_rgb8())
    }

    #[instrument(skip(image), fields(input_bytes = image.len()))]
    fn probe_impl(image: &[u8]) -> AppResult<Resolution> {
        let mut decoder = open_decoder(image)?;
        let orientation = read_orientation(&mut decoder);
        let (width, height) = decoder.dimensions();

        let upright = match orientation {
            ExifOrientation::Rotate90
            | ExifOrientation::Rotate270
            | ExifOrientation::Rotate90FlipH
            | ExifOrientation::Rotate270FlipH => Resolution::new(height, width),
            _ => Resolution::new(width, height),
        };
        Ok(upright)
    }

    fn resize_impl(frame: RgbFrame, target: Resolution) -> AppResult<RgbFrame> {
        if frame.resolution() == target {
            return Ok(frame);
        }

        let source = to_rgb_image(frame)?;
        let resized = imageops::resize(&source, target.width, target.height, FilterType::Lanczos3);
        trace!(%target, "Resized frame");
        frame_from_rgb(resized)
    }

    fn apply_filter_impl(frame: RgbFrame, step: &FilterStep) -> AppResult<RgbFrame> {
        if step.is_identity() {
            return Ok(frame);
        }

        trace!(step = step.name(), "Applying filter");
        match *step {
            FilterStep::Blur { .. } => {
                let source = to_rgb_image(frame)?;
                frame_from_rgb(imageops::blur(&source, BLUR_RADIUS))
            }
            FilterStep::Brightness { percent } => {
                let factor = percent_to_factor(percent);
                map_channels(frame, |channel| clamp_channel(f64::from(channel) * factor))
            }
            FilterStep::Contrast { percent } => {
                let factor = percent_to_factor(percent);
                let mean = f64::from(mean_luma(frame.pixels()));
                map_channels(frame, |channel| {
                    clamp_channel(mean + factor * (f64::from(channel) - mean))
                })
            }
            FilterStep::Grayscale { .. } => grayscale(frame),
        }
    }

    #[instrument(skip(frame), fields(resolution = %frame.resolution()))]
    fn encode_impl(frame: &RgbFrame, params: &EncodeParams) -> AppResult<Vec<u8>> {
        let mut encoded = Vec::new();

        match *params {
            EncodeParams::Png {
                compression,
                optimize,
            } => {
                let filter = if optimize {
                    PngFilterType::Adaptive
                } else {
                    PngFilterType::NoFilter
                };
                PngEncoder::new_with_quality(&mut encoded, png_compression(compression), filter)
                    .write_image(
                        frame.pixels(),
                        frame.width(),
                        frame.height(),
                        ExtendedColorType::Rgb8,
                    )
                    .map_err(|e| encode_error(&e))?;
            }
            EncodeParams::Jpeg {
                quality,
                progressive,
                optimize,
            } => {
                let (width, height) = jpeg_dimensions(frame.resolution())?;
                let mut encoder = JpegEncoder::new(&mut encoded, quality);
                encoder.set_progressive(progressive);
                encoder.set_optimized_huffman_tables(optimize);
                encoder
                    .encode(frame.pixels(), width, height, ColorType::Rgb)
                    .map_err(|e| encode_error(&e))?;
            }
        }

        debug!(output_bytes = encoded.len(), format = %params.format(), "Encoded frame");
        Ok(encoded)
    }
}

impl ImagingPort for ImageRsImagingAdapter {
    fn decode(&self, image: &[u8]) -> AppResult<RgbFrame> {
        Self::decode_impl(image)
    }

    fn probe(&self, image: &[u8]) -> AppResult<Resolution> {
        Self::probe_impl(image)
    }

    fn resize(&self, frame: RgbFrame, target: Resolution) -> AppResult<RgbFrame> {
        Self::resize_impl(frame, target)
    }

    fn apply_filter(&self, frame: RgbFrame, step: &FilterStep) -> AppResult<RgbFrame> {
        Self::apply_filter_impl(frame, step)
    }

    fn encode(&self, frame: &RgbFrame, params: &EncodeParams) -> AppResult<Vec<u8>> {
        Self::encode_impl(frame, params)
    }
}

fn open_decoder(image: &[u8]) -> AppResult<impl ImageDecoder + '_> {
    let reader = ImageReader::new(Cursor::new(image))
        .with_guessed_format()
        .map_err(|e| DomainError::DecodeError(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DomainError::DecodeError("unrecognized image format".to_string()).into());
    }

    reader.into_decoder().map_err(|e| decode_error(&e).into())
}

fn read_orientation(decoder: &mut impl ImageDecoder) -> ExifOrientation {
    decoder.orientation().unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring unreadable orientation metadata");
        ExifOrientation::NoTransforms
    })
}

fn decode_error(error: &ImageError) -> DomainError {
    DomainError::DecodeError(error.to_string())
}

fn encode_error(error: &impl ToString) -> DomainError {
    DomainError::EncodeError(error.to_string())
}

fn png_compression(compression: PngCompression) -> CompressionType {
    match compression {
        PngCompression::Fast => CompressionType::Fast,
        PngCompression::Default => CompressionType::Default,
        PngCompression::Best => CompressionType::Best,
    }
}

fn jpeg_dimensions(resolution: Resolution) -> AppResult<(u16, u16)> {
    let too_large = || {
        DomainError::EncodeError(format!(
            "{resolution} exceeds the JPEG limit of {}x{}",
            u16::MAX,
            u16::MAX
        ))
    };
    let width = u16::try_from(resolution.width).map_err(|_| too_large())?;
    let height = u16::try_from(resolution.height).map_err(|_| too_large())?;
    Ok((width, height))
}

fn to_rgb_image(frame: RgbFrame) -> AppResult<RgbImage> {
    let (width, height) = (frame.width(), frame.height());
    RgbImage::from_raw(width, height, frame.into_pixels()).ok_or_else(|| {
        DomainError::InvalidFrame(format!("buffer does not match {width}x{height}")).into()
    })
}

fn frame_from_rgb(image: RgbImage) -> AppResult<RgbFrame> {
    let (width, height) = image.dimensions();
    Ok(RgbFrame::new(width, height, image.into_raw())?)
}

fn map_channels(frame: RgbFrame, f: impl Fn(u8) -> u8) -> AppResult<RgbFrame> {
    let (width, height) = (frame.width(), frame.height());
    let mut pixels = frame.into_pixels();
    for channel in &mut pixels {
        *channel = f(*channel);
    }
    Ok(RgbFrame::new(width, height, pixels)?)
}

/// Blended channel values truncate toward zero before clamping.
fn clamp_channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}

fn luma(pixel: &[u8]) -> u8 {
    match *pixel {
        [r, g, b] => {
            let weighted = u32::from(r) * LUMA_RED
                + u32::from(g) * LUMA_GREEN
                + u32::from(b) * LUMA_BLUE
                + LUMA_ROUNDING;
            (weighted >> 16) as u8
        }
        _ => 0,
    }
}

/// Rounded mean luma, the grey level contrast pivots around.
fn mean_luma(pixels: &[u8]) -> u8 {
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for pixel in pixels.chunks_exact(RGB_CHANNELS) {
        total += u64::from(luma(pixel));
        count += 1;
    }

    if count == 0 {
        return 0;
    }
    ((total + count / 2) / count) as u8
}

fn grayscale(frame: RgbFrame) -> AppResult<RgbFrame> {
    let (width, height) = (frame.width(), frame.height());
    let mut pixels = frame.into_pixels();
    for pixel in pixels.chunks_exact_mut(RGB_CHANNELS) {
        let value = luma(pixel);
        pixel.fill(value);
    }
    Ok(RgbFrame::new(width, height, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::options::OutputFormat;
    use image::{ImageFormat, Rgb};
    use wallforge_application::error::AppError;

    fn adapter() -> ImageRsImagingAdapter {
        ImageRsImagingAdapter::new()
    }

    fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RgbFrame {
        let pixels = rgb.repeat(width as usize * height as usize);
        RgbFrame::new(width, height, pixels).unwrap()
    }

    fn png_bytes(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// 4x2 JPEG whose EXIF says "rotate 90 degrees clockwise to display".
    fn rotated_jpeg() -> Vec<u8> {
        let exif: &[u8] = &[
            b'E', b'x', b'i', b'f', 0, 0, // header
            b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, // little-endian TIFF
            0x01, 0x00, // one entry
            0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, // orientation 6
            0x00, 0x00, 0x00, 0x00,
        ];
        let pixels = [200u8, 10, 10].repeat(8);

        let mut bytes = Vec::new();
        let mut encoder = JpegEncoder::new(&mut bytes, 90);
        encoder.add_app_segment(1, exif).unwrap();
        encoder.encode(&pixels, 4, 2, ColorType::Rgb).unwrap();
        bytes
    }

    #[test]
    fn decodes_png_to_rgb_frame() {
        let image = RgbImage::from_pixel(5, 3, Rgb([10, 20, 30]));

        let frame = adapter().decode(&png_bytes(&image)).unwrap();

        assert_eq!(frame.resolution(), Resolution::new(5, 3));
        assert_eq!(&frame.pixels()[..3], &[10, 20, 30]);
    }

    #[test]
    fn applies_exif_orientation_on_decode_and_probe() {
        let jpeg = rotated_jpeg();

        assert_eq!(adapter().decode(&jpeg).unwrap().resolution(), Resolution::new(2, 4));
        assert_eq!(adapter().probe(&jpeg).unwrap(), Resolution::new(2, 4));
    }

    #[test]
    fn rejects_garbage_and_truncated_input() {
        let png = png_bytes(&RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])));

        for input in [b"definitely not an image".to_vec(), png[..30].to_vec(), Vec::new()] {
            assert!(matches!(
                adapter().decode(&input),
                Err(AppError::Domain(DomainError::DecodeError(_)))
            ));
        }
    }

    #[test]
    fn resize_hits_exact_target() {
        let frame = solid_frame(40, 30, [90, 90, 90]);

        let resized = adapter().resize(frame, Resolution::new(16, 9)).unwrap();

        assert_eq!(resized.resolution(), Resolution::new(16, 9));
        assert!(resized.pixels().iter().all(|&c| (89..=91).contains(&c)));
    }

    #[test]
    fn identity_steps_leave_frame_untouched() {
        let frame = solid_frame(3, 3, [12, 130, 250]);

        let mut result = frame.clone();
        for step in [
            FilterStep::Blur { enabled: false },
            FilterStep::Brightness { percent: 100 },
            FilterStep::Contrast { percent: 100 },
            FilterStep::Grayscale { enabled: false },
        ] {
            result = adapter().apply_filter(result, &step).unwrap();
        }

        assert_eq!(result, frame);
    }

    #[test]
    fn brightness_zero_is_black_and_boost_clamps() {
        let frame = solid_frame(2, 2, [200, 100, 0]);

        let black = adapter()
            .apply_filter(frame.clone(), &FilterStep::Brightness { percent: 0 })
            .unwrap();
        assert!(black.pixels().iter().all(|&c| c == 0));

        let boosted = adapter()
            .apply_filter(frame, &FilterStep::Brightness { percent: 200 })
            .unwrap();
        assert_eq!(&boosted.pixels()[..3], &[255, 200, 0]);
    }

    #[test]
    fn enhancement_truncates_fractional_channels() {
        let frame = solid_frame(1, 1, [101, 3, 255]);

        let brighter = adapter()
            .apply_filter(frame.clone(), &FilterStep::Brightness { percent: 150 })
            .unwrap();
        assert_eq!(brighter.pixels(), &[151, 4, 255]);

        let darker = adapter()
            .apply_filter(frame, &FilterStep::Brightness { percent: 55 })
            .unwrap();
        assert_eq!(darker.pixels(), &[55, 1, 140]);
    }

    #[test]
    fn contrast_zero_flattens_to_mean_luma() {
        let mut pixels = [0u8, 0, 0].repeat(2);
        pixels.extend([255u8, 255, 255].repeat(2));
        let frame = RgbFrame::new(2, 2, pixels).unwrap();

        let flat = adapter()
            .apply_filter(frame, &FilterStep::Contrast { percent: 0 })
            .unwrap();

        assert!(flat.pixels().iter().all(|&c| c == 128));
    }

    #[test]
    fn grayscale_equalizes_channels() {
        let frame = solid_frame(2, 1, [255, 0, 0]);

        let gray = adapter()
            .apply_filter(frame, &FilterStep::Grayscale { enabled: true })
            .unwrap();

        assert_eq!(gray.pixels(), &[76, 76, 76, 76, 76, 76]);
    }

    #[test]
    fn blur_keeps_dimensions() {
        let frame = solid_frame(6, 4, [50, 60, 70]);

        let blurred = adapter()
            .apply_filter(frame, &FilterStep::Blur { enabled: true })
            .unwrap();

        assert_eq!(blurred.resolution(), Resolution::new(6, 4));
    }

    #[test]
    fn encodes_png_and_progressive_jpeg() {
        let frame = solid_frame(8, 6, [30, 60, 90]);

        let png = adapter()
            .encode(&frame, &EncodeParams::for_format(OutputFormat::Png))
            .unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        assert_eq!(
            image::load_from_memory(&png).unwrap().into_rgb8().into_raw(),
            frame.pixels()
        );

        let jpeg = adapter()
            .encode(&frame, &EncodeParams::for_format(OutputFormat::Jpeg))
            .unwrap();
        assert!(jpeg.starts_with(&[0xFF, 0xD8]));
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[test]
    fn jpeg_rejects_oversized_frames() {
        let frame = solid_frame(70_000, 1, [0, 0, 0]);

        let result = adapter().encode(
            &frame,
            &EncodeParams::for_format(OutputFormat::Jpeg),
        );

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::EncodeError(_)))
        ));
    }
}
