//! Image decoding and tensor preparation

use crate::ClassifierError;
use image::imageops::FilterType;
use ndarray::Array4;

/// Model input width and height in pixels
pub const INPUT_SIZE: u32 = 224;

/// Decode uploaded bytes into the model input tensor
///
/// Any common image encoding is accepted. The image is resized directly to
/// 224x224 (aspect ratio is not preserved) and normalized to [0, 1] in a
/// (1, 224, 224, 3) NHWC float tensor.
pub fn preprocess(image_bytes: &[u8]) -> Result<Array4<f32>, ClassifierError> {
    let img = image::load_from_memory(image_bytes)
        .map_err(|e| ClassifierError::Decode(e.to_string()))?;

    let resized = image::imageops::resize(
        &img.to_rgb8(),
        INPUT_SIZE,
        INPUT_SIZE,
        FilterType::Triangle,
    );

    let size = INPUT_SIZE as usize;
    let mut input = Array4::<f32>::zeros((1, size, size, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        input[[0, y as usize, x as usize, 0]] = pixel[0] as f32 / 255.0;
        input[[0, y as usize, x as usize, 1]] = pixel[1] as f32 / 255.0;
        input[[0, y as usize, x as usize, 2]] = pixel[2] as f32 / 255.0;
    }

    Ok(input)
}
