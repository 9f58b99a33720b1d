use crate::error::ClassifyError;
use crate::image_classifier::interface::Tensor;
use image::{imageops, DynamicImage};

/// Stretches `image` to exactly `width` x `height`.
pub fn resize_image(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<DynamicImage, ClassifyError> {
    if image.width() == 0 || image.height() == 0 || width == 0 || height == 0 {
        return Err(ClassifyError::Resize {
            from_width: image.width(),
            from_height: image.height(),
            to_width: width,
            to_height: height,
        });
    }

    if image.width() == width && image.height() == height {
        return Ok(image.clone());
    }

    Ok(image.resize_exact(width, height, imageops::FilterType::Triangle))
}

fn image_to_tensor(image: &DynamicImage) -> Result<Tensor, ClassifyError> {
    // to_rgb8 drops alpha
    let rgb = image.to_rgb8();
    let shape = (1, rgb.height() as usize, rgb.width() as usize, 3);

    let values: Vec<f32> = rgb
        .pixels()
        .flat_map(|pixel| pixel.0)
        .map(|channel| f32::from(channel) / 255.0)
        .collect();

    // rgb always holds width * height * 3 values, so this only fails if that invariant breaks
    Tensor::from_shape_vec(shape, values)
        .map_err(|e| ClassifyError::TensorConversion(e.to_string()))
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, ClassifyError> {
    let resized = resize_image(image, width, height)?;
    let tensor = image_to_tensor(&resized)?;

    Ok(tensor)
}
