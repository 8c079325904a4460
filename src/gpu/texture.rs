//! Depth attachment and sampled image textures.

use std::path::Path;

use crate::error::ViewerError;

/// Format of the depth attachment.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A texture and its default full view.
pub struct Texture {
    /// GPU texture.
    pub texture: wgpu::Texture,
    /// Default view over every mip and layer.
    pub view: wgpu::TextureView,
}

impl Texture {
    /// Depth attachment sized to the surface.
    #[must_use]
    pub fn depth(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// Upload an RGBA8 image as an sRGB sampled texture. Images larger than
    /// the device's 2D texture limit are downscaled to fit first.
    #[must_use]
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &image::RgbaImage,
        label: &str,
    ) -> Self {
        let resized = fit_to_limit(image, device.limits().max_texture_dimension_2d);
        if resized.is_some() {
            log::warn!(
                "{label}: {}x{} exceeds the device texture limit, downscaling",
                image.width(),
                image.height()
            );
        }
        let image = resized.as_ref().unwrap_or(image);
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// Decode and upload the image at `path`.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Texture`] if the file cannot be read or decoded.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, ViewerError> {
        let image = decode_rgba(path)?;
        let label = path.display().to_string();
        Ok(Self::from_rgba(device, queue, &image, &label))
    }

    /// 1×1 opaque white texture, sampled by untextured objects so every draw
    /// can share one bind group layout.
    #[must_use]
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let pixel = image::RgbaImage::from_pixel(1, 1, image::Rgba([255; 4]));
        Self::from_rgba(device, queue, &pixel, "White Texture")
    }
}

/// Decode an image file to RGBA8.
///
/// # Errors
///
/// [`ViewerError::Texture`] if the file cannot be read or decoded.
pub fn decode_rgba(path: &Path) -> Result<image::RgbaImage, ViewerError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Shrink `image` so neither side exceeds `max_dimension`, keeping its
/// aspect ratio. `None` when it already fits.
pub fn fit_to_limit(
    image: &image::RgbaImage,
    max_dimension: u32,
) -> Option<image::RgbaImage> {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if longest <= max_dimension {
        return None;
    }
    let scale = |side: u32| {
        let scaled = u64::from(side) * u64::from(max_dimension) / u64::from(longest);
        (scaled as u32).max(1)
    };
    Some(image::imageops::resize(
        image,
        scale(width),
        scale(height),
        image::imageops::FilterType::Triangle,
    ))
}

/// Repeat-U, clamp-V linear sampler so sphere textures wrap around the seam
/// but not over the poles.
#[must_use]
pub fn surface_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Surface Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_texture_error() {
        let err = decode_rgba(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, ViewerError::Texture(_)));
    }

    #[test]
    fn decodes_png_to_rgba() {
        let dir = std::env::temp_dir().join("astroview-texture-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pixel.png");
        image::RgbImage::from_pixel(2, 3, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let rgba = decode_rgba(&path).unwrap();
        assert_eq!(rgba.dimensions(), (2, 3));
        assert_eq!(rgba.get_pixel(1, 2).0, [10, 20, 30, 255]);
    }

    #[test]
    fn oversized_images_shrink_to_the_limit() {
        let wide = image::RgbaImage::from_pixel(64, 16, image::Rgba([1, 2, 3, 255]));
        let fitted = fit_to_limit(&wide, 32).unwrap();
        assert_eq!(fitted.dimensions(), (32, 8));
        assert_eq!(fitted.get_pixel(5, 5).0, [1, 2, 3, 255]);

        // A sliver never collapses to zero pixels.
        let sliver = image::RgbaImage::new(1000, 1);
        assert_eq!(fit_to_limit(&sliver, 10).unwrap().dimensions(), (10, 1));
    }

    #[test]
    fn images_within_the_limit_are_left_alone() {
        let image = image::RgbaImage::new(32, 8);
        assert!(fit_to_limit(&image, 32).is_none());
        assert!(fit_to_limit(&image, 8192).is_none());
    }
}
