use std::path::{Path, PathBuf};

use super::AssetError;

/// Decoded RGBA8 image ready for upload.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// Decodes an image file into tightly packed RGBA8 rows.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();

        let img = image::open(path).map_err(|source| AssetError::Texture {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("decoded {:?} ({}x{})", path, width, height);

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}

/// Sampled 2D texture plus its default view.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub size: (u32, u32),
}

impl Texture {
    /// Format used for diffuse maps. Matches the non-sRGB back buffer.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Loads `path` and uploads it as a single-mip texture.
    pub fn from_file(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self, AssetError> {
        let image = ImageData::from_file(path)?;
        Self::from_image(device, queue, &image)
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &ImageData,
    ) -> Result<Self, AssetError> {
        let limit = device.limits().max_texture_dimension_2d;
        if image.width > limit || image.height > limit {
            return Err(AssetError::TextureTooLarge {
                path: image.path.clone(),
                width: image.width,
                height: image.height,
                limit,
            });
        }

        let label = image.path.display().to_string();
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self {
            texture,
            view,
            size: (image.width, image.height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("atrium-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_is_a_texture_error() {
        let path = scratch_path("does-not-exist.png");
        let err = ImageData::from_file(&path).unwrap_err();
        match err {
            AssetError::Texture { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn corrupt_file_is_a_texture_error() {
        let path = scratch_path("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = ImageData::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AssetError::Texture { .. }));
    }

    #[test]
    fn decodes_to_packed_rgba() {
        let path = scratch_path("checker.png");
        let img = image::RgbImage::from_fn(3, 2, |x, y| {
            if (x + y) % 2 == 0 { image::Rgb([255, 255, 255]) } else { image::Rgb([0, 0, 0]) }
        });
        img.save(&path).unwrap();

        let data = ImageData::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((data.width, data.height), (3, 2));
        assert_eq!(data.rgba.len(), 3 * 2 * 4);
        assert_eq!(&data.rgba[0..4], &[255, 255, 255, 255]);
        assert_eq!(&data.rgba[4..8], &[0, 0, 0, 255]);
    }
}
