use std::path::{Path, PathBuf};

use super::AssetError;

/// WGSL source read from disk.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub path: PathBuf,
    pub source: String,
}

impl ShaderSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path).map_err(|source| AssetError::Shader {
            path: path.to_path_buf(),
            source,
        })?;

        if source.trim().is_empty() {
            return Err(AssetError::EmptyShader {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Compiles the source into a shader module.
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        let label = self.path.display().to_string();
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&label),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_shader_reports_path() {
        let path = std::env::temp_dir().join("atrium-missing-shader.wgsl");
        let err = ShaderSource::from_file(&path).unwrap_err();
        assert!(matches!(err, AssetError::Shader { .. }));
        assert!(err.to_string().contains("atrium-missing-shader.wgsl"));
    }

    #[test]
    fn blank_shader_is_rejected() {
        let path = std::env::temp_dir().join(format!("atrium-{}-blank.wgsl", std::process::id()));
        std::fs::write(&path, "  \n\t\n").unwrap();
        let err = ShaderSource::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AssetError::EmptyShader { .. }));
    }

    #[test]
    fn reads_source_verbatim() {
        let path = std::env::temp_dir().join(format!("atrium-{}-ok.wgsl", std::process::id()));
        std::fs::write(&path, "@fragment fn fs() {}").unwrap();
        let shader = ShaderSource::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(shader.source, "@fragment fn fs() {}");
    }
}
