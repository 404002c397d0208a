//! Skybox face decoding.
//!
//! Fetching is the frontend's job; this module turns the six encoded images
//! into tightly packed RGBA8 layers ready for a cube texture upload.

use crate::error::AssetError;

/// Face order matches cube texture layers: +X, -X, +Y, -Y, +Z, -Z.
pub const SKYBOX_FACES: [&str; 6] = ["px", "nx", "py", "ny", "pz", "nz"];

/// URLs for the six faces under `base` (trailing slash optional).
pub fn skybox_urls(base: &str, extension: &str) -> [String; 6] {
    let base = base.trim_end_matches('/');
    SKYBOX_FACES.map(|face| format!("{}/{}.{}", base, face, extension))
}

/// Six decoded square faces of identical size.
#[derive(Clone, Debug)]
pub struct CubeFaces {
    pub size: u32,
    /// RGBA8, one `size * size * 4` buffer per face in `SKYBOX_FACES` order.
    pub faces: Vec<Vec<u8>>,
}

impl CubeFaces {
    pub fn decode(encoded: &[Vec<u8>]) -> Result<Self, AssetError> {
        if encoded.len() != SKYBOX_FACES.len() {
            return Err(AssetError::FaceCount(encoded.len()));
        }
        let mut size = None;
        let mut faces = Vec::with_capacity(SKYBOX_FACES.len());
        for (bytes, face) in encoded.iter().zip(SKYBOX_FACES) {
            let img = image::load_from_memory(bytes)
                .map_err(|source| AssetError::Decode { face, source })?
                .to_rgba8();
            let (width, height) = img.dimensions();
            if width != height {
                return Err(AssetError::NotSquare {
                    face,
                    width,
                    height,
                });
            }
            match size {
                None => size = Some(width),
                Some(expected) if expected != width => {
                    return Err(AssetError::SizeMismatch {
                        face,
                        expected,
                        got: width,
                    })
                }
                Some(_) => {}
            }
            faces.push(img.into_raw());
        }
        let size = size.unwrap_or(0);
        log::info!("[assets] skybox decoded: 6 faces, {}x{}", size, size);
        Ok(Self { size, faces })
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.size
    }
}
