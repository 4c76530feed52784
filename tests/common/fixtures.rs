//! Test fixtures: input rasters written into a temporary directory.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use astrostretch::models::AppConfig;
use astrostretch::services::{PreviewTarget, ProcessRequest};
use tempfile::TempDir;
use tiff::encoder::{colortype, TiffEncoder};
use tone_stretch::{OutputFormat, StretchParams};

/// Temporary directory with an `inputs/` and an `out/` subdirectory
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("inputs")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn input(&self, name: &str) -> PathBuf {
        self.dir.path().join("inputs").join(name)
    }

    /// Write a 16-bit RGB TIFF
    pub fn rgb16_tiff(&self, name: &str, width: u32, height: u32, data: &[u16]) -> PathBuf {
        let path = self.input(name);
        std::fs::write(&path, encode_rgb16(width, height, data)).unwrap();
        path
    }

    /// Write a 32-bit float RGB TIFF
    pub fn rgb_f32_tiff(&self, name: &str, width: u32, height: u32, data: &[f32]) -> PathBuf {
        let path = self.input(name);
        let mut cursor = Cursor::new(Vec::new());
        TiffEncoder::new(&mut cursor)
            .unwrap()
            .write_image::<colortype::RGB32Float>(width, height, data)
            .unwrap();
        std::fs::write(&path, cursor.into_inner()).unwrap();
        path
    }

    /// Write arbitrary bytes (for unreadable-input tests)
    pub fn raw_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.input(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// Request writing into this workspace's `out/` directory
    pub fn request(&self) -> ProcessRequest {
        let mut request = ProcessRequest::from_config(&AppConfig::default());
        request.output_dir = self.out_dir();
        request
    }

    /// Files currently in `out/`, sorted by name
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(self.out_dir()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

pub fn encode_rgb16(width: u32, height: u32, data: &[u16]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    TiffEncoder::new(&mut cursor)
        .unwrap()
        .write_image::<colortype::RGB16>(width, height, data)
        .unwrap();
    cursor.into_inner()
}

/// Dim linear float frame like a fresh stack: background around 2-4% of
/// full scale with a gradient and a few stars well below saturation.
///
/// Integer rasters are always normalized to a maximum of exactly 1.0, so
/// only float input can take the raw branch.
pub fn dim_linear_frame(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let base = 0.02 + ((x + y) % 23) as f32 * 0.0005;
            data.extend_from_slice(&[base + 0.004, base, base + 0.002]);
        }
    }
    for &(x, y) in &[(3, 2), (width / 2, height / 2), (width - 2, height - 3)] {
        let i = (y * width + x) * 3;
        data[i..i + 3].copy_from_slice(&[0.45, 0.42, 0.5]);
    }
    data
}

/// 16-bit frame; normalization scales its maximum to 1.0
pub fn rgb16_frame(width: usize, height: usize) -> Vec<u16> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let v = (1000 + x * 300 + y * 200) as u16;
            data.extend_from_slice(&[v, v / 2 + 500, v / 3 + 800]);
        }
    }
    data
}

/// Bright, already stretched content in float: a smooth color gradient
pub fn stretched_frame_f32(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let t = x as f32 / width.max(2) as f32;
            let u = y as f32 / height.max(2) as f32;
            data.extend_from_slice(&[0.3 + 0.6 * t, 0.25 + 0.5 * u, 0.2 + 0.3 * (1.0 - t)]);
        }
    }
    data
}

/// Neutral parameters: identity channel correction, defaults elsewhere
pub fn neutral_params() -> StretchParams {
    StretchParams::neutral_correction()
}

/// Request variant writing PNG output with an explicit path and no preview
pub fn png_request(output: PathBuf) -> ProcessRequest {
    ProcessRequest {
        output: Some(output),
        format: OutputFormat::Png,
        preview: PreviewTarget::Disabled,
        ..ProcessRequest::from_config(&AppConfig::default())
    }
}
