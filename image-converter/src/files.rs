//! File plumbing: existence checks, directory listing, decode and encode.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbaImage};
use image_ops::GridPos;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Fail with [`CliError::FileNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}

/// Fail with [`CliError::OutputExists`] if `path` exists and overwriting is off.
pub fn ensure_writable(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

/// Supported and skipped files found in a directory.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub images: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// List the regular files in `dir`, sorted by name and split by extension.
///
/// Fails if `dir` is missing, is not a directory, or holds no supported image.
pub fn list_directory_images(dir: &Path, config: &AppConfig) -> Result<DirectoryListing> {
    ensure_exists(dir)?;
    if !dir.is_dir() {
        return Err(CliError::NotADirectory(dir.to_path_buf()));
    }

    let io_err = |source: std::io::Error| CliError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let (images, skipped): (Vec<_>, Vec<_>) =
        files.into_iter().partition(|p| config.is_supported(p));
    debug!(
        dir = %dir.display(),
        images = images.len(),
        skipped = skipped.len(),
        "Listed directory"
    );

    if images.is_empty() {
        return Err(CliError::NoSupportedImages(dir.to_path_buf()));
    }
    Ok(DirectoryListing { images, skipped })
}

/// Verify each listed file exists and carries a supported extension.
pub fn check_image_files(paths: &[PathBuf], config: &AppConfig) -> Result<()> {
    for path in paths {
        ensure_exists(path)?;
        if !config.is_supported(path) {
            return Err(CliError::UnsupportedFile(path.clone()));
        }
    }
    Ok(())
}

/// Output path of the slice at `pos`: `<stem>_<row>_<col>.png`.
///
/// Slices land next to `input` unless `out_dir` is given.
pub fn slice_output_path(input: &Path, out_dir: Option<&Path>, pos: GridPos) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slice".into());
    let name = format!("{stem}_{}_{}.png", pos.row, pos.col);
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Decode an image file into RGBA8, sniffing the format from its content.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| CliError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
    Ok(img.to_rgba8())
}

/// Encode `img` as PNG at `path`, whatever its extension.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| CliError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_path_sits_next_to_input() {
        let path = slice_output_path(Path::new("art/sheet.jpg"), None, GridPos::new(1, 2));
        assert_eq!(path, PathBuf::from("art/sheet_1_2.png"));
    }

    #[test]
    fn slice_path_uses_out_dir() {
        let path = slice_output_path(
            Path::new("art/sheet.png"),
            Some(Path::new("out")),
            GridPos::new(0, 3),
        );
        assert_eq!(path, PathBuf::from("out/sheet_0_3.png"));
    }

    #[test]
    fn slice_path_keeps_inner_dots() {
        let path = slice_output_path(Path::new("a.b.png"), None, GridPos::new(0, 0));
        assert_eq!(path, PathBuf::from("a.b_0_0.png"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ensure_exists(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn listed_files_must_exist() {
        let err = check_image_files(&[PathBuf::from("nope.png")], &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
