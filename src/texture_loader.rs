use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;

use crate::error::SliderError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

// --- Image paths of a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, SliderError> {
    let read_dir_error = |source| SliderError::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(SliderError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Fixes the slide order once, before the slider is built.
pub fn shuffle_paths(paths: &mut [PathBuf]) {
    paths.shuffle(&mut rand::rng());
}

// EXIF orientation of a JPEG, 1 (upright) when missing or unreadable
fn read_orientation(image_path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, SliderError> {
    let file_bytes = fs::read(image_path).map_err(|source| SliderError::ImageRead {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| SliderError::ImageDecode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored variants are left as is
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| SliderError::Texture {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Loads every path in order, skipping the ones that fail.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &[PathBuf],
) -> Vec<Texture2D> {
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("skipping slide: {}", e),
        }
    }
    textures
}
