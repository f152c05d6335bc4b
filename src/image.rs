//! Profile image staging: a declared-type gate in front of an in-memory
//! display reference. Nothing is persisted; the file handle stays at the
//! runtime boundary and only validated bytes are retained.

use std::fmt;
use std::path::Path;

/// Declared media types accepted for profile images.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/svg+xml",
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
];

/// In-memory display reference for a staged image. Replaces any previously
/// staged reference wholesale; the old buffer is dropped with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// Image subtype outside the allow-set; surfaced as a blocking notice.
    UnsupportedImageType,
    /// Not an image at all; callers drop these silently.
    NotAnImage,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::UnsupportedImageType => {
                write!(f, "Please select a valid image file (SVG, PNG, JPG, or GIF)")
            }
            StageError::NotAnImage => write!(f, "not an image file"),
        }
    }
}

impl std::error::Error for StageError {}

/// Media type a file declares through its extension, `None` for
/// extensions that do not declare an image at all.
#[must_use]
pub fn declared_media_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let media_type = match extension.as_str() {
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpeg" => "image/jpeg",
        "jpg" => "image/jpg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "heic" => "image/heic",
        _ => return None,
    };
    Some(media_type)
}

/// Validate a declared type and stage the bytes as a display reference.
pub fn stage(
    name: impl Into<String>,
    media_type: &str,
    bytes: Vec<u8>,
) -> Result<StagedImage, StageError> {
    if !media_type.starts_with("image/") {
        return Err(StageError::NotAnImage);
    }
    if !ALLOWED_IMAGE_TYPES.contains(&media_type) {
        return Err(StageError::UnsupportedImageType);
    }
    Ok(StagedImage {
        name: name.into(),
        media_type: media_type.to_string(),
        bytes,
    })
}

/// Stage a file picked or dropped by path. Both entry points route here so
/// they share one validation pipeline.
pub fn stage_from_path(path: &Path, bytes: Vec<u8>) -> Result<StagedImage, StageError> {
    let media_type = declared_media_type(path).ok_or(StageError::NotAnImage)?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    stage(name, media_type, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("avatar.svg", "image/svg+xml")]
    #[case("avatar.png", "image/png")]
    #[case("avatar.jpeg", "image/jpeg")]
    #[case("avatar.JPG", "image/jpg")]
    #[case("avatar.gif", "image/gif")]
    fn stages_every_allowed_type(#[case] name: &str, #[case] expected: &str) {
        let staged = stage_from_path(Path::new(name), vec![1, 2, 3]).expect("staged");
        assert_eq!(staged.media_type, expected);
        assert_eq!(staged.bytes, vec![1, 2, 3]);
    }

    #[rstest]
    #[case("photo.webp")]
    #[case("photo.bmp")]
    #[case("photo.tiff")]
    #[case("photo.avif")]
    fn rejects_image_subtypes_outside_the_allow_set(#[case] name: &str) {
        let err = stage_from_path(Path::new(name), Vec::new()).unwrap_err();
        assert_eq!(err, StageError::UnsupportedImageType);
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("archive.zip")]
    #[case("no_extension")]
    fn non_image_files_are_not_an_image(#[case] name: &str) {
        let err = stage_from_path(Path::new(name), Vec::new()).unwrap_err();
        assert_eq!(err, StageError::NotAnImage);
    }

    #[test]
    fn unsupported_type_notice_matches_the_upload_dialog_wording() {
        assert_eq!(
            StageError::UnsupportedImageType.to_string(),
            "Please select a valid image file (SVG, PNG, JPG, or GIF)"
        );
    }

    #[test]
    fn staged_name_comes_from_the_file_name() {
        let staged = stage_from_path(Path::new("/home/ada/pics/me.png"), Vec::new()).unwrap();
        assert_eq!(staged.name, "me.png");
    }
}
