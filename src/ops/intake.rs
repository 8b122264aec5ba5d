//! Image intake: the shared decode path behind drag-drop, clipboard
//! paste, and the native file picker. Decodes run on worker threads and
//! report back over a channel polled each frame.

use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Raster formats accepted by all three intake sources.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff", "tif", "tga", "ico",
];

/// Whether a path's extension is on the accepted list.
pub fn is_image_path(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Failure while acquiring a preview image. None of these mutate the
/// preview; they only surface a status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeError {
    /// Extension not on the accepted list.
    UnsupportedType(String),
    /// The file or clipboard bitmap could not be decoded.
    Decode(String),
    /// Paste with no image content on the clipboard.
    ClipboardNoImage,
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::UnsupportedType(ext) => write!(f, "unsupported file type: {}", ext),
            IntakeError::Decode(msg) => write!(f, "decode failed: {}", msg),
            IntakeError::ClipboardNoImage => write!(f, "no image on clipboard"),
        }
    }
}

impl IntakeError {
    /// Translated message for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::UnsupportedType(ext) => t!("error.unsupported_type", ext = ext),
            IntakeError::Decode(msg) => t!("error.decode", reason = msg),
            IntakeError::ClipboardNoImage => t!("error.clipboard_no_image"),
        }
    }
}

/// Which intake source produced an event (for logging).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeSource {
    Drop,
    Paste,
    Picker,
}

impl IntakeSource {
    pub fn name(&self) -> &'static str {
        match self {
            IntakeSource::Drop => "drop",
            IntakeSource::Paste => "paste",
            IntakeSource::Picker => "picker",
        }
    }
}

/// Decode an image file from disk into RGBA.
pub fn decode_path(path: &Path) -> Result<RgbaImage, IntakeError> {
    if !is_image_path(path) {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        return Err(IntakeError::UnsupportedType(ext));
    }
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| IntakeError::Decode(e.to_string()))
}

/// Decode an in-memory image (clipboard bitmaps, embedded data).
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage, IntakeError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| IntakeError::Decode(e.to_string()))
}

/// Try to read an image from the system clipboard.
/// Handles three cases:
///   1. Raw image data (e.g. Print Screen, copied from another image editor).
///   2. A file copied in Explorer (CF_HDROP file list) — Windows-specific.
///   3. Text on clipboard that happens to be a valid image file path.
pub fn read_image_from_clipboard() -> Result<RgbaImage, IntakeError> {
    // 1. Try raw image data via arboard.
    if let Ok(mut clip) = arboard::Clipboard::new()
        && let Ok(img_data) = clip.get_image()
        && let Some(img) = RgbaImage::from_raw(
            img_data.width as u32,
            img_data.height as u32,
            img_data.bytes.into_owned(),
        )
    {
        return Ok(img);
    }

    // 2. On Windows, try the CF_HDROP file list that Explorer puts on the
    //    clipboard when the user Ctrl+C's a file.
    #[cfg(target_os = "windows")]
    {
        if let Some(img) = read_image_from_clipboard_file_list() {
            return Ok(img);
        }
    }

    // 3. Try plain-text clipboard content as a file path.
    if let Ok(mut clip) = arboard::Clipboard::new()
        && let Ok(text) = clip.get_text()
    {
        let path = Path::new(text.trim());
        if path.is_file() && is_image_path(path) {
            return decode_path(path);
        }
    }

    Err(IntakeError::ClipboardNoImage)
}

/// On Windows, read the CF_HDROP file list from the clipboard and try to
/// open the first image-format file found.
#[cfg(target_os = "windows")]
fn read_image_from_clipboard_file_list() -> Option<RgbaImage> {
    use std::ptr;
    use winapi::um::shellapi::{DragQueryFileW, HDROP};
    use winapi::um::winuser::{CF_HDROP, CloseClipboard, GetClipboardData, OpenClipboard};

    unsafe {
        if OpenClipboard(ptr::null_mut()) == 0 {
            return None;
        }

        let handle = GetClipboardData(CF_HDROP);
        if handle.is_null() {
            CloseClipboard();
            return None;
        }

        let hdrop = handle as HDROP;
        let count = DragQueryFileW(hdrop, 0xFFFFFFFF, ptr::null_mut(), 0);

        let mut result: Option<RgbaImage> = None;

        for i in 0..count {
            let len = DragQueryFileW(hdrop, i, ptr::null_mut(), 0);
            if len == 0 {
                continue;
            }
            let mut buf: Vec<u16> = vec![0u16; (len + 1) as usize];
            DragQueryFileW(hdrop, i, buf.as_mut_ptr(), len + 1);
            let path_str = String::from_utf16_lossy(&buf[..len as usize]);
            let path = PathBuf::from(&path_str);

            if is_image_path(&path)
                && let Ok(img) = decode_path(&path)
            {
                result = Some(img);
                break;
            }
        }

        CloseClipboard();
        result
    }
}

/// Message sent back to the UI thread when a background intake finishes.
pub enum IntakeOutcome {
    Decoded {
        image: RgbaImage,
        source: IntakeSource,
    },
    Failed {
        error: IntakeError,
        source: IntakeSource,
    },
}

/// Decode a file on a worker thread, reporting through `sender`.
pub fn spawn_decode(path: PathBuf, source: IntakeSource, sender: mpsc::Sender<IntakeOutcome>) {
    std::thread::spawn(move || {
        let outcome = match decode_path(&path) {
            Ok(image) => IntakeOutcome::Decoded { image, source },
            Err(error) => IntakeOutcome::Failed { error, source },
        };
        let _ = sender.send(outcome);
    });
}

/// Read the clipboard on a worker thread, reporting through `sender`.
pub fn spawn_clipboard_read(sender: mpsc::Sender<IntakeOutcome>) {
    std::thread::spawn(move || {
        let outcome = match read_image_from_clipboard() {
            Ok(image) => IntakeOutcome::Decoded {
                image,
                source: IntakeSource::Paste,
            },
            Err(error) => IntakeOutcome::Failed {
                error,
                source: IntakeSource::Paste,
            },
        };
        let _ = sender.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_raster_extensions() {
        assert!(is_image_path(Path::new("room.png")));
        assert!(is_image_path(Path::new("photo.JPG")));
        assert!(is_image_path(Path::new("scan.tiff")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("no_extension")));
    }

    #[test]
    fn decode_path_rejects_unsupported_extension_without_touching_disk() {
        let err = decode_path(Path::new("/nonexistent/notes.txt")).unwrap_err();
        assert_eq!(err, IntakeError::UnsupportedType("txt".to_string()));
    }

    #[test]
    fn decode_bytes_round_trips_a_png() {
        let img = RgbaImage::from_pixel(5, 4, image::Rgba([200, 100, 50, 255]));
        let mut bytes: Vec<u8> = Vec::new();
        image::DynamicImage::ImageRgba8(img.clone())
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn decode_bytes_reports_garbage() {
        assert!(matches!(
            decode_bytes(b"definitely not an image"),
            Err(IntakeError::Decode(_))
        ));
    }
}
