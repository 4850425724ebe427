//! Filename sanitization for cross-platform compatibility.
//!
//! Characters that are invalid on Windows, Linux or macOS are dropped,
//! while valid Unicode text such as Chinese, Japanese and Korean is kept
//! as-is. A few characters that are legal but trip up tools downstream
//! (`£`, `￡`, `@`) are replaced with an underscore afterwards.

use std::borrow::Cow;

/// Characters that are invalid in Windows filenames (`/` is also the Unix separator)
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Characters replaced with [`REPLACEMENT`] once the name is otherwise valid
const REPLACED_CHARS: &[char] = &['£', '￡', '@'];

const REPLACEMENT: char = '_';

/// Windows reserved device names (case-insensitive, with or without extension)
const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Maximum filename length in bytes accepted by ext4, NTFS and APFS alike
pub const MAX_FILENAME_BYTES: usize = 255;

/// Sanitize a string for use as a filename across all platforms.
///
/// This function:
/// 1. Removes control characters and Windows invalid characters
/// 2. Shortens names over [`MAX_FILENAME_BYTES`], keeping the extension
/// 3. Trims trailing spaces and dots (Windows restriction)
/// 4. Appends `_` to the root of Windows reserved names
/// 5. Replaces `£`, `￡` and `@` with `_`
///
/// The empty string and names that are already safe come back unchanged,
/// and the result is always a fixed point: sanitizing it again is a no-op.
///
/// # Examples
///
/// ```
/// use safe_name::sanitize_filename;
///
/// assert_eq!(sanitize_filename("movie£name.mkv"), "movie_name.mkv");
/// assert_eq!(sanitize_filename("clip@home.mp4"), "clip_home.mp4");
/// assert_eq!(sanitize_filename("观看一只青蛙?.mp4"), "观看一只青蛙.mp4");
/// assert_eq!(sanitize_filename("con.mkv"), "con_.mkv");
/// assert_eq!(sanitize_filename(""), "");
/// ```
pub fn sanitize_filename(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_control() && !INVALID_CHARS.contains(c))
        .collect();

    let limited = truncate_to_limit(&cleaned);

    escape_reserved_name(trim_trailing(&limited))
        .chars()
        .map(|c| if REPLACED_CHARS.contains(&c) { REPLACEMENT } else { c })
        .collect()
}

fn trim_trailing(name: &str) -> &str {
    name.trim_end_matches([' ', '.'])
}

/// Split a name into its root and extension (including the dot).
/// A leading dot does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}

fn escape_reserved_name(name: &str) -> Cow<'_, str> {
    let (root, ext) = split_extension(name);
    let reserved = WINDOWS_RESERVED_NAMES
        .iter()
        .any(|reserved| root.eq_ignore_ascii_case(reserved));

    if reserved {
        Cow::Owned(format!("{root}{REPLACEMENT}{ext}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Extensions longer than half the limit are cut along with the rest of the name,
/// one byte short so a reserved-name suffix still fits.
fn truncate_to_limit(name: &str) -> Cow<'_, str> {
    if name.len() <= MAX_FILENAME_BYTES {
        return Cow::Borrowed(name);
    }

    let (root, ext) = split_extension(name);
    if ext.len() < MAX_FILENAME_BYTES / 2 {
        let root = floor_char_boundary(root, MAX_FILENAME_BYTES - ext.len());
        Cow::Owned(format!("{root}{ext}"))
    } else {
        Cow::Borrowed(floor_char_boundary(
            name,
            MAX_FILENAME_BYTES - REPLACEMENT.len_utf8(),
        ))
    }
}

fn floor_char_boundary(s: &str, max_len: usize) -> &str {
    let mut end = max_len.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
