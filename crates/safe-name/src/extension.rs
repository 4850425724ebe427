/// Extensions of the video containers that get renamed.
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4"];

/// Returns true if `name` ends with `.` followed by one of `extensions`,
/// compared case-insensitively after Unicode lowercasing.
///
/// # Examples
///
/// ```
/// use safe_name::{VIDEO_EXTENSIONS, has_extension};
///
/// assert!(has_extension("Movie.MKV", VIDEO_EXTENSIONS));
/// assert!(!has_extension("notes.txt", VIDEO_EXTENSIONS));
/// ```
pub fn has_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            extensions
                .iter()
                .any(|candidate| ext == candidate.as_ref().to_lowercase())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_video_extensions() {
        assert!(has_extension("movie.mkv", VIDEO_EXTENSIONS));
        assert!(has_extension("clip.mp4", VIDEO_EXTENSIONS));
        assert!(has_extension("中文视频.mp4", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_extension("Movie.MKV", VIDEO_EXTENSIONS));
        assert!(has_extension("Clip.Mp4", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_unicode_lowercasing() {
        // KELVIN SIGN lowercases to 'k'
        assert!(has_extension("movie.m\u{212A}v", VIDEO_EXTENSIONS));
        assert!(has_extension("MOVIE.M\u{212A}V", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!has_extension("notes.txt", VIDEO_EXTENSIONS));
        assert!(!has_extension("movie.mkv.part", VIDEO_EXTENSIONS));
        assert!(!has_extension("movie.avi", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_requires_dot() {
        assert!(!has_extension("mkv", VIDEO_EXTENSIONS));
        assert!(!has_extension("moviemkv", VIDEO_EXTENSIONS));
        assert!(!has_extension("", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_bare_extension_is_a_match() {
        assert!(has_extension(".mkv", VIDEO_EXTENSIONS));
    }

    #[test]
    fn test_owned_extension_list() {
        let extensions = vec!["webm".to_string()];
        assert!(has_extension("stream.WEBM", &extensions));
        assert!(!has_extension("stream.mkv", &extensions));
    }
}
