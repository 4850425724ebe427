#[cfg(feature = "colored-output")]
use colored::*;

use crate::processor::{RenameOutcome, RenameSummary};

const RULE_WIDTH: usize = 50;

/// Formats the human-readable status lines printed on stdout
pub struct OutputManager {
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_banner(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!(
            "{rule}\n🚀 Processing .mkv and .mp4 files in the current directory (keeping CJK, removing ￡/@)\n{rule}"
        )
    }

    pub fn format_outcome(&self, outcome: &RenameOutcome) -> String {
        match outcome {
            RenameOutcome::AlreadySafe { name } => format!(
                "✅ {}",
                self.colorize(&format!("{name} (already safe, nothing to do)"), &Color::Green)
            ),
            RenameOutcome::Skipped { original, target } => format!(
                "⚠️ {}",
                self.colorize(
                    &format!("Skipped {original} (target {target} already exists)"),
                    &Color::Yellow
                )
            ),
            RenameOutcome::Renamed { original, target } => format!(
                "🔄 {}",
                self.colorize(&format!("Renamed: {original} → {target}"), &Color::Cyan)
            ),
            RenameOutcome::Failed {
                original,
                target,
                error,
            } => format!(
                "❌ {}",
                self.colorize(&format!("Failed {original} → {target}: {error}"), &Color::Red)
            ),
        }
    }

    pub fn format_footer(&self, summary: &RenameSummary) -> String {
        format!(
            "\nSummary: {summary}\n✅ {}",
            self.colorize("Done! All video files have been processed", &Color::Green)
        )
    }

    fn colorize(&self, text: &str, color: &Color) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Yellow => text.yellow(),
                    Color::Cyan => text.cyan(),
                    Color::Red => text.red().bold(),
                };
                colored_text.to_string()
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (self.colored, color);
            text.to_string()
        }
    }
}

#[cfg_attr(not(feature = "colored-output"), allow(dead_code))]
enum Color {
    Green,
    Yellow,
    Cyan,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputManager {
        OutputManager::new(false)
    }

    #[test]
    fn test_banner() {
        let banner = plain().format_banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(50));
        assert!(lines[1].starts_with("🚀 "));
        assert_eq!(lines[2], "=".repeat(50));
    }

    #[test]
    fn test_outcome_lines() {
        let output = plain();
        assert_eq!(
            output.format_outcome(&RenameOutcome::AlreadySafe {
                name: "中文视频.mp4".to_string()
            }),
            "✅ 中文视频.mp4 (already safe, nothing to do)"
        );
        assert_eq!(
            output.format_outcome(&RenameOutcome::Skipped {
                original: "a￡.mkv".to_string(),
                target: "a_.mkv".to_string(),
            }),
            "⚠️ Skipped a￡.mkv (target a_.mkv already exists)"
        );
        assert_eq!(
            output.format_outcome(&RenameOutcome::Renamed {
                original: "clip@home.mp4".to_string(),
                target: "clip_home.mp4".to_string(),
            }),
            "🔄 Renamed: clip@home.mp4 → clip_home.mp4"
        );
        assert_eq!(
            output.format_outcome(&RenameOutcome::Failed {
                original: "x@.mkv".to_string(),
                target: "x_.mkv".to_string(),
                error: "Permission denied (os error 13)".to_string(),
            }),
            "❌ Failed x@.mkv → x_.mkv: Permission denied (os error 13)"
        );
    }

    #[test]
    fn test_footer() {
        let summary = RenameSummary {
            renamed: 1,
            already_safe: 2,
            skipped: 0,
            failed: 0,
        };
        assert_eq!(
            plain().format_footer(&summary),
            "\nSummary: 1 renamed, 2 already safe, 0 skipped, 0 failed\n✅ Done! All video files have been processed"
        );
    }
}
