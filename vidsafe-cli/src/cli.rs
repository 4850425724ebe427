use clap::Parser;

/// Define CLI arguments
#[derive(Parser)]
#[command(
    author = "hua0512 <https://github.com/hua0512>",
    version,
    about = "Rename video files to filesystem-safe names",
    long_about = "Renames every .mkv and .mp4 file in the current directory so its name is\n\
                  safe on Windows, Linux and macOS. Invalid characters are removed, '£', '￡'\n\
                  and '@' become '_', and Chinese/Japanese/Korean text is kept as-is.\n\
                  \n\
                  Existing files are never overwritten: when the sanitized name is taken\n\
                  the file is skipped and reported."
)]
pub struct CliArgs {
    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging on stderr")]
    pub verbose: bool,
}
