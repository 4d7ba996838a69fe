//! Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Start with an empty text box
//! tedious
//!
//! # Preload a text file, three words at a time
//! tedious notes.txt --display 3
//!
//! # Log to a file while the UI runs
//! tedious --log-file /tmp/tedious.log --log-level debug
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Read text aloud in small, paced word chunks for handwriting practice
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tedious")]
#[command(version)]
#[command(about = "Read text aloud in small word chunks for handwriting practice", long_about = None)]
pub struct Args {
    /// Text file to load at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to <config dir>/tedious/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Words shown and spoken at once
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub display: Option<u8>,

    /// Context words shown before and after the chunk
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub pad: Option<u8>,

    /// Run without speech output
    #[arg(long)]
    pub no_speech: bool,

    /// Speak the chunk after every move
    #[arg(long)]
    pub auto_speak: bool,

    /// Preferred voice name
    #[arg(long, value_name = "NAME")]
    pub voice: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_arguments() {
        let args = Args::parse_from(["tedious"]);
        assert!(args.file.is_none());
        assert!(args.display.is_none());
        assert!(!args.no_speech);
    }

    #[test]
    fn test_parse_file_and_counts() {
        let args = Args::parse_from(["tedious", "notes.txt", "-d", "3", "-p", "1"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.display, Some(3));
        assert_eq!(args.pad, Some(1));
    }

    #[test]
    fn test_display_out_of_range_rejected() {
        assert!(Args::try_parse_from(["tedious", "--display", "0"]).is_err());
        assert!(Args::try_parse_from(["tedious", "--display", "6"]).is_err());
        assert!(Args::try_parse_from(["tedious", "--pad", "6"]).is_err());
    }

    #[test]
    fn test_args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
