//! sniffmime - Identify file MIME types from the command line
//!
//! Classifies a single file or every file under a directory using a cascade
//! of an external probe command, magic-byte signatures, and extension
//! lookup.

use anyhow::{bail, Result};
use clap::{Args, Parser, ValueEnum};
use sniffmime_core::{
    extension_for_mime, Detection, Detector, DetectorConfig, DEFAULT_PROBE_COMMAND,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Identify file MIME types
#[derive(Parser, Debug)]
#[command(name = "sniffmime")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value = "mime")]
    format: OutputFormat,

    /// Skip the external probe stage (signature and extension lookup only)
    #[arg(long)]
    skip_probe: bool,

    /// External classification command, invoked as `<CMD> --brief <path>`
    #[arg(long, default_value = DEFAULT_PROBE_COMMAND)]
    probe_command: String,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputMode {
    /// Path to a single file to classify
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory of files to classify recursively
    #[arg(short, long)]
    directory: Option<PathBuf>,
}

/// Output format for detection results
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The detected MIME type
    Mime,
    /// A representative file extension for the detected type
    Extension,
}

/// Per-run counters, logged as a summary in directory mode
#[derive(Default)]
struct RunStats {
    scanned: usize,
    identified: usize,
    unknown: usize,
}

impl RunStats {
    fn record(&mut self, result: &Detection) {
        self.scanned += 1;
        if result.is_unknown() {
            self.unknown += 1;
        } else {
            self.identified += 1;
        }
    }

    fn print_summary(&self) {
        info!(
            "Summary: {} scanned, {} identified, {} unknown",
            self.scanned, self.identified, self.unknown
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    // Dispatch based on input mode
    if let Some(ref file) = cli.input.file {
        process_single_file(&cli, file)
    } else if let Some(ref directory) = cli.input.directory {
        process_directory(&cli, directory)
    } else {
        bail!("Either --file or --directory must be specified")
    }
}

/// Builds a detector from the CLI flags
fn build_detector(cli: &Cli) -> Detector {
    let config = DetectorConfig::new()
        .use_probe(!cli.skip_probe)
        .probe_command(cli.probe_command.clone());
    Detector::with_config(config)
}

/// Classify a single file
fn process_single_file(cli: &Cli, file: &Path) -> Result<()> {
    if !file.exists() {
        bail!("Input file does not exist: {}", file.display());
    }
    if !file.is_file() {
        bail!("Input path is not a file: {}", file.display());
    }

    let detector = build_detector(cli);
    let result = detector.detect(file);
    println!("{}", render(&result, cli.format));

    Ok(())
}

/// Classify every file under a directory recursively
fn process_directory(cli: &Cli, directory: &Path) -> Result<()> {
    if !directory.exists() {
        bail!("Directory does not exist: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("Path is not a directory: {}", directory.display());
    }

    info!("Scanning directory: {}", directory.display());

    let detector = build_detector(cli);
    let mut stats = RunStats::default();

    // Walk the directory
    for entry in WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Skip hidden files
        if is_hidden(path) {
            trace!("Skipping hidden file: {}", path.display());
            continue;
        }

        debug!("Classifying {}", path.display());
        let result = detector.detect(path);
        stats.record(&result);
        println!("{}: {}", path.display(), render(&result, cli.format));
    }

    stats.print_summary();

    Ok(())
}

/// True when the file name starts with a dot
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Renders a detection result in the requested output format
fn render(result: &Detection, format: OutputFormat) -> String {
    match format {
        OutputFormat::Mime => result.to_string(),
        OutputFormat::Extension => match result {
            Detection::Mime(mime) => extension_for_mime(mime).unwrap_or("-").to_string(),
            Detection::Unknown => "-".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_render_formats() {
        let result = Detection::from("image/jpeg");
        assert_eq!(render(&result, OutputFormat::Mime), "image/jpeg");
        assert_eq!(render(&result, OutputFormat::Extension), "jpg");

        assert_eq!(render(&Detection::Unknown, OutputFormat::Mime), "unknown");
        assert_eq!(render(&Detection::Unknown, OutputFormat::Extension), "-");
    }

    #[test]
    fn test_render_unmapped_mime_has_no_extension() {
        let result = Detection::from_raw("application/x-exotic".to_string());
        assert_eq!(render(&result, OutputFormat::Extension), "-");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/tmp/.gitignore")));
        assert!(!is_hidden(Path::new("/tmp/visible.txt")));
    }

    #[test]
    fn test_run_stats() {
        let mut stats = RunStats::default();
        stats.record(&Detection::from("image/png"));
        stats.record(&Detection::Unknown);
        stats.record(&Detection::Unknown);

        assert_eq!(stats.scanned, 3);
        assert_eq!(stats.identified, 1);
        assert_eq!(stats.unknown, 2);
    }

    #[test]
    fn test_build_detector_respects_skip_probe() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("picture.raw");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\n0000000000").unwrap();

        let cli = cli_from(&[
            "sniffmime",
            "--file",
            path.to_str().unwrap(),
            "--skip-probe",
        ]);
        let detector = build_detector(&cli);
        assert_eq!(detector.detect(&path).as_str(), "image/png");
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
