//! Command-line interface for snaptree.
//!
//! Walks a directory and writes a snapshot of its structure and text file
//! contents to a single output file.

use clap::{Parser, ValueEnum};
use snaptree::{
    ContentOrder, DEFAULT_OUTPUT_NAME, OutputFormat, SnapshotBuilder, SnapshotError,
    SnapshotOptions, resolve_root, write_snapshot,
};
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// snaptree: write a project's tree and file contents to one text file
#[derive(Parser)]
#[command(name = "snaptree", version, about, long_about = None)]
struct Cli {
    /// Root directory to snapshot (defaults to the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output file path (defaults to project_snapshot.txt in root)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Extra directory names to list but not traverse (can be repeated)
    #[arg(long = "exclude-dir")]
    exclude_dirs: Vec<String>,

    /// Extra extensions whose content is omitted (can be repeated)
    #[arg(long = "skip-ext")]
    skip_extensions: Vec<String>,

    /// File name globs whose content is omitted (can be repeated)
    #[arg(long = "skip-name")]
    skip_names: Vec<String>,

    /// Order of the file content sections
    #[arg(long, value_enum, default_value_t = Order::Stack)]
    order: Order,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Order {
    Stack,
    Tree,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Order> for ContentOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Stack => ContentOrder::Stack,
            Order::Tree => ContentOrder::Tree,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self, root: PathBuf) -> (SnapshotOptions, OutputFormat) {
        let format = OutputFormat::from(self.format);
        let output = self
            .output
            .unwrap_or_else(|| root.join(default_output_name(format)));
        let options = SnapshotBuilder::new(root)
            .output(output)
            .exclude_dirs(self.exclude_dirs)
            .skip_extensions(self.skip_extensions)
            .skip_globs(self.skip_names)
            .order(self.order.into())
            .build();
        (options, format)
    }
}

fn default_output_name(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => DEFAULT_OUTPUT_NAME.to_string(),
        other => Path::new(DEFAULT_OUTPUT_NAME)
            .with_extension(other.extension())
            .to_string_lossy()
            .into_owned(),
    }
}

fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let requested = cli.root.clone().unwrap_or_else(default_root);
    match run(cli, &requested) {
        Ok(path) => println!("Snapshot written to {}", path.display()),
        Err(e @ SnapshotError::InvalidRoot { .. }) => {
            eprintln!("{}", e);
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run(cli: Cli, requested: &Path) -> Result<PathBuf, SnapshotError> {
    let root = resolve_root(requested)?;
    let (options, format) = cli.into_options(root);
    write_snapshot(&options, format)
}
