//! sfcdoc: generate props/slots/data/methods tables from single-file components.
//!
//! Two modes:
//!
//! - **stdin mode**: `sfcdoc < Button.vue` prints the document to stdout
//! - **file mode**: `sfcdoc -o docs/components src/components/*.vue`

use anyhow::{Context, Result};
use clap::Parser;
use sfcdoc::config::{ColumnConfig, ExtractOptions, NO_DESCRIPTION, TYPE_DELIMITER};
use sfcdoc::render::{self, Renderer};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sfcdoc",
    about = "Generate documentation tables from annotated single-file components"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// JSON file with per-category `{ "field": "label" }` columns, in display order
    #[arg(long)]
    columns: Option<PathBuf>,

    /// Fail on the first missing comment or malformed field
    #[arg(long)]
    strict: bool,

    /// Separator between the alternatives of an array-typed prop
    #[arg(long, default_value = TYPE_DELIMITER)]
    delimiter: String,

    /// Description used for declarations without a comment
    #[arg(long, default_value = NO_DESCRIPTION)]
    no_description: String,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let options = ExtractOptions {
        no_description: cli.no_description.clone(),
        type_delimiter: cli.delimiter.clone(),
        strict: cli.strict,
    };
    let columns = match cli.columns {
        Some(ref path) => ColumnConfig::load(path)?,
        None => ColumnConfig::default(),
    };
    let renderer = render::create_renderer(&cli.format)?;

    if cli.files.is_empty() {
        return stdin_mode(&options, &columns, renderer.as_ref());
    }

    file_mode(&cli, &options, &columns, renderer.as_ref())
}

/// Logs go to stderr so stdout stays clean for the document.
/// Level is taken from `SFCDOC_LOG`, defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_env("SFCDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// stdin mode: read one component from stdin, write the document to stdout.
fn stdin_mode(options: &ExtractOptions, columns: &ColumnConfig, renderer: &dyn Renderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let documented = sfcdoc::document(&input, options, columns, renderer)?;
    for warning in &documented.extraction.warnings {
        tracing::warn!("{}", warning);
    }
    print!("{}", documented.output);
    Ok(())
}

/// file mode: document every input into its own file in the output directory.
fn file_mode(
    cli: &Cli,
    options: &ExtractOptions,
    columns: &ColumnConfig,
    renderer: &dyn Renderer,
) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();
    let mut written = 0usize;

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let documented = match sfcdoc::document(&content, options, columns, renderer) {
            Ok(documented) => documented,
            Err(e) => {
                tracing::warn!(file = %path.display(), "skipping: {}", e);
                continue;
            }
        };
        for warning in &documented.extraction.warnings {
            tracing::warn!(file = %path.display(), "{}", warning);
        }

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(path), ext));
        fs::write(&out_path, &documented.output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        written += 1;
    }

    if written == 0 && !input_files.is_empty() {
        anyhow::bail!("no component could be documented");
    }
    Ok(())
}

/// File extensions recognized as component files.
const SUPPORTED_EXTENSIONS: &[&str] = &["vue"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for component files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Output file name without extension: "src/components/Button.vue" → "Button"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_vue() {
        assert_eq!(derive_output_name(Path::new("src/components/Button.vue")), "Button");
        assert_eq!(derive_output_name(Path::new("Foo.vue")), "Foo");
    }

    #[test]
    fn output_name_no_extension() {
        assert_eq!(derive_output_name(Path::new("Makefile")), "Makefile");
    }

    #[test]
    fn supported_extensions() {
        assert!(has_supported_extension(Path::new("a/Button.vue")));
        assert!(!has_supported_extension(Path::new("a/button.js")));
    }
}
