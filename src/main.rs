//! vimdown - Markdown to Vim help file converter

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use vimdown::export::{Exporter, VimdocExporter};
use vimdown::util::{decode_text, help_filename};
use vimdown::vimdoc::{DEFAULT_COLUMNS, DEFAULT_INDENT};
use vimdown::{TagCase, VimdocConfig, parse_markdown};

#[derive(Parser)]
#[command(name = "vimdown")]
#[command(version, about = "Markdown to Vim help file converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    vimdown README.md doc/plugin.txt        Convert README to a help file
    vimdown -p -d 'Cook things' cook.md     Capitalized tags, print to stdout
    vimdown --outline README.md             Show headings, chapters and tags")]
struct Cli {
    /// Markdown input file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Help file to write (stdout if omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Column width
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_COLUMNS)]
    cols: usize,

    /// Description placed on the first line
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    desc: String,

    /// Don't draw rules above headings
    #[arg(long)]
    no_rules: bool,

    /// Don't generate a Contents section
    #[arg(long)]
    no_toc: bool,

    /// Capitalize help tags (Title-HowToCook)
    #[arg(short, long)]
    pascal: bool,

    /// Indent width
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_INDENT)]
    tabs: usize,

    /// Print the heading outline as JSON instead of converting
    #[arg(long)]
    outline: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> VimdocConfig {
        let tag_case = if self.pascal {
            TagCase::Capitalized
        } else {
            TagCase::Lower
        };
        VimdocConfig::new()
            .with_columns(self.cols)
            .with_description(self.desc.as_str())
            .with_no_rules(self.no_rules)
            .with_no_toc(self.no_toc)
            .with_tag_case(tag_case)
            .with_indent(self.tabs)
    }

    /// Name written on the first line and used for tags.
    fn filename(&self) -> String {
        self.output
            .as_deref()
            .and_then(|output| Path::new(output).file_name())
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| help_filename(&self.input))
    }

    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::WARN
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> vimdown::Result<()> {
    let bytes = read_input(&cli.input)?;
    let markdown = decode_text(&bytes);
    let document = parse_markdown(&markdown);
    debug!(input = %cli.input, blocks = document.blocks.len(), "parsed markdown");

    let exporter = VimdocExporter::new(cli.filename()).with_config(cli.config());

    if cli.outline {
        let rendered = exporter.render(&document)?;
        let json = serde_json::to_string_pretty(&rendered.outline).map_err(io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    // Render fully before touching the output file.
    let mut text = Vec::new();
    let report = exporter.export(&document, &mut text)?;
    match &cli.output {
        Some(path) => fs::write(path, &text)?,
        None => io::stdout().lock().write_all(&text)?,
    }

    if !cli.quiet && cli.output.is_some() {
        eprintln!(
            "{}: {} headings, {} bytes",
            exporter.filename(),
            report.outline.len(),
            report.bytes_written
        );
    }
    if !cli.quiet && !report.diagnostics.is_empty() {
        eprintln!(
            "{} element(s) could not be represented in vimdoc",
            report.diagnostics.len()
        );
    }

    Ok(())
}

fn read_input(input: &str) -> io::Result<Vec<u8>> {
    if input == "-" {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(input)
    }
}
