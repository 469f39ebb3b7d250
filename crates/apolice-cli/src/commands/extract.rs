//! Extract command - process PDF files, display and export results.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use apolice_core::config::ApoliceConfig;
use apolice_core::export::{encode_table, export_filename, ExportFormat};
use apolice_core::pdf::{PdfExtractor, PdfProcessor};
use apolice_core::policy::{collect_records, DocumentText, PolicyFieldExtractor, ResultTable};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Export format (omit to only display results)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory for the exported file
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Suppress the per-record display
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// XLSX workbook
    Xlsx,
    /// Paginated PDF report
    Pdf,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Xlsx => ExportFormat::Xlsx,
            OutputFormat::Pdf => ExportFormat::Pdf,
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ApoliceConfig::from_file(std::path::Path::new(path))?
    } else {
        ApoliceConfig::default()
    };

    let files = expand_inputs(&args.inputs)?;

    if files.is_empty() {
        // Not an error: prompt and exit cleanly
        println!(
            "{} No PDF documents to process. Provide one or more PDF files to start extraction.",
            style("ℹ").blue()
        );
        return Ok(());
    }

    println!(
        "{} Found {} PDF file(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Read every document up front, in intake order
    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        pb.set_message(
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string(),
        );

        match load_document(path, &config) {
            Ok(document) => {
                debug!(
                    "{}: {} page(s) with text",
                    document.filename,
                    document.pages.len()
                );
                documents.push(document);
            }
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
            }
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let extractor = PolicyFieldExtractor::new();
    let table = collect_records(documents, &extractor);

    if !args.quiet {
        print_table(&table);
    }

    println!(
        "{} Extracted {} record(s) from {} file(s) in {:?}",
        style("✓").green(),
        table.len(),
        files.len(),
        start.elapsed()
    );

    if let Some(format) = args.format {
        export(&table, format.into(), &args.output_dir, &config)?;
    }

    Ok(())
}

/// Expand the input arguments (paths or glob patterns) into an ordered
/// list of PDF paths. Only `.pdf` files are accepted.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = PathBuf::from(input);
        if path.is_file() {
            if is_pdf(&path) {
                files.push(path);
            } else {
                warn!("ignoring non-PDF input: {}", path.display());
            }
            continue;
        }

        for entry in glob(input)? {
            match entry {
                Ok(path) if is_pdf(&path) => files.push(path),
                Ok(path) => debug!("ignoring non-PDF match: {}", path.display()),
                Err(e) => warn!("glob error for {}: {}", input, e),
            }
        }
    }

    Ok(files)
}

fn is_pdf(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Read one PDF and extract its per-page text. Pages without text are
/// skipped inside the extractor; a document may come back with no pages.
fn load_document(path: &PathBuf, config: &ApoliceConfig) -> anyhow::Result<DocumentText> {
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    let mut pages = extractor.extract_pages();
    if config.pdf.max_pages > 0 {
        pages.truncate(config.pdf.max_pages);
    }

    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown.pdf")
        .to_string();

    Ok(DocumentText { filename, pages })
}

fn print_table(table: &ResultTable) {
    for record in table.records() {
        println!();
        println!(
            "{} {} (page {}) at {}",
            style("▸").cyan(),
            style(&record.filename).bold(),
            record.page,
            record.extracted_at
        );

        let mut matched = 0;
        for (field, value) in record.fields.iter() {
            if !value.is_empty() {
                println!("  {}: {}", field.label(), value);
                matched += 1;
            }
        }
        if matched == 0 {
            println!("  {}", style("(no fields matched)").dim());
        }
    }
    println!();
}

fn export(
    table: &ResultTable,
    format: ExportFormat,
    output_dir: &PathBuf,
    config: &ApoliceConfig,
) -> anyhow::Result<()> {
    let bytes = encode_table(table, format, config)?;

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(export_filename(format, Local::now()));
    fs::write(&output_path, bytes)?;

    println!(
        "{} Output written to {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}
