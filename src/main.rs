//! det-rs command-line tool
//!
//! Interactive determinant calculator over the det-rs library: matrix
//! entry by hand, CSV file, random generation or the built-in gallery;
//! LU or cofactor methods with optional step-by-step derivations;
//! CSV/JSON export of the analysis report.

use clap::{ArgGroup, Parser, ValueEnum};
use det_rs::analysis::{
    analyze_with, AnalysisOptions, DeterminantMethod, Derivation, LuMethod, RecursiveMethod,
    DEFAULT_NEAR_ZERO_TOLERANCE, RECURSIVE_SIZE_LIMIT,
};
use det_rs::gallery;
use det_rs::input::{load_matrix_csv, random_matrix};
use det_rs::matrix::{Entry, Matrix};
use det_rs::output::{
    format_matrix, CsvExporter, ExportRecord, Exporter, JsonExporter, RenderStyle,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Parser)]
#[command(name = "det-rs")]
#[command(about = "Matrix determinant calculator with exact arithmetic")]
#[command(version)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["size", "file", "random", "gallery_key", "list_gallery"])
))]
struct Cli {
    /// Enter an n x n matrix interactively, one row per line
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Load the matrix from a CSV file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Generate a random n x n matrix
    #[arg(short, long, value_name = "N")]
    random: Option<usize>,

    /// Use a built-in reference matrix (see --list-gallery)
    #[arg(short, long = "gallery", value_name = "KEY")]
    gallery_key: Option<String>,

    /// List the built-in reference matrices and exit
    #[arg(long)]
    list_gallery: bool,

    /// Determinant method
    #[arg(short, long, value_enum, default_value_t = MethodChoice::Lu)]
    method: MethodChoice,

    /// Exact rational arithmetic (integers and p/q fractions only)
    #[arg(short, long)]
    exact: bool,

    /// Show the step-by-step derivation
    #[arg(long)]
    steps: bool,

    /// Matrix display style
    #[arg(long, value_enum, default_value_t = StyleChoice::Box)]
    style: StyleChoice,

    /// Time each applicable method instead of the normal report
    #[arg(long)]
    benchmark: bool,

    /// Write the analysis report to a file
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = FormatChoice::Json)]
    format: FormatChoice,

    /// Entry range for --random: MIN MAX
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        default_values_t = [-10_i64, 10],
        allow_negative_numbers = true
    )]
    range: Vec<i64>,

    /// Near-zero tolerance for float and complex pivots
    #[arg(long, default_value_t = DEFAULT_NEAR_ZERO_TOLERANCE)]
    tolerance: f64,

    /// Disable ANSI colors in the report
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// Terminal Palette
// =============================================================================

/// ANSI styling for the report; all fields empty when color is off
///
/// Color is an explicit value threaded to the print sites, decided
/// once from the flag and the terminal check.
struct Palette {
    bold: &'static str,
    green: &'static str,
    yellow: &'static str,
    reset: &'static str,
}

impl Palette {
    fn auto(no_color: bool) -> Self {
        if no_color || !io::stdout().is_terminal() {
            Self::plain()
        } else {
            Self::ansi()
        }
    }

    fn ansi() -> Self {
        Self {
            bold: "\x1b[1m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            reset: "\x1b[0m",
        }
    }

    fn plain() -> Self {
        Self {
            bold: "",
            green: "",
            yellow: "",
            reset: "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodChoice {
    /// LU decomposition with partial pivoting, O(n^3)
    Lu,
    /// Cofactor expansion, O(n!), sizes up to 6
    Recursive,
    /// Run both and cross-check
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleChoice {
    Box,
    Brackets,
    Grid,
    Simple,
}

impl From<StyleChoice> for RenderStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Box => RenderStyle::Box,
            StyleChoice::Brackets => RenderStyle::Brackets,
            StyleChoice::Grid => RenderStyle::Grid,
            StyleChoice::Simple => RenderStyle::Simple,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatChoice {
    Csv,
    Json,
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if cli.list_gallery {
        print_gallery();
        return Ok(());
    }

    // ====== Step 1: Obtain the Matrix ======

    let matrix = obtain_matrix(cli)?;
    let options = AnalysisOptions {
        record_steps: cli.steps,
        tolerance: cli.tolerance,
    };
    options.validate()?;

    println!("{}", format_matrix(&matrix, cli.style.into()));
    println!();

    // ====== Step 2: Compute ======

    if cli.benchmark {
        return run_benchmark(&matrix, &options);
    }

    let derivation = compute_determinant(cli.method, &matrix, &options)?;

    if cli.steps {
        println!("Derivation ({}):", derivation_method_name(&derivation));
        for line in &derivation.steps {
            println!("  {}", line);
        }
        println!();
    }

    // ====== Step 3: Report ======

    let palette = Palette::auto(cli.no_color);
    let report = analyze_with(&matrix, &options)?;
    println!(
        "Determinant : {}{}{}",
        palette.bold, derivation.value, palette.reset
    );
    println!("Trace       : {}", report.trace);
    println!("Rank        : {}", report.rank);
    if report.is_singular {
        println!("Singular    : {}yes{}", palette.yellow, palette.reset);
    } else {
        println!("Singular    : no");
    }
    println!("Symmetric   : {}", if report.is_symmetric { "yes" } else { "no" });

    if let Some(key) = &cli.gallery_key {
        verify_gallery(key, &derivation.value, &palette)?;
    }

    // ====== Step 4: Export ======

    if let Some(path) = &cli.export {
        let record = ExportRecord {
            matrix: &matrix,
            analysis: &report,
            method: derivation_method_name(&derivation),
            steps: &derivation.steps,
        };
        match cli.format {
            FormatChoice::Csv => CsvExporter::default()
                .export(&record, path)
                .map_err(|e| e.to_string())?,
            FormatChoice::Json => JsonExporter::new()
                .export(&record, path)
                .map_err(|e| e.to_string())?,
        }
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}

// =============================================================================
// Matrix Sources
// =============================================================================

fn obtain_matrix(cli: &Cli) -> Result<Matrix, String> {
    if let Some(n) = cli.size {
        check_cli_size(n)?;
        return read_matrix_interactively(n, cli.exact);
    }
    if let Some(path) = &cli.file {
        return load_matrix_csv(path, cli.exact);
    }
    if let Some(n) = cli.random {
        check_cli_size(n)?;
        // clap guarantees exactly two values
        return random_matrix(n, cli.range[0], cli.range[1], cli.exact);
    }
    if let Some(key) = &cli.gallery_key {
        return gallery::get(key)
            .map(|entry| entry.matrix)
            .ok_or_else(|| format!("Unknown gallery key '{}' (try --list-gallery)", key));
    }
    unreachable!("clap enforces exactly one matrix source")
}

/// The library accepts 1x1 matrices; the tool asks for at least 2x2
/// because a 1x1 determinant is the entry itself.
fn check_cli_size(n: usize) -> Result<(), String> {
    if n < 2 {
        return Err("Matrix size must be at least 2".to_string());
    }
    Ok(())
}

/// Read n rows from stdin, each holding n comma- or space-separated
/// entries.
fn read_matrix_interactively(n: usize, exact: bool) -> Result<Matrix, String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut rows = Vec::with_capacity(n);

    println!(
        "Enter the {}x{} matrix, one row per line ({} values, separated by spaces or commas):",
        n,
        n,
        n
    );

    for i in 0..n {
        print!("Row {}: ", i + 1);
        io::stdout().flush().map_err(|e| e.to_string())?;

        let line = lines
            .next()
            .ok_or_else(|| "Unexpected end of input".to_string())?
            .map_err(|e| format!("Cannot read input: {}", e))?;

        let cells: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        if cells.len() != n {
            return Err(format!(
                "Row {} has {} values, expected {}",
                i + 1,
                cells.len(),
                n
            ));
        }

        let mut row = Vec::with_capacity(n);
        for (j, cell) in cells.iter().enumerate() {
            let entry = Entry::parse(cell, exact)
                .map_err(|e| format!("Row {}, value {}: {}", i + 1, j + 1, e))?;
            row.push(entry);
        }
        rows.push(row);
    }

    Matrix::from_rows(rows)
}

// =============================================================================
// Computation
// =============================================================================

fn compute_determinant(
    method: MethodChoice,
    matrix: &Matrix,
    options: &AnalysisOptions,
) -> Result<Derivation, String> {
    match method {
        MethodChoice::Lu => LuMethod::new().determinant(matrix, options),
        MethodChoice::Recursive => {
            check_recursive_size(matrix.size())?;
            recursive_with_progress(matrix.size()).determinant(matrix, options)
        }
        MethodChoice::Both => {
            check_recursive_size(matrix.size())?;
            let lu = LuMethod::new().determinant(matrix, options)?;
            let recursive = recursive_with_progress(matrix.size()).determinant(matrix, options)?;

            if lu.value.near_equal(&recursive.value, options.tolerance.max(1e-9)) {
                println!("Methods agree: LU and cofactor expansion both give {}", lu.value);
                println!();
            } else {
                eprintln!(
                    "Warning: methods disagree (LU: {}, cofactor: {})",
                    lu.value, recursive.value
                );
            }
            Ok(lu)
        }
    }
}

fn check_recursive_size(n: usize) -> Result<(), String> {
    if n > RECURSIVE_SIZE_LIMIT {
        return Err(format!(
            "Cofactor expansion is limited to {}x{} (O(n!) growth); use --method lu",
            RECURSIVE_SIZE_LIMIT, RECURSIVE_SIZE_LIMIT
        ));
    }
    Ok(())
}

/// Attach a stderr percentage readout for sizes where expansion is
/// slow enough to watch.
fn recursive_with_progress(n: usize) -> RecursiveMethod {
    if n < 5 {
        return RecursiveMethod::new();
    }
    RecursiveMethod::new().with_progress(Box::new(|fraction| {
        eprint!("\rExpanding cofactors... {:3.0}%", fraction * 100.0);
        if fraction >= 1.0 {
            eprintln!();
        }
        let _ = io::stderr().flush();
    }))
}

fn derivation_method_name(derivation: &Derivation) -> &str {
    derivation
        .metadata
        .get("method")
        .map(String::as_str)
        .unwrap_or("unknown")
}

// =============================================================================
// Benchmark
// =============================================================================

/// Wall-clock timing of each applicable method on the given matrix.
/// Cofactor expansion is skipped beyond its size limit.
fn run_benchmark(matrix: &Matrix, options: &AnalysisOptions) -> Result<(), String> {
    let n = matrix.size();
    println!("Benchmark ({}x{}, {} domain)", n, n, matrix.domain());

    let start = Instant::now();
    let lu = LuMethod::new().determinant(matrix, options)?;
    let lu_elapsed = start.elapsed();
    println!(
        "  {:<30} {:>12.3?}   det = {}",
        LuMethod::new().name(),
        lu_elapsed,
        lu.value
    );

    if n <= RECURSIVE_SIZE_LIMIT {
        let start = Instant::now();
        let recursive = RecursiveMethod::new().determinant(matrix, options)?;
        let elapsed = start.elapsed();
        println!(
            "  {:<30} {:>12.3?}   det = {}",
            RecursiveMethod::new().name(),
            elapsed,
            recursive.value
        );
    } else {
        println!(
            "  {:<30} skipped (limited to {}x{})",
            RecursiveMethod::new().name(),
            RECURSIVE_SIZE_LIMIT,
            RECURSIVE_SIZE_LIMIT
        );
    }

    Ok(())
}

// =============================================================================
// Gallery Listing
// =============================================================================

fn print_gallery() {
    println!("Built-in reference matrices:");
    println!();
    for entry in gallery::all() {
        println!(
            "  {:<15} {:<20} det = {:<10} {}",
            entry.key,
            entry.name,
            entry.expected_determinant.to_string(),
            entry.description
        );
    }
    println!();
    println!("Use with: det-rs --gallery <KEY>");
}

fn verify_gallery(key: &str, computed: &Entry, palette: &Palette) -> Result<(), String> {
    let entry = gallery::get(key)
        .ok_or_else(|| format!("Unknown gallery key '{}'", key))?;
    if computed.near_equal(&entry.expected_determinant, 1e-9) {
        println!(
            "Verified    : {}matches the known determinant {}{}",
            palette.green, entry.expected_determinant, palette.reset
        );
    } else {
        eprintln!(
            "Warning: computed {} differs from the known determinant {}",
            computed, entry.expected_determinant
        );
    }
    Ok(())
}
