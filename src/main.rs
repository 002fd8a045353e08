use clap::Parser;
use katc::{
    ast::Program,
    codegen::Emitter,
    errors::KatResult,
    frontend::{parse, scan, Token},
    read,
};
use std::{fs, path::Path, path::PathBuf, time::Instant};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "kat compiler that generates an illustrative assembly listing",
    long_about = "kat compiler that generates an illustrative assembly listing.\n\
                 It performs lexical analysis, parsing, and listing emission.\n\
                 \n\
                 Example usage:\n\
                 katc input.kat                    # Compile to input.asm\n\
                 katc input.kat -o output.asm      # Specify output file\n\
                 katc input.kat --print-tokens     # Print the token stream\n\
                 katc input.kat --show-ast         # Display the statement tree\n\
                 katc input.kat --stdout           # Write the listing to stdout\n\
                 katc input.kat -v --timing        # Verbose output and stage timing"
)]
struct Cli {
    // The path to the .kat file to compile
    path: PathBuf,

    // Output file path (defaults to input file stem with .asm extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Write the listing to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    // Print tokens after lexical analysis
    #[arg(long)]
    print_tokens: bool,

    // Show the statement tree after parsing
    #[arg(long)]
    show_ast: bool,

    // Show the symbol table after emission
    #[arg(long)]
    show_symbols: bool,

    // Print the listing after emission
    #[arg(short = 'a', long)]
    print_asm: bool,

    // Verbose logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    // Show compilation timing
    #[arg(short, long)]
    timing: bool,
}

// Compilation statistics for performance analysis
#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    emit_time: f64,
    total_time: f64,
    token_count: usize,
    statement_count: usize,
    label_count: usize,
    listing_lines: usize,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Generate output file path from input path if not specified
fn determine_output_path(input_path: &Path, output: &Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => {
            let basename = input_path.file_stem().unwrap_or_default();
            let mut path = PathBuf::from(basename);
            path.set_extension("asm");
            path
        }
    }
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut CompilationStats) -> KatResult<Vec<Token>> {
    let lexer_start = Instant::now();
    let tokens = scan(source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    info!(tokens = stats.token_count, seconds = stats.lexer_time, "lexical analysis completed");
    Ok(tokens)
}

// Perform parsing phase
fn parsing_phase(tokens: &[Token], stats: &mut CompilationStats) -> KatResult<Program> {
    let parser_start = Instant::now();
    let program = parse(tokens)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.statement_count = program.node_count();
    info!(statements = stats.statement_count, seconds = stats.parser_time, "parsing completed");
    Ok(program)
}

// Perform listing emission phase
fn emission_phase(program: &Program, stats: &mut CompilationStats, show_symbols: bool) -> KatResult<String> {
    let emit_start = Instant::now();
    let mut emitter = Emitter::new();
    emitter.emit_program(program)?;
    stats.label_count = emitter.labels_issued();
    if show_symbols {
        println!("\n Symbol Table:");
        emitter.symbols().print_symbols();
    }
    let mut buffer = Vec::new();
    emitter.finalize(&mut buffer)?;
    let listing = String::from_utf8_lossy(&buffer).into_owned();
    stats.emit_time = emit_start.elapsed().as_secs_f64();
    stats.listing_lines = listing.lines().count();
    info!(lines = stats.listing_lines, labels = stats.label_count, seconds = stats.emit_time, "emission completed");
    Ok(listing)
}

// Main compilation function
fn compile(args: &Cli) -> KatResult<(String, CompilationStats)> {
    let start_time = Instant::now();
    let mut stats = CompilationStats::default();
    info!(path = %args.path.display(), "starting compilation");

    let source = read(&args.path)?;
    debug!(bytes = source.len(), "read source file");

    let tokens = lexical_analysis(&source, &mut stats)?;
    if args.print_tokens {
        println!("\n Tokens:");
        for token in &tokens {
            println!("{}", token);
        }
    }

    let program = parsing_phase(&tokens, &mut stats)?;
    if args.show_ast {
        println!("\n Statement Tree:");
        print!("{}", program);
    }

    let listing = emission_phase(&program, &mut stats, args.show_symbols)?;
    if args.print_asm {
        println!("\n Generated Listing:");
        print!("{}", listing);
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok((listing, stats))
}

// Print detailed compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\n Compilation Statistics:");
    println!("+---------------------+-----------+");
    println!("| Phase               | Time (s)  |");
    println!("+---------------------+-----------+");
    println!("| Lexical Analysis    | {:>9.6} |", stats.lexer_time);
    println!("| Parsing             | {:>9.6} |", stats.parser_time);
    println!("| Listing Emission    | {:>9.6} |", stats.emit_time);
    println!("+---------------------+-----------+");
    println!("| Total Time          | {:>9.6} |", stats.total_time);
    println!("+---------------------+-----------+");

    println!("\n Code Metrics:");
    println!("  * Tokens:          {}", stats.token_count);
    println!("  * Statements:      {}", stats.statement_count);
    println!("  * Labels:          {}", stats.label_count);
    println!("  * Listing Lines:   {}", stats.listing_lines);
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    match compile(&args) {
        Ok((listing, stats)) => {
            if args.stdout {
                print!("{}", listing);
            } else {
                // Only written once every stage succeeded
                let output_path = determine_output_path(&args.path, &args.output);
                if let Err(e) = fs::write(&output_path, &listing) {
                    fatal(&format!("Failed to write output file '{}': {}", output_path.display(), e));
                }
                info!(path = %output_path.display(), "listing written");
            }

            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&format!("Compilation failed during {}: {}", e.stage(), e)),
    }
}
