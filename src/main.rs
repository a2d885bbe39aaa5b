use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use nicojson::{init_tracing_once, level_for_verbosity, CommentRegrouper, OutputOptions, RegroupOptions, DEFAULT_THREAD_ID};
use std::path::PathBuf;

/// Convert a flat comment dump (JSON array) into the fork-grouped viewer document.
#[derive(Debug, Parser)]
#[command(name = "nicojson", version, about, long_about = None)]
struct Cli {
    /// Input JSON file (array of comment objects)
    input: PathBuf,

    /// Output JSON file
    output: PathBuf,

    /// Thread id stamped on every thread and on globalComments
    #[arg(long, env = "NICOJSON_THREAD_ID", default_value = DEFAULT_THREAD_ID)]
    thread_id: String,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,

    /// Spaces per indentation level for pretty output
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let out_opts = OutputOptions::default().with_pretty(!cli.compact).with_indent(cli.indent);

    let opts = RegroupOptions::default().with_thread_id(cli.thread_id);

    CommentRegrouper::with_options(opts)
        .convert_file(&cli.input, &cli.output, &out_opts)?;

    println!("converted: {}", cli.output.display());
    Ok(())
}

fn main() {
    // Usage errors exit 1 like every other failure; --help/--version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_tracing_once(level_for_verbosity(cli.verbose));

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
