use clap::Parser as ClapParser;
use std::io::{self, Read};
use tiny_compiler::{
    CompilerOptions,
    cli::{self, CliError, EmitOptions, EmitStage},
    options::DEFAULT_MAX_DEPTH,
    to_json, to_json_pretty,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "tinyc")]
#[command(about = "Tiny compiler - tokenize, parse and transform Lisp-style call expressions")]
#[command(version)]
struct Cli {
    /// Source expression, e.g. "(add 52 (sub 23 12))" (reads from stdin if not provided)
    source: Option<String>,

    /// Pipeline stage whose result is printed
    #[arg(short, long, value_enum, default_value_t = EmitStage::Target)]
    stage: EmitStage,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Deepest call nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match read_source(cli.source) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let options = EmitOptions {
        source,
        stage: cli.stage,
        compiler: CompilerOptions::default().with_max_depth(cli.max_depth),
    };

    match cli::execute_emit(&options) {
        Ok(output) => {
            let json = if cli.pretty {
                to_json_pretty(&output)
            } else {
                to_json(&output)
            };
            println!("{}", json);
        }
        Err(CliError::Compile(e)) => {
            eprintln!("{}", cli::render_diagnostic(&options.source, &e));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn read_source(source: Option<String>) -> Result<String, CliError> {
    match source {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
