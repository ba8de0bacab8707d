use lptext::{compile, compile_with, Model};

use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// Compiles a linear program written as text into the matrix form read by the
/// simplex solver.
///
/// The problem is one objective line (`max ...` or `min ...`), then restriction
/// lines ended by a blank line, then `VAR >= 0` lines ended by a blank line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// File containing the problem, stdin when absent
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the JSON model, `-` for stdout
    #[arg(short, long, default_value = "problem.json")]
    output: PathBuf,

    /// Never print prompts, even on a terminal
    #[arg(long)]
    no_prompt: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(log_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use fern::colors::{Color, ColoredLevelConfig};
    let colors = ColoredLevelConfig::new()
        .debug(Color::White)
        .info(Color::Green)
        .warn(Color::BrightYellow)
        .error(Color::BrightRed);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} | {:5} | {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
}

fn write_model(model: &Model, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = model.to_json()?;

    if output.as_os_str() == "-" {
        println!("{}", json);
    } else {
        let mut f = File::create(output)?;
        writeln!(f, "{}", json)?;
        info!("wrote model to {}", output.display());
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let model = match &cli.input {
        Some(path) => compile(BufReader::new(File::open(path)?))?,

        None => {
            let stdin = std::io::stdin();
            let prompt = !cli.no_prompt && stdin.is_terminal();

            compile_with(stdin.lock(), |phase| {
                if prompt {
                    let mut stderr = std::io::stderr();
                    write!(stderr, "{}", phase.prompt())?;
                    stderr.flush()?;
                }

                Ok(())
            })?
        }
    };

    write_model(&model, &cli.output)
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Err(e) = setup_logger(log_level) {
        eprintln!("could not set up logging: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        exit(1);
    }
}
