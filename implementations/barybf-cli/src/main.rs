use std::{fs, io, path::PathBuf, process::ExitCode};

use barybf::machine::EndOfInput;
use barybf_cli::{parse_end_of_input, run};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Brainfuck source file to run.
    source_file: Option<PathBuf>,
    /// Logs more about execution, repeat for instruction traces.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// What `,` stores once stdin is exhausted: a byte value, or `keep` to leave
    /// the cell untouched.
    #[arg(long, default_value = "255", value_parser = parse_end_of_input)]
    eof: EndOfInput,
    /// Does not print the completion message.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        },
    ))
    .init();

    let Some(source_file) = args.source_file else {
        println!("usage: barybf-cli file");
        return ExitCode::SUCCESS;
    };

    let code = match fs::read(&source_file) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}: {e}", source_file.display());
            println!("failed to read file {}", source_file.display());
            return ExitCode::FAILURE;
        }
    };
    log::debug!("read {} bytes from {}", code.len(), source_file.display());

    match run(&code, args.eof, io::stdin().lock(), io::stdout().lock()) {
        Ok(machine) => {
            log::debug!(
                "TAPE ( {} )\nSTACK ( {} )",
                machine.tape(),
                machine.address_stack()
            );
            if !args.quiet {
                println!("\n\ndone\n");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            println!("\nreached eof while searching for ]");
            ExitCode::FAILURE
        }
    }
}
