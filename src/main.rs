use bfsynth::synth::{synthesize, text_codes, verify};
use bfsynth::Result;
use clap::Parser;
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "bfsynth")]
#[command(about = "Generate a brainfuck program that prints the given text")]
struct Args {
    /// Path to the text file to encode; stdin is read when absent
    #[arg(value_name = "FILE", conflicts_with = "text")]
    file: Option<String>,

    /// Text to encode
    #[arg(short, long)]
    text: Option<String>,

    /// Print the program length to stderr
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    length: bool,

    /// Run the program and check that it prints the input
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verify: bool,

    /// Instruction budget for --verify
    #[arg(long, default_value_t = 100_000_000)]
    step_limit: u64,
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let codes = text_codes(&read_input(args)?);
    let program = synthesize(&codes);
    if args.verify {
        verify(&codes, &program, Some(args.step_limit))?;
        log::info!("verified {} characters", codes.len());
    }
    if args.length {
        eprintln!("Length: {}", program.len());
    }
    println!("{}", program);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
