use std::error::Error;
use std::io::{Read as _, Write as _};

use clap::Parser;
use clio::{Input, Output};
use respondo::Responder;

/// CLI for the canned accommodation responder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File containing the message to respond to
    #[clap(long, short, value_parser, default_value = "-")]
    input: Input,

    /// File to write the reply
    #[clap(long, short, value_parser, default_value = "-")]
    output: Output,

    /// Print the whole candidate set instead of picking one reply
    #[clap(long)]
    all: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = Args::parse();
    let mut message = String::new();
    args.input.read_to_string(&mut message)?;

    let responder = Responder::new();
    if args.all {
        for reply in responder.candidates(&message) {
            writeln!(args.output, "{reply}")?;
        }
    } else {
        writeln!(args.output, "{}", responder.respond(&message))?;
    }
    Ok(())
}
