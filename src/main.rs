//! MC34063 - Switching Regulator Calculator
//!
//! Sizes the external components of an MC34063 step-down, step-up or
//! inverting regulator.
//!
//! # Usage
//!
//! ```bash
//! mc34063 --vin 12 --vout 5 --iout 500 --freq 50 --res1 10 --save
//! mc34063 --vout -12      # other fields restored from mc34063.json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mc34063_calc::{
    calculator::{self, Outcome, ABOUT},
    error::Result,
    input::{Field, RawFields},
    report::TextPresenter,
    store::FileStore,
    DEFAULT_STORE_FILE,
};

/// MC34063 switching regulator calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input voltage in V (5 .. 40)
    #[arg(long, allow_hyphen_values = true)]
    vin: Option<String>,

    /// Output voltage in V (-40 .. -3 or 3 .. 40, negative for an inverter)
    #[arg(long, allow_hyphen_values = true)]
    vout: Option<String>,

    /// Output current in mA (5 .. 1000)
    #[arg(long, allow_hyphen_values = true)]
    iout: Option<String>,

    /// Switching frequency in kHz (20 .. 100)
    #[arg(long, allow_hyphen_values = true)]
    freq: Option<String>,

    /// Feedback resistor R1 in KΩ (1 .. 50)
    #[arg(long, allow_hyphen_values = true)]
    res1: Option<String>,

    /// Field store used to restore missing fields and to save them
    #[arg(long, env = "MC34063_STORE", default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Save the fields to the store
    #[arg(long)]
    save: bool,

    /// Show what this calculator does and exit
    #[arg(long)]
    about: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Fields given on the command line.
    fn fields(&self) -> RawFields {
        let given = [
            (Field::Vin, &self.vin),
            (Field::Vout, &self.vout),
            (Field::Iout, &self.iout),
            (Field::Freq, &self.freq),
            (Field::Res1, &self.res1),
        ];
        given
            .into_iter()
            .fold(RawFields::new(), |raw, (field, value)| match value {
                Some(v) => raw.with(field, v.as_str()),
                None => raw,
            })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn calculate<W: Write>(args: &Args, out: W) -> Result<Outcome> {
    let mut store = FileStore::open(&args.store)?;
    let fields = calculator::resolve_fields(&args.fields(), &mut store, args.save)?;

    if args.save {
        eprintln!("Fields have been saved to {}", store.path().display());
    }

    let mut presenter = TextPresenter::new(out);
    calculator::run(&fields, &mut presenter)
}

/// 0 computed, 2 rejected input, 1 store or output failure.
fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_status(),
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.about {
        println!("{}", ABOUT);
        return ExitCode::SUCCESS;
    }

    let result = calculate(&args, io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    ExitCode::from(exit_status(&result))
}
