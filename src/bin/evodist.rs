use std::{fmt, io::Write, str::FromStr};

use clap::Parser;
use log::{debug, info};

use evodist::{
    data::err::{DistanceError, GetCode, OrFail},
    distance::{
        dna::{AlignedPair, DistanceFromTally, DistanceModel},
        tally::SiteTally,
    },
};

/// Corrected evolutionary distance between two aligned nucleotide sequences
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reference sequence (aligned, `-` for gaps)
    reference: String,

    /// Distant sequence, aligned to the reference
    distant: String,

    /// Distance model: p, jc69 (jc, jukes-cantor), or k2p (k80, kimura).
    /// Repeat for several; all models are reported when omitted
    #[arg(short = 'm', long = "model", value_parser = DistanceModel::from_str)]
    models: Vec<DistanceModel>,

    /// Also print the site tally (overlap, gaps, transitions, transversions)
    #[arg(short, long)]
    tally: bool,

    /// Reject sequences of different lengths instead of truncating
    #[arg(short, long)]
    strict: bool,
}

/// Errors that end the program.
#[derive(Debug)]
enum CliError {
    Distance(DistanceError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Distance(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl GetCode for CliError {
    fn get_code(&self) -> i32 {
        match self {
            CliError::Distance(e) => e.get_code(),
            CliError::Io(e) => e.get_code(),
        }
    }
}

impl From<DistanceError> for CliError {
    fn from(e: DistanceError) -> Self {
        CliError::Distance(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl Cli {
    fn models(&self) -> &[DistanceModel] {
        if self.models.is_empty() {
            &DistanceModel::ALL
        } else {
            &self.models
        }
    }
}

fn write_tally(out: &mut impl Write, tally: &SiteTally) -> std::io::Result<()> {
    writeln!(out, "#overlap\tgaps\ttransitions\ttransversions\tidentities")?;
    writeln!(out, "{tally}\t{}", tally.identities())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (reference, distant) = (cli.reference.as_bytes(), cli.distant.as_bytes());
    let pair = if cli.strict {
        AlignedPair::new_equal_length(reference, distant)?
    } else {
        AlignedPair::new(reference, distant)
    };

    if reference.len() != distant.len() {
        info!(
            "Sequence lengths differ ({} vs {}); comparing the first {} positions",
            reference.len(),
            distant.len(),
            reference.len().min(distant.len())
        );
    }

    let tally = pair.tally();
    debug!("Site tally: {tally:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.tally {
        write_tally(&mut out, &tally)?;
    }

    for &model in cli.models() {
        let distance = tally.distance(model)?;
        writeln!(out, "{model}\t{distance}")?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    info!("Computing {} distance(s)", cli.models().len());
    run(&cli).unwrap_or_fail();
}
