use std::{collections::BTreeSet, fmt::Write, str::SplitWhitespace, sync::LazyLock};

use adducts::{AdductDetector, AdductTable, IonizationMode, Peak, ppm_error};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use rustyline::DefaultEditor;
use thiserror::Error;

static ADDUCT_TABLE: LazyLock<AdductTable> = LazyLock::new(AdductTable::default);

const HELP: &str = "\
Commands:
  mass <mode> <m/z> <adduct>          monoisotopic mass of an ion observed as <adduct>
  mz <mode> <mass> <adduct>           m/z of a molecule observed as <adduct>
  ppm <experimental> <theoretical>    ppm error between two values
  detect <mode> <reference m/z> <m/z>...
                                      adduct of the reference peak, given its co-eluting peaks
  adducts <mode>                      list the known adducts for an ionization mode
";

type Result<T> = std::result::Result<T, Box<dyn Diagnostic + Send + Sync>>;

#[derive(Debug, Diagnostic, Error)]
enum CommandError {
    #[diagnostic(help("try `help` for a list of commands"))]
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[diagnostic(help("try `help` to see the arguments for each command"))]
    #[error("missing the {0} argument")]
    MissingArgument(&'static str),

    #[error("expected a number for the {0}, got {1:?}")]
    InvalidNumber(&'static str, String),

    #[diagnostic(help("masses, m/z values, and tolerances must all be finite"))]
    #[error("the {0} must be a finite number, got {1:?}")]
    NonFinite(&'static str, String),

    #[error("the theoretical value must be non-zero to calculate a ppm error")]
    ZeroTheoretical,

    #[error("the ppm error between {0} and {1} is too large to represent")]
    UnboundedPpm(f64, f64),
}

fn main() {
    env_logger::init();

    let mut rl = DefaultEditor::new().unwrap();
    print!("{HELP}");
    while let Ok(line) = rl.readline("adductmz> ") {
        rl.add_history_entry(&line).unwrap();
        match run_command(&line) {
            Ok(output) => print!("{output}"),
            Err(diagnostic) => render_error(diagnostic.as_ref()),
        }
    }
}

fn run_command(line: &str) -> Result<String> {
    let mut args = Args(line.split_whitespace());
    let Some(command) = args.0.next() else {
        return Ok(String::new());
    };

    match command {
        "help" => Ok(HELP.to_owned()),
        "mass" => {
            let mode = args.mode()?;
            let mz = args.number("m/z")?;
            let adduct = ADDUCT_TABLE
                .lookup(mode, args.next("adduct")?)
                .map_err(|e| diagnostic(*e))?;
            let mass = adduct.monoisotopic_mass(mz);
            Ok(format!("Monoisotopic Mass: {mass:.6}\n"))
        }
        "mz" => {
            let mode = args.mode()?;
            let mass = args.number("mass")?;
            let adduct = ADDUCT_TABLE
                .lookup(mode, args.next("adduct")?)
                .map_err(|e| diagnostic(*e))?;
            let mz = adduct.mz(mass);
            Ok(format!("m/z: {mz:.6}\n"))
        }
        "ppm" => {
            let experimental = args.number("experimental value")?;
            let theoretical = args.number("theoretical value")?;
            if theoretical == 0.0 {
                return Err(diagnostic(CommandError::ZeroTheoretical));
            }
            let ppm = ppm_error(experimental, theoretical)
                .ok_or_else(|| diagnostic(CommandError::UnboundedPpm(experimental, theoretical)))?;
            let difference = (experimental - theoretical).abs();
            Ok(format!("PPM Error: {ppm} ({difference:.6} Da)\n"))
        }
        "detect" => {
            let mode = args.mode()?;
            let reference_mz = args.number("reference m/z")?;
            let mut peaks = BTreeSet::from([Peak::new(reference_mz, 0.0)]);
            while let Some(mz) = args.optional_number("m/z")? {
                peaks.insert(Peak::new(mz, 0.0));
            }

            let detector = AdductDetector::new(&ADDUCT_TABLE);
            let detection = detector.detect(reference_mz, &peaks, mode);
            Ok(detection.map_or_else(
                || "No adduct detected\n".to_owned(),
                |pair| format!("Detected: {pair}\n"),
            ))
        }
        "adducts" => {
            let mode = args.mode()?;
            let mut buf = String::new();
            for adduct in ADDUCT_TABLE.adducts(mode) {
                let (label, shift) = (adduct.label(), adduct.shift());
                let (charge, multimer) = (adduct.charge(), adduct.multimer());
                writeln!(buf, "{label:<16} {shift:>12.6} Da  (charge {charge}, multimer {multimer})").unwrap();
            }
            Ok(buf)
        }
        unknown => Err(diagnostic(CommandError::UnknownCommand(unknown.to_owned()))),
    }
}

struct Args<'l>(SplitWhitespace<'l>);

impl<'l> Args<'l> {
    fn next(&mut self, name: &'static str) -> Result<&'l str> {
        self.0
            .next()
            .ok_or_else(|| diagnostic(CommandError::MissingArgument(name)))
    }

    fn mode(&mut self) -> Result<IonizationMode> {
        self.next("ionization mode")?.parse().map_err(diagnostic)
    }

    fn number(&mut self, name: &'static str) -> Result<f64> {
        parse_number(name, self.next(name)?)
    }

    fn optional_number(&mut self, name: &'static str) -> Result<Option<f64>> {
        self.0.next().map(|arg| parse_number(name, arg)).transpose()
    }
}

fn parse_number(name: &'static str, arg: &str) -> Result<f64> {
    let number: f64 = arg
        .parse()
        .map_err(|_| diagnostic(CommandError::InvalidNumber(name, arg.to_owned())))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(diagnostic(CommandError::NonFinite(name, arg.to_owned())))
    }
}

fn diagnostic(error: impl Diagnostic + Send + Sync + 'static) -> Box<dyn Diagnostic + Send + Sync> {
    Box::new(error)
}

fn render_error(diagnostic: &dyn Diagnostic) {
    let mut buf = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic)
        .unwrap();
    println!("{buf}");
}

// Module Tests ========================================================================================================
