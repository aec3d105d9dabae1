use clap::{Parser, Subcommand, ValueEnum};
use lp_core::units::constants::P_STD_PA;
use lp_liquid::{
    FunctionRegistry, Liquid, LiquidError, LiquidPropertyPack, Property, Quantity,
    SweepDefinition, SweepError, SweepType, SweepVariable, UnitError, config, parse_quantity,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lp")]
#[command(about = "Liquid properties CLI - evaluate run-time selected liquid correlations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a liquid definition and report the function behind each property
    Check {
        /// Path to the liquid YAML/JSON file
        liquid_path: PathBuf,
    },
    /// List registered function forms
    Forms,
    /// Evaluate every property at one state
    Eval {
        /// Path to the liquid YAML/JSON file
        liquid_path: PathBuf,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Evaluate a single property at one state
    Get {
        /// Path to the liquid YAML/JSON file
        liquid_path: PathBuf,
        /// Property key (rho, pv, hl, Cp, h, Cpg, B, mu, mug, kappa, kappag, sigma, D)
        property: String,
        #[command(flatten)]
        state: StateArgs,
    },
    /// Tabulate all properties over a temperature or pressure range (CSV)
    Sweep {
        /// Path to the liquid YAML/JSON file
        liquid_path: PathBuf,
        /// Variable to sweep
        #[arg(long, value_enum, default_value_t = Vary::Temperature)]
        vary: Vary,
        /// Start value (e.g. "20 C", "1 bar")
        #[arg(long)]
        from: String,
        /// End value
        #[arg(long)]
        to: String,
        /// Value of the variable held fixed (pressure for a temperature sweep, and vice versa)
        #[arg(long)]
        at: Option<String>,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
    },
    /// Rebuild a liquid and write its definition back out
    Write {
        /// Path to the liquid YAML/JSON file
        liquid_path: PathBuf,
        /// Output file (.yaml/.yml/.json); YAML to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct StateArgs {
    /// Pressure (e.g. "101325", "1 atm", "14.7 psia")
    #[arg(long, default_value = "1 atm")]
    p: String,
    /// Temperature (e.g. "300", "25 C")
    #[arg(long)]
    t: String,
    /// Binary-pair molecular weight for the diffusivity (kg/kmol)
    #[arg(long)]
    wb: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Vary {
    Temperature,
    Pressure,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Liquid(#[from] LiquidError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Logs go to stderr so `write` output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { liquid_path } => cmd_check(&liquid_path),
        Commands::Forms => cmd_forms(),
        Commands::Eval { liquid_path, state } => cmd_eval(&liquid_path, &state),
        Commands::Get {
            liquid_path,
            property,
            state,
        } => cmd_get(&liquid_path, &property, &state),
        Commands::Sweep {
            liquid_path,
            vary,
            from,
            to,
            at,
            points,
            log,
        } => cmd_sweep(&liquid_path, vary, &from, &to, at.as_deref(), points, log),
        Commands::Write {
            liquid_path,
            output,
        } => cmd_write(&liquid_path, output.as_deref()),
    }
}

fn load_liquid(path: &Path) -> CliResult<Liquid> {
    let def = config::load(path)?;
    Ok(Liquid::from_def(&def)?)
}

struct State {
    p: f64,
    t: f64,
    wb: Option<f64>,
}

fn parse_state(args: &StateArgs) -> CliResult<State> {
    Ok(State {
        p: parse_quantity(&args.p, Quantity::Pressure)?,
        t: parse_quantity(&args.t, Quantity::Temperature)?,
        wb: args
            .wb
            .as_deref()
            .map(|w| parse_quantity(w, Quantity::MolarMass))
            .transpose()?,
    })
}

fn cmd_check(liquid_path: &Path) -> CliResult<()> {
    println!("Checking liquid: {}", liquid_path.display());
    let liquid = load_liquid(liquid_path)?;
    let def = liquid.write();

    if let Some(name) = liquid.name() {
        println!("  Name: {}", name);
    }
    if let Some(c) = liquid.constants() {
        println!("  W = {} kg/kmol, Tc = {} K, Pc = {} Pa", c.w, c.tc, c.pc);
    }
    for property in Property::ALL {
        if let Some(fdef) = def.get(property) {
            println!(
                "  {:<7} {:<16} {} coefficient(s)",
                property.key(),
                fdef.tag,
                fdef.coeffs.len()
            );
        }
    }
    println!("✓ Liquid is valid");
    Ok(())
}

fn cmd_forms() -> CliResult<()> {
    println!("Registered function forms:");
    for tag in FunctionRegistry::builtin().tags() {
        println!("  {}", tag);
    }
    Ok(())
}

fn print_pack(pack: &LiquidPropertyPack) {
    let rows: [(Property, f64); 13] = [
        (Property::Rho, pack.rho.value),
        (Property::Pv, pack.pv.value),
        (Property::Hl, pack.hl.value),
        (Property::Cp, pack.cp.value),
        (Property::H, pack.h.value),
        (Property::Cpg, pack.cpg.value),
        (Property::B, pack.b),
        (Property::Mu, pack.mu.value),
        (Property::Mug, pack.mug.value),
        (Property::Kappa, pack.kappa.value),
        (Property::Kappag, pack.kappag.value),
        (Property::Sigma, pack.sigma),
        (Property::D, pack.d),
    ];
    for (property, value) in rows {
        println!(
            "  {:<7} {:>14.6e} {:<9} {}",
            property.key(),
            value,
            property.unit(),
            property.description()
        );
    }
}

fn cmd_eval(liquid_path: &Path, args: &StateArgs) -> CliResult<()> {
    let liquid = load_liquid(liquid_path)?;
    let state = parse_state(args)?;

    println!("State: p = {} Pa, T = {} K", state.p, state.t);
    let pack = liquid.property_pack(state.p, state.t)?;
    print_pack(&pack);

    if let Some(wb) = state.wb {
        let d = liquid.d_binary(state.p, state.t, wb)?;
        println!("  D(Wb={}) {:>14.6e} m^2/s", wb, d);
    }
    Ok(())
}

fn cmd_get(liquid_path: &Path, property: &str, args: &StateArgs) -> CliResult<()> {
    let property: Property = property.parse().map_err(CliError::Usage)?;
    let liquid = load_liquid(liquid_path)?;
    let state = parse_state(args)?;

    let value = match (property, state.wb) {
        (Property::D, Some(wb)) => liquid.d_binary(state.p, state.t, wb)?,
        (_, Some(_)) => {
            return Err(CliError::Usage(format!(
                "--wb only applies to D, not {}",
                property
            )));
        }
        (_, None) => liquid.evaluate(property, state.p, state.t)?,
    };
    println!("{} {}", value, property.unit());
    Ok(())
}

fn cmd_sweep(
    liquid_path: &Path,
    vary: Vary,
    from: &str,
    to: &str,
    at: Option<&str>,
    points: usize,
    log: bool,
) -> CliResult<()> {
    let liquid = load_liquid(liquid_path)?;
    let sweep_type = if log {
        SweepType::Logarithmic
    } else {
        SweepType::Linear
    };

    let (variable, fixed) = match vary {
        Vary::Temperature => {
            let p = match at {
                Some(text) => parse_quantity(text, Quantity::Pressure)?,
                None => P_STD_PA,
            };
            (SweepVariable::Temperature, p)
        }
        Vary::Pressure => {
            let text = at.ok_or_else(|| {
                CliError::Usage("--at <temperature> is required for a pressure sweep".into())
            })?;
            (
                SweepVariable::Pressure,
                parse_quantity(text, Quantity::Temperature)?,
            )
        }
    };

    let sweep = SweepDefinition::from_text(variable, from, to, points, sweep_type)?;
    tracing::info!(%sweep, fixed, "running sweep");

    let header: Vec<&str> = Property::ALL.iter().map(Property::key).collect();
    println!("p,T,{}", header.join(","));
    for point in liquid.sweep(&sweep, fixed) {
        match point.result {
            Ok(pack) => println!(
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
                point.p,
                point.t,
                pack.rho.value,
                pack.pv.value,
                pack.hl.value,
                pack.cp.value,
                pack.h.value,
                pack.cpg.value,
                pack.b,
                pack.mu.value,
                pack.mug.value,
                pack.kappa.value,
                pack.kappag.value,
                pack.sigma,
                pack.d
            ),
            Err(e) => eprintln!("  skipped p={} T={}: {}", point.p, point.t, e),
        }
    }
    Ok(())
}

fn cmd_write(liquid_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let liquid = load_liquid(liquid_path)?;
    let def = liquid.write();

    match output {
        Some(path) => {
            config::save(path, &def)?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{}", config::to_yaml_string(&def)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sweep_arguments_parse() {
        let cli = Cli::try_parse_from([
            "lp", "sweep", "H2O.yaml", "--vary", "pressure", "--from", "1 bar", "--to",
            "10 bar", "--at", "300 K", "--points", "5", "--log",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep {
                vary,
                from,
                at,
                points,
                log,
                ..
            } => {
                assert!(matches!(vary, Vary::Pressure));
                assert_eq!(from, "1 bar");
                assert_eq!(at.as_deref(), Some("300 K"));
                assert_eq!(points, 5);
                assert!(log);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn oversized_sweep_is_an_error() {
        let err = SweepDefinition::from_text(
            SweepVariable::Temperature,
            "20 C",
            "80 C",
            usize::MAX,
            SweepType::Linear,
        )
        .unwrap_err();
        assert!(matches!(
            CliError::from(err),
            CliError::Sweep(SweepError::TooManyPoints { .. })
        ));
    }
}
