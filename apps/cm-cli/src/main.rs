use clap::{Parser, Subcommand};
use cm_compressor::{CompressorError, CompressorSpec, OperatingPoint, output_list};
use cm_core::units::{dk, k};
use cm_fluids::{CoolPropModel, FluidError, Refrigerant};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// CLI-level errors.
#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read spec file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse spec file: {0}")]
    SpecFile(#[from] serde_yaml::Error),

    #[error("unknown refrigerant '{name}'")]
    UnknownRefrigerant {
        name: String,
        #[source]
        source: FluidError,
    },

    #[error(transparent)]
    Compressor(#[from] CompressorError),

    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "cm-cli")]
#[command(about = "Compressor map evaluation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the built-in R410A demonstration compressor
    Demo {
        /// Evaporating (suction dew) temperature in K
        #[arg(long, default_value_t = 293.15)]
        t_evap: f64,
        /// Condensing (discharge dew) temperature in K
        #[arg(long, default_value_t = 328.15)]
        t_cond: f64,
        /// Suction superheat in K
        #[arg(long, default_value_t = 11.11)]
        superheat: f64,
        /// Emit the record list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a compressor described by a YAML spec file
    Run {
        /// Path to the compressor spec YAML file
        spec_path: PathBuf,
        /// Evaporating (suction dew) temperature in K
        #[arg(long)]
        t_evap: f64,
        /// Condensing (discharge dew) temperature in K
        #[arg(long)]
        t_cond: f64,
        /// Suction superheat in K
        #[arg(long, default_value_t = 11.11)]
        superheat: f64,
        /// Emit the record list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// On-disk compressor description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecFile {
    refrigerant: String,
    mass_flow_map: Vec<f64>,
    power_map: Vec<f64>,
    heat_loss_fraction: f64,
    #[serde(default = "default_displacement_ratio")]
    displacement_ratio: f64,
}

fn default_displacement_ratio() -> f64 {
    1.0
}

impl SpecFile {
    fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    fn into_spec(self) -> CliResult<CompressorSpec> {
        let refrigerant =
            Refrigerant::from_str(&self.refrigerant).map_err(|source| {
                CliError::UnknownRefrigerant {
                    name: self.refrigerant.clone(),
                    source,
                }
            })?;
        Ok(CompressorSpec::new(
            &self.mass_flow_map,
            &self.power_map,
            refrigerant,
            self.heat_loss_fraction,
            self.displacement_ratio,
        )?)
    }
}

// Scroll compressor map from a published R410A calorimeter fit.
const DEMO_MASS_FLOW_MAP: [f64; 10] = [
    286.029_402_2,
    6.464_335_08,
    0.0,
    0.055_32,
    0.0,
    0.0,
    0.000_193,
    0.0,
    0.0,
    -5.87e-6,
];
const DEMO_POWER_MAP: [f64; 10] = [
    164.854_463_6,
    -23.785_953_75,
    40.871_554_6,
    -0.514_198_05,
    0.641_107_197,
    -0.282_310_738,
    -0.002_174_527,
    0.004_757_91,
    -0.002_897_174,
    0.001_476_432,
];

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            t_evap,
            t_cond,
            superheat,
            json,
        } => {
            let spec = CompressorSpec::new(
                &DEMO_MASS_FLOW_MAP,
                &DEMO_POWER_MAP,
                Refrigerant::R410A,
                0.15,
                1.0,
            )?;
            cmd_evaluate(&spec, t_evap, t_cond, superheat, json)
        }
        Commands::Run {
            spec_path,
            t_evap,
            t_cond,
            superheat,
            json,
        } => {
            let spec = SpecFile::load(&spec_path)?.into_spec()?;
            cmd_evaluate(&spec, t_evap, t_cond, superheat, json)
        }
    }
}

fn cmd_evaluate(
    spec: &CompressorSpec,
    t_evap: f64,
    t_cond: f64,
    superheat: f64,
    json: bool,
) -> CliResult<()> {
    let op = OperatingPoint {
        t_evap: k(t_evap),
        t_cond: k(t_cond),
        superheat: dk(superheat),
    };

    info!(
        refrigerant = spec.refrigerant.key(),
        t_evap_k = t_evap,
        t_cond_k = t_cond,
        superheat_k = superheat,
        "evaluating compressor map"
    );

    let model = CoolPropModel::new();
    let perf = spec.evaluate(&model, &op)?;
    let records = output_list(spec, &perf);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!(
            "Compressor evaluation ({} at Te={:.2} K, Tc={:.2} K):",
            spec.refrigerant, t_evap, t_cond
        );
        for record in &records {
            println!("  {:<30} {:>16.6} [{}]", record.label, record.value, record.unit);
        }
    }

    Ok(())
}
