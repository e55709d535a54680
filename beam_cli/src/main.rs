//! # Beamview CLI Application
//!
//! Command-line front end for the beam response engine.
//!
//! ```text
//! beam evaluate --left fixed --right free --quantity moment
//! beam evaluate --session beam.json --format csv --output moment.csv
//! beam inertia i-beam --width 8 --height 10 --flange-thickness 0.5 --web-thickness 0.3
//! beam check --left pinned --right free
//! beam formulas > FORMULAS.md
//! ```
//!
//! Set `RUST_LOG=debug` to see what the engine evaluates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use beam_core::calculations::{
    evaluate_sampled, BeamConfiguration, ResponseCurve, Section, MIN_SAMPLE_COUNT, SAMPLE_COUNT,
};
use beam_core::equations::{generate_formulas_markdown, Quantity};
use beam_core::file_io::{export_curve, load_session, save_session, CurveExport, ExportFormat};
use beam_core::materials::MaterialPreset;
use beam_core::supports::{Stability, Support, SupportPair};

/// Largest `--samples` accepted
const MAX_SAMPLE_COUNT: u64 = 100_000;

#[derive(Debug, Parser)]
#[command(name = "beam", version, about = "Beam response under uniform load")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample deflection, rotation, shear or moment along the span
    Evaluate(EvaluateArgs),
    /// Moment of inertia of a cross section
    Inertia {
        #[command(subcommand)]
        shape: ShapeCommand,
    },
    /// Report whether a support pair is stable
    Check {
        #[arg(long)]
        left: Support,
        #[arg(long)]
        right: Support,
    },
    /// Print every closed-form formula as a markdown table
    Formulas,
}

#[derive(Debug, Subcommand)]
enum ShapeCommand {
    Rectangle {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
    IBeam {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        flange_thickness: f64,
        #[arg(long)]
        web_thickness: f64,
    },
}

impl ShapeCommand {
    fn section(&self) -> Section {
        match *self {
            ShapeCommand::Rectangle { width, height } => Section::rectangle(width, height),
            ShapeCommand::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => Section::i_beam(width, height, flange_thickness, web_thickness),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    Rectangle,
    IBeam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Args)]
struct EvaluateArgs {
    /// Start from a saved session instead of the defaults
    #[arg(long)]
    session: Option<PathBuf>,

    /// Span length L
    #[arg(long)]
    length: Option<f64>,

    /// Uniform load W, positive downward
    #[arg(long)]
    load: Option<f64>,

    /// Material preset setting Young's modulus (steel, wood)
    #[arg(long)]
    material: Option<MaterialPreset>,

    /// Young's modulus E; overrides --material
    #[arg(long)]
    modulus: Option<f64>,

    /// Moment of inertia I; ignored when --section is given
    #[arg(long)]
    inertia: Option<f64>,

    /// Compute I from a cross section
    #[arg(long, value_enum)]
    section: Option<ShapeKind>,

    #[arg(long, requires = "section")]
    width: Option<f64>,

    #[arg(long, requires = "section")]
    height: Option<f64>,

    #[arg(long, requires = "section")]
    flange_thickness: Option<f64>,

    #[arg(long, requires = "section")]
    web_thickness: Option<f64>,

    /// Left support (free, pinned, fixed)
    #[arg(long)]
    left: Option<Support>,

    /// Right support (free, pinned, fixed)
    #[arg(long)]
    right: Option<Support>,

    /// deflection, rotation, shear or moment
    #[arg(long)]
    quantity: Option<Quantity>,

    /// Number of sample points, ends included
    #[arg(
        long,
        default_value_t = SAMPLE_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_SAMPLE_COUNT as u64..=MAX_SAMPLE_COUNT)
    )]
    samples: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the curve to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Save the resolved configuration as a session file
    #[arg(long)]
    save_session: Option<PathBuf>,

    /// Reject non-physical inputs instead of evaluating them
    #[arg(long)]
    strict: bool,
}

impl EvaluateArgs {
    /// Section described by the flags, with unset dimensions taken from the
    /// default section of that shape
    fn section(&self) -> Option<Section> {
        let default = match self.section? {
            ShapeKind::Rectangle => Section::default_rectangle(),
            ShapeKind::IBeam => Section::default_i_beam(),
        };
        let section = match default {
            Section::Rectangle { width, height } => {
                Section::rectangle(self.width.unwrap_or(width), self.height.unwrap_or(height))
            }
            Section::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => Section::i_beam(
                self.width.unwrap_or(width),
                self.height.unwrap_or(height),
                self.flange_thickness.unwrap_or(flange_thickness),
                self.web_thickness.unwrap_or(web_thickness),
            ),
        };
        Some(section)
    }

    /// Defaults, then the session file, then individual flags
    fn resolve(&self) -> Result<BeamConfiguration> {
        let mut config = match &self.session {
            Some(path) => {
                load_session(path)
                    .with_context(|| format!("failed to load session {}", path.display()))?
                    .configuration
            }
            None => BeamConfiguration::default(),
        };

        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(load) = self.load {
            config.load = load;
        }
        if let Some(material) = self.material {
            config = config.with_material(material);
        }
        if let Some(modulus) = self.modulus {
            config.youngs_modulus = modulus;
        }
        if let Some(inertia) = self.inertia {
            config.moment_of_inertia = inertia;
        }
        if let Some(section) = self.section() {
            if self.strict {
                section.validate().context("invalid section")?;
            }
            config = config.with_section(&section);
        }
        if let Some(left) = self.left {
            config.left_support = left;
        }
        if let Some(right) = self.right {
            config.right_support = right;
        }
        if let Some(quantity) = self.quantity {
            config.quantity = quantity;
        }

        Ok(config)
    }
}

fn status_icon(stable: bool) -> &'static str {
    if stable {
        "✓"
    } else {
        "✗"
    }
}

fn print_table(config: &BeamConfiguration, curve: &ResponseCurve) {
    let formula = config.formula();

    println!("═══════════════════════════════════════");
    println!("  {} ({})", curve.quantity.display_name().to_uppercase(), config.supports());
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  L  = {}", config.length);
    println!("  W  = {}", config.load);
    println!("  E  = {}", config.youngs_modulus);
    println!("  I  = {}", config.moment_of_inertia);
    println!("  EI = {}", config.flexural_rigidity());
    println!();
    println!(
        "Supports: {} {}",
        config.stability(),
        status_icon(config.stability() == Stability::Stable)
    );
    println!("Formula:  {} = {}", curve.quantity.symbol(), formula.formula_plain);
    println!();
    println!("{:>14}  {:>16}", "x", curve.quantity.symbol());
    for (x, y) in &curve.points {
        println!("{:>14.6}  {:>16.6e}", x, y);
    }

    if let Some(extremes) = curve.extremes() {
        println!();
        println!("  max = {:.6e} at x = {:.4}", extremes.max_value, extremes.max_position);
        println!("  min = {:.6e} at x = {:.4}", extremes.min_value, extremes.min_position);
    }
}

fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let config = args.resolve()?;

    if args.strict {
        config.validate().context("invalid beam configuration")?;
    }
    if let Some(warning) = config.stability().warning() {
        eprintln!("{}", warning);
    }

    let curve = evaluate_sampled(&config, args.samples);
    let export = CurveExport::new(&config, &curve);

    if let Some(path) = &args.save_session {
        save_session(&config, path)
            .with_context(|| format!("failed to save session {}", path.display()))?;
        eprintln!("Saved session to {}", path.display());
    }

    match &args.output {
        Some(path) => {
            let format = match args.format {
                OutputFormat::Json => ExportFormat::Json,
                OutputFormat::Csv => ExportFormat::Csv,
                OutputFormat::Table => ExportFormat::from_path(path),
            };
            export_curve(&export, path, format)
                .with_context(|| format!("failed to write curve {}", path.display()))?;
            eprintln!("Saved {} curve to {}", curve.quantity, path.display());
        }
        None => match args.format {
            OutputFormat::Table => print_table(&config, &curve),
            OutputFormat::Json => println!("{}", export.to_json()?),
            OutputFormat::Csv => print!("{}", export.to_csv()),
        },
    }

    Ok(())
}

fn run_inertia(shape: &ShapeCommand) -> Result<()> {
    let section = shape.section();
    if let Err(e) = section.validate() {
        log::warn!("{}", e);
        eprintln!("Warning: {}", e);
    }

    println!("{}", section.shape_name());
    if let Some(hw) = section.web_clear_height() {
        println!("  hw = {:.6}", hw);
    }
    println!("  I  = {:.6}", section.moment_of_inertia());
    Ok(())
}

fn run_check(left: Support, right: Support) {
    let pair = SupportPair::new(left, right);
    let stability = pair.stability();
    println!("{}: {} {}", pair, stability, status_icon(stability == Stability::Stable));
    println!("  {}", pair.description());
    if let Some(warning) = stability.warning() {
        println!("  {}", warning);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Evaluate(args) => run_evaluate(args)?,
        Command::Inertia { shape } => run_inertia(shape)?,
        Command::Check { left, right } => run_check(*left, *right),
        Command::Formulas => print!("{}", generate_formulas_markdown()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn evaluate_args(argv: &[&str]) -> EvaluateArgs {
        let mut full = vec!["beam", "evaluate"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full).unwrap();
        match cli.command {
            Command::Evaluate(args) => args,
            other => panic!("expected evaluate, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_resolve_to_defaults() {
        let config = evaluate_args(&[]).resolve().unwrap();
        assert_eq!(config, BeamConfiguration::default());
    }

    #[test]
    fn test_parse_supports_and_quantity() {
        let args = evaluate_args(&["--left", "fixed", "--right", "Free", "--quantity", "moment"]);
        let config = args.resolve().unwrap();
        assert_eq!(config.supports(), SupportPair::new(Support::Fixed, Support::Free));
        assert_eq!(config.quantity, Quantity::Moment);
        assert_eq!(args.samples, SAMPLE_COUNT);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_modulus_overrides_material() {
        let config = evaluate_args(&["--material", "wood"]).resolve().unwrap();
        assert_eq!(config.youngs_modulus, 1_900.0);

        let config = evaluate_args(&["--material", "wood", "--modulus", "1234"]).resolve().unwrap();
        assert_eq!(config.youngs_modulus, 1_234.0);
    }

    #[test]
    fn test_section_overrides_inertia() {
        let args = evaluate_args(&["--inertia", "5", "--section", "rectangle", "--width", "2", "--height", "6"]);
        let config = args.resolve().unwrap();
        assert!((config.moment_of_inertia - 36.0).abs() < 1e-9);

        // Unset dimensions come from the default I-beam
        let args = evaluate_args(&["--section", "i-beam", "--height", "2"]);
        assert_eq!(args.section(), Some(Section::i_beam(1.0, 2.0, 0.1, 0.1)));
    }

    #[test]
    fn test_strict_rejects_bad_section() {
        let args = evaluate_args(&["--strict", "--section", "i-beam", "--flange-thickness", "0.6"]);
        assert!(args.resolve().is_err());

        let lenient = evaluate_args(&["--section", "i-beam", "--flange-thickness", "0.6"]);
        assert!(lenient.resolve().is_ok());
    }

    #[test]
    fn test_dimension_requires_section() {
        let result = Cli::try_parse_from(["beam", "evaluate", "--width", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_count_is_bounded() {
        assert_eq!(evaluate_args(&["--samples", "51"]).samples, 51);
        assert_eq!(evaluate_args(&["--samples", "100000"]).samples, 100_000);

        for count in ["1", "100001", "18446744073709551615"] {
            let result = Cli::try_parse_from(["beam", "evaluate", "--samples", count]);
            assert!(result.is_err(), "--samples {} was accepted", count);
        }
    }

    #[test]
    fn test_unknown_support_is_rejected() {
        let result = Cli::try_parse_from(["beam", "evaluate", "--left", "roller"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_then_flags() {
        let path = std::env::temp_dir().join(format!("beamview_cli_session_{}.json", std::process::id()));
        let saved = BeamConfiguration::default()
            .with_supports(Support::Fixed, Support::Fixed)
            .with_quantity(Quantity::Shear);
        save_session(&saved, &path).unwrap();

        let path_arg = path.display().to_string();
        let config = evaluate_args(&["--session", &path_arg, "--length", "20"]).resolve().unwrap();
        assert_eq!(config.length, 20.0);
        assert_eq!(config.supports(), SupportPair::new(Support::Fixed, Support::Fixed));
        assert_eq!(config.quantity, Quantity::Shear);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_inertia_subcommand() {
        let cli = Cli::try_parse_from([
            "beam", "inertia", "i-beam", "--width", "8", "--height", "10",
            "--flange-thickness", "0.5", "--web-thickness", "0.3",
        ])
        .unwrap();
        match cli.command {
            Command::Inertia { shape } => {
                assert!((shape.section().moment_of_inertia() - 198.891_666_666_7).abs() < 1e-6);
            }
            other => panic!("expected inertia, got {:?}", other),
        }
    }
}
