use clap::{Args, Parser, Subcommand, ValueEnum};
use lc_app::export::{self, ExportFormat};
use lc_app::{AppError, AppResult, ScenarioOverrides, run_service};
use lc_project::presets;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lc-cli")]
#[command(about = "Lanchester CLI - two-population attrition simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run(RunArgs),
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Write the test-conditions scenario to a file
    Init {
        /// Output path (.yaml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the model description
    Describe,
    /// List built-in scenarios
    Presets,
}

#[derive(Args)]
struct RunArgs {
    /// Scenario YAML or JSON file
    #[arg(short, long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,
    /// Built-in scenario name (default: test)
    #[arg(long)]
    preset: Option<String>,
    /// Attrition rate of side A
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,
    /// Attrition rate of side B
    #[arg(long, allow_negative_numbers = true)]
    beta: Option<f64>,
    /// Per-unit firepower of side A
    #[arg(long, allow_negative_numbers = true)]
    kt: Option<f64>,
    /// Per-unit firepower of side B
    #[arg(long, allow_negative_numbers = true)]
    ki: Option<f64>,
    /// Initial strength of side A
    #[arg(long, allow_negative_numbers = true)]
    a0: Option<f64>,
    /// Initial strength of side B
    #[arg(long, allow_negative_numbers = true)]
    b0: Option<f64>,
    /// Number of integration steps
    #[arg(long)]
    steps: Option<usize>,
    /// End of the time grid
    #[arg(long)]
    end_time: Option<f64>,
    /// Stop once either side falls to the cutoff fraction
    #[arg(long, conflicts_with = "no_cutoff")]
    cutoff: bool,
    /// Run every step even if the scenario enables the cutoff
    #[arg(long)]
    no_cutoff: bool,
    /// Cutoff threshold as a fraction of initial strength
    #[arg(long)]
    cutoff_fraction: Option<f64>,
    /// Display name of side A
    #[arg(long)]
    label_a: Option<String>,
    /// Display name of side B
    #[arg(long)]
    label_b: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Output file path (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Outcome and final strengths
    Summary,
    /// One block per integration step
    Steps,
    Csv,
    Json,
}

impl RunArgs {
    fn overrides(&self) -> ScenarioOverrides {
        let cutoff = if self.cutoff {
            Some(true)
        } else if self.no_cutoff {
            Some(false)
        } else {
            None
        };
        ScenarioOverrides {
            alpha: self.alpha,
            beta: self.beta,
            kt: self.kt,
            ki: self.ki,
            initial_a: self.a0,
            initial_b: self.b0,
            steps: self.steps,
            end_time: self.end_time,
            cutoff,
            cutoff_fraction: self.cutoff_fraction,
            label_a: self.label_a.clone(),
            label_b: self.label_b.clone(),
        }
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Describe => {
            print!("{}", lc_app::MODEL_DESCRIPTION);
            Ok(())
        }
        Commands::Presets => {
            for name in presets::PRESET_NAMES {
                if let Some(scenario) = presets::by_name(name) {
                    println!("  {} - {}", name, scenario.name);
                }
            }
            Ok(())
        }
    }
}

fn cmd_run(args: &RunArgs) -> AppResult<()> {
    let mut scenario =
        run_service::resolve_scenario(args.scenario.as_deref(), args.preset.as_deref())?;
    args.overrides().apply(&mut scenario);

    let report = run_service::run_scenario(&scenario)?;

    let content = match args.format {
        OutputFormat::Summary => lc_app::summary_text(&report),
        OutputFormat::Steps => {
            let labels = [
                scenario.factions.a.label.as_str(),
                scenario.factions.b.label.as_str(),
            ];
            let mut text =
                lc_app::step_log(&report.result, labels, &scenario.display.time_unit);
            text.push_str(&lc_app::summary_text(&report));
            text
        }
        OutputFormat::Csv => export::render(&report, ExportFormat::Csv)?,
        OutputFormat::Json => export::render(&report, ExportFormat::Json)?,
    };

    if let Some(path) = &args.output {
        export::write_to(path, &content)?;
        println!(
            "✓ Wrote {} samples to {}",
            report.summary.sample_count,
            path.display()
        );
    } else {
        print!("{}", content);
    }

    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = lc_project::load(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    lc_project::save(path, &presets::test_conditions())?;
    println!("✓ Wrote test conditions to {}", path.display());
    Ok(())
}
