//! Command line interface for Orrery

use clap::Parser;
use std::fmt;

use crate::config::SimulationConfig;
use crate::error::SimulationError;

/// Frames run by `--headless` when `--steps` is not given
pub const DEFAULT_HEADLESS_STEPS: usize = 600;

/// Elapsed time per frame in headless runs without `--fixed-dt`
pub const DEFAULT_HEADLESS_DT: f64 = 1.0 / 60.0;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Configuration values, after overrides, are not usable
    InvalidConfig(SimulationError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(_) => None,
            CliError::InvalidConfig(err) => Some(err),
        }
    }
}

impl From<SimulationError> for CliError {
    fn from(err: SimulationError) -> Self {
        CliError::InvalidConfig(err)
    }
}

/// Orrery - pairwise gravity on a ring of point masses
#[derive(Parser, Debug, Default)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of bodies to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Mass shared by every body (overrides config file)
    #[arg(short = 'm', long, value_name = "MASS")]
    pub mass: Option<f64>,

    /// Multiplier applied to elapsed time (overrides config file)
    #[arg(short = 'b', long, value_name = "FACTOR")]
    pub boost_factor: Option<f64>,

    /// Use a constant elapsed time per frame instead of the wall clock
    #[arg(long, value_name = "SECONDS")]
    pub fixed_dt: Option<f64>,

    /// Random seed for body colors
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Run without a window and print the final body states
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to run in headless mode
    #[arg(long, value_name = "COUNT", requires = "headless")]
    pub steps: Option<usize>,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        let content = std::fs::read_to_string(config_path)
            .map_err(|err| CliError::ConfigLoad(format!("{config_path}: {err}")))?;
        toml::from_str(&content)
            .map_err(|err| CliError::ConfigLoad(format!("{config_path}: {err}")))?
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(body_count) = args.bodies {
        println!("Overriding body count to: {body_count}");
        config.physics.body_count = body_count;
    }

    if let Some(mass) = args.mass {
        println!("Overriding body mass to: {mass}");
        config.physics.body_mass = mass;
    }

    if let Some(boost_factor) = args.boost_factor {
        println!("Overriding boost factor to: {boost_factor}");
        config.physics.boost_factor = boost_factor;
    }

    if let Some(dt) = args.fixed_dt {
        println!("Using fixed time step: {dt}");
        config.physics.fixed_time_step = Some(dt);
    } else if args.headless && config.physics.fixed_time_step.is_none() {
        config.physics.fixed_time_step = Some(DEFAULT_HEADLESS_DT);
    }

    if let Some(seed) = args.seed {
        println!("Using color seed: {seed}");
        config.rendering.color_seed = Some(seed);
    }

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("orrery").chain(argv.iter().copied()))
    }

    #[test]
    fn test_parse_overrides() {
        let args = args_from(&["-n", "7", "-b", "0.3", "--fixed-dt", "0.01", "-s", "5", "-p"]);

        assert_eq!(args.bodies, Some(7));
        assert_eq!(args.boost_factor, Some(0.3));
        assert_eq!(args.fixed_dt, Some(0.01));
        assert_eq!(args.seed, Some(5));
        assert!(args.paused);
        assert!(!args.headless);
    }

    #[test]
    fn test_steps_requires_headless() {
        let result = Args::try_parse_from(["orrery", "--steps", "10"]);
        assert!(result.is_err());

        let args = args_from(&["--headless", "--steps", "10"]);
        assert_eq!(args.steps, Some(10));
    }

    #[test]
    fn test_overrides_are_applied_and_validated() {
        let path = std::env::temp_dir().join(format!("orrery-cli-{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();
        SimulationConfig::default().save(&path).unwrap();

        let args = Args {
            config: Some(path.clone()),
            bodies: Some(5),
            mass: Some(250.0),
            seed: Some(9),
            ..Args::default()
        };
        let config = load_and_apply_config(&args).unwrap();
        assert_eq!(config.physics.body_count, 5);
        assert_eq!(config.physics.body_mass, 250.0);
        assert_eq!(config.rendering.color_seed, Some(9));
        assert_eq!(config.physics.fixed_time_step, None);

        let args = Args {
            config: Some(path.clone()),
            bodies: Some(0),
            ..Args::default()
        };
        let result = load_and_apply_config(&args);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(CliError::InvalidConfig(SimulationError::InvalidBodyCount(0)))
        ));
    }

    #[test]
    fn test_headless_defaults_to_fixed_step() {
        let path = std::env::temp_dir().join(format!("orrery-headless-{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();
        SimulationConfig::default().save(&path).unwrap();

        let args = Args {
            config: Some(path.clone()),
            headless: true,
            ..Args::default()
        };
        let config = load_and_apply_config(&args);
        std::fs::remove_file(&path).ok();

        assert_eq!(config.unwrap().physics.fixed_time_step, Some(DEFAULT_HEADLESS_DT));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args {
            config: Some("/nonexistent/orrery.toml".to_string()),
            ..Args::default()
        };

        assert!(matches!(
            load_and_apply_config(&args),
            Err(CliError::ConfigLoad(_))
        ));
    }
}
