use std::time::Duration;

use clap::Parser;
use otter_mcsat::config::Config;

/// Determines whether a formula is satisfiable or unsatisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse, if absent the formula is read from stdin
    pub formula_file: Option<std::path::PathBuf>,

    /// The level of logs, from 0 (off) to 5 (trace)
    #[arg(short, long, default_value_t = 0)]
    pub debug: u8,

    /// Do not watch clauses derived during conflict analysis
    #[arg(long, default_value_t = false)]
    pub no_learning: bool,

    /// Time limit for the solve, in seconds
    #[arg(short, long, value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,
}

fn parse_seconds(seconds: &str) -> Result<Duration, std::num::ParseIntError> {
    seconds.parse().map(Duration::from_secs)
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            learning: !self.no_learning,
            time_limit: self.time_limit,
        }
    }

    #[cfg(feature = "logging")]
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.debug {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let args = Args::parse_from(["otter_mcsat", "formula.cnf", "--no-learning", "-t", "5", "--model"]);
        assert_eq!(args.formula_file, Some(std::path::PathBuf::from("formula.cnf")));

        let config = args.config();
        assert!(!config.learning);
        assert_eq!(config.time_limit, Some(Duration::from_secs(5)));
        assert!(args.model);
        assert!(!args.stats);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["otter_mcsat"]);
        assert!(args.formula_file.is_none());
        assert_eq!(args.debug, 0);
        assert!(args.config().learning);
    }
}
