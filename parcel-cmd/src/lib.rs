//! Command implementations for the parcel CLI.
//!
//! Provides subcommands for listing the catalog, resolving addresses and
//! showing a parcel with its mock valuation.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context;
use clap::{Args, Subcommand};
use log::info;
use parcel_catalog::catalog::CatalogSources;
use parcel_catalog::Catalog;
use parcel_core::{ResolverConfig, SelectionController};

pub mod lookup;
pub mod report;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct Options {
    /// Similarity threshold between 0.0 and 1.0 (larger accepts looser matches)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Maximum number of suggestions
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Resolver settings as a JSON file; --threshold and --limit take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding parcels.csv, boundaries.csv, facilities.csv,
    /// transactions.csv and price_trend.csv (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every parcel in catalog order
    List,

    /// Resolve an address to one parcel (the first parcel if nothing matches)
    Search {
        /// Free-text address, partial or misspelled
        query: String,
    },

    /// Show ranked suggestions for a partial address
    Suggest {
        /// Free-text address, partial or misspelled
        query: String,
    },

    /// Show a parcel and its valuation by catalog index
    Show {
        /// Zero-based catalog index
        index: usize,
    },
}

impl Options {
    /// Resolver settings: defaults, then the config file, then flags.
    pub fn resolver_config(&self) -> anyhow::Result<ResolverConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                ResolverConfig::from_json(&json)?
            }
            None => ResolverConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(limit) = self.limit {
            config.suggestion_limit = limit;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.fixtures {
            Some(dir) => load_fixture_dir(dir),
            None => Ok(Catalog::embedded()?),
        }
    }

    /// Selection session over the configured catalog.
    pub fn controller(&self) -> anyhow::Result<SelectionController> {
        let config = self.resolver_config()?;
        let catalog = self.load_catalog()?;
        info!(
            "Loaded {} parcels (threshold {}, limit {})",
            catalog.len(),
            config.threshold,
            config.suggestion_limit
        );
        Ok(SelectionController::with_catalog(Rc::new(catalog), config))
    }
}

fn load_fixture_dir(dir: &Path) -> anyhow::Result<Catalog> {
    let read = |name: &str| {
        let path = dir.join(name);
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    };
    let parcels = read("parcels.csv")?;
    let boundaries = read("boundaries.csv")?;
    let facilities = read("facilities.csv")?;
    let transactions = read("transactions.csv")?;
    let price_trend = read("price_trend.csv")?;

    let catalog = Catalog::from_csv(CatalogSources {
        parcels: &parcels,
        boundaries: &boundaries,
        facilities: &facilities,
        transactions: &transactions,
        price_trend: &price_trend,
    })
    .with_context(|| format!("invalid fixtures in {}", dir.display()))?;
    Ok(catalog)
}

/// Run `command` and return what it would print.
pub fn execute(options: &Options, command: Command) -> anyhow::Result<String> {
    let mut controller = options.controller()?;
    match command {
        Command::List => lookup::list(controller.catalog(), options.json),
        Command::Search { query } => lookup::search(&mut controller, &query, options.json),
        Command::Suggest { query } => lookup::suggest(&controller, &query, options.json),
        Command::Show { index } => lookup::show(&mut controller, index, options.json),
    }
}

pub fn run(options: &Options, command: Command) -> anyhow::Result<()> {
    let output = execute(options, command)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let options = Options {
            threshold: Some(0.2),
            limit: Some(3),
            ..Options::default()
        };
        let config = options.resolver_config().unwrap();
        assert_eq!(config.threshold, 0.2);
        assert_eq!(config.suggestion_limit, 3);
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let options = Options {
            threshold: Some(1.5),
            ..Options::default()
        };
        assert!(options.resolver_config().is_err());

        let options = Options {
            limit: Some(0),
            ..Options::default()
        };
        assert!(options.resolver_config().is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let options = Options {
            config: Some(PathBuf::from("/nonexistent/resolver.json")),
            ..Options::default()
        };
        assert!(options.resolver_config().is_err());
    }

    #[test]
    fn fixture_dir_matches_embedded_catalog() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
        let catalog = load_fixture_dir(&dir).unwrap();
        assert_eq!(catalog, Catalog::embedded().unwrap());
    }

    #[test]
    fn show_out_of_range_fails() {
        let err = execute(&Options::default(), Command::Show { index: 5 }).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn search_prints_the_resolved_parcel() {
        let output = execute(
            &Options::default(),
            Command::Search {
                query: "Quang Trung".to_string(),
            },
        )
        .unwrap();
        assert!(output.contains("25 Quang Trung, Hà Đông, Hà Nội"));
    }
}
