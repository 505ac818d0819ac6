// ABOUTME: Activity search CLI - searches a JSON activity corpus from the command line
// ABOUTME: Wires the HTTP collaborators from the environment and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Activities for four people near Ghent on a given weekend, weather permitting
//! activity-search --corpus activities.json search \
//!     --location Ghent --radius 20 \
//!     --start-date 2021-06-05 --end-date 2021-06-06 \
//!     --participants 4 --consider-weather
//!
//! # Activities labelled "water" or "outdoor"
//! activity-search search --label water --label outdoor
//!
//! # Every label in the corpus
//! activity-search labels
//!
//! # Suggestions for next weekend around ACTIVITY_SUGGESTIONS_LOCATION
//! activity-search weekend
//! ```

use activity_search::config::SearchConfig;
use activity_search::errors::{AppError, AppResult};
use activity_search::logging::LoggingConfig;
use activity_search::search::{ActivitySearchService, SearchEngine, SearchRequest};
use activity_search::services::{HttpDistanceResolver, HttpForecastResolver, InMemoryCorpus};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "activity-search",
    about = "Activity search CLI",
    long_about = "Search an activity corpus by location, date, group size, weather and labels."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file holding the activity corpus (defaults to `ACTIVITY_CORPUS_PATH`)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search activities
    Search {
        /// Place to search around
        #[arg(long)]
        location: Option<String>,

        /// Radius around the place in kilometres
        #[arg(long)]
        radius: Option<u32>,

        /// First day of the window (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day of the window (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Group size
        #[arg(long)]
        participants: Option<u32>,

        /// Take the weather forecast into account
        #[arg(long)]
        consider_weather: bool,

        /// Label to look for, repeatable
        #[arg(long = "label")]
        labels: Vec<String>,
    },

    /// List every label in the corpus
    Labels,

    /// Suggest activities for next weekend
    Weekend {
        /// Place to search around (defaults to `ACTIVITY_SUGGESTIONS_LOCATION`)
        #[arg(long)]
        location: Option<String>,

        /// Radius in kilometres (defaults to `ACTIVITY_SUGGESTIONS_RADIUS_KM`)
        #[arg(long)]
        radius: Option<u32>,

        /// Reference day (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn print_json(value: &impl Serialize) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;
    if let Err(e) = dotenv {
        debug!("No .env file loaded: {e}");
    }

    let config = SearchConfig::from_env()?;
    let corpus_path = cli
        .corpus
        .or_else(|| config.corpus_path.clone())
        .ok_or_else(|| {
            AppError::config_missing("pass --corpus or set ACTIVITY_CORPUS_PATH")
        })?;
    let corpus = InMemoryCorpus::from_json_file(&corpus_path).await?;

    let engine = SearchEngine::standard(
        Arc::new(HttpDistanceResolver::from_config(&config.collaborators)),
        Arc::new(HttpForecastResolver::from_config(&config.collaborators)),
        &config.filter_costs,
    );
    info!(
        item_filters = ?engine.item_filter_names(),
        list_filters = ?engine.list_filter_names(),
        "Search engine ready"
    );
    let service = ActivitySearchService::new(Arc::new(corpus), engine);

    match cli.command {
        Command::Search {
            location,
            radius,
            start_date,
            end_date,
            participants,
            consider_weather,
            labels,
        } => {
            let request = SearchRequest {
                location,
                radius,
                start_date,
                end_date,
                number_of_participants: participants,
                consider_weather: Some(consider_weather),
                labels: Some(labels),
            };
            let parameters = request.into_parameters(config.default_radius_km)?;
            print_json(&service.search(&parameters).await)?;
        }
        Command::Labels => {
            print_json(&service.labels().await)?;
        }
        Command::Weekend {
            location,
            radius,
            today,
        } => {
            let location = location
                .or(config.suggestions.location)
                .ok_or_else(|| {
                    AppError::config_missing("pass --location or set ACTIVITY_SUGGESTIONS_LOCATION")
                })?;
            let radius = radius.unwrap_or(config.suggestions.radius_km);
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            print_json(&service.weekend_suggestions(today, &location, radius).await)?;
        }
    }

    Ok(())
}
