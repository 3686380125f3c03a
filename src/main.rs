use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use award_oracle::catalog::{
    credit_card, destinations, filter_by_origin, flight_route, flight_routes, loyalty_program,
    loyalty_programs, search_airports, search_credit_cards, search_loyalty_programs,
    transfer_partners, Cabin, FlightRoute,
};
use award_oracle::config::{Config, ConfigOverrides};
use award_oracle::coverage::calculator::compute_options;
use award_oracle::coverage::TransferOption;
use award_oracle::optimizer::planner::plan_target;
use award_oracle::optimizer::recommendations::{aggregate_shortfall, compute_recommendations};
use award_oracle::output::csv::{options_to_csv, recommendations_to_csv, routes_to_csv};
use award_oracle::output::json::{render_json, route_rows};
use award_oracle::output::table::{
    render_airports_table, render_cards_table, render_destinations_table, render_options_table,
    render_partners_table, render_plan_table, render_portfolio_table, render_programs_table,
    render_recommendations_table, render_routes_table,
};
use award_oracle::portfolio::store::PortfolioStore;
use award_oracle::portfolio::Portfolio;
use award_oracle::server::run_server;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "award-oracle",
    about = "Points and miles coverage for award flights to India"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    portfolio: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[arg(long)]
    cabin: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Routes {
        /// Ignore the configured origin filter.
        #[arg(long)]
        all: bool,
    },
    Options {
        #[arg(long)]
        route: String,
    },
    Recommend {
        #[arg(long)]
        route: String,
    },
    Plan {
        #[arg(long)]
        target: Option<u64>,
    },
    Cards {
        #[arg(long)]
        query: Option<String>,
    },
    Programs {
        #[arg(long)]
        query: Option<String>,
    },
    Airports {
        #[arg(long)]
        query: String,
    },
    Partners,
    Destinations,
    Portfolio {
        #[command(subcommand)]
        action: PortfolioAction,
    },
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[derive(Debug, Subcommand)]
enum PortfolioAction {
    Show,
    AddCard {
        id: String,
        #[arg(long, default_value_t = 0)]
        points: u64,
    },
    AddProgram {
        id: String,
        #[arg(long, default_value_t = 0)]
        miles: u64,
    },
    RemoveCard {
        id: String,
    },
    RemoveProgram {
        id: String,
    },
    SetCardPoints {
        id: String,
        points: u64,
    },
    SetProgramMiles {
        id: String,
        miles: u64,
    },
    /// Bookmark a route, or clear the bookmark if already saved.
    SaveFlight {
        id: String,
    },
    SaveCard {
        id: String,
    },
    SaveProgram {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        portfolio_path: cli.portfolio.clone(),
        cabin: cli.cabin.clone(),
    })?;
    let cabin = config.search.default_cabin;

    match &cli.command {
        Commands::Config { init, show } => {
            if *init {
                Config::write_template(&config_path)?;
                println!("Wrote config template to {}", config_path.display());
            }
            if *show || !*init {
                println!("{}", render_json(&config)?);
            }
        }
        Commands::Serve { host, port } => {
            let host = host.clone().unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let bind = format!("{host}:{port}");
            let addr: SocketAddr = bind
                .parse()
                .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
            run_server(config, addr).await?;
        }
        Commands::Routes { all } => {
            let origins: &[String] = if *all {
                &[]
            } else {
                &config.search.origin_filter
            };
            let routes = filter_by_origin(flight_routes(), origins);
            let saved = load_portfolio(&config)?.saved_flights;
            match cli.output {
                OutputFormat::Table => println!("{}", render_routes_table(&routes, &saved)),
                OutputFormat::Json => println!("{}", render_json(&route_rows(&routes, &saved))?),
                OutputFormat::Csv => println!("{}", routes_to_csv(&routes, &saved)?),
            }
        }
        Commands::Options { route } => {
            let route = flight_route(route)?;
            let portfolio = load_portfolio(&config)?;
            let options = compute_options(route, cabin, &portfolio.cards, &portfolio.programs)?;
            print_options(route, cabin, &options, cli.output)?;
        }
        Commands::Recommend { route } => {
            let route = flight_route(route)?;
            let portfolio = load_portfolio(&config)?;
            let options = compute_options(route, cabin, &portfolio.cards, &portfolio.programs)?;
            let mut recommendations = compute_recommendations(route, cabin, &options)?;
            recommendations.truncate(config.recommendation_limit());
            let shortfall = aggregate_shortfall(route.points_required(cabin), &options);
            match cli.output {
                OutputFormat::Table => {
                    println!(
                        "{} - {}: {} miles still needed",
                        route.label(),
                        cabin,
                        shortfall
                    );
                    println!("{}", render_recommendations_table(&recommendations));
                }
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&json!({
                        "route_id": route.id,
                        "cabin": cabin,
                        "shortfall": shortfall,
                        "recommendations": recommendations,
                    }))?
                ),
                OutputFormat::Csv => println!("{}", recommendations_to_csv(&recommendations)?),
            }
        }
        Commands::Plan { target } => {
            let target = target.unwrap_or(config.optimizer.default_target_points);
            let portfolio = load_portfolio(&config)?;
            let plan = plan_target(target, &portfolio.cards);
            print_or_fallback(&plan, cli.output, "plan", || render_plan_table(&plan))?;
        }
        Commands::Cards { query } => {
            let cards = search_credit_cards(query.as_deref().unwrap_or_default());
            print_or_fallback(&cards, cli.output, "cards", || render_cards_table(&cards))?;
        }
        Commands::Programs { query } => {
            let programs = match query {
                Some(query) => search_loyalty_programs(query),
                None => loyalty_programs().iter().collect(),
            };
            print_or_fallback(&programs, cli.output, "programs", || {
                render_programs_table(&programs)
            })?;
        }
        Commands::Airports { query } => {
            let airports = search_airports(query);
            if airports.is_empty() {
                warn!("no airports match {query:?} (queries need at least 2 characters)");
            }
            print_or_fallback(&airports, cli.output, "airports", || {
                render_airports_table(&airports)
            })?;
        }
        Commands::Partners => {
            let today = chrono::Local::now().date_naive();
            let partners = transfer_partners();
            print_or_fallback(&partners, cli.output, "partners", || {
                render_partners_table(partners, today)
            })?;
        }
        Commands::Destinations => {
            let guide = destinations();
            print_or_fallback(&guide, cli.output, "destinations", || {
                render_destinations_table(guide)
            })?;
        }
        Commands::Portfolio { action } => handle_portfolio(action, &config, cli.output)?,
    }

    Ok(())
}

fn load_portfolio(config: &Config) -> Result<Portfolio> {
    PortfolioStore::open(&config.resolved_portfolio_path())?.load()
}

fn handle_portfolio(action: &PortfolioAction, config: &Config, format: OutputFormat) -> Result<()> {
    let store = PortfolioStore::open(&config.resolved_portfolio_path())?;
    let mut portfolio = store.load()?;

    match action {
        PortfolioAction::Show => {
            print_or_fallback(&portfolio, format, "portfolio", || {
                format!(
                    "{}\nCard points: {} | Program miles: {}\nSaved flights: {} | Saved cards: {} | Saved programs: {}",
                    render_portfolio_table(&portfolio),
                    portfolio.total_card_points(),
                    portfolio.total_program_miles(),
                    saved_label(&portfolio.saved_flights),
                    saved_label(&portfolio.saved_cards),
                    saved_label(&portfolio.saved_programs)
                )
            })?;
            return Ok(());
        }
        PortfolioAction::AddCard { id, points } => {
            let card = credit_card(id)?;
            if !portfolio.add_card(card) {
                warn!("card {} is already in the portfolio", card.id);
                return Ok(());
            }
            portfolio.set_card_points(&card.id, *points);
            info!(card = %card.id, points, "added card to portfolio");
        }
        PortfolioAction::AddProgram { id, miles } => {
            let program = loyalty_program(id)?;
            if !portfolio.add_program(program) {
                warn!("program {} is already in the portfolio", program.id);
                return Ok(());
            }
            portfolio.set_program_miles(&program.id, *miles);
            info!(program = %program.id, miles, "added program to portfolio");
        }
        PortfolioAction::SaveFlight { id } => {
            let saved = portfolio.toggle_saved_flight(id)?;
            info!(flight = %id, saved, "toggled saved flight");
        }
        PortfolioAction::SaveCard { id } => {
            let saved = portfolio.toggle_saved_card(id)?;
            info!(card = %id, saved, "toggled saved card");
        }
        PortfolioAction::SaveProgram { id } => {
            let saved = portfolio.toggle_saved_program(id)?;
            info!(program = %id, saved, "toggled saved program");
        }
        PortfolioAction::RemoveCard { id } => {
            if !portfolio.remove_card(id) {
                return Err(anyhow!("card {id} is not in the portfolio"));
            }
            info!(card = %id, "removed card from portfolio");
        }
        PortfolioAction::RemoveProgram { id } => {
            if !portfolio.remove_program(id) {
                return Err(anyhow!("program {id} is not in the portfolio"));
            }
            info!(program = %id, "removed program from portfolio");
        }
        PortfolioAction::SetCardPoints { id, points } => {
            if !portfolio.set_card_points(id, *points) {
                return Err(anyhow!("card {id} is not in the portfolio"));
            }
            info!(card = %id, points, "updated card points");
        }
        PortfolioAction::SetProgramMiles { id, miles } => {
            if !portfolio.set_program_miles(id, *miles) {
                return Err(anyhow!("program {id} is not in the portfolio"));
            }
            info!(program = %id, miles, "updated program miles");
        }
    }

    store.save(&portfolio)?;
    println!("Saved portfolio to {}", store.path().display());
    Ok(())
}

fn saved_label(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}

fn print_options(
    route: &FlightRoute,
    cabin: Cabin,
    options: &[TransferOption],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if options.is_empty() {
                println!(
                    "{} - {}: no card or program in the portfolio can contribute",
                    route.label(),
                    cabin
                );
            } else {
                println!("{}", render_options_table(route, cabin, options));
            }
        }
        OutputFormat::Json => println!("{}", render_json(options)?),
        OutputFormat::Csv => println!("{}", options_to_csv(options)?),
    }
    Ok(())
}

fn print_or_fallback<T, F>(value: &T, format: OutputFormat, label: &str, table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Table => println!("{}", table()),
        OutputFormat::Json => println!("{}", render_json(value)?),
        OutputFormat::Csv => {
            warn!("CSV output for {label} not implemented, using JSON");
            println!("{}", render_json(value)?);
        }
    }
    Ok(())
}
