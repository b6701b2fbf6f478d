use clap::{Parser, Subcommand};

use homepros_sheets::{load_services, SheetsClient};
use homepros_store::{city_facets, industry_facets, search, SearchFilters, SortKey};

#[derive(Debug, Parser)]
#[command(name = "homepros-cli")]
#[command(about = "HomePros directory command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the sheet export and report what the server would serve.
    Sync,
    /// Search the directory with the same engine the API uses.
    Search {
        /// Free-text query matched against title and industry.
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// Inclusive minimum rating.
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        company_name: Option<String>,
        /// rating_desc, rating_asc, name_asc, featured, or reviews_desc.
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Print the distinct industry and city facet lists.
    Facets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = homepros_core::load_app_config_from_env()?;
    let client = SheetsClient::new(config.fetch_timeout_secs, &config.user_agent)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Sync => {
            let services = load_services(&client, &config.sheet_csv_url).await;
            println!("{} services loaded", services.len());
        }
        Commands::Search {
            query,
            industry,
            city,
            min_rating,
            company_name,
            sort_by,
            page,
            limit,
        } => {
            let services = load_services(&client, &config.sheet_csv_url).await;
            let filters = SearchFilters {
                query,
                industry,
                city,
                min_rating,
                company_name,
                sort_by: SortKey::parse(sort_by.as_deref()),
                page,
                limit,
            };
            let result = search(&services, &filters);

            println!(
                "{} matches (page {} of {})",
                result.total, result.page, result.total_pages
            );
            for service in &result.services {
                println!(
                    "{:>4.1}  {:<32}  {:<18}  {}",
                    service.rating,
                    service.title,
                    service.industry,
                    service.city().unwrap_or("-")
                );
            }
        }
        Commands::Facets => {
            let services = load_services(&client, &config.sheet_csv_url).await;
            println!("industries:");
            for industry in industry_facets(&services) {
                println!("  {industry}");
            }
            println!("cities:");
            for city in city_facets(&services) {
                println!("  {city}");
            }
        }
    }

    Ok(())
}
