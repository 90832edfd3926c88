use clap::{command, Parser};
use colored::Colorize;

use lfx_catalog::config::get_configuration;
use lfx_catalog::projects::ProjectCatalog;
use lfx_catalog::report::generate_csv;
use lfx_catalog::{CachedClient, ConsoleReporter};

/// Build a landscape member catalog from the LFX project directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<String>,

    /// Fetch every project instead of filtering by the configured parent slug
    #[arg(long)]
    fetch_all: bool,

    /// Print the loaded catalog as CSV
    #[arg(long)]
    csv: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = match get_configuration(args.config) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e.bold().red());
            std::process::exit(1);
        }
    };
    if args.fetch_all {
        config.filter_by_parent_slug = false;
    }

    let fetcher = CachedClient::default();
    let reporter = ConsoleReporter;
    let mut catalog = ProjectCatalog::new(&config, &fetcher, &reporter);

    if let Err(e) = catalog.load_data() {
        println!("{}: {}", "I couldn't load the project catalog".red(), e);
        std::process::exit(1);
    }

    println!(
        "{} {}",
        "Success! I found this many projects:".green(),
        catalog.members.len()
    );

    if args.csv {
        match generate_csv(&catalog.members) {
            Ok(csv) => {
                println!("{}", "Here's your catalog CSV".green());
                println!("{csv}");
            }
            Err(e) => {
                println!("{}: {}", "I couldn't generate the CSV".red(), e);
                std::process::exit(1);
            }
        }
    }
}
