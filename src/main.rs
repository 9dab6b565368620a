use clap::{Parser, Subcommand};
use playful_pager::{config, listing, output, render, window};
use std::path::PathBuf;

/// Shared flags for commands that print a page row.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "playful-pager")]
#[command(about = "Pagination windows for static site listings")]
#[command(long_about = "\
Pagination windows for static site listings

Computes which page-number buttons a listing's pagination control shows.
The first and last page are always visible; a window of numbered pages sits
between them, and one ellipsis stands in for any hidden run.

  current=1,  last=11   →  1 2 3 4 5 6 7 … 11
  current=11, last=11   →  1 … 5 6 7 8 9 10 11

Run 'playful-pager gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the page row for a position
    Window {
        /// Current page (1-indexed)
        #[arg(long)]
        current: u32,
        /// Last page
        #[arg(long)]
        last: u32,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Compute the page row for a post listing
    Listing {
        /// Total number of posts in the listing
        #[arg(long)]
        total_items: usize,
        /// Current page (1-indexed)
        #[arg(long, required_unless_present = "all")]
        current: Option<u32>,
        /// Print the page row of every page in the listing
        #[arg(long, conflicts_with = "current")]
        all: bool,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Render the pagination control as HTML
    Render {
        /// Current page (1-indexed)
        #[arg(long)]
        current: u32,
        /// Last page
        #[arg(long)]
        last: u32,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Window {
            current,
            last,
            format,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let result = window::paginate(current, last, config.window())?;
            if format.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_window(&result);
            }
        }
        Command::Listing {
            total_items,
            current,
            all,
            format,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let cache = config.cache();
            let pages = match current {
                Some(page) if !all => page..=page,
                _ => 1..=listing::page_count(total_items, config.page_size)?,
            };
            let mut results = Vec::new();
            for page in pages {
                let info = listing::page_info_for_listing(page, total_items, config.page_size)?;
                results.push(cache.get_or_compute(info));
            }
            if format.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    output::print_listing(result, total_items, config.page_size);
                }
                if all {
                    println!("Cache: {}", cache.stats());
                }
            }
        }
        Command::Render { current, last } => {
            let config = config::load_config(&cli.config_dir)?;
            let result = window::paginate(current, last, config.window())?;
            let markup =
                render::render_pagination(&result, |n| config.links.href(n), &config.labels);
            println!("{}", markup.into_string());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays clean for JSON and HTML output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}
