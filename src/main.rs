use clap::{Args, Parser, Subcommand};
use page_navigator::commands::*;
use page_navigator::core::{
    command_init::PageCommandArgs,
    error::Result,
    links::LinkStyle,
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "page-navigator")]
#[command(about = "A lightweight and efficient pagination menu tool")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a pagination menu and print it as HTML
    Render {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Build a pagination model and print it as JSON
    Model {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show the config file location and resolved display defaults
    Config,
}

#[derive(Args)]
struct PageArgs {
    /// Current page number (defaults to 1)
    #[arg(long)]
    current: Option<usize>,

    /// Total number of pages
    #[arg(long)]
    total: usize,

    /// Pages to show before and after the current page
    #[arg(long)]
    range: Option<usize>,

    /// Hide the "Page X of Y" summary item
    #[arg(long)]
    no_count: bool,

    /// Hide previous and next page links
    #[arg(long)]
    no_directional: bool,

    /// Hide first and last page links
    #[arg(long)]
    no_edges: bool,

    /// String prepended to every generated class
    #[arg(long)]
    class_prefix: Option<String>,

    /// Base URL page links are resolved against
    #[arg(long)]
    base: Option<String>,

    /// Permalink style for page links
    #[arg(long, value_parser = ["query", "path"])]
    link_style: Option<String>,

    /// JSON file with label translations
    #[arg(long)]
    labels: Option<PathBuf>,
}

impl From<PageArgs> for PageCommandArgs {
    fn from(args: PageArgs) -> Self {
        PageCommandArgs {
            current: args.current,
            total: args.total,
            range: args.range,
            no_count: args.no_count,
            no_directional: args.no_directional,
            no_edges: args.no_edges,
            class_prefix: args.class_prefix,
            base: args.base,
            link_style: args.link_style.as_deref().map(|style| match style {
                "path" => LinkStyle::Path,
                _ => LinkStyle::Query,
            }),
            labels_file: args.labels,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Render { page } => {
            if let Err(e) = execute_render(page.into()) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Model { page } => {
            if let Err(e) = execute_model(page.into()) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Config => {
            if let Err(e) = execute_config() {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
