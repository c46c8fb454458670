use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Project scaffolding from a template catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new project from a template
    New {
        /// Project name (letters, digits, '-', '_')
        name: String,

        /// Template to generate from (see 'lathe list')
        #[arg(short, long)]
        template: String,

        /// Target directory (defaults to configured target or current dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// List templates in the catalog
    List {
        /// Filter by project type (cli, web-api, library, ...)
        #[arg(long = "type")]
        project_type: Option<String>,

        /// Filter by language
        #[arg(short, long)]
        language: Option<String>,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show details for one template
    Info {
        /// Template name
        template: String,
    },

    /// Recommend templates based on your profile and history
    Recommend {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show or update your preference profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Local template marketplace
    Market {
        #[command(subcommand)]
        command: MarketCommands,
    },

    /// Team template catalog (project-local, committable)
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },

    /// Template cache maintenance
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Check data files and catalog health
    Doctor {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show version information
    Version {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the current profile
    Show,

    /// Update profile fields (only the flags you pass change)
    Set {
        /// Preferred languages (comma-separated)
        #[arg(long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Preferred frameworks (comma-separated)
        #[arg(long, value_delimiter = ',')]
        frameworks: Option<Vec<String>>,

        /// Complexity preference (simple, medium, complex)
        #[arg(long)]
        complexity: Option<String>,

        /// Skill level (beginner, intermediate, advanced)
        #[arg(long)]
        skill: Option<String>,
    },
}

#[derive(Subcommand)]
enum MarketCommands {
    /// Publish a catalog template to the local marketplace
    Publish {
        /// Template name
        template: String,

        /// Author name (defaults to the configured author)
        #[arg(long)]
        author: Option<String>,
    },

    /// Search marketplace entries
    Search {
        /// Query matched against name, description, and tags
        query: String,
    },

    /// Install a marketplace template into your catalog
    Install {
        /// Template name
        template: String,
    },

    /// Rate a marketplace template
    Rate {
        /// Template name
        template: String,

        /// Stars, 1 to 5
        stars: u8,
    },

    /// List marketplace entries by downloads
    List,
}

#[derive(Subcommand)]
enum TeamCommands {
    /// Add a catalog template to the team catalog
    Add {
        /// Template name
        template: String,
    },

    /// Remove a template from the team catalog
    Remove {
        /// Template name
        template: String,
    },

    /// List team templates
    List,

    /// Export the team catalog to a JSON file
    Export {
        /// Output path
        path: PathBuf,
    },

    /// Import templates from a JSON file into the team catalog
    Import {
        /// Input path
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Show cache statistics
    Stats {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Remove all cache entries
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            name,
            template,
            dir,
        } => {
            commands::new::execute(&name, &template, dir)?;
        }
        Commands::List {
            project_type,
            language,
            tag,
            json,
        } => {
            commands::list::execute(
                project_type.as_deref(),
                language.as_deref(),
                tag.as_deref(),
                json,
            )?;
        }
        Commands::Info { template } => {
            commands::info::execute(&template)?;
        }
        Commands::Recommend { json } => {
            commands::recommend::execute(json)?;
        }
        Commands::Profile { command } => match command {
            ProfileCommands::Show => {
                commands::profile::show()?;
            }
            ProfileCommands::Set {
                languages,
                frameworks,
                complexity,
                skill,
            } => {
                commands::profile::set(languages, frameworks, complexity.as_deref(), skill.as_deref())?;
            }
        },
        Commands::Market { command } => match command {
            MarketCommands::Publish { template, author } => {
                commands::market::publish(&template, author.as_deref())?;
            }
            MarketCommands::Search { query } => {
                commands::market::search(&query)?;
            }
            MarketCommands::Install { template } => {
                commands::market::install(&template)?;
            }
            MarketCommands::Rate { template, stars } => {
                commands::market::rate(&template, stars)?;
            }
            MarketCommands::List => {
                commands::market::list()?;
            }
        },
        Commands::Team { command } => match command {
            TeamCommands::Add { template } => {
                commands::team::add(&template)?;
            }
            TeamCommands::Remove { template } => {
                commands::team::remove(&template)?;
            }
            TeamCommands::List => {
                commands::team::list()?;
            }
            TeamCommands::Export { path } => {
                commands::team::export(&path)?;
            }
            TeamCommands::Import { path } => {
                commands::team::import(&path)?;
            }
        },
        Commands::Cache { command } => match command {
            CacheCommands::Stats { json } => {
                commands::cache::stats(json)?;
            }
            CacheCommands::Clear => {
                commands::cache::clear()?;
            }
        },
        Commands::Doctor { json } => {
            let exit_code = commands::doctor::execute(json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Version { json } => {
            commands::version::execute(json)?;
        }
    }

    Ok(())
}
