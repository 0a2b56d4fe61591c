use clap::{Parser, Subcommand, ValueEnum};
use rex::config::CONFIG_FILENAME;
use std::path::PathBuf;

/// "0.3.0" when built outside git, "0.3.0@abc1234" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("REX_GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rex", bin_name = "rex", version = get_version())]
#[command(about = "Create, number and index Architecture Decision Records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file to read
    #[arg(long, global = true, env = "REX_CONFIG", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ADR
    #[command(alias = "new")]
    Create {
        /// Title of the ADR
        #[arg(short, long)]
        title: String,

        /// Author of the ADR
        #[arg(short, long, default_value = "")]
        author: String,

        /// Initial status
        #[arg(short, long, default_value = "Draft")]
        status: String,

        /// Creation date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Rebuild the index page from the ADRs on disk
    Index {
        /// Overwrite an existing index
        #[arg(short, long)]
        force: bool,

        /// Write an empty placeholder index instead
        #[arg(long)]
        empty: bool,
    },

    /// List ADRs
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,

        /// Show at most this many records
        #[arg(short = 'r', long = "records")]
        records: Option<usize>,

        /// Which records come first
        #[arg(long, value_enum, default_value_t = ListFilter::Oldest)]
        filter: ListFilter,
    },

    /// Create directories, templates, site files and the index
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Only create the ADR (and template) directories
        #[arg(long)]
        directories: bool,

        /// Only build the index
        #[arg(long)]
        index: bool,

        /// Only install the default templates
        #[arg(long)]
        templates: bool,

        /// Only write the GitHub Pages site files
        #[arg(long)]
        pages: bool,
    },

    /// Show or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the active settings
    Show,

    /// Write the default settings file
    Create {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Md,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFilter {
    Oldest,
    Newest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_create_defaults() {
        let cli = Cli::try_parse_from(["rex", "create", "-t", "Use Rust"]).unwrap();
        match cli.command {
            Commands::Create {
                title,
                author,
                status,
                date,
            } => {
                assert_eq!(title, "Use Rust");
                assert_eq!(author, "");
                assert_eq!(status, "Draft");
                assert!(date.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_list_options() {
        let cli = Cli::try_parse_from([
            "rex", "list", "--format", "json", "-r", "2", "--filter", "newest",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                format: ListFormat::Json,
                records: Some(2),
                filter: ListFilter::Newest,
            }
        ));
    }

    #[test]
    fn test_create_requires_title() {
        assert!(Cli::try_parse_from(["rex", "create"]).is_err());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["rex", "index", "--config", "alt.yaml", "-f"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("alt.yaml"));
        assert!(matches!(cli.command, Commands::Index { force: true, empty: false }));
    }
}
