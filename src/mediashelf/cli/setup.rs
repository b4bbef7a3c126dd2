use clap::{Args, Parser, Subcommand};
use mediashelf::draft::Draft;
use mediashelf::model::Kind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "mediashelf", bin_name = "mediashelf", version = get_version())]
#[command(about = "A local catalog for movies, series and books", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the collections (overrides MEDIASHELF_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with the movie collection
    #[command(alias = "movie", display_order = 1)]
    Movies {
        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Work with the series collection
    #[command(alias = "serie", display_order = 2)]
    Series {
        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Work with the book collection
    #[command(alias = "book", display_order = 3)]
    Books {
        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Clear every collection (they re-seed on next use)
    #[command(display_order = 10)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or change configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (e.g. confirm-deletes)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

impl Commands {
    /// The collection a kind subcommand targets, with its action.
    pub fn collection(self) -> Option<(Kind, RecordAction)> {
        let (kind, action) = match self {
            Commands::Movies { action } => (Kind::Movie, action),
            Commands::Series { action } => (Kind::Series, action),
            Commands::Books { action } => (Kind::Book, action),
            _ => return None,
        };
        Some((kind, action.unwrap_or_default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RecordAction {
    /// List the collection
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only records tagged with this genre
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Show one record in full
    #[command(alias = "view", display_order = 2)]
    Show { id: u64 },

    /// Add a record
    #[command(alias = "new", display_order = 3)]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a record
    #[command(alias = "e", display_order = 4)]
    Edit {
        id: u64,

        #[command(flatten)]
        fields: FieldArgs,

        /// Add a genre tag (repeatable)
        #[arg(long, value_name = "GENRE")]
        add_genre: Vec<String>,

        /// Remove a genre tag (repeatable)
        #[arg(long, value_name = "GENRE")]
        remove_genre: Vec<String>,

        /// Remove the poster
        #[arg(long, conflicts_with = "poster")]
        no_poster: bool,
    },

    /// Delete a record
    #[command(alias = "rm", display_order = 5)]
    Delete {
        id: u64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the genres this collection accepts
    #[command(display_order = 6)]
    Genres,
}

impl Default for RecordAction {
    fn default() -> Self {
        RecordAction::List {
            search: None,
            genre: None,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub rating: Option<f64>,

    /// Genre tag (repeatable). On edit, replaces all tags.
    #[arg(long, value_name = "GENRE")]
    pub genre: Vec<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// IMDb link for movies and series, bol.com link for books
    #[arg(long, visible_aliases = ["imdb-url", "bol-url"])]
    pub link: Option<String>,

    /// Poster image URL
    #[arg(long)]
    pub poster: Option<String>,

    /// Movies only
    #[arg(long)]
    pub director: Option<String>,

    /// Books only
    #[arg(long)]
    pub author: Option<String>,
}

impl FieldArgs {
    pub fn into_draft(self) -> Draft {
        Draft {
            title: self.title,
            year: self.year,
            rating: self.rating,
            genre: if self.genre.is_empty() {
                None
            } else {
                Some(self.genre)
            },
            description: self.description,
            link: self.link,
            poster: self.poster,
            director: self.director,
            author: self.author,
            ..Draft::default()
        }
    }
}
