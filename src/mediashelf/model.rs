//! # Domain Model: Records, Kinds and Genre Vocabularies
//!
//! Mediashelf catalogs three kinds of records: [`Movie`], [`Series`] and [`Book`].
//! They are flat structs sharing a common shape:
//!
//! | Field | JSON key | Notes |
//! |-------|----------|-------|
//! | `id` | `id` | Unique per collection. `0` means "not yet persisted" |
//! | `title` | `title` | Search key and list label |
//! | `year` | `year` | |
//! | `rating` | `rating` | 0–10 for movies/series, 0–5 for books |
//! | `genre` | `genre` | Ordered tags from the kind's vocabulary |
//! | `description` | `description` | |
//! | external link | `imdbUrl` / `bolUrl` | |
//! | `poster` | `poster` | Optional, omitted when absent |
//! | `director` / `author` | | Movie / Book only |
//!
//! The [`Record`] trait exposes the parts of that shape the generic machinery
//! needs (`id`, `title`, `genre`), plus construction from a [`Draft`].
//!
//! ## Kinds
//!
//! [`Kind`] carries everything that differs between kinds but is not a field:
//! the durable slot name, the rating scale, the external link label, the
//! bundled seed data and the genre vocabulary.

use crate::draft::{CommonFieldsMut, Draft};
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Movie,
    Series,
    Book,
}

const SCREEN_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

const SERIES_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Reality",
    "Romance",
    "Sci-Fi",
    "Talk-Show",
    "Thriller",
    "War",
    "Western",
];

const BOOK_GENRES: &[&str] = &[
    "Biography",
    "Classic",
    "Fantasy",
    "Fiction",
    "Historical Fiction",
    "Horror",
    "Literary Fiction",
    "Mystery",
    "Non-Fiction",
    "Poetry",
    "Romance",
    "Science Fiction",
    "Self-Help",
    "Thriller",
    "Young Adult",
];

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Movie, Kind::Series, Kind::Book];

    /// Name of the durable slot holding this kind's collection.
    pub fn slot(&self) -> &'static str {
        match self {
            Kind::Movie => "movies",
            Kind::Series => "series",
            Kind::Book => "books",
        }
    }

    /// Heading used for collection listings.
    pub fn collection_title(&self) -> &'static str {
        match self {
            Kind::Movie => "Movies Collection",
            Kind::Series => "TV Series Collection",
            Kind::Book => "Books Collection",
        }
    }

    /// Upper bound of the rating scale (the lower bound is always 0).
    pub fn rating_scale(&self) -> f64 {
        match self {
            Kind::Movie | Kind::Series => 10.0,
            Kind::Book => 5.0,
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            Kind::Movie | Kind::Series => "IMDb",
            Kind::Book => "bol.com",
        }
    }

    /// JSON array used to populate an absent slot.
    pub fn seed_json(&self) -> &'static str {
        match self {
            Kind::Movie => include_str!("seeds/movies.json"),
            Kind::Series => include_str!("seeds/series.json"),
            Kind::Book => include_str!("seeds/books.json"),
        }
    }

    pub fn genres(&self) -> &'static [&'static str] {
        match self {
            Kind::Movie => SCREEN_GENRES,
            Kind::Series => SERIES_GENRES,
            Kind::Book => BOOK_GENRES,
        }
    }

    /// Resolve a user-supplied genre to its canonical spelling, ignoring case.
    pub fn canonical_genre(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.genres()
            .iter()
            .copied()
            .find(|g| g.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Movie => "Movie",
            Kind::Series => "Series",
            Kind::Book => "Book",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Kind {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" => Ok(Kind::Movie),
            "serie" | "series" => Ok(Kind::Series),
            "book" | "books" => Ok(Kind::Book),
            other => Err(ShelfError::Api(format!("Unknown collection: {}", other))),
        }
    }
}

/// The shape shared by every catalogued item.
///
/// Implemented by [`Movie`], [`Series`] and [`Book`]. Everything generic in the
/// crate (stores, filters, commands) is written against this trait.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    const KIND: Kind;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn title(&self) -> &str;
    fn year(&self) -> i32;
    fn rating(&self) -> f64;
    fn genre(&self) -> &[String];
    fn description(&self) -> &str;
    fn link(&self) -> &str;
    fn poster(&self) -> Option<&str>;

    /// The kind-specific field as a `(label, value)` pair, if the kind has one.
    fn credit(&self) -> Option<(&'static str, &str)>;

    /// Build a new, not yet persisted record (id 0) from a draft.
    fn from_draft(draft: &Draft) -> Result<Self>;

    /// Overwrite the fields the draft provides. The id is never touched.
    fn apply_draft(&mut self, draft: &Draft) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub director: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub description: String,
    pub imdb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub genre: Vec<String>,
    pub description: String,
    pub imdb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub author: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub description: String,
    pub bol_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

// Accessors for the fields every kind shares. `$link` names the kind's
// external link field.
macro_rules! common_accessors {
    ($link:ident) => {
        fn id(&self) -> u64 {
            self.id
        }

        fn set_id(&mut self, id: u64) {
            self.id = id;
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn year(&self) -> i32 {
            self.year
        }

        fn rating(&self) -> f64 {
            self.rating
        }

        fn genre(&self) -> &[String] {
            &self.genre
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn link(&self) -> &str {
            &self.$link
        }

        fn poster(&self) -> Option<&str> {
            self.poster.as_deref()
        }
    };
}

impl Record for Movie {
    const KIND: Kind = Kind::Movie;

    common_accessors!(imdb_url);

    fn credit(&self) -> Option<(&'static str, &str)> {
        Some(("Director", &self.director))
    }

    fn from_draft(draft: &Draft) -> Result<Self> {
        draft.check_kind_fields(Self::KIND)?;
        Ok(Movie {
            id: 0,
            title: draft.require_text("title", &draft.title)?,
            year: draft.require("year", draft.year)?,
            rating: draft.require_rating(Self::KIND)?,
            director: draft.require_text("director", &draft.director)?,
            genre: draft.initial_genre(Self::KIND)?,
            description: draft.require_text("description", &draft.description)?,
            imdb_url: draft.require_url("link", &draft.link)?,
            poster: draft.poster_url()?,
        })
    }

    fn apply_draft(&mut self, draft: &Draft) -> Result<()> {
        draft.check_kind_fields(Self::KIND)?;
        let director = draft.text("director", &draft.director)?;
        draft.apply_common(
            Self::KIND,
            CommonFieldsMut {
                title: &mut self.title,
                year: &mut self.year,
                rating: &mut self.rating,
                genre: &mut self.genre,
                description: &mut self.description,
                link: &mut self.imdb_url,
                poster: &mut self.poster,
            },
        )?;
        if let Some(director) = director {
            self.director = director;
        }
        Ok(())
    }
}

impl Record for Series {
    const KIND: Kind = Kind::Series;

    common_accessors!(imdb_url);

    fn credit(&self) -> Option<(&'static str, &str)> {
        None
    }

    fn from_draft(draft: &Draft) -> Result<Self> {
        draft.check_kind_fields(Self::KIND)?;
        Ok(Series {
            id: 0,
            title: draft.require_text("title", &draft.title)?,
            year: draft.require("year", draft.year)?,
            rating: draft.require_rating(Self::KIND)?,
            genre: draft.initial_genre(Self::KIND)?,
            description: draft.require_text("description", &draft.description)?,
            imdb_url: draft.require_url("link", &draft.link)?,
            poster: draft.poster_url()?,
        })
    }

    fn apply_draft(&mut self, draft: &Draft) -> Result<()> {
        draft.check_kind_fields(Self::KIND)?;
        draft.apply_common(
            Self::KIND,
            CommonFieldsMut {
                title: &mut self.title,
                year: &mut self.year,
                rating: &mut self.rating,
                genre: &mut self.genre,
                description: &mut self.description,
                link: &mut self.imdb_url,
                poster: &mut self.poster,
            },
        )
    }
}

impl Record for Book {
    const KIND: Kind = Kind::Book;

    common_accessors!(bol_url);

    fn credit(&self) -> Option<(&'static str, &str)> {
        Some(("Author", &self.author))
    }

    fn from_draft(draft: &Draft) -> Result<Self> {
        draft.check_kind_fields(Self::KIND)?;
        Ok(Book {
            id: 0,
            title: draft.require_text("title", &draft.title)?,
            year: draft.require("year", draft.year)?,
            rating: draft.require_rating(Self::KIND)?,
            author: draft.require_text("author", &draft.author)?,
            genre: draft.initial_genre(Self::KIND)?,
            description: draft.require_text("description", &draft.description)?,
            bol_url: draft.require_url("link", &draft.link)?,
            poster: draft.poster_url()?,
        })
    }

    fn apply_draft(&mut self, draft: &Draft) -> Result<()> {
        draft.check_kind_fields(Self::KIND)?;
        let author = draft.text("author", &draft.author)?;
        draft.apply_common(
            Self::KIND,
            CommonFieldsMut {
                title: &mut self.title,
                year: &mut self.year,
                rating: &mut self.rating,
                genre: &mut self.genre,
                description: &mut self.description,
                link: &mut self.bol_url,
                poster: &mut self.poster,
            },
        )?;
        if let Some(author) = author {
            self.author = author;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!("movies".parse::<Kind>().unwrap(), Kind::Movie);
        assert_eq!("Serie".parse::<Kind>().unwrap(), Kind::Series);
        assert_eq!(" book ".parse::<Kind>().unwrap(), Kind::Book);
        assert!("albums".parse::<Kind>().is_err());
    }

    #[test]
    fn slots_are_distinct() {
        assert_eq!(Kind::Movie.slot(), "movies");
        assert_eq!(Kind::Series.slot(), "series");
        assert_eq!(Kind::Book.slot(), "books");
    }

    #[test]
    fn canonical_genre_ignores_case() {
        assert_eq!(Kind::Movie.canonical_genre("sci-fi"), Some("Sci-Fi"));
        assert_eq!(Kind::Book.canonical_genre("  POETRY "), Some("Poetry"));
        assert_eq!(Kind::Movie.canonical_genre("Poetry"), None);
        assert_eq!(Kind::Series.canonical_genre("talk-show"), Some("Talk-Show"));
    }

    #[test]
    fn bundled_seeds_parse_with_unique_ids() {
        fn check<T: Record>() {
            let records: Vec<T> = serde_json::from_str(T::KIND.seed_json()).unwrap();
            assert!(!records.is_empty());
            let mut ids: Vec<u64> = records.iter().map(|r| r.id()).collect();
            assert!(ids.iter().all(|id| *id > 0));
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), records.len());
            for record in &records {
                for genre in record.genre() {
                    assert!(
                        T::KIND.canonical_genre(genre).is_some(),
                        "seed genre {} not in {} vocabulary",
                        genre,
                        T::KIND
                    );
                }
                assert!(record.rating() <= T::KIND.rating_scale());
            }
        }
        check::<Movie>();
        check::<Series>();
        check::<Book>();
    }

    #[test]
    fn json_uses_camel_case_link_keys() {
        let book = Book {
            id: 4,
            title: "Dune".into(),
            year: 1965,
            rating: 4.5,
            author: "Frank Herbert".into(),
            genre: vec!["Science Fiction".into()],
            description: "Spice.".into(),
            bol_url: "https://www.bol.com/dune".into(),
            poster: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["bolUrl"], "https://www.bol.com/dune");
        assert!(json.get("poster").is_none());
        assert_eq!(book.credit(), Some(("Author", "Frank Herbert")));
    }

    #[test]
    fn missing_id_deserializes_as_new() {
        let json = r#"{"title":"Heat","year":1995,"rating":8.3,"director":"Michael Mann",
            "genre":["Crime"],"description":"LA heist.","imdbUrl":"https://www.imdb.com/title/tt0113277/"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id(), 0);
        assert_eq!(movie.poster(), None);
    }
}
