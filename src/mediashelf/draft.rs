//! # Drafts: Partial Field Values
//!
//! A [`Draft`] is what an edit form collects before it is submitted: a set of
//! optional field values. New records are built with
//! [`Record::from_draft`](crate::model::Record::from_draft), existing ones are
//! changed with [`Record::apply_draft`](crate::model::Record::apply_draft).
//!
//! Drafts enforce the same constraints a form would, and nothing more:
//!
//! - Required fields must be present and not blank.
//! - `rating` must lie within `0..=scale` for the kind.
//! - `link` and `poster` must be `http(s)` URLs.
//! - Genres must come from the kind's vocabulary. They are stored in canonical
//!   casing and deduplicated, keeping the first occurrence.
//! - `director` is only accepted for movies, `author` only for books.
//!
//! The store itself performs no validation: it persists whatever record it is
//! given.

use crate::error::{Result, ShelfError};
use crate::model::Kind;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    /// Replaces the whole genre list when set.
    pub genre: Option<Vec<String>>,
    /// Appended after `genre` is applied, skipping tags already present.
    pub add_genre: Vec<String>,
    pub remove_genre: Vec<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub poster: Option<String>,
    pub clear_poster: bool,
    pub director: Option<String>,
    pub author: Option<String>,
}

/// Mutable views of the fields every kind shares.
pub struct CommonFieldsMut<'a> {
    pub title: &'a mut String,
    pub year: &'a mut i32,
    pub rating: &'a mut f64,
    pub genre: &'a mut Vec<String>,
    pub description: &'a mut String,
    pub link: &'a mut String,
    pub poster: &'a mut Option<String>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    pub(crate) fn require<T: Copy>(&self, field: &str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| ShelfError::Validation(format!("{} is required", field)))
    }

    pub(crate) fn require_text(&self, field: &str, value: &Option<String>) -> Result<String> {
        self.text(field, value)?
            .ok_or_else(|| ShelfError::Validation(format!("{} is required", field)))
    }

    /// A provided text value, trimmed. Blank values are rejected.
    pub(crate) fn text(&self, field: &str, value: &Option<String>) -> Result<Option<String>> {
        match value {
            None => Ok(None),
            Some(v) if v.trim().is_empty() => Err(ShelfError::Validation(format!(
                "{} cannot be empty",
                field
            ))),
            Some(v) => Ok(Some(v.trim().to_string())),
        }
    }

    pub(crate) fn require_rating(&self, kind: Kind) -> Result<f64> {
        let rating = self.require("rating", self.rating)?;
        check_rating(kind, rating)
    }

    pub(crate) fn require_url(&self, field: &str, value: &Option<String>) -> Result<String> {
        let url = self.require_text(field, value)?;
        check_url(field, url)
    }

    pub(crate) fn poster_url(&self) -> Result<Option<String>> {
        if self.clear_poster {
            return Ok(None);
        }
        match self.text("poster", &self.poster)? {
            Some(url) => check_url("poster", url).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn initial_genre(&self, kind: Kind) -> Result<Vec<String>> {
        let mut genre = Vec::new();
        self.merge_genre(kind, &mut genre)?;
        Ok(genre)
    }

    /// Apply `genre`, then `add_genre`, then `remove_genre` to `current`.
    pub(crate) fn merge_genre(&self, kind: Kind, current: &mut Vec<String>) -> Result<()> {
        if let Some(replacement) = &self.genre {
            current.clear();
            for name in replacement {
                push_unique(current, canonical(kind, name)?);
            }
        }
        for name in &self.add_genre {
            push_unique(current, canonical(kind, name)?);
        }
        for name in &self.remove_genre {
            let name = name.trim();
            current.retain(|g| !g.eq_ignore_ascii_case(name));
        }
        Ok(())
    }

    pub(crate) fn check_kind_fields(&self, kind: Kind) -> Result<()> {
        if self.director.is_some() && kind != Kind::Movie {
            return Err(ShelfError::Validation(format!(
                "director does not apply to {}",
                kind.slot()
            )));
        }
        if self.author.is_some() && kind != Kind::Book {
            return Err(ShelfError::Validation(format!(
                "author does not apply to {}",
                kind.slot()
            )));
        }
        Ok(())
    }

    /// Overwrite the shared fields the draft provides.
    ///
    /// All values are validated before anything is written, so a failing
    /// draft leaves the record untouched.
    pub(crate) fn apply_common(&self, kind: Kind, fields: CommonFieldsMut<'_>) -> Result<()> {
        let title = self.text("title", &self.title)?;
        let description = self.text("description", &self.description)?;
        let rating = match self.rating {
            Some(r) => Some(check_rating(kind, r)?),
            None => None,
        };
        let link = match self.text("link", &self.link)? {
            Some(url) => Some(check_url("link", url)?),
            None => None,
        };
        let poster = self.poster_url()?;
        let mut genre = fields.genre.clone();
        self.merge_genre(kind, &mut genre)?;

        if let Some(title) = title {
            *fields.title = title;
        }
        if let Some(year) = self.year {
            *fields.year = year;
        }
        if let Some(rating) = rating {
            *fields.rating = rating;
        }
        if let Some(description) = description {
            *fields.description = description;
        }
        if let Some(link) = link {
            *fields.link = link;
        }
        if self.clear_poster || poster.is_some() {
            *fields.poster = poster;
        }
        *fields.genre = genre;
        Ok(())
    }
}

fn check_rating(kind: Kind, rating: f64) -> Result<f64> {
    let scale = kind.rating_scale();
    if rating.is_finite() && (0.0..=scale).contains(&rating) {
        Ok(rating)
    } else {
        Err(ShelfError::Validation(format!(
            "rating must be between 0 and {}",
            scale
        )))
    }
}

fn check_url(field: &str, url: String) -> Result<String> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(url)
    } else {
        Err(ShelfError::Validation(format!(
            "{} must be an http(s) URL, got '{}'",
            field, url
        )))
    }
}

pub(crate) fn canonical(kind: Kind, name: &str) -> Result<String> {
    kind.canonical_genre(name)
        .map(str::to_string)
        .ok_or_else(|| {
            ShelfError::Validation(format!(
                "unknown genre '{}' for {} (see `mediashelf {} genres`)",
                name.trim(),
                kind.slot(),
                kind.slot()
            ))
        })
}

fn push_unique(genre: &mut Vec<String>, name: String) {
    if !genre.contains(&name) {
        genre.push(name);
    }
}
