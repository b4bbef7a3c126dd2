use colored::Colorize;
use mediashelf::api::{CmdMessage, CollectionSummary, MessageLevel};
use mediashelf::confirm::ConfirmOptions;
use mediashelf::model::{Kind, Record};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const RATING_WIDTH: usize = 9;
const YEAR_WIDTH: usize = 6;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_overview(summaries: &[CollectionSummary]) {
    println!("{}", "My Media Collection".bold());
    println!();
    for summary in summaries {
        if summary.error.is_some() {
            println!(
                "  {:<10} {}",
                summary.heading.bold(),
                "unreadable".red()
            );
            continue;
        }
        let average = summary
            .average_rating
            .map(|r| format_rating(summary.kind, r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10} {:>4}  {:>RATING_WIDTH$}  {}",
            summary.heading.bold(),
            summary.count,
            average,
            summary.blurb.dimmed()
        );
    }
    println!();
    println!(
        "{}",
        "Use `mediashelf <movies|series|books>` to browse a collection.".dimmed()
    );
}

pub(super) fn print_records<T: Record>(records: &[T]) {
    if records.is_empty() {
        return;
    }
    println!("{}", T::KIND.collection_title().bold());
    println!();
    for record in records {
        println!("{}", format_record_line(record));
    }
}

/// One list line: index, title (truncated to fit), year, rating and genres.
fn format_record_line<T: Record>(record: &T) -> String {
    let idx_str = format!("{:>4}. ", record.id());
    let year = format!("{:>YEAR_WIDTH$}", record.year());
    let rating = format!(
        "{:>RATING_WIDTH$}",
        format_rating(T::KIND, record.rating())
    );

    let fixed_width = idx_str.width() + YEAR_WIDTH + RATING_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed_width) / 2;
    let title = truncate_to_width(record.title(), available);
    let padding = available.saturating_sub(title.width());

    let genres = record.genre().join(", ");
    format!(
        "{}{}{}{}  {}  {}",
        idx_str.yellow(),
        title,
        " ".repeat(padding),
        year.dimmed(),
        rating,
        genres.dimmed()
    )
}

pub(super) fn print_record<T: Record>(record: &T) {
    println!(
        "{} {}",
        format!("#{}", record.id()).yellow(),
        record.title().bold()
    );
    println!("--------------------------------");
    for (label, value) in detail_fields(record) {
        println!("{:<12} {}", format!("{}:", label).dimmed(), value);
    }
    println!();
    println!("{}", record.description());
}

fn detail_fields<T: Record>(record: &T) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some((label, who)) = record.credit() {
        fields.push((label, who.to_string()));
    }
    fields.push(("Year", record.year().to_string()));
    fields.push(("Rating", format_rating(T::KIND, record.rating())));
    if !record.genre().is_empty() {
        fields.push(("Genre", record.genre().join(", ")));
    }
    fields.push((T::KIND.link_label(), record.link().to_string()));
    if let Some(poster) = record.poster() {
        fields.push(("Poster", poster.to_string()));
    }
    fields
}

pub(super) fn print_genres(kind: Kind, genres: &[&str]) {
    println!("{}", format!("{} genres", kind).bold());
    for genre in genres {
        println!("  {}", genre);
    }
}

pub(super) fn print_config(entries: &[(&str, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}

pub(super) fn print_confirm(options: &ConfirmOptions) {
    println!("{}", options.title.bold());
    println!("{}", options.message);
}

/// `8.3/10` for screen kinds, `4.5/5` for books.
pub(super) fn format_rating(kind: Kind, rating: f64) -> String {
    format!("{:.1}/{}", rating, kind.rating_scale())
}

/// `s` unchanged if it fits in `max_width` columns, otherwise cut short with
/// a trailing ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediashelf::model::{Book, Movie};

    fn book() -> Book {
        Book {
            id: 7,
            title: "The Name of the Wind".to_string(),
            year: 2007,
            rating: 4.5,
            author: "Patrick Rothfuss".to_string(),
            genre: vec!["Fantasy".to_string()],
            description: "A legend tells his own story.".to_string(),
            bol_url: "https://www.bol.com/nl/nl/p/the-name-of-the-wind/".to_string(),
            poster: None,
        }
    }

    #[test]
    fn rating_uses_kind_scale() {
        assert_eq!(format_rating(Kind::Movie, 8.3), "8.3/10");
        assert_eq!(format_rating(Kind::Book, 4.0), "4.0/5");
    }

    #[test]
    fn truncates_wide_titles() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語のタイトル", 6), "日本…");
    }

    #[test]
    fn title_that_exactly_fits_is_kept_whole() {
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("abcdef", 5), "abcd…");
    }

    #[test]
    fn book_details_carry_author_and_store_link() {
        let fields = detail_fields(&book());
        assert_eq!(fields[0], ("Author", "Patrick Rothfuss".to_string()));
        assert!(fields.contains(&("Rating", "4.5/5".to_string())));
        assert!(fields
            .iter()
            .any(|(label, value)| *label == "bol.com" && value.contains("bol.com")));
        assert!(!fields.iter().any(|(label, _)| *label == "Poster"));
    }

    #[test]
    fn list_line_contains_id_title_and_rating() {
        colored::control::set_override(false);
        let line = format_record_line(&book());
        assert!(line.starts_with("   7. The Name of the Wind"));
        assert!(line.contains("2007"));
        assert!(line.contains("4.5/5"));
        assert!(line.ends_with("Fantasy"));

        let movie = Movie {
            id: 12,
            title: "Heat".to_string(),
            year: 1995,
            rating: 8.3,
            director: "Michael Mann".to_string(),
            genre: Vec::new(),
            description: String::new(),
            imdb_url: "https://www.imdb.com/title/tt0113277/".to_string(),
            poster: None,
        };
        assert!(format_record_line(&movie).contains("8.3/10"));
    }
}
