//! Reconciles received books against a master catalogue.
//!
//! Master lines are `id,name,source,expired` (expired is `1`), received
//! lines are `name,M/D/YYYY`. Blank lines are skipped in both.

use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;

use chrono::NaiveDate;

use crate::error::BookError;
use crate::joining::Joining;

const RECEIVED_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub id: u32,
    pub name: String,
    pub source: String,
    pub expired: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub received: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveBook {
    pub book: Book,
    /// Non-expired sources in catalogue order, `/`-separated.
    pub sources: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub missing: Vec<Book>,
    pub active: Vec<ActiveBook>,
    pub expired: Vec<Book>,
}

fn malformed(line: usize, reason: impl Into<String>) -> BookError {
    BookError::Malformed { line, reason: reason.into() }
}

/// Numbered, non-blank lines.
fn content_lines(reader: impl BufRead) -> impl Iterator<Item = Result<(usize, String), BookError>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)).map_err(BookError::from))
        .filter(|res| !matches!(res, Ok((_, l)) if l.trim().is_empty()))
}

pub fn parse_catalogue_line(line_no: usize, line: &str) -> Result<CatalogueEntry, BookError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[id, name, source, expired] = fields.as_slice() else {
        return Err(malformed(line_no, format!("expected 4 fields, got {}", fields.len())));
    };
    let id: u32 = id
        .parse()
        .map_err(|_| malformed(line_no, format!("bad id {id:?}")))?;
    Ok(CatalogueEntry {
        id,
        name: name.to_string(),
        source: source.to_string(),
        expired: expired == "1",
    })
}

pub fn parse_received_line(line_no: usize, line: &str) -> Result<Book, BookError> {
    let Some((name, date)) = line.split_once(',') else {
        return Err(malformed(line_no, "expected name,date"));
    };
    let received = NaiveDate::parse_from_str(date.trim(), RECEIVED_DATE_FORMAT)
        .map_err(|e| malformed(line_no, format!("bad date {date:?}: {e}")))?;
    Ok(Book { name: name.trim().to_string(), received })
}

/// Catalogue entries grouped by book name, each group in file order.
pub fn read_catalogue(reader: impl BufRead) -> Result<HashMap<String, Vec<CatalogueEntry>>, BookError> {
    let mut catalogue: HashMap<String, Vec<CatalogueEntry>> = HashMap::new();
    for res in content_lines(reader) {
        let (line_no, line) = res?;
        let entry = parse_catalogue_line(line_no, &line)?;
        catalogue.entry(entry.name.clone()).or_default().push(entry);
    }
    Ok(catalogue)
}

/// Received books keyed by name; a name may appear only once.
pub fn read_received(reader: impl BufRead) -> Result<HashMap<String, Book>, BookError> {
    let mut books = HashMap::new();
    for res in content_lines(reader) {
        let (line_no, line) = res?;
        let book = parse_received_line(line_no, &line)?;
        if books.contains_key(&book.name) {
            return Err(BookError::Duplicate { line: line_no, name: book.name });
        }
        books.insert(book.name.clone(), book);
    }
    Ok(books)
}

pub fn reconcile(catalogue: impl BufRead, received: impl BufRead) -> Result<Report, BookError> {
    let catalogue = read_catalogue(catalogue)?;
    let received = read_received(received)?;

    let mut report = Report::default();
    for book in received.into_values() {
        match catalogue.get(&book.name) {
            None => report.missing.push(book),
            Some(entries) if entries.iter().all(|e| e.expired) => report.expired.push(book),
            Some(entries) => {
                let sources = entries
                    .iter()
                    .filter(|e| !e.expired)
                    .map(|e| e.source.as_str())
                    .join_with("/", "", "");
                report.active.push(ActiveBook { book, sources });
            }
        }
    }

    report.missing.sort_by(|a, b| a.name.cmp(&b.name));
    report.active.sort_by(|a, b| a.book.name.cmp(&b.book.name));
    report.expired.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        missing = report.missing.len(),
        active = report.active.len(),
        expired = report.expired.len(),
        "reconciled"
    );
    Ok(report)
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, rows: &[String]) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(60))?;
    writeln!(f, "{title}:")?;
    writeln!(f, "{}", "=".repeat(60))?;
    for row in rows {
        writeln!(f, "{row}")?;
    }
    writeln!(f, "{}", "-".repeat(60))?;
    writeln!(f, "Total: {}", rows.len())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<String> = self
            .missing
            .iter()
            .map(|b| format!("{},{}", b.name, b.received))
            .collect();
        let active: Vec<String> = self
            .active
            .iter()
            .map(|a| format!("{},{},{}", a.book.name, a.sources, a.book.received))
            .collect();
        let expired: Vec<String> = self.expired.iter().map(|b| b.name.clone()).collect();

        section(f, "Missing books", &missing)?;
        section(f, "Active books", &active)?;
        section(f, "Expired books", &expired)
    }
}
