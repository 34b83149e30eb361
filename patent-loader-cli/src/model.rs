//! Patent item and scanned file records
//!
//! Both are built from a [`MetadataRecord`] by explicit field mapping and
//! validated on construction. Their graphs are written against the `<>`
//! placeholder; the repository assigns the real URIs.

use crate::record::{MetadataRecord, RecordError};
use chrono::{NaiveDate, NaiveDateTime};
use patent_graph_format::GraphBuildable;
use patent_graph_ir::{Datatype, Graph, Term};
use patent_vocab::bindings::NAMESPACE_BINDINGS;
use patent_vocab::{dc, exterms, pcdm, rdf};

const LIST_SEPARATOR: char = ';';

/// Split a `;`-delimited field into trimmed, non-empty segments.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A calendar date, or a date with a time of day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    const DATE_FORMAT: &'static str = "%Y-%m-%d";
    const DATE_TIME_FORMATS: &'static [&'static str] =
        &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    pub fn parse(field: &'static str, value: &str) -> Result<Self, RecordError> {
        if let Ok(date) = NaiveDate::parse_from_str(value, Self::DATE_FORMAT) {
            return Ok(DateValue::Date(date));
        }
        Self::DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(DateValue::DateTime)
            .ok_or_else(|| RecordError::InvalidField {
                field,
                value: value.to_string(),
                reason: "expected YYYY-MM-DD or YYYY-MM-DDThh:mm:ss".to_string(),
            })
    }

    pub fn term(&self) -> Term {
        match self {
            DateValue::Date(d) => {
                Term::typed(d.format(Self::DATE_FORMAT).to_string(), Datatype::xsd_date())
            }
            DateValue::DateTime(dt) => Term::typed(
                dt.format(Self::DATE_TIME_FORMATS[0]).to_string(),
                Datatype::xsd_date_time(),
            ),
        }
    }
}

/// Where the patent was published online
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceUrl {
    /// Absolute http(s) URL, stored as an IRI object
    Link(url::Url),
    /// Anything else, kept verbatim as a literal
    Text(String),
}

impl SourceUrl {
    pub fn parse(value: &str) -> Self {
        match url::Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => SourceUrl::Link(url),
            _ => SourceUrl::Text(value.to_string()),
        }
    }

    pub fn term(&self) -> Term {
        match self {
            SourceUrl::Link(url) => Term::iri(url.as_str()),
            SourceUrl::Text(text) => Term::string(text),
        }
    }
}

/// The patent as an abstract object (`pcdm:Object`)
#[derive(Clone, Debug, PartialEq)]
pub struct PatentItem {
    pub patent_number: String,
    pub title: String,
    pub date: Option<DateValue>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub uspc: Option<String>,
    pub source_url: Option<SourceUrl>,
    pub application_number: Option<String>,
    pub creators: Vec<String>,
    pub cities: Vec<String>,
    pub states: Vec<String>,
    pub countries: Vec<String>,
}

impl PatentItem {
    pub fn from_record(record: &MetadataRecord) -> Result<Self, RecordError> {
        let year = record.non_empty("year").map(parse_year).transpose()?;
        Ok(Self {
            patent_number: record.require("patent_number")?.to_string(),
            title: record.require("title")?.to_string(),
            date: record
                .non_empty("date")
                .map(|v| DateValue::parse("date", v))
                .transpose()?,
            year,
            category: owned(record.non_empty("large_category")),
            uspc: owned(record.non_empty("uspc")),
            source_url: record.non_empty("patent_url").map(SourceUrl::parse),
            application_number: owned(record.non_empty("application_number")),
            creators: split_list(record.get("inventor")),
            cities: split_list(record.get("city")),
            states: split_list(record.get("state")),
            countries: split_list(record.get("country")),
        })
    }
}

impl GraphBuildable for PatentItem {
    fn graph(&self) -> Graph {
        let mut g = Graph::with_prefixes(NAMESPACE_BINDINGS);
        let mut say = |predicate: &str, object: Term| {
            g.add_triple(Term::placeholder(), Term::iri(predicate), object);
        };

        say(dc::IDENTIFIER, Term::string(&self.patent_number));
        if let Some(date) = &self.date {
            say(dc::DATE, date.term());
        }
        if let Some(year) = self.year {
            say(
                exterms::YEAR,
                Term::typed(format!("{year:04}"), Datatype::xsd_g_year()),
            );
        }
        say(dc::TITLE, Term::string(&self.title));
        if let Some(category) = &self.category {
            say(exterms::CATEGORY, Term::string(category));
        }
        if let Some(uspc) = &self.uspc {
            say(exterms::USPC_NUMBER, Term::string(uspc));
        }
        if let Some(url) = &self.source_url {
            say(exterms::SOURCE_URL, url.term());
        }
        if let Some(number) = &self.application_number {
            say(exterms::APPLICATION_NUMBER, Term::string(number));
        }
        say(rdf::TYPE, Term::iri(pcdm::OBJECT));

        for creator in &self.creators {
            say(dc::CREATOR, Term::string(creator));
        }
        for city in &self.cities {
            say(exterms::INVENTOR_CITY, Term::string(city));
        }
        for state in &self.states {
            say(exterms::INVENTOR_STATE, Term::string(state));
        }
        for country in &self.countries {
            say(exterms::INVENTOR_COUNTRY, Term::string(country));
        }
        g
    }
}

/// The scanned document (`pcdm:File`)
#[derive(Clone, Debug, PartialEq)]
pub struct PatentFile {
    pub file_name: String,
    pub pages: Option<i64>,
    pub scan_date: Option<DateValue>,
}

impl PatentFile {
    pub fn from_record(record: &MetadataRecord) -> Result<Self, RecordError> {
        let file_name = record
            .asset_filename()
            .ok_or(RecordError::MissingField("image_url"))?;
        let pages = record.non_empty("pages").map(parse_pages).transpose()?;
        let scan_date = record
            .non_empty("scan_date")
            .map(|v| DateValue::parse("scan_date", v))
            .transpose()?;
        Ok(Self {
            file_name,
            pages,
            scan_date,
        })
    }
}

impl GraphBuildable for PatentFile {
    fn graph(&self) -> Graph {
        let mut g = Graph::with_prefixes(NAMESPACE_BINDINGS);
        let mut say = |predicate: &str, object: Term| {
            g.add_triple(Term::placeholder(), Term::iri(predicate), object);
        };

        if let Some(pages) = self.pages {
            say(exterms::EXTENT, Term::integer(pages));
        }
        if let Some(scan_date) = &self.scan_date {
            say(exterms::SCAN_DATE, scan_date.term());
        }
        say(exterms::FILE_NAME, Term::string(&self.file_name));
        say(rdf::TYPE, Term::iri(pcdm::FILE));
        g
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn parse_year(value: &str) -> Result<i32, RecordError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|y| (1..=9999).contains(y))
        .ok_or_else(|| RecordError::InvalidField {
            field: "year",
            value: value.to_string(),
            reason: "expected a four-digit year".to_string(),
        })
}

fn parse_pages(value: &str) -> Result<i64, RecordError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| RecordError::InvalidField {
            field: "pages",
            value: value.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}
