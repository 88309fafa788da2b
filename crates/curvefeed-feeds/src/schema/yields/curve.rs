//! Daily par-yield CSV, one file per calendar year.
//!
//! Treasury publishes a header row naming a `Date` column plus one column
//! per quoted maturity; numeric cells may be quoted and are frequently
//! blank. Rows come out with every gap filled so downstream consumers never
//! see a missing rate.

use chrono::{Datelike, NaiveDate, Weekday};
use csv::StringRecord;

use crate::api::FeedError;
use crate::schema::common::round2;

/// The quoted Treasury tenors, in curve order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maturity {
    M1,
    M2,
    M3,
    M4,
    M6,
    Y1,
    Y2,
    Y3,
    Y5,
    Y7,
    Y10,
    Y20,
    Y30,
}

impl Maturity {
    pub const COUNT: usize = 13;

    pub const ALL: [Maturity; Maturity::COUNT] = [
        Maturity::M1,
        Maturity::M2,
        Maturity::M3,
        Maturity::M4,
        Maturity::M6,
        Maturity::Y1,
        Maturity::Y2,
        Maturity::Y3,
        Maturity::Y5,
        Maturity::Y7,
        Maturity::Y10,
        Maturity::Y20,
        Maturity::Y30,
    ];

    /// Column label as it appears in the Treasury header row.
    pub fn label(self) -> &'static str {
        match self {
            Maturity::M1 => "1 Mo",
            Maturity::M2 => "2 Mo",
            Maturity::M3 => "3 Mo",
            Maturity::M4 => "4 Mo",
            Maturity::M6 => "6 Mo",
            Maturity::Y1 => "1 Yr",
            Maturity::Y2 => "2 Yr",
            Maturity::Y3 => "3 Yr",
            Maturity::Y5 => "5 Yr",
            Maturity::Y7 => "7 Yr",
            Maturity::Y10 => "10 Yr",
            Maturity::Y20 => "20 Yr",
            Maturity::Y30 => "30 Yr",
        }
    }
}

/// A row needs at least this many of the 13 maturities quoted to survive;
/// anything sparser is dropped.
const MIN_QUOTED: usize = 10;

/// One trading day's curve, gaps already filled.
///
/// `weekday` only exists for the weekly sampler and is absent from the
/// serialized output type.
#[derive(Debug, Clone)]
pub struct YieldRow {
    pub date: NaiveDate,
    pub label: String,
    pub rates: [f64; Maturity::COUNT],
    pub weekday: Weekday,
}

/// Where each required column sits in this particular file.
struct Columns {
    date: usize,
    maturities: [usize; Maturity::COUNT],
}

fn resolve_columns(header: &StringRecord) -> Result<Columns, FeedError> {
    let find = |label: &'static str| {
        header
            .iter()
            .position(|cell| cell.trim() == label)
            .ok_or(FeedError::MissingColumn(label))
    };

    let mut maturities = [0usize; Maturity::COUNT];
    for maturity in Maturity::ALL {
        maturities[maturity as usize] = find(maturity.label())?;
    }

    Ok(Columns {
        date: find("Date")?,
        maturities,
    })
}

/// Parse one calendar year of the daily par-yield CSV.
///
/// Malformed rows are skipped silently; a header missing any required
/// column rejects the whole file.
pub fn parse_year(text: &str) -> Result<Vec<YieldRow>, FeedError> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header = match reader.headers() {
        Ok(header) => header.clone(),
        Err(_) => return Ok(vec![]),
    };
    let columns = resolve_columns(&header)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else { continue };
        if let Some(row) = parse_row(&record, &columns) {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Option<YieldRow> {
    let date = parse_date(record.get(columns.date)?)?;

    let mut quoted = [None; Maturity::COUNT];
    for (slot, &index) in quoted.iter_mut().zip(&columns.maturities) {
        *slot = record.get(index).and_then(parse_rate);
    }
    if quoted.iter().flatten().count() < MIN_QUOTED {
        return None;
    }

    Some(YieldRow {
        date,
        label: date.format("%b %d, %Y").to_string(),
        rates: fill_gaps(&quoted),
        weekday: date.weekday(),
    })
}

/// Treasury quotes dates as `MM/DD/YYYY`; some exports are already ISO.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

fn parse_rate(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Fill every absent rate by linear interpolation between the nearest quoted
/// neighbours, extending the edge value where only one side exists.
fn fill_gaps(quoted: &[Option<f64>; Maturity::COUNT]) -> [f64; Maturity::COUNT] {
    let mut rates = [0.0; Maturity::COUNT];
    for (j, slot) in rates.iter_mut().enumerate() {
        let value = match quoted[j] {
            Some(value) => value,
            None => {
                let prev = (0..j).rev().find_map(|i| quoted[i].map(|v| (i, v)));
                let next = (j + 1..Maturity::COUNT).find_map(|i| quoted[i].map(|v| (i, v)));
                match (prev, next) {
                    (Some((p, a)), Some((n, b))) => {
                        a + (b - a) * ((j - p) as f64 / (n - p) as f64)
                    }
                    (Some((_, a)), None) => a,
                    (None, Some((_, b))) => b,
                    (None, None) => 0.0,
                }
            }
        };
        *slot = round2(value);
    }
    rates
}
