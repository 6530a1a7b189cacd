// datacheck-core/src/domain/dataset.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::fmt;

/// Markers read as a missing value, on top of the empty cell.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Runtime type of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    Integer,
    Float,
    Timestamp,
    String,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Timestamp => "timestamp",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell interpreted with its most specific type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
    String(&'a str),
}

impl Value<'_> {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::String(_) => ValueType::String,
        }
    }
}

/// Infers the runtime type of a raw CSV cell.
///
/// Order matters: `"1"` is an integer before it is a float, and
/// `"2021-05-12"` is a timestamp rather than a string.
pub fn infer(raw: &str) -> Value<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NULL_MARKERS.contains(&trimmed) {
        return Value::Null;
    }
    match trimmed {
        "true" | "True" | "TRUE" => return Value::Boolean(true),
        "false" | "False" | "FALSE" => return Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Integer(i);
    }
    // `f64::from_str` also accepts "inf" and "infinity"
    if trimmed.bytes().any(|b| b.is_ascii_digit())
        && let Ok(f) = trimmed.parse::<f64>()
    {
        return Value::Float(f);
    }
    if let Some(ts) = parse_timestamp(trimmed) {
        return Value::Timestamp(ts);
    }
    Value::String(raw)
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    cells: Vec<String>,
}

impl Column {
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Column-major, immutable view of a tabular file.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    row_count: usize,
}

impl Dataset {
    /// Builds a dataset from a header and row-major records.
    ///
    /// Records shorter than the header are padded with empty cells; extra
    /// trailing cells are dropped.
    pub fn from_rows<I, R>(names: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = String>,
    {
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();

        let mut row_count = 0;
        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(cells.next().unwrap_or_default());
            }
            row_count += 1;
        }

        // First occurrence wins on duplicated header names
        let mut index = HashMap::new();
        for (i, column) in columns.iter().enumerate() {
            index.entry(column.name.clone()).or_insert(i);
        }

        Self {
            columns,
            index,
            row_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
