use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A single field value of a `Record`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Date(DateTime<FixedOffset>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Value::Date(d)
    }
}

/// A row of input data: named fields mapped to values.
///
/// Records are built once (see `Record::with`) and only read afterwards.
/// Converting text into numbers or dates is an explicit step done through
/// `number` and `date`, never implicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `field` set to `value`.
    pub fn with<V: Into<Value>>(mut self, field: &str, value: V) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text content of `field`, if it holds text.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric content of `field`.
    ///
    /// Text is trimmed and parsed as a float.  Missing fields, dates and text
    /// that does not parse yield `None`.  A successfully parsed value may still
    /// be non-finite ("inf", "NaN"); rejecting those is up to the consumer.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Value::Number(n) => Some(*n),
            Value::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => Some(n),
                Err(parse_error) => {
                    debug!("Cannot parse float ({}) at '{}'", parse_error, s);
                    None
                }
            },
            Value::Date(_) => None,
        }
    }

    /// Date content of `field`.
    ///
    /// Text is parsed with `format` (chrono syntax), either as a full date-time
    /// or as a date at midnight.  Parsed values are taken to be in UTC.
    pub fn date(&self, field: &str, format: &str) -> Option<DateTime<FixedOffset>> {
        match self.fields.get(field)? {
            Value::Date(d) => Some(*d),
            Value::Text(s) => parse_naive(s.trim(), format)
                .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset()),
            Value::Number(_) => None,
        }
    }
}

fn parse_naive(s: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
        return Some(naive);
    }
    match NaiveDate::parse_from_str(s, format) {
        Ok(date) => date.and_hms_opt(0, 0, 0),
        Err(parse_error) => {
            debug!("Cannot parse date ({}) at '{}'", parse_error, s);
            None
        }
    }
}
