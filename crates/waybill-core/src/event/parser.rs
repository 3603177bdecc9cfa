//! Log line parser.
//!
//! Parses one whitespace-separated log line into a typed [`Record`]: an
//! event (`EV`), a parcel query (`PC`), or a client query (`CL`). Blank
//! lines and record verbs the grammar defines but nothing consumes (`MA`,
//! `RC`) are classified rather than parsed, so the replay loop decides how
//! to skip them.
//!
//! Error discipline: a malformed field yields a recoverable
//! [`ParseError`]; an unknown event-type token yields
//! [`ParseError::UnknownEventKind`], which callers treat as fatal.

use std::str::FromStr;

use super::Event;
use super::types::{EventKind, UnknownEventKind};

/// Errors from parsing a single log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line ended before a required field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// The leading timestamp is not a valid integer.
    #[error("invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    /// A numeric field is not a valid integer.
    #[error("invalid {field} field: '{raw}'")]
    InvalidNumber {
        /// Field name, as used in the grammar.
        field: &'static str,
        /// The raw token.
        raw: String,
    },

    /// The event-type token is not a known wire code. Fatal to the run.
    #[error(transparent)]
    UnknownEventKind(#[from] UnknownEventKind),
}

/// One successfully parsed log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// An event to ingest.
    Event(Event),
    /// "History of parcel" query.
    ParcelQuery {
        /// Query timestamp (echoed in the output header).
        time: i64,
        /// Parcel id to report on.
        parcel: u32,
    },
    /// "Summary for client" query.
    ClientQuery {
        /// Query timestamp (echoed in the output header).
        time: i64,
        /// Client name to report on.
        client: String,
    },
}

/// Classification of one raw log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or whitespace-only line.
    Blank,
    /// A record verb with no handler (`MA`, `RC`); skipped by the replay
    /// loop.
    Unsupported {
        /// The verb token.
        verb: String,
    },
    /// A parsed record.
    Record(Record),
}

/// Parse one log line.
///
/// # Errors
///
/// Returns a [`ParseError`] when the line matches a known verb but a field
/// is missing or malformed, or when an `EV` line carries an unknown event
/// type.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let mut fields = line.split_whitespace();
    let Some(ts_field) = fields.next() else {
        return Ok(ParsedLine::Blank);
    };
    let time: i64 = ts_field
        .parse()
        .map_err(|_| ParseError::InvalidTimestamp(ts_field.to_string()))?;
    let verb = fields
        .next()
        .ok_or(ParseError::MissingField("record verb"))?;

    match verb {
        "EV" => parse_event(time, &mut fields).map(|event| ParsedLine::Record(Record::Event(event))),
        "PC" => {
            let parcel = parse_number("parcel id", &mut fields)?;
            Ok(ParsedLine::Record(Record::ParcelQuery { time, parcel }))
        }
        "CL" => {
            let client = fields
                .next()
                .ok_or(ParseError::MissingField("client name"))?;
            Ok(ParsedLine::Record(Record::ClientQuery {
                time,
                client: client.to_string(),
            }))
        }
        other => Ok(ParsedLine::Unsupported {
            verb: other.to_string(),
        }),
    }
}

fn parse_event<'a, I>(time: i64, fields: &mut I) -> Result<Event, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let code = fields.next().ok_or(ParseError::MissingField("event type"))?;
    let kind = EventKind::from_str(code)?;
    let parcel = parse_number("parcel id", fields)?;

    let mut event = Event {
        time,
        kind,
        parcel,
        sender: None,
        receiver: None,
        origin: None,
        destination: None,
        section: None,
    };
    match kind {
        EventKind::Register => {
            event.sender = Some(
                fields
                    .next()
                    .ok_or(ParseError::MissingField("sender"))?
                    .to_string(),
            );
            event.receiver = Some(
                fields
                    .next()
                    .ok_or(ParseError::MissingField("receiver"))?
                    .to_string(),
            );
            event.origin = Some(parse_number("origin warehouse", fields)?);
            event.destination = Some(parse_number("destination warehouse", fields)?);
        }
        EventKind::ArriveWarehouse => {
            event.origin = Some(parse_number("origin warehouse", fields)?);
            event.destination = Some(parse_number("destination warehouse", fields)?);
            event.section = Some(parse_number("destination section", fields)?);
        }
        EventKind::RemoveFromWarehouse | EventKind::UnloadRoute | EventKind::TransferRoute => {
            event.origin = Some(parse_number("origin warehouse", fields)?);
            event.destination = Some(parse_number("destination warehouse", fields)?);
        }
        EventKind::Enqueue => {
            event.destination = Some(parse_number("destination warehouse", fields)?);
        }
    }
    Ok(event)
}

fn parse_number<'a, I, N>(field: &'static str, fields: &mut I) -> Result<N, ParseError>
where
    I: Iterator<Item = &'a str>,
    N: FromStr,
{
    let raw = fields.next().ok_or(ParseError::MissingField(field))?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        raw: raw.to_string(),
    })
}
