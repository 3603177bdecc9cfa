//! Query output layer: byte-compatible text lines or stable JSON.

use std::io::{self, Write};

use serde_json::json;
use waybill_core::sim::QueryReply;

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text, byte-compatible with the original console format.
    Text,
    /// One JSON object per query result.
    Json,
}

/// Write one query reply in the selected mode.
pub fn write_reply(
    out: &mut impl Write,
    reply: &QueryReply<'_>,
    mode: OutputMode,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => write_text(out, reply),
        OutputMode::Json => write_json(out, reply),
    }
}

/// Echo line, match count, then one rendered line per event.
fn write_text(out: &mut impl Write, reply: &QueryReply<'_>) -> io::Result<()> {
    match reply {
        QueryReply::ParcelHistory {
            time,
            parcel,
            events,
        } => {
            writeln!(out, "{time:06} PC {parcel:03}")?;
            writeln!(out, "{}", events.len())?;
            for event in events {
                writeln!(out, "{event}")?;
            }
        }
        QueryReply::ClientSummary {
            time,
            client,
            events,
        } => {
            writeln!(out, "{time:06} CL {client}")?;
            writeln!(out, "{}", events.len())?;
            for event in events {
                writeln!(out, "{event}")?;
            }
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, reply: &QueryReply<'_>) -> io::Result<()> {
    let object = match reply {
        QueryReply::ParcelHistory {
            time,
            parcel,
            events,
        } => json!({
            "query": "parcel",
            "ts": time,
            "parcel": parcel,
            "count": events.len(),
            "events": events,
        }),
        QueryReply::ClientSummary {
            time,
            client,
            events,
        } => json!({
            "query": "client",
            "ts": time,
            "client": client,
            "count": events.len(),
            "events": events,
        }),
    };
    writeln!(out, "{object}")
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, write_reply};
    use waybill_core::sim::QueryReply;
    use waybill_core::{Event, EventKind};

    fn sample_event() -> Event {
        Event {
            time: 1,
            kind: EventKind::Register,
            parcel: 0,
            sender: Some("n00001".into()),
            receiver: Some("n00002".into()),
            origin: Some(1),
            destination: Some(2),
            section: None,
        }
    }

    #[test]
    fn text_parcel_reply_matches_the_wire_format() {
        let event = sample_event();
        let reply = QueryReply::ParcelHistory {
            time: 5,
            parcel: 0,
            events: vec![&event],
        };
        let mut buffer = Vec::new();
        write_reply(&mut buffer, &reply, OutputMode::Text).expect("write succeeds");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8 output"),
            "000005 PC 000\n1\n0000001 EV RG 000 n00001 n00002 001 002\n"
        );
    }

    #[test]
    fn text_client_reply_does_not_pad_the_name() {
        let reply = QueryReply::ClientSummary {
            time: 12,
            client: "n00042".to_string(),
            events: vec![],
        };
        let mut buffer = Vec::new();
        write_reply(&mut buffer, &reply, OutputMode::Text).expect("write succeeds");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8 output"),
            "000012 CL n00042\n0\n"
        );
    }

    #[test]
    fn json_reply_is_one_parsable_object_per_line() {
        let event = sample_event();
        let reply = QueryReply::ParcelHistory {
            time: 5,
            parcel: 0,
            events: vec![&event],
        };
        let mut buffer = Vec::new();
        write_reply(&mut buffer, &reply, OutputMode::Json).expect("write succeeds");
        let value: serde_json::Value =
            serde_json::from_slice(&buffer).expect("valid JSON");
        assert_eq!(value["query"], "parcel");
        assert_eq!(value["count"], 1);
        assert_eq!(value["events"][0]["kind"], "RG");
        assert_eq!(value["events"][0]["sender"], "n00001");
    }
}
