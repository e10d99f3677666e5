//! One JSON object per line, for log collectors.
//!
//! Result records carry `timestamp`, `test_type`, `target` and `status`, with the
//! probe detail fields merged in flat. Section boundaries are
//! `{"event_type": "section_start", ...}` records.

use std::io::Write;

use chrono::Local;
use reachr_common::network::target::Target;
use reachr_common::probe::outcome::{Detail, ProbeOutcome};
use reachr_common::report::{ReportResult, Reporter, Section};
use serde_json::{Map, Value, json};

pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, record: &Value) -> ReportResult {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn section_start(&mut self, section: Section) -> ReportResult {
        let record: Value = json!({
            "timestamp": timestamp(),
            "event_type": "section_start",
            "section": section.name(),
        });
        self.emit(&record)
    }

    fn report(&mut self, target: &Target, outcome: &ProbeOutcome) -> ReportResult {
        let mut record: Map<String, Value> = Map::new();
        record.insert("timestamp".into(), Value::from(timestamp()));
        record.insert("test_type".into(), Value::from(outcome.kind().as_str()));
        record.insert("target".into(), Value::from(target.to_string()));
        record.insert(
            "status".into(),
            Value::from(if outcome.succeeded() { "pass" } else { "fail" }),
        );
        record.extend(detail_fields(outcome)?);

        self.emit(&Value::Object(record))
    }
}

fn detail_fields(outcome: &ProbeOutcome) -> Result<Map<String, Value>, serde_json::Error> {
    let value: Value = match outcome.detail() {
        Detail::Tcp => return Ok(Map::new()),
        Detail::Http(http) => serde_json::to_value(http)?,
        Detail::Dns(dns) => serde_json::to_value(dns)?,
    };

    match value {
        Value::Object(fields) => Ok(fields),
        _ => Ok(Map::new()),
    }
}

fn timestamp() -> String {
    Local::now().to_rfc3339()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
