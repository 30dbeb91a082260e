//! Log-to-outcome transform.
//!
//! Turns raw application log lines into a structured per-line list plus a
//! severity summary. Lines outside the grammar are skipped, never fatal.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::domain::report::{ItemValue, Report, ReportError, TestResult};

/// `<yyyy-MM-dd HH:mm:ss,SSS> <logger> <LEVEL> [,] <message>`
static LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3})\s+([\w.]+)\s+(INFO|WARN|ERROR|DEBUG|TRACE)\s+(?:,\s*)?(.*)$",
    )
    .expect("log line grammar is a valid regex")
});

/// Report item holding the structured per-line list.
pub const LOGS_ITEM: &str = "logs";

/// Report item holding the severity summary.
pub const LOG_STATS_ITEM: &str = "log_stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    Trace,
}

impl LogLevel {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            "DEBUG" => Some(LogLevel::Debug),
            "TRACE" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One log line that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
    pub full_log: String,
}

impl LogEntry {
    /// Parses a single line; `None` if it does not match the grammar.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = LOG_LINE.captures(line)?;
        Some(Self {
            timestamp: caps[1].to_string(),
            logger: caps[2].to_string(),
            level: LogLevel::parse(&caps[3])?,
            message: caps[4].to_string(),
            full_log: line.to_string(),
        })
    }

    fn to_item(&self) -> ItemValue {
        ItemValue::map([
            ("timestamp", ItemValue::text(&self.timestamp)),
            ("logger", ItemValue::text(&self.logger)),
            ("level", ItemValue::text(self.level.as_str())),
            ("message", ItemValue::text(&self.message)),
            ("full_log", ItemValue::text(&self.full_log)),
        ])
    }
}

/// Per-severity tallies of the structured entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub error_count: u64,
    pub warn_count: u64,
    pub info_count: u64,
    pub debug_count: u64,
    pub trace_count: u64,
    /// Line count reported by the evidence source, not recomputed.
    pub total_count: u64,
    pub skipped_count: u64,
}

impl LogStats {
    fn record(&mut self, level: LogLevel) {
        match level {
            LogLevel::Error => self.error_count += 1,
            LogLevel::Warn => self.warn_count += 1,
            LogLevel::Info => self.info_count += 1,
            LogLevel::Debug => self.debug_count += 1,
            LogLevel::Trace => self.trace_count += 1,
        }
    }

    fn to_item(self) -> ItemValue {
        ItemValue::map([
            ("error_count", ItemValue::from(self.error_count)),
            ("warn_count", ItemValue::from(self.warn_count)),
            ("info_count", ItemValue::from(self.info_count)),
            ("debug_count", ItemValue::from(self.debug_count)),
            ("trace_count", ItemValue::from(self.trace_count)),
            ("total_count", ItemValue::from(self.total_count)),
            ("skipped_count", ItemValue::from(self.skipped_count)),
        ])
    }
}

/// Structured outcome of a log analysis, prior to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOutcome {
    pub result: TestResult,
    pub entries: Vec<LogEntry>,
    pub stats: LogStats,
}

impl LogOutcome {
    /// Renders the outcome as a report with `logs` and `log_stats` items.
    pub fn into_report(self) -> Result<Report, ReportError> {
        Report::builder(self.result)
            .item(
                LOGS_ITEM,
                ItemValue::list(self.entries.iter().map(LogEntry::to_item)),
            )
            .item(LOG_STATS_ITEM, self.stats.to_item())
            .build()
    }
}

/// Analyzes `lines`, setting the outcome from `successful` and carrying
/// `total_count` through unchanged.
pub fn analyze_logs<S: AsRef<str>>(successful: bool, total_count: u64, lines: &[S]) -> LogOutcome {
    let mut stats = LogStats {
        total_count,
        ..LogStats::default()
    };
    let mut entries = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        match LogEntry::parse(line) {
            Some(entry) => {
                tracing::debug!(level = %entry.level, logger = %entry.logger, "Parsed log line");
                stats.record(entry.level);
                entries.push(entry);
            }
            None => {
                tracing::warn!(
                    line = %line,
                    "Log line does not carry timestamp, logger and level; skipping"
                );
                stats.skipped_count += 1;
            }
        }
    }

    LogOutcome {
        result: TestResult::from_success(successful),
        entries,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let entry = LogEntry::parse("2024-01-01 00:00:00,000 com.x.Y INFO hello").unwrap();
        assert_eq!(entry.timestamp, "2024-01-01 00:00:00,000");
        assert_eq!(entry.logger, "com.x.Y");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "hello");
        assert_eq!(entry.full_log, "2024-01-01 00:00:00,000 com.x.Y INFO hello");
    }

    #[test]
    fn leading_comma_is_not_part_of_message() {
        let entry =
            LogEntry::parse("2024-01-01 10:11:12,345 eu.issuer.Offer WARN , offer expired").unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.message, "offer expired");
    }

    #[test]
    fn rejects_line_without_timestamp() {
        assert!(LogEntry::parse("com.x.Y INFO hello").is_none());
        assert!(LogEntry::parse("garbage").is_none());
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(LogEntry::parse("2024-01-01 00:00:00,000 com.x.Y FATAL boom").is_none());
    }

    #[test]
    fn malformed_line_is_skipped_not_fatal() {
        let outcome = analyze_logs(
            true,
            2,
            &["2024-01-01 00:00:00,000 com.x.Y INFO hello", "garbage"],
        );

        assert_eq!(outcome.result, TestResult::Success);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].level, LogLevel::Info);
        assert_eq!(
            outcome.stats,
            LogStats {
                info_count: 1,
                total_count: 2,
                skipped_count: 1,
                ..LogStats::default()
            }
        );
    }

    #[test]
    fn tallies_every_severity() {
        let lines = [
            "2024-01-01 00:00:00,000 a ERROR e",
            "2024-01-01 00:00:00,001 a WARN w",
            "2024-01-01 00:00:00,002 a DEBUG d",
            "2024-01-01 00:00:00,003 a TRACE t",
            "2024-01-01 00:00:00,004 a ERROR e2",
        ];
        let outcome = analyze_logs(false, 5, &lines);

        assert_eq!(outcome.result, TestResult::Failure);
        assert_eq!(outcome.stats.error_count, 2);
        assert_eq!(outcome.stats.warn_count, 1);
        assert_eq!(outcome.stats.debug_count, 1);
        assert_eq!(outcome.stats.trace_count, 1);
        assert_eq!(outcome.stats.info_count, 0);
    }

    #[test]
    fn report_has_logs_and_stats_items() {
        let report = analyze_logs(
            true,
            2,
            &["2024-01-01 00:00:00,000 com.x.Y INFO hello", "garbage"],
        )
        .into_report()
        .unwrap();

        assert_eq!(report.result(), TestResult::Success);
        assert_eq!(report.items().len(), 2);

        let logs = report.item(LOGS_ITEM).unwrap();
        assert_eq!(logs.children().len(), 1);
        assert_eq!(
            logs.children()[0].child("level").and_then(|c| c.as_text()),
            Some("INFO")
        );

        let stats = report.item(LOG_STATS_ITEM).unwrap();
        let count = |name: &str| stats.child(name).and_then(|c| c.as_text()).unwrap().to_string();
        assert_eq!(count("info_count"), "1");
        assert_eq!(count("warn_count"), "0");
        assert_eq!(count("error_count"), "0");
        assert_eq!(count("debug_count"), "0");
        assert_eq!(count("trace_count"), "0");
        assert_eq!(count("total_count"), "2");
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let lines: [&str; 0] = [];
        let outcome = analyze_logs(true, 0, &lines);
        assert!(outcome.entries.is_empty());
        assert_eq!(outcome.stats, LogStats::default());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn line() -> impl Strategy<Value = String> {
            prop_oneof![
                ("[a-z.]{1,12}", "(INFO|WARN|ERROR|DEBUG|TRACE)", "[ -~]{0,20}")
                    .prop_map(|(logger, level, msg)| format!(
                        "2024-05-06 07:08:09,010 {} {} {}",
                        logger, level, msg
                    )),
                "[ -~]{0,30}",
            ]
        }

        proptest! {
            #[test]
            fn every_line_is_an_entry_or_skipped(lines in prop::collection::vec(line(), 0..20)) {
                let outcome = analyze_logs(true, lines.len() as u64, &lines);
                let s = &outcome.stats;
                let tallied = s.error_count + s.warn_count + s.info_count + s.debug_count + s.trace_count;

                prop_assert_eq!(outcome.entries.len() as u64, tallied);
                prop_assert_eq!(tallied + s.skipped_count, lines.len() as u64);
            }
        }
    }
}
