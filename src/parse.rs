use regex::Regex;
use std::sync::OnceLock;

/// The two fields of an access-log line that feed the running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub status_code: String,
    pub file_size: u64,
}

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Fixed access-log line shape:
///   <client> [<YYYY-MM-DD HH:MM:SS.ffffff>] - "<request>" <status> <size>
/// Anchored at both ends; a partial match is no match.
fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(
            r#"^\s*(?P<client>\S+)\s+\[(?P<timestamp>\d+-\d+-\d+ \d+:\d+:\d+\.\d+)\]\s*-\s*"(?P<request>[^"]*)"\s*(?P<status>\S+)\s+(?P<size>\d+)\s*$"#,
        )
        .expect("line pattern is valid")
    })
}

/// Extract the status code and file size from one log line.
///
/// `None` means the line is unmatched: it contributes zero bytes and no
/// status count. A size field too large for u64 is treated the same way.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = line_pattern().captures(line)?;
    let file_size = caps["size"].parse::<u64>().ok()?;
    Some(LogRecord {
        status_code: caps["status"].to_string(),
        file_size,
    })
}
