use crate::parse::LogRecord;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Status codes tracked for counting, in ascending lexicographic order.
pub const TRACKED_CODES: [&str; 8] = ["200", "301", "400", "401", "403", "404", "405", "500"];

/// Running aggregates over all lines consumed so far.
///
/// Byte sizes accumulate for every matched line whether or not its status
/// code is tracked; per-code counts move only for the eight tracked codes.
/// The asymmetry is intentional and must stay.
#[derive(Default)]
pub struct Totals {
    pub total_file_size: u64,
    counts: [u64; 8],
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line's parse result into the aggregates. `None` (an
    /// unmatched line) contributes zero bytes and no count.
    pub fn apply(&mut self, record: Option<LogRecord>) {
        let Some(record) = record else { return };
        self.total_file_size = self.total_file_size.saturating_add(record.file_size);
        if let Some(idx) = TRACKED_CODES.iter().position(|c| *c == record.status_code) {
            self.counts[idx] += 1;
        }
    }

    pub fn count(&self, code: &str) -> u64 {
        TRACKED_CODES
            .iter()
            .position(|c| *c == code)
            .map(|idx| self.counts[idx])
            .unwrap_or(0)
    }

    pub fn tracked_hits(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Non-zero (code, count) pairs, ascending by code.
    fn nonzero(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        TRACKED_CODES
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, n)| **n > 0)
            .map(|(code, n)| (*code, *n))
    }

    /// Write the human report: the byte total, then one line per non-zero
    /// tracked code. Flushed so reports land immediately even when piped.
    pub fn write_report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "File size: {}", self.total_file_size)?;
        for (code, count) in self.nonzero() {
            writeln!(out, "{code}: {count}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the same report point as one JSON object per line.
    pub fn write_json_report(&self, out: &mut impl Write) -> Result<()> {
        let snapshot = Snapshot {
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_file_size: self.total_file_size,
            status_codes: self.nonzero().collect(),
        };
        serde_json::to_writer(&mut *out, &snapshot)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Snapshot {
    generated_at: String,
    total_file_size: u64,
    status_codes: BTreeMap<&'static str, u64>,
}
