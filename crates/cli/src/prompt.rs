//! Line-oriented query acquisition and result reporting.
//!
//! Generic over `BufRead`/`Write` so the loop runs against stdin/stdout in
//! the binary and against in-memory buffers in tests.

use peripheral::{PointStore, Query, ValidQuery, VisibilityResult};
use std::io::{self, BufRead, Write};

pub const INTRO: [&str; 2] = [
    "Type in the point number you want to observe, the angle in degrees from the data point towards one side and the distance:",
    "You must leave a space between the values",
];
pub const PROMPT: &str = "Input: ";

/// Prompt until a line validates against `store`.
///
/// Returns `Ok(None)` if input ends first.
pub fn read_query<'s, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &'s PointStore,
) -> io::Result<Option<ValidQuery<'s>>> {
    for line in INTRO {
        writeln!(out, "{line}")?;
    }
    let mut buf = Vec::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("input closed before a valid query");
            return Ok(None);
        }
        // Invalid UTF-8 is a malformed query, not an I/O failure.
        let line = String::from_utf8_lossy(&buf);
        match Query::parse(&line, store) {
            Ok(q) => {
                let query = q.query();
                tracing::info!(
                    ordinal = query.ordinal,
                    source = %q.source().label,
                    half_angle_deg = query.half_angle_deg,
                    max_distance = query.max_distance,
                    "query"
                );
                return Ok(Some(q));
            }
            Err(e) => {
                tracing::debug!(error = ?e, "query_rejected");
                writeln!(out, "{e}")?;
            }
        }
    }
}

/// Print the visible labels, prefixed with the label column name.
pub fn report<W: Write>(
    out: &mut W,
    result: &VisibilityResult,
    label_column: &str,
) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "No visible points")?;
        return Ok(());
    }
    writeln!(out, "Visible Points:")?;
    for label in result.labels() {
        writeln!(out, "{label_column} {label}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peripheral::{visible_points, Direction, Point};
    use std::io::Cursor;

    fn store() -> PointStore {
        PointStore::new(vec![
            Point::new("1", 0.0, 0.0, Some(Direction::East)),
            Point::new("2", 10.0, 0.0, None),
            Point::new("3", 0.0, 10.0, None),
            Point::new("4", 100.0, 0.0, None),
        ])
        .unwrap()
    }

    fn session(input: impl AsRef<[u8]>, store: &PointStore) -> (Option<String>, String) {
        let mut inp = Cursor::new(input.as_ref().to_vec());
        let mut out = Vec::new();
        let q = read_query(&mut inp, &mut out, store).unwrap();
        let mut report_out = String::new();
        if let Some(q) = q {
            let mut buf = Vec::new();
            report(&mut buf, &visible_points(&q), "Number").unwrap();
            report_out = String::from_utf8(buf).unwrap();
        }
        let transcript = String::from_utf8(out).unwrap();
        (Some(report_out).filter(|s| !s.is_empty()), transcript)
    }

    #[test]
    fn reports_visible_points() {
        let (report, transcript) = session("1 10 20\n", &store());
        assert_eq!(report.unwrap(), "Visible Points:\nNumber 2\n");
        assert!(transcript.starts_with(INTRO[0]));
        assert!(transcript.ends_with(PROMPT));
    }

    #[test]
    fn reports_empty_result() {
        let (report, _) = session("1 0 5\n", &store());
        assert_eq!(report.unwrap(), "No visible points\n");
    }

    #[test]
    fn retries_until_valid() {
        let (report, transcript) =
            session("\n1 2\nx y z\n0 10 20\n5 10 20\n1 181 20\n2 10 20\n1 10 200\n", &store());
        let messages: Vec<&str> = transcript
            .split(PROMPT)
            .skip(1)
            .map(str::trim_end)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            messages,
            [
                "Usage: point angle distance",
                "Usage: point angle distance",
                "Error: the inserted values must be positive integers",
                "Error: Data Point number must be between 1 and 4",
                "Error: Data Point number must be between 1 and 4",
                "Error: the maximum value for the angle is 180 degrees",
                "Error: Data Point 3 has no facing direction",
            ]
        );
        // Seven rejections, then one accepted line.
        assert_eq!(transcript.matches(PROMPT).count(), 8);
        assert_eq!(report.unwrap(), "Visible Points:\nNumber 2\nNumber 4\n");
    }

    #[test]
    fn invalid_utf8_line_is_reprompted() {
        let (report, transcript) = session(b"\xff\xfe 1\n1 10 20\n", &store());
        let messages: Vec<&str> = transcript
            .split(PROMPT)
            .skip(1)
            .map(str::trim_end)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(messages, ["Usage: point angle distance"]);
        assert_eq!(report.unwrap(), "Visible Points:\nNumber 2\n");
    }

    #[test]
    fn eof_ends_session_without_query() {
        let (report, transcript) = session("0 1 1\n", &store());
        assert!(report.is_none());
        assert!(transcript.contains("between 1 and 4"));
    }
}
