use super::{Record, ScheduleError};

/// Header whose cell decides whether a row is a real schedule entry.
pub const EVENT_COLUMN: &str = "Event";

/// Split the raw sheet export into records keyed by the names on the
/// designated header line (1-indexed).
///
/// Cells are split on bare commas; commas inside quoted values are not
/// supported. Rows shorter than the header map the missing headers to empty
/// text, extra cells beyond the header count are dropped. Rows whose
/// `Event` cell is blank are spacer rows in the sheet and are filtered out.
pub fn parse_records(raw: &str, header_row: usize) -> Result<Vec<Record>, ScheduleError> {
    let body = raw.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<&str> = body.split('\n').collect();
    if header_row > lines.len() {
        return Err(ScheduleError::InvalidInput(format!(
            "headerRow {} is out of range: sheet has {} line(s)",
            header_row,
            lines.len()
        )));
    }

    let headers: Vec<String> = lines[header_row - 1]
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let records = lines[header_row..]
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split(',').map(|c| c.trim()).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    (header.clone(), cells.get(i).copied().unwrap_or("").to_string())
                })
                .collect::<Record>()
        })
        .filter(has_event)
        .collect();

    Ok(records)
}

fn has_event(record: &Record) -> bool {
    record
        .get(EVENT_COLUMN)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn maps_rows_and_drops_blank_events() {
        let records = parse_records("Event,Date\nShow,Jan1\n,Jan2", 1).unwrap();
        assert_eq!(records, vec![record(&[("Event", "Show"), ("Date", "Jan1")])]);
    }

    #[test]
    fn empty_payload_is_empty_not_an_error() {
        assert!(parse_records("", 1).unwrap().is_empty());
        assert!(parse_records("  \n  ", 1).unwrap().is_empty());
    }

    #[test]
    fn header_row_past_the_last_line_is_invalid_input() {
        let err = parse_records("Event,Date\nShow,Jan1", 3).unwrap_err();
        match err {
            ScheduleError::InvalidInput(msg) => assert!(msg.contains("out of range")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn short_rows_fill_missing_headers_with_empty_text() {
        let records = parse_records("Event,Date,Location\nShow,Jan1", 1).unwrap();
        assert_eq!(
            records,
            vec![record(&[("Event", "Show"), ("Date", "Jan1"), ("Location", "")])]
        );
    }

    #[test]
    fn extra_cells_beyond_the_header_are_dropped() {
        let records = parse_records("Event,Date\nShow,Jan1,overflow,more", 1).unwrap();
        assert_eq!(records, vec![record(&[("Event", "Show"), ("Date", "Jan1")])]);
    }

    #[test]
    fn headers_and_cells_are_trimmed() {
        let records = parse_records("  Event , Date \n  Show ,  Jan1  ", 1).unwrap();
        assert_eq!(records, vec![record(&[("Event", "Show"), ("Date", "Jan1")])]);
    }

    #[test]
    fn crlf_line_endings_trim_away() {
        let records = parse_records("Event,Date\r\nShow,Jan1\r\n,Jan2\r\n", 1).unwrap();
        assert_eq!(records, vec![record(&[("Event", "Show"), ("Date", "Jan1")])]);
    }

    #[test]
    fn header_row_after_a_preamble_skips_the_preamble() {
        // The production sheet carries nine banner lines above the header.
        let raw = "Bellingham Folk Festival\n,,\nEvent,Date\nShow,Jan1\nJam,Jan2";
        let records = parse_records(raw, 3).unwrap();
        assert_eq!(
            records,
            vec![
                record(&[("Event", "Show"), ("Date", "Jan1")]),
                record(&[("Event", "Jam"), ("Date", "Jan2")]),
            ]
        );
    }

    #[test]
    fn rows_without_an_event_header_at_all_are_dropped() {
        let records = parse_records("Name,Date\nShow,Jan1", 1).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn record_count_matches_lines_minus_header_minus_blank_events() {
        let raw = "Event,Date\nA,1\n,2\nB,3\n ,4\nC,5";
        let records = parse_records(raw, 1).unwrap();
        assert_eq!(records.len(), 3);
        let names: Vec<&str> = records.iter().map(|r| r["Event"].as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
