//! The festival page's section layout and its production sheet coordinates.

use crate::expand::SectionTree;
use crate::schedule::{rows::EVENT_COLUMN, Record};

/// Published spreadsheet backing the schedule.
pub const FESTIVAL_SHEET_ID: &str = "1ELrjMXnCNGgzCFMhRU6IeGp6hkaua_WECATAvRdBubM";
pub const FESTIVAL_GID: &str = "0";

/// The schedule tab carries nine banner lines above the column names.
pub const SCHEDULE_HEADER_ROW: usize = 10;

/// Columns shown in an event's detail block, in display order.
pub const EVENT_DETAIL_COLUMNS: [&str; 4] = ["Organizer", "Date & Time", "Location", "Price"];

/// The page's collapsible sections: Learn and Attend nest children,
/// Organize is a single block of prose.
pub fn festival_sections() -> SectionTree {
    let mut tree = SectionTree::new();

    tree.add_root("learn", "Learn");
    tree.add_child("learn", "what", "What it is");
    tree.add_child("learn", "when", "When it is");
    tree.add_child("learn", "where", "Where it is");

    tree.add_root("organize", "Organize");

    tree.add_root("attend", "Attend");
    tree.add_child("attend", "thursday", "Thursday");
    tree.add_child("attend", "friday", "Friday");

    tree
}

/// Append one section per schedule record under the day section `day_id`,
/// titled by the record's `Event` cell. Returns the new identifiers in
/// record order.
pub fn attach_events(tree: &mut SectionTree, day_id: &str, events: &[Record]) -> Vec<String> {
    events
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let title = record.get(EVENT_COLUMN)?;
            let slug = format!("event{}", i + 1);
            let node = tree.add_child(day_id, &slug, title)?;
            Some(tree.identifier(node).to_string())
        })
        .collect()
}

/// Detail lines for one event in display order; columns the sheet lacks
/// render as empty text.
pub fn event_details(record: &Record) -> Vec<(&'static str, &str)> {
    EVENT_DETAIL_COLUMNS
        .iter()
        .map(|&column| (column, record.get(column).map(String::as_str).unwrap_or("")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpansionState;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn page_sections_match_the_published_layout() {
        let tree = festival_sections();
        for id in [
            "learn",
            "learn-what",
            "learn-when",
            "learn-where",
            "organize",
            "attend",
            "attend-thursday",
            "attend-friday",
        ] {
            assert!(tree.lookup(id).is_some(), "missing section `{id}`");
        }
        let what = tree.lookup("learn-what").unwrap();
        assert_eq!(tree.title(what), "What it is");
    }

    #[test]
    fn events_attach_under_their_day() {
        let mut tree = festival_sections();
        let events = vec![
            record(&[("Event", "Square Dance"), ("Location", "Grange Hall")]),
            record(&[("Event", "Song Circle")]),
        ];
        let ids = attach_events(&mut tree, "attend-thursday", &events);
        assert_eq!(ids, ["attend-thursday-event1", "attend-thursday-event2"]);

        let first = tree.lookup("attend-thursday-event1").unwrap();
        assert_eq!(tree.title(first), "Square Dance");
    }

    #[test]
    fn attached_events_participate_in_the_accordion() {
        let mut tree = festival_sections();
        let events = vec![record(&[("Event", "Square Dance")])];
        attach_events(&mut tree, "attend-friday", &events);

        let mut state = ExpansionState::new();
        state.toggle(&tree, "attend-friday-event1");
        assert!(state.is_expanded("attend"));
        assert!(state.is_expanded("attend-friday"));
        assert!(state.is_expanded("attend-friday-event1"));
        assert!(!state.is_expanded("attend-thursday"));
    }

    #[test]
    fn detail_lines_keep_display_order_and_fill_gaps() {
        let event = record(&[
            ("Event", "Square Dance"),
            ("Organizer", "Grange"),
            ("Price", "Free"),
        ]);
        assert_eq!(
            event_details(&event),
            vec![
                ("Organizer", "Grange"),
                ("Date & Time", ""),
                ("Location", ""),
                ("Price", "Free"),
            ]
        );
    }
}
