// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use guildevents_core::Event;

/// Plain-text rendering of events for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct EventFormatter;

impl EventFormatter {
    /// One line per event: id, start, name, organiser.
    pub fn write_list(out: &mut impl Write, events: &[Event]) -> io::Result<()> {
        if events.is_empty() {
            writeln!(out, "No upcoming events. Try `guildevents sync`.")?;
            return Ok(());
        }

        for event in events {
            writeln!(
                out,
                "#{:<4} {}  {} ({})",
                event.id, event.from_date, event.name, event.organiser_name
            )?;
        }
        Ok(())
    }

    /// Everything known about one event.
    pub fn write_detail(out: &mut impl Write, event: &Event) -> io::Result<()> {
        writeln!(out, "{}", event.name)?;
        writeln!(out, "Organised by: {}", event.organiser_name)?;
        writeln!(out, "Starts: {}", event.from_date)?;
        if let Some(location) = &event.location {
            writeln!(out, "Location: {location}")?;
        }
        if let Some(description) = &event.description {
            writeln!(out, "\n{description}")?;
        }
        writeln!(out, "\n{}", event.url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            id: 7,
            url: "https://x/e1".to_string(),
            organiser_id: 1,
            organiser_name: "Chess Club".to_string(),
            name: "Tournament".to_string(),
            from_date: "2024-05-01 18:00:00".to_string(),
            location: Some("Great Hall".to_string()),
            description: Some("Bring your own clock.".to_string()),
        }
    }

    #[test]
    fn list_prints_one_line_per_event() {
        let mut out = Vec::new();
        EventFormatter::write_list(&mut out, &[event()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "#7    2024-05-01 18:00:00  Tournament (Chess Club)\n"
        );
    }

    #[test]
    fn empty_list_suggests_a_sync() {
        let mut out = Vec::new();
        EventFormatter::write_list(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("guildevents sync"));
    }

    #[test]
    fn detail_includes_optional_fields_when_present() {
        let mut out = Vec::new();
        EventFormatter::write_detail(&mut out, &event()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tournament"));
        assert!(text.contains("Organised by: Chess Club"));
        assert!(text.contains("Location: Great Hall"));
        assert!(text.contains("Bring your own clock."));
        assert!(text.contains("https://x/e1"));
    }

    #[test]
    fn detail_omits_missing_optional_fields() {
        let mut stripped = event();
        stripped.location = None;
        stripped.description = None;

        let mut out = Vec::new();
        EventFormatter::write_detail(&mut out, &stripped).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Location:"));
    }
}
