// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

/// An event that one of the Guild's societies or groups may host.
///
/// The feed serialises events with camelCase field names and without an
/// `id`; the surrogate id is assigned by the local store on first insert and
/// survives later upserts of the same `url`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Local surrogate key.
    #[serde(default)]
    pub id: i64,

    /// The URL for the event. Uniquely identifies the event on the Guild's
    /// website.
    pub url: String,

    /// Identifier of the society or group that organises this event.
    pub organiser_id: i64,

    /// Name of the organiser, denormalised so listings need no join.
    pub organiser_name: String,

    /// The event's name.
    pub name: String,

    /// Date and time of the event's start, `YYYY-MM-DD HH:MM:SS`.
    pub from_date: String,

    /// The event's location, if announced.
    #[serde(default)]
    pub location: Option<String>,

    /// A short description of the event, if any.
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_decodes_from_feed_json() {
        let json = r#"{
            "url": "https://x/e1",
            "organiserId": 1,
            "organiserName": "Chess Club",
            "name": "Tournament",
            "fromDate": "2024-05-01 18:00:00",
            "location": null,
            "description": null
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 0);
        assert_eq!(event.url, "https://x/e1");
        assert_eq!(event.organiser_id, 1);
        assert_eq!(event.organiser_name, "Chess Club");
        assert_eq!(event.name, "Tournament");
        assert_eq!(event.from_date, "2024-05-01 18:00:00");
        assert_eq!(event.location, None);
        assert_eq!(event.description, None);
    }

    #[test]
    fn event_decodes_without_optional_fields() {
        let json = r#"{
            "url": "https://x/e2",
            "organiserId": 2,
            "organiserName": "Debate Society",
            "name": "Weekly Meet",
            "fromDate": "2024-05-02 19:00:00"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.location, None);
        assert_eq!(event.description, None);
    }

    #[test]
    fn event_rejects_schema_mismatch() {
        let json = r#"{"nothing": "useful"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
