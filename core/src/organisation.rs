// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

/// A society or group that organises events.
///
/// Organisations are sourced from the feed and replaced wholesale on update;
/// nothing in this application ever patches one in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, sqlx::FromRow)]
pub struct Organisation {
    /// The organisation's identifier on the Guild's website.
    pub id: i64,

    /// Name of the organisation.
    pub name: String,
}
