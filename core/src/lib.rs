// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod config;
mod event;
mod localdb;
mod organisation;
mod sync;

pub use crate::app::GuildEvents;
pub use crate::config::{APP_NAME, Config};
pub use crate::event::Event;
pub use crate::localdb::LocalDb;
pub use crate::organisation::Organisation;
pub use crate::sync::{RemoteSource, Resource, SourceError, SyncError, synchronize};
