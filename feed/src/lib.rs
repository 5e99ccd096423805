// SPDX-FileCopyrightText: 2026 GuildEvents contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP access to the published GuildEvents JSON feed.
//!
//! The feed is a set of flat JSON documents on a static host. Each document
//! carries a `Last-Modified` header, which is all the client needs to decide
//! whether its local cache is stale without downloading the body.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::single_match_else)]

mod client;
mod config;
mod error;
mod http;

pub use crate::client::FeedClient;
pub use crate::config::FeedConfig;
pub use crate::error::FeedError;
