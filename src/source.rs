//! Optional external profile data source.
//!
//! The engine never fetches anything itself; a collaborator implementing
//! `ProfileDataSource` may supply observed attributes. Any transport error
//! or timeout is treated as "unavailable" and the analysis falls back to
//! the simulation path.

use crate::core::errors::Result;
use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a data-source call. Fail-fast: a slow source falls back
/// to simulation and is never retried.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Observed profile attributes. Every field is optional; evaluators skip
/// whatever is missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileAttributes {
    pub account_created: Option<DateTime<Utc>>,
    pub is_private: Option<bool>,
    pub post_count: Option<u64>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub profile_image_url: Option<String>,
    /// Content hash of the profile picture, if the source computed one.
    /// Matched against the configured known default-image hashes.
    pub profile_image_hash: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub full_name: Option<String>,
}

/// A collaborator that can fetch observed attributes for a profile.
///
/// `Ok(None)` means the source had nothing for this profile; errors are
/// equivalent to `Ok(None)` from the caller's perspective.
pub trait ProfileDataSource: Send + Sync {
    fn fetch(&self, url: &str, platform: Platform) -> Result<Option<ProfileAttributes>>;
}

/// Call a data source with a hard timeout. Runs the fetch on a worker
/// thread; if the deadline passes the result is discarded and the worker is
/// left to finish on its own.
pub fn fetch_bounded(
    source: &Arc<dyn ProfileDataSource>,
    url: &str,
    platform: Platform,
    timeout: Duration,
) -> Option<ProfileAttributes> {
    let (tx, rx) = mpsc::channel();
    let source = Arc::clone(source);
    let owned_url = url.to_string();
    std::thread::spawn(move || {
        let _ = tx.send(source.fetch(&owned_url, platform));
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(attrs)) => attrs,
        Ok(Err(e)) => {
            log::debug!("profile fetch failed for {url}: {e}");
            None
        }
        Err(_) => {
            log::debug!("profile fetch timed out for {url}");
            None
        }
    }
}
