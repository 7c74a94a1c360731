//! Platform detection from profile URLs.
//!
//! Resolves which set of per-dimension heuristics to run. An explicit hint
//! always wins; otherwise the host portion of the URL is matched against a
//! fixed, ordered pattern list and the first match decides.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Platform, &str)] = &[
            (Platform::Facebook, "facebook"),
            (Platform::Twitter, "twitter"),
            (Platform::Instagram, "instagram"),
            (Platform::Linkedin, "linkedin"),
            (Platform::Other, "other"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(p, _)| p == self)
            .map(|(_, s)| *s)
            .unwrap_or("other");

        write!(f, "{display_str}")
    }
}

/// Caller-supplied platform selection. `Auto` defers to URL detection; any
/// other value is returned verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformHint {
    Auto,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Other,
}

static PLATFORM_PATTERNS: Lazy<Vec<(Platform, Regex)>> = Lazy::new(|| {
    vec![
        (
            Platform::Facebook,
            Regex::new(r"(^|\.)facebook\.com$").expect("valid facebook pattern"),
        ),
        (
            Platform::Twitter,
            Regex::new(r"(^|\.)(twitter\.com|x\.com)$").expect("valid twitter pattern"),
        ),
        (
            Platform::Instagram,
            Regex::new(r"(^|\.)instagram\.com$").expect("valid instagram pattern"),
        ),
        (
            Platform::Linkedin,
            Regex::new(r"(^|\.)linkedin\.com$").expect("valid linkedin pattern"),
        ),
    ]
});

/// Extract the host portion of a URL-like string. Tolerates a missing
/// scheme, userinfo, ports, paths, queries and fragments.
pub fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority
        .rsplit_once('@')
        .map(|(_, h)| h)
        .unwrap_or(authority);
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Resolve the platform for a profile URL. Deterministic, no side effects;
/// a malformed URL resolves to `Other`.
pub fn detect_platform(url: &str, hint: PlatformHint) -> Platform {
    match hint {
        PlatformHint::Facebook => Platform::Facebook,
        PlatformHint::Twitter => Platform::Twitter,
        PlatformHint::Instagram => Platform::Instagram,
        PlatformHint::Linkedin => Platform::Linkedin,
        PlatformHint::Other => Platform::Other,
        PlatformHint::Auto => {
            let Some(host) = host_of(url) else {
                return Platform::Other;
            };
            let host = host.to_lowercase();
            PLATFORM_PATTERNS
                .iter()
                .find(|(_, pattern)| pattern.is_match(&host))
                .map(|(platform, _)| *platform)
                .unwrap_or(Platform::Other)
        }
    }
}
