//! Base image domain types: tag ordering and digest validation.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! Listing tags and looking up digests goes through
//! [`crate::application::ports::RegistryClient`].

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ImageError;

/// Prefix every pinned digest must carry.
pub const DIGEST_PREFIX: &str = "sha256:";

/// Number of hex characters after [`DIGEST_PREFIX`].
pub const DIGEST_HEX_LEN: usize = 64;

/// Which registry to query and how to recognise and order its tags.
///
/// ```json
/// { "registry": "docker.io/library/python", "tagRegex": "^3\\.9\\.(\\d+)-slim$" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConstraint {
    pub registry: String,
    #[serde(rename = "tagRegex")]
    pub tag_regex: String,
}

/// A tag pinned to its content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub registry: String,
    pub tag: String,
    pub digest: String,
}

impl fmt::Display for ResolvedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.registry, self.tag, self.digest)
    }
}

/// Format `registry:tag`, the reference handed to the digest lookup.
#[must_use]
pub fn tag_reference(registry: &str, tag: &str) -> String {
    format!("{registry}:{tag}")
}

// ── Tag ordering ──────────────────────────────────────────────────────────────

/// A non-negative integer of any size, kept as its decimal digits.
///
/// Leading zeros are stripped on construction, so ordering by length and
/// then by digits is numeric ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNumber(String);

impl TagNumber {
    /// Parse a run of ASCII digits. Empty or non-digit input is `None`.
    #[must_use]
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TagNumber {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Ord for TagNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TagNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TagNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Integers captured from a tag, in declared group order.
///
/// Keys only compare meaningfully against keys of the same arity; use
/// [`TagKey::try_cmp`] when the arity is not already known to agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagKey(Vec<TagNumber>);

impl TagKey {
    #[must_use]
    pub fn new(parts: Vec<TagNumber>) -> Self {
        Self(parts)
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn parts(&self) -> &[TagNumber] {
        &self.0
    }

    /// Lexicographic comparison, or `None` if the arities differ.
    #[must_use]
    pub fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.arity() == other.arity()).then(|| self.0.cmp(&other.0))
    }
}

/// A tag accepted by a [`TagPattern`], with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// The matched text (group 0). Equal to the whole tag when the pattern
    /// is anchored with `$`.
    pub tag: String,
    pub key: TagKey,
}

/// A compiled `tagRegex`.
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a pattern that has at least one capture group.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidPattern`] if the regex does not compile and
    /// [`ImageError::NoCaptureGroups`] if it has nothing to order by.
    pub fn new(pattern: &str) -> Result<Self, ImageError> {
        let regex = Regex::new(pattern).map_err(|source| ImageError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        // captures_len counts the implicit group 0
        if regex.captures_len() < 2 {
            return Err(ImageError::NoCaptureGroups(pattern.to_string()));
        }
        Ok(Self { regex })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Match `tag` starting at its first character.
    ///
    /// Returns `Ok(None)` if the tag does not match.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NonNumericGroup`] if a group of a matching tag is
    /// empty, did not participate, or contains anything but ASCII digits.
    pub fn match_tag(&self, tag: &str) -> Result<Option<TagMatch>, ImageError> {
        let Some(caps) = self.regex.captures(tag) else {
            return Ok(None);
        };
        let Some(whole) = caps.get(0).filter(|m| m.start() == 0) else {
            return Ok(None);
        };

        let mut parts = Vec::with_capacity(caps.len() - 1);
        for group in 1..caps.len() {
            let value = caps.get(group).map(|m| m.as_str());
            match value.and_then(TagNumber::parse) {
                Some(n) => parts.push(n),
                None => {
                    return Err(ImageError::NonNumericGroup {
                        tag: tag.to_string(),
                        group,
                        value: value.map(str::to_string),
                    });
                }
            }
        }

        Ok(Some(TagMatch {
            tag: whole.as_str().to_string(),
            key: TagKey::new(parts),
        }))
    }
}

/// Pick the candidate with the greatest key. On a tie the earliest wins.
///
/// Returns `Ok(None)` for an empty input.
///
/// # Errors
///
/// Returns [`ImageError::ArityMismatch`] if candidates carry keys of
/// different lengths.
pub fn select_latest<I>(candidates: I) -> Result<Option<TagMatch>, ImageError>
where
    I: IntoIterator<Item = TagMatch>,
{
    let mut best: Option<TagMatch> = None;
    for candidate in candidates {
        let newer = match &best {
            None => true,
            Some(current) => match candidate.key.try_cmp(&current.key) {
                Some(ordering) => ordering == Ordering::Greater,
                None => {
                    return Err(ImageError::ArityMismatch {
                        expected: current.key.arity(),
                        found: candidate.key.arity(),
                        tag: candidate.tag,
                    });
                }
            },
        };
        if newer {
            best = Some(candidate);
        }
    }
    Ok(best)
}

/// Choose the newest tag in `tags` according to `pattern`.
///
/// # Errors
///
/// Returns [`ImageError::NoMatchingTag`] if nothing matches, or any error
/// from [`TagPattern::match_tag`] and [`select_latest`].
pub fn latest_tag<S: AsRef<str>>(
    registry: &str,
    pattern: &TagPattern,
    tags: &[S],
) -> Result<TagMatch, ImageError> {
    let mut candidates = Vec::new();
    for tag in tags {
        if let Some(m) = pattern.match_tag(tag.as_ref())? {
            candidates.push(m);
        }
    }
    select_latest(candidates)?.ok_or_else(|| ImageError::NoMatchingTag {
        registry: registry.to_string(),
        pattern: pattern.as_str().to_string(),
    })
}

// ── Digest validation ─────────────────────────────────────────────────────────

/// Check that `digest` is `sha256:` followed by 64 lowercase hex characters.
#[must_use]
pub fn is_valid_digest(digest: &str) -> bool {
    digest.strip_prefix(DIGEST_PREFIX).is_some_and(|hex| {
        hex.len() == DIGEST_HEX_LEN && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    })
}

/// Validate the digest returned for `reference`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDigest`] naming the reference if the digest
/// is malformed.
pub fn validate_digest(reference: &str, digest: &str) -> Result<(), ImageError> {
    if is_valid_digest(digest) {
        Ok(())
    } else {
        Err(ImageError::InvalidDigest {
            reference: reference.to_string(),
            digest: digest.to_string(),
        })
    }
}
