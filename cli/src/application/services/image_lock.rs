//! Application service — base image locking use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All registry I/O is routed through the injected [`RegistryClient`].

use anyhow::{Context, Result};

use crate::application::ports::RegistryClient;
use crate::domain::image::{
    ImageConstraint, ResolvedImage, TagPattern, latest_tag, tag_reference, validate_digest,
};

/// Resolve the newest tag allowed by `constraint` and pin it to its digest.
///
/// # Errors
///
/// Returns an error if the pattern is invalid, listing or digest lookup
/// fails, no tag matches, or the digest is malformed.
pub async fn get_latest_image(
    registry: &impl RegistryClient,
    constraint: &ImageConstraint,
) -> Result<ResolvedImage> {
    let pattern = TagPattern::new(&constraint.tag_regex)?;

    let tags = registry
        .list_tags(&constraint.registry)
        .await
        .with_context(|| format!("listing tags for {}", constraint.registry))?;
    tracing::debug!(registry = %constraint.registry, count = tags.len(), "listed tags");

    let latest = latest_tag(&constraint.registry, &pattern, &tags)?;
    let reference = tag_reference(&constraint.registry, &latest.tag);
    tracing::debug!(%reference, key = ?latest.key.parts(), "selected latest tag");

    let digest = registry
        .digest(&reference)
        .await
        .with_context(|| format!("looking up digest for {reference}"))?;
    validate_digest(&reference, &digest)?;

    Ok(ResolvedImage {
        registry: constraint.registry.clone(),
        tag: latest.tag,
        digest,
    })
}

/// Resolve every named constraint in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first error from [`get_latest_image`], tagged with the image
/// name.
pub async fn lock_images(
    registry: &impl RegistryClient,
    images: &[(String, ImageConstraint)],
) -> Result<Vec<(String, ResolvedImage)>> {
    let mut locked = Vec::with_capacity(images.len());
    for (name, constraint) in images {
        let image = get_latest_image(registry, constraint)
            .await
            .with_context(|| format!("locking base image '{name}'"))?;
        tracing::info!(%name, image = %image, "locked base image");
        locked.push((name.clone(), image));
    }
    Ok(locked)
}
