//! Publication gate for extracted tag sets.

use crate::consts;
use crate::models::TagSet;
use derive_more::{Display, Error};
use ogmeta_config::TagMappingConfig;
use tracing::instrument;

/// Why a tag set is not fit for publication. A rejected set is discarded
/// as a whole.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// One or more configured required tags are absent.
    #[display("missing required tags: {}", _0.join(", "))]
    MissingRequired(#[error(not(source))] Vec<String>),
    #[display("Facebook compatibility requires og:site_name")]
    MissingSiteName,
    #[display("Facebook compatibility requires fb:app_id or fb:admins")]
    MissingFacebookIdentity,
}

/// Checks `tags` against the configured required tags and, in
/// Facebook-compatible mode, Facebook's completeness rules.
#[instrument(level = "trace", skip_all, fields(tags = tags.len()))]
pub fn validate(tags: &TagSet, config: &TagMappingConfig) -> Result<(), Rejection> {
    let missing: Vec<String> = config.required_tags.iter().filter(|tag| !tags.contains_key(tag)).cloned().collect();
    if !missing.is_empty() {
        return Err(Rejection::MissingRequired(missing));
    }
    if config.facebook_compatible {
        if !tags.contains_key(consts::OG_SITE_NAME) {
            return Err(Rejection::MissingSiteName);
        }
        if !tags.contains_key(consts::FB_APP_ID) && !tags.contains_key(consts::FB_ADMINS) {
            return Err(Rejection::MissingFacebookIdentity);
        }
    }
    Ok(())
}

/// `true` if [`validate`] accepts the tag set.
pub fn is_publishable(tags: &TagSet, config: &TagMappingConfig) -> bool {
    validate(tags, config).is_ok()
}
