//! Host-side site settings: where URLs point and which locale is current.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use serde::Deserialize;

/// Path (relative to the server URL) of the image published when no usable
/// `opengraph` variant exists.
pub const DEFAULT_IMAGE: &str = "/design/standard/images/opengraph_default_image.png";
pub const DEFAULT_LOCALE: &str = "en-GB";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Scheme and host prepended to every generated URL, e.g. `https://example.com`.
    pub server_url: String,
    pub default_image: String,
    /// HTTP locale code reported by the `language_code` query.
    pub locale: String,
}
impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            default_image: DEFAULT_IMAGE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSite {
    site: SiteSettings,
}

impl SiteSettings {
    /// Extracts the `[site]` section. Every key but `server_url` falls back
    /// to its default.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Invalid`] if the section does not deserialize.
    /// - [`ErrorKind::Malformed`] if `server_url` is missing or blank, since
    ///   every published URL must be absolute.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let raw: RawSite = figment
            .extract()
            .or_raise(|| ErrorKind::Invalid("site settings do not deserialize".to_string()))?;
        let mut site = raw.site;
        site.server_url = site.server_url.trim().trim_end_matches('/').to_string();
        if site.server_url.is_empty() {
            exn::bail!(ErrorKind::Malformed {
                field: "site.server_url".to_string(),
                reason: "blank server URL",
            });
        }
        site.locale = site.locale.trim().to_string();
        if site.locale.is_empty() {
            site.locale = DEFAULT_LOCALE.to_string();
        }
        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::{Format, Toml};
    use rstest::rstest;

    #[rstest]
    #[case("[site]\nserver_url = \"https://example.com\"\n", "https://example.com", DEFAULT_IMAGE, DEFAULT_LOCALE)]
    #[case(
        "[site]\nserver_url = \"https://example.com/\"\nlocale = \"nb-NO\"\n",
        "https://example.com",
        DEFAULT_IMAGE,
        "nb-NO"
    )]
    #[case(
        "[site]\nserver_url = \" https://example.com \"\ndefault_image = \"/img/og.png\"\nlocale = \"\"\n",
        "https://example.com",
        "/img/og.png",
        DEFAULT_LOCALE
    )]
    fn test_site(#[case] toml: &str, #[case] server_url: &str, #[case] default_image: &str, #[case] locale: &str) {
        let site = SiteSettings::from_figment(&Figment::from(Toml::string(toml))).unwrap();
        assert_eq!(site.server_url, server_url);
        assert_eq!(site.default_image, default_image);
        assert_eq!(site.locale, locale);
    }

    #[rstest]
    #[case("")]
    #[case("[site]\nlocale = \"nb-NO\"\n")]
    #[case("[site]\nserver_url = \" / \"\n")]
    fn test_blank_server_url(#[case] toml: &str) {
        let err = SiteSettings::from_figment(&Figment::from(Toml::string(toml))).unwrap_err();
        assert_eq!(
            *err,
            ErrorKind::Malformed {
                field: "site.server_url".to_string(),
                reason: "blank server URL",
            }
        );
    }

    #[test]
    fn test_invalid_site_section() {
        let err = SiteSettings::from_figment(&Figment::from(Toml::string("site = 3\n"))).unwrap_err();
        assert!(matches!(*err, ErrorKind::Invalid(_)));
    }
}
