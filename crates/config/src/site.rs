use std::fmt;

/// Site metadata consumed by the page, manifest and SEO layers of the generator.
///
/// Field names on the wire follow the generator's schema (`siteTitle`,
/// `googleAnalyticsID`, ...), so the record can be dropped into a project as
/// `_folio.yml`, a JSON file or a TOML file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Prefix for all links, `/` when deployed at the domain root.
    pub path_prefix: String,
    /// Navigation and site title.
    pub site_title: String,
    /// Alternative title for SEO.
    pub site_title_alt: String,
    /// Short title for the PWA manifest.
    pub site_title_manifest: String,
    /// Canonical origin, without a trailing slash.
    pub site_url: String,
    /// Value of the `lang` attribute on `<html>`.
    pub site_language: String,
    /// Headline for the schema.org JSON-LD block.
    pub site_headline: String,
    /// `og:image`, relative to the static asset root.
    pub site_banner: String,
    /// Favicon source, relative to the source asset root.
    pub favicon: String,
    pub site_description: String,
    /// Author for the schema.org JSON-LD block.
    pub author: String,
    /// Logo for the schema.org JSON-LD block, relative to the static asset root.
    pub site_logo: String,
    #[serde(rename = "siteFBAppID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_fb_app_id: Option<String>,
    /// Twitter handle, including the leading `@`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,
    /// Open Graph locale, e.g. `en_US`.
    pub og_language: String,
    #[serde(rename = "googleAnalyticsID")]
    pub google_analytics_id: String,
    /// Manifest theme color (`#RRGGBB`).
    pub theme_color: String,
    /// Manifest background color (`#RRGGBB`).
    pub background_color: String,
}

impl SiteConfig {
    /// The record the site ships with.
    pub fn builtin() -> Self {
        Self {
            path_prefix: "/".into(),
            site_title: "My Apprenticeship @HolidayCheck".into(),
            site_title_alt: "HolidayCheck Apprenticeship".into(),
            site_title_manifest: "ApprenticeshipBlog".into(),
            site_url: "https://markusheilig.netlify.de".into(),
            site_language: "en".into(),
            site_headline: "Writing and publishing content".into(),
            site_banner: "/social/banner.jpg".into(),
            favicon: "src/favicon.png".into(),
            site_description: "Blog about my apprenticeship at HolidayCheck.".into(),
            author: "Markus Heilig".into(),
            site_logo: "/social/logo.png".into(),
            site_fb_app_id: None,
            user_twitter: Some("@markusheilig2".into()),
            og_site_name: None,
            og_language: "en_US".into(),
            google_analytics_id: "UA-47519312-6".into(),
            theme_color: "#3498DB".into(),
            background_color: "#2b2e3c".into(),
        }
    }
}

static SITE: once_cell::sync::Lazy<SiteConfig> = once_cell::sync::Lazy::new(SiteConfig::builtin);

/// Read the site record.
pub fn site() -> &'static SiteConfig {
    &SITE
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
