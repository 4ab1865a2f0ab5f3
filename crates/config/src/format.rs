use std::path;

use crate::Result;
use crate::SiteConfig;
use crate::Status;

/// File formats a [`SiteConfig`] can be read from and written to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    pub(crate) fn parse(self, content: &str) -> Result<SiteConfig> {
        match self {
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Self::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Self::Toml => toml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
        }
    }

    pub(crate) fn render(self, config: &SiteConfig) -> Result<String> {
        match self {
            Self::Yaml => serde_yaml::to_string(config)
                .map_err(|e| Status::new("Failed to render config").with_source(e)),
            Self::Json => serde_json::to_string_pretty(config)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| Status::new("Failed to render config").with_source(e)),
            Self::Toml => toml::to_string(config)
                .map_err(|e| Status::new("Failed to render config").with_source(e)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SiteConfig {
    pub fn to_string_as(&self, format: Format) -> Result<String> {
        format.render(self)
    }

    pub fn from_str_as(content: &str, format: Format) -> Result<Self> {
        format.parse(content)
    }
}
