use std::path;

use crate::Format;
use crate::Result;
use crate::SiteConfig;
use crate::Status;

/// Name of the project file searched for by [`SiteConfig::from_cwd`].
pub const PROJECT_FILE: &str = "_folio.yml";

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let format = Format::from_path(&path).ok_or_else(|| {
            Status::new("Unsupported config format, expected yml, yaml, json or toml")
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        format
            .parse(&content)
            .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(cwd, PROJECT_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {PROJECT_FILE} file found in current directory, using built-in site.");
                Ok(crate::site().clone())
            })?;
        Ok(config)
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = SiteConfig::from_file("tests/fixtures/config/_folio.yml").unwrap();
        assert_eq!(result.site_title, "Fixture Site");
        assert_eq!(result.site_url, "https://fixture.example.com");
        assert_eq!(result.user_twitter, None);
        assert_eq!(result.og_site_name.as_deref(), Some("fixture"));
    }

    #[test]
    fn test_from_file_json() {
        let result = SiteConfig::from_file("tests/fixtures/config/site.json").unwrap();
        assert_eq!(&result, crate::site());
    }

    #[test]
    fn test_from_file_toml() {
        let result = SiteConfig::from_file("tests/fixtures/config/site.toml").unwrap();
        assert_eq!(&result, crate::site());
    }

    #[test]
    fn test_from_file_empty() {
        let result = SiteConfig::from_file("tests/fixtures/config/empty.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing_field() {
        let result = SiteConfig::from_file("tests/fixtures/config/missing_field.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unknown_field() {
        let result = SiteConfig::from_file("tests/fixtures/config/unknown_field.yml").unwrap();
        let expected = SiteConfig::from_file("tests/fixtures/config/_folio.yml").unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = SiteConfig::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let result = SiteConfig::from_file("tests/fixtures/config/index.js");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = SiteConfig::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = SiteConfig::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(result.site_title, "Fixture Site");
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = SiteConfig::from_cwd("tests/fixtures").unwrap();
        assert_eq!(&result, crate::site());
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_folio.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_folio.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", PROJECT_FILE).unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
