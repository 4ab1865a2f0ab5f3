use std::fs;
use std::io::Write;
use std::path;

use folio_config::Format;
use folio_config::PROJECT_FILE;

use crate::Result;
use crate::Status;

/// Write the built-in site record to `dest/_folio.yml`, creating `dest` if needed.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| {
        Status::new("Failed to create project directory")
            .with_source(e)
            .context_with(|c| c.insert("Path", dest.display().to_string()))
    })?;

    let content = folio_config::site().to_string_as(Format::Yaml)?;
    create_file(dest.join(PROJECT_FILE), &content)?;

    Ok(())
}

fn create_file<P: AsRef<path::Path>>(path: P, content: &str) -> Result<()> {
    create_file_for_path(path.as_ref(), content)
}

fn create_file_for_path(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            Status::new("Failed to create file")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        Status::new("Failed to write file")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use folio_config::SiteConfig;

    #[test]
    fn creates_loadable_project_file() {
        let dest = tempfile::tempdir().unwrap();
        create_new_project(dest.path()).unwrap();

        let actual = SiteConfig::from_file(dest.path().join(PROJECT_FILE)).unwrap();
        assert_eq!(&actual, folio_config::site());
    }

    #[test]
    fn creates_missing_directories() {
        let dest = tempfile::tempdir().unwrap();
        let nested = dest.path().join("blog/site");
        create_new_project(&nested).unwrap();

        assert!(nested.join(PROJECT_FILE).is_file());
        let actual = SiteConfig::from_cwd(&nested).unwrap();
        assert_eq!(&actual, folio_config::site());
    }

    #[test]
    fn refuses_to_overwrite() {
        let dest = tempfile::tempdir().unwrap();
        let existing = dest.path().join(PROJECT_FILE);
        fs::write(&existing, "siteTitle: mine\n").unwrap();

        let result = create_new_project(dest.path());
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "siteTitle: mine\n");
    }
}
