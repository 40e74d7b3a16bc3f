use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, warn};

use saspo_common::{
    allowed_file, is_plain_filename, is_protected_asset, secure_filename, CmsError, Config,
    LinkEntry, ReferenceMode,
};

use crate::assets::AssetFolder;
use crate::json_store::{load_content, load_links, save};
use crate::links::{self, AddLinkOutcome};
use crate::usage::{ReferenceIndex, UsageEntry, UsageKind};

/// Everything the dashboard page shows.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub json_text: String,
    pub assets: Vec<String>,
    pub links: Vec<LinkEntry>,
    pub usage: Vec<UsageEntry>,
}

/// The site's on-disk state: content document, links list and asset folder.
///
/// Every call re-reads the files it needs; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct SiteStore {
    data_file: PathBuf,
    links_file: PathBuf,
    assets: AssetFolder,
    mode: ReferenceMode,
}

impl SiteStore {
    pub fn new(
        data_file: impl Into<PathBuf>,
        links_file: impl Into<PathBuf>,
        upload_dir: impl Into<PathBuf>,
        mode: ReferenceMode,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            links_file: links_file.into(),
            assets: AssetFolder::new(upload_dir),
            mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.data_file,
            &config.links_file,
            &config.upload_dir,
            config.reference_mode,
        )
    }

    pub fn assets(&self) -> &AssetFolder {
        &self.assets
    }

    pub fn content(&self) -> Value {
        load_content(&self.data_file)
    }

    pub fn links(&self) -> Vec<LinkEntry> {
        load_links(&self.links_file)
    }

    pub fn references(&self) -> Result<ReferenceIndex, CmsError> {
        ReferenceIndex::new(&self.content(), self.mode)
    }

    pub fn dashboard(&self) -> Result<DashboardSnapshot, CmsError> {
        let index = self.references()?;
        let assets = self.assets.list();
        let links = self.links();
        let usage = index.usage_map(&assets, &links);
        Ok(DashboardSnapshot {
            json_text: index.into_text(),
            assets,
            links,
            usage,
        })
    }

    /// Replace the content document with the parsed `raw` text.
    ///
    /// Parse errors come back as [`CmsError::Json`] and write errors as
    /// [`CmsError::Io`]; in both cases the stored document is untouched.
    pub fn update_content(&self, raw: &str) -> Result<(), CmsError> {
        let value: Value = serde_json::from_str(raw)?;
        save(&self.data_file, &value)?;
        info!(path = %self.data_file.display(), "Content document replaced");
        Ok(())
    }

    /// Store an upload under its sanitized name. Returns that name.
    pub fn upload_asset(&self, filename: &str, bytes: &[u8]) -> Result<String, CmsError> {
        if !allowed_file(filename) {
            return Err(CmsError::Validation(format!("File type not allowed: {filename}")));
        }
        let safe_name = secure_filename(filename);
        if safe_name.is_empty() {
            return Err(CmsError::Validation(format!("Invalid filename: {filename}")));
        }
        self.assets.write(&safe_name, bytes)?;
        info!(file = %safe_name, bytes = bytes.len(), "Asset uploaded");
        Ok(safe_name)
    }

    /// Delete an asset unless it is protected or referenced. Returns the name removed.
    ///
    /// When the sanitized name isn't on disk but the raw name is a plain
    /// filename that is, the raw one is removed instead (names with spaces).
    pub fn delete_asset(&self, filename: &str) -> Result<String, CmsError> {
        // The raw name is checked too: non-ASCII names can sanitize away
        // their protected shape.
        if is_protected_asset(filename) {
            warn!(file = %filename, "Refused to delete protected asset");
            return Err(CmsError::Protected(filename.to_string()));
        }

        let safe_name = secure_filename(filename);
        if is_protected_asset(&safe_name) {
            warn!(file = %safe_name, "Refused to delete protected asset");
            return Err(CmsError::Protected(safe_name));
        }

        let references = self.references()?;
        if references.is_referenced(&safe_name, UsageKind::Asset) {
            warn!(file = %safe_name, "Refused to delete asset in use");
            return Err(CmsError::InUse(safe_name));
        }

        if !safe_name.is_empty() && self.assets.exists(&safe_name) {
            self.assets.remove(&safe_name)?;
            info!(file = %safe_name, "Asset deleted");
            return Ok(safe_name);
        }

        if filename != safe_name && is_plain_filename(filename) {
            if references.is_referenced(filename, UsageKind::Asset) {
                warn!(file = %filename, "Refused to delete asset in use");
                return Err(CmsError::InUse(filename.to_string()));
            }
            if self.assets.exists(filename) {
                self.assets.remove(filename)?;
                info!(file = %filename, "Asset deleted by raw name");
                return Ok(filename.to_string());
            }
            return Err(CmsError::NotFound(filename.to_string()));
        }

        Err(CmsError::NotFound(safe_name))
    }

    pub fn add_link(&self, title: &str, url: &str) -> Result<AddLinkOutcome, CmsError> {
        let mut links = self.links();
        let outcome = links::add_link(&mut links, title, url);
        if outcome == AddLinkOutcome::Added {
            save(&self.links_file, &links)?;
            info!(url = %url.trim(), "Link added");
        }
        Ok(outcome)
    }

    /// Remove every link with this url unless the content document references it.
    /// A blank url matches nothing and leaves the links file untouched.
    pub fn delete_link(&self, url: &str) -> Result<usize, CmsError> {
        if url.trim().is_empty() {
            return Ok(0);
        }
        if self.references()?.is_referenced(url, UsageKind::Link) {
            warn!(url = %url, "Refused to delete link in use");
            return Err(CmsError::InUse(url.to_string()));
        }
        let mut links = self.links();
        let removed = links::remove_links(&mut links, url);
        if removed == 0 {
            return Ok(0);
        }
        save(&self.links_file, &links)?;
        info!(url = %url, removed, "Link removed");
        Ok(removed)
    }
}
