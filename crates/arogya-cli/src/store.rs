use std::path::{Path, PathBuf};

use arogya_core::models::profile::PatientProfile;
use arogya_core::stored::sanitize_stored_profile;

/// Current store format version. Bump when the on-disk shape changes and
/// handle the old shape in [`check_version`].
const CURRENT_VERSION: u64 = 1;

const VERSION_KEY: &str = "storeVersion";
const PROFILE_FILE: &str = "profile.json";

/// The saved patient profile on local disk.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Store under the platform data directory.
    pub fn default_location() -> eyre::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(Self::at(base.join("com.arogya.screening")))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Load the saved profile. Fields that are missing or malformed fall
    /// back to defaults.
    pub fn load(&self) -> eyre::Result<PatientProfile> {
        let path = self.path();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read profile at {}: {e}", path.display()))?;

        let json: serde_json::Value = serde_json::from_str(&contents)?;
        let on_disk_version = json.get(VERSION_KEY).and_then(|v| v.as_u64()).unwrap_or(0);
        check_version(on_disk_version)?;

        Ok(sanitize_stored_profile(json)?)
    }

    pub fn save(&self, profile: &PatientProfile) -> eyre::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let mut json = serde_json::to_value(profile)?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("profile did not serialize to a JSON object"))?;
        obj.insert(VERSION_KEY.to_string(), CURRENT_VERSION.into());

        let path = self.path();
        let tmp_path = self.dir.join(format!("{PROFILE_FILE}.tmp"));
        std::fs::write(&tmp_path, serde_json::to_string_pretty(&json)?.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &path)?;

        tracing::info!(path = %path.display(), "profile saved");
        Ok(())
    }

    pub fn delete(&self) -> eyre::Result<()> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "profile deleted");
        }
        Ok(())
    }
}

/// Version 0 is an unversioned dump from the web app. Its legacy fields are
/// handled by the sanitizer, so only newer versions are rejected.
fn check_version(on_disk: u64) -> eyre::Result<()> {
    if on_disk > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "{VERSION_KEY} {on_disk} is newer than this build supports ({CURRENT_VERSION}). \
             Please update arogya."
        ));
    }
    if on_disk < CURRENT_VERSION {
        tracing::info!(from = on_disk, to = CURRENT_VERSION, "reading older profile format");
    }
    Ok(())
}

/// Read a profile from any JSON file, sanitizing it the same way as the
/// saved profile.
pub fn read_profile_file(path: &Path) -> eyre::Result<PatientProfile> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    Ok(sanitize_stored_profile(json)?)
}
