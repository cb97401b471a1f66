/*
 * Resolves the per-user directory where the dialog's settings and log file
 * live, creating it on first use.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/*
 * Returns the local (non-roaming) configuration directory for `app_name`,
 * e.g. AppData/Local/<app_name>/config on Windows, creating it if needed.
 * Returns `None` if no home directory can be determined or the directory
 * cannot be created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Resolving config local dir for '{app_name}'");
    ProjectDirs::from("", "", app_name).and_then(|proj_dirs| {
        let config_path = proj_dirs.config_local_dir();
        if !config_path.exists() {
            if let Err(e) = fs::create_dir_all(config_path) {
                log::error!("PathUtils: Failed to create config directory {config_path:?}: {e}");
                return None;
            }
            log::debug!("PathUtils: Created config directory: {config_path:?}");
        }
        Some(config_path.to_path_buf())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remove_test_dir(app_name: &str) {
        if let Some(proj_dirs) = ProjectDirs::from("", "", app_name) {
            let dir = proj_dirs.config_local_dir();
            if dir.exists() {
                if let Err(e) = fs::remove_dir_all(dir) {
                    eprintln!("Test cleanup error for {}: {}", dir.display(), e);
                }
            }
        }
    }

    #[test]
    fn test_get_base_app_config_local_dir_creates_and_reuses() {
        let unique_app_name = format!("SaveDialog_PathUtils_{}", rand::random::<u128>());

        let first = get_base_app_config_local_dir(&unique_app_name)
            .expect("Config dir should be resolvable in the test environment");
        assert!(first.is_dir(), "Directory should have been created at {first:?}");
        assert!(
            first
                .to_string_lossy()
                .to_lowercase()
                .contains(&unique_app_name.to_lowercase()),
            "Path should contain the app name. Path: {first:?}"
        );

        let second = get_base_app_config_local_dir(&unique_app_name);
        assert_eq!(second, Some(first));

        remove_test_dir(&unique_app_name);
    }
}
