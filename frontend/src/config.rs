use crate::env_variable_utils::API_BASE_URL;

pub const LIST_VIDEOS_PATH: &str = "/api/v1/get-video";
pub const ADD_VIDEO_PATH: &str = "/api/v1/add-video";
pub const DELETE_VIDEO_PATH: &str = "/api/v1/delete-video";
pub const DELETE_ALL_VIDEOS_PATH: &str = "/api/v1/delete-videos";

/// Location of the remote video store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(API_BASE_URL.as_str())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Switches that distinguish the read-only list from the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    /// Hides add/delete controls and rejects mutations.
    pub read_only: bool,
    /// Ask before deleting one or all entries.
    pub confirm_before_delete: bool,
    /// Show the newest entry first. Storage order is untouched.
    pub newest_first: bool,
    /// Alert after a successful add.
    pub announce_success: bool,
}

impl PanelOptions {
    pub const fn viewer() -> Self {
        Self {
            read_only: true,
            confirm_before_delete: false,
            newest_first: false,
            announce_success: false,
        }
    }

    pub const fn manager() -> Self {
        Self {
            read_only: false,
            confirm_before_delete: true,
            newest_first: true,
            announce_success: false,
        }
    }
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self::manager()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ApiConfig::new("https://videos.example.com/");
        assert_eq!(
            config.endpoint(LIST_VIDEOS_PATH),
            "https://videos.example.com/api/v1/get-video"
        );

        let config = ApiConfig::new("http://localhost:3000");
        assert_eq!(
            config.endpoint("api/v1/delete-videos"),
            "http://localhost:3000/api/v1/delete-videos"
        );
    }

    #[test]
    fn presets_differ_only_where_expected() {
        let viewer = PanelOptions::viewer();
        let manager = PanelOptions::manager();
        assert!(viewer.read_only);
        assert!(!manager.read_only);
        assert!(manager.confirm_before_delete);
        assert!(manager.newest_first);
        assert!(!viewer.newest_first);
        assert_eq!(PanelOptions::default(), manager);
    }
}
