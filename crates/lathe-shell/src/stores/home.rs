use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use lathe_bridge::{QueryRequest, RequestBridge, Response};
use lathe_common::BridgeError;

/// One entry of the host-managed recent project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFile {
    pub path: String,
    pub project_name: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Account/session state as last reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub is_logged_in: bool,
    pub user_name: String,
    pub user_avatar: String,
    pub user_id: String,
}

#[derive(Debug, Default)]
struct HomeState {
    recent_files: Vec<RecentFile>,
    is_loading: bool,
    user: UserInfo,
}

/// Home screen state: recent files and the signed-in user, all sourced
/// from the host through the bridge.
///
/// Responses are interpreted by convention (`success`, `files`, …); a
/// malformed field is skipped rather than surfaced, the same way a decode
/// failure on the bridge degrades instead of erroring.
pub struct HomeStore {
    bridge: Arc<RequestBridge>,
    state: Mutex<HomeState>,
}

impl HomeStore {
    pub fn new(bridge: Arc<RequestBridge>) -> Self {
        Self {
            bridge,
            state: Mutex::new(HomeState::default()),
        }
    }

    pub fn recent_files(&self) -> Vec<RecentFile> {
        self.state.lock().unwrap().recent_files.clone()
    }

    pub fn has_recent_files(&self) -> bool {
        !self.state.lock().unwrap().recent_files.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading
    }

    pub fn user(&self) -> UserInfo {
        self.state.lock().unwrap().user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.lock().unwrap().user.is_logged_in
    }

    /// Refresh the recent list. The loading flag covers the whole round
    /// trip and clears even when the host fails the query.
    pub async fn fetch_recent_files(&self) -> Result<(), BridgeError> {
        self.state.lock().unwrap().is_loading = true;
        let result = self.bridge.send(QueryRequest::new("getRecentFiles")).await;
        self.state.lock().unwrap().is_loading = false;

        let response = result?;
        if response.is_success() {
            if let Some(files) = response.field("files") {
                match serde_json::from_value::<Vec<RecentFile>>(files.clone()) {
                    Ok(files) => self.state.lock().unwrap().recent_files = files,
                    Err(err) => debug!(error = %err, "recent files payload skipped"),
                }
            }
        }
        Ok(())
    }

    pub async fn fetch_user_info(&self) -> Result<(), BridgeError> {
        let response = self.bridge.send(QueryRequest::new("getUserInfo")).await?;
        if response.is_success() {
            if let Response::Json(value) = &response {
                match serde_json::from_value::<UserInfo>(value.clone()) {
                    Ok(user) => self.state.lock().unwrap().user = user,
                    Err(err) => debug!(error = %err, "user info payload skipped"),
                }
            }
        }
        Ok(())
    }

    pub async fn login(&self) -> Result<(), BridgeError> {
        self.bridge.send(QueryRequest::new("userLogin")).await?;
        Ok(())
    }

    /// Log out through the host, then clear the local user. A failed
    /// request leaves the local user untouched.
    pub async fn logout(&self) -> Result<(), BridgeError> {
        self.bridge.send(QueryRequest::new("userLogout")).await?;
        self.state.lock().unwrap().user = UserInfo::default();
        Ok(())
    }

    pub async fn open_recent_file(&self, path: &str) -> Result<(), BridgeError> {
        self.bridge
            .send(QueryRequest::new("openRecentFile").with("path", path))
            .await?;
        Ok(())
    }

    /// Ask the host to forget one entry, then prune it locally.
    pub async fn delete_recent_file(&self, path: &str) -> Result<(), BridgeError> {
        self.bridge
            .send(QueryRequest::new("deleteRecentFile").with("path", path))
            .await?;
        self.state
            .lock()
            .unwrap()
            .recent_files
            .retain(|f| f.path != path);
        Ok(())
    }

    pub async fn clear_all_recent_files(&self) -> Result<(), BridgeError> {
        self.bridge
            .send(QueryRequest::new("clearAllRecentFiles"))
            .await?;
        self.state.lock().unwrap().recent_files.clear();
        Ok(())
    }

    /// Reveal the file in the platform file manager.
    pub async fn explore_recent_file(&self, path: &str) -> Result<(), BridgeError> {
        self.bridge
            .send(QueryRequest::new("exploreRecentFile").with("path", path))
            .await?;
        Ok(())
    }

    pub async fn new_project(&self) -> Result<(), BridgeError> {
        self.bridge.send(QueryRequest::new("newProject")).await?;
        Ok(())
    }

    pub async fn open_project(&self) -> Result<(), BridgeError> {
        self.bridge.send(QueryRequest::new("openProject")).await?;
        Ok(())
    }
}
