use crate::config::{
    ApiConfig, ADD_VIDEO_PATH, DELETE_ALL_VIDEOS_PATH, DELETE_VIDEO_PATH, LIST_VIDEOS_PATH,
};
use crate::error::ApiError;
use crate::models::{StoreReply, VideoEntry, VideoListResponse, VideoUrlRequest};
use gloo_net::http::{Request, Response};

/// The remote collection of videos. The only source of truth.
// Futures stay on the browser's single thread, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait VideoStore {
    async fn list_videos(&self) -> Result<Vec<VideoEntry>, ApiError>;

    /// Returns the id the store assigned, when its reply carries one.
    async fn add_video(&self, url: &str) -> Result<Option<String>, ApiError>;

    async fn delete_video(&self, url: &str) -> Result<(), ApiError>;

    async fn delete_all_videos(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpVideoStore {
    config: ApiConfig,
}

impl HttpVideoStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn post_url(&self, path: &str, url: &str) -> Result<Response, ApiError> {
        let request_body = VideoUrlRequest {
            url: url.to_string(),
        };

        Request::post(&self.config.endpoint(path))
            .json(&request_body)
            .map_err(|e| ApiError::Parse(format!("Request error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("Video store answered HTTP {status}: {text}");

    ApiError::Status {
        status,
        message: StoreReply::parse(&text).message,
    }
}

async fn read_reply(response: Response) -> Result<StoreReply, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    // Success bodies are optional; an empty or plain-text body is fine.
    let text = response.text().await.unwrap_or_default();
    Ok(StoreReply::parse(&text))
}

impl VideoStore for HttpVideoStore {
    async fn list_videos(&self) -> Result<Vec<VideoEntry>, ApiError> {
        let url = self.config.endpoint(LIST_VIDEOS_PATH);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<VideoListResponse>()
                .await
                .map(|list| list.data)
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(status_error(response).await)
        }
    }

    async fn add_video(&self, url: &str) -> Result<Option<String>, ApiError> {
        let response = self.post_url(ADD_VIDEO_PATH, url).await?;
        Ok(read_reply(response).await?.created_id())
    }

    async fn delete_video(&self, url: &str) -> Result<(), ApiError> {
        let response = self.post_url(DELETE_VIDEO_PATH, url).await?;
        read_reply(response).await.map(|_| ())
    }

    async fn delete_all_videos(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint(DELETE_ALL_VIDEOS_PATH);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_reply(response).await.map(|_| ())
    }
}
