//! Resolve model output into a playable YouTube embed link

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::VideoLookupConfig;
use crate::error::AiResult;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

lazy_static! {
    static ref YOUTUBE_URL_ID: Regex =
        Regex::new(r"(?i)(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{6,})").unwrap();
    static ref BARE_ID: Regex = Regex::new(r"^([A-Za-z0-9_-]{6,})$").unwrap();
    static ref LOOSE_URL_ID: Regex = Regex::new(r"(?i)(?:v=|/embed/|youtu\.be/)([A-Za-z0-9_-]{6,})").unwrap();
    static ref HTTP_URL: Regex = Regex::new(r"(?i)^https?://").unwrap();
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE}{video_id}")
}

/// Video id in a YouTube URL or a bare id
pub fn extract_video_id(text: &str) -> Option<String> {
    YOUTUBE_URL_ID
        .captures(text)
        .or_else(|| BARE_ID.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Turns model text into an embed URL, falling back until one is found
pub struct VideoLookup {
    client: Client,
    config: VideoLookupConfig,
}

impl VideoLookup {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: VideoLookupConfig) -> AiResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Always returns an embed URL
    pub async fn resolve(&self, model_text: &str, query: &str) -> String {
        let text = model_text.trim();
        let (verified, candidate) = self.verify_model_link(text).await;

        if let Some(url) = verified {
            return url;
        }
        debug!(model_text = %text, "Model link not usable, falling back");

        if let Some(url) = self.search(query).await {
            return url;
        }

        if let Some(id) = self.config.fallback_video_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            return embed_url(id);
        }

        if let Some(id) = candidate {
            return embed_url(&id);
        }

        embed_url(&self.config.final_fallback_video_id)
    }

    /// Verified link plus the unverified candidate id, if any
    async fn verify_model_link(&self, text: &str) -> (Option<String>, Option<String>) {
        if text.is_empty() {
            return (None, None);
        }

        if let Some(id) = extract_video_id(text) {
            let verified = if (6..=20).contains(&id.len()) {
                self.verify_id(&id).await
            } else {
                None
            };
            return (verified, Some(id));
        }

        if HTTP_URL.is_match(text) {
            let loose_id = LOOSE_URL_ID
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());

            let verified = match loose_id {
                Some(id) => self.verify_id(&id).await,
                None => match self.client.head(text).send().await {
                    Ok(response) if response.status().is_success() => Some(text.to_string()),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(error = %e, "HEAD check on model URL failed");
                        None
                    }
                },
            };
            return (verified, None);
        }

        (None, None)
    }

    /// Embed URL if the id's thumbnail exists
    ///
    /// A failed lookup still accepts ids of the standard 11 characters.
    async fn verify_id(&self, id: &str) -> Option<String> {
        match self.thumbnail_exists(id).await {
            Ok(true) => Some(embed_url(id)),
            Ok(false) => None,
            Err(e) => {
                warn!(video_id = id, error = %e, "Thumbnail check failed");
                (id.len() == 11).then(|| embed_url(id))
            }
        }
    }

    async fn thumbnail_exists(&self, id: &str) -> Result<bool, reqwest::Error> {
        let url = format!("{}/{id}/hqdefault.jpg", self.config.thumbnail_base.trim_end_matches('/'));
        let response = self.client.head(url).send().await?;
        Ok(response.status().is_success())
    }

    /// First YouTube Data API hit for the query
    async fn search(&self, query: &str) -> Option<String> {
        let api_key = self.config.youtube_api_key.as_deref()?;
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let response = self
            .client
            .get(&self.config.search_url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "1"),
                ("q", query),
                ("key", api_key),
            ])
            .send()
            .await;

        let found = match response {
            Ok(response) => response.json::<SearchResponse>().await.ok().and_then(|body| {
                body.items.into_iter().next().and_then(|item| item.id.video_id)
            }),
            Err(e) => {
                warn!(error = %e.without_url(), "YouTube search failed");
                None
            }
        }?;

        match self.thumbnail_exists(&found).await {
            Ok(true) | Err(_) => Some(embed_url(&found)),
            Ok(false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_url_forms() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ\n").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("https://YOUTU.BE/abc123XYZ_-").as_deref(), Some("abc123XYZ_-"));
        assert_eq!(extract_video_id("abc123XYZ_-").as_deref(), Some("abc123XYZ_-"));
    }

    #[test]
    fn test_extract_rejects_prose() {
        assert_eq!(extract_video_id("Sorry, I could not find a video."), None);
        assert_eq!(extract_video_id("abc"), None);
        assert_eq!(extract_video_id("https://vimeo.com/12345678"), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(embed_url("5qap5aO4i9A"), "https://www.youtube.com/embed/5qap5aO4i9A");
    }
}
