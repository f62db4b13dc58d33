//! Endpoint functions for the hearthis.at API

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::sync::Arc;

// Use internal modules
use crate::client::Client;
use crate::config::ApiConfig;
use crate::http::Transport;
use crate::params::Params;
use crate::pending::Pending;
use crate::url::build_url;

/// Page window, optionally restricted to tracks of a given duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub duration: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Some(1),
            count: Some(5),
            duration: None,
        }
    }
}

impl From<&Pagination> for Params {
    fn from(pagination: &Pagination) -> Self {
        Params::new()
            .with("page", pagination.page)
            .with("count", pagination.count)
            .with("duration", pagination.duration)
    }
}

/// Pagination for the feed, with its extra filters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedPagination {
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub duration: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "show-feed-start")]
    pub show_feed_start: Option<String>,
    #[serde(rename = "show-feed-end")]
    pub show_feed_end: Option<String>,
}

impl Default for FeedPagination {
    fn default() -> Self {
        Self {
            page: Some(1),
            count: Some(5),
            duration: None,
            kind: None,
            category: None,
            show_feed_start: None,
            show_feed_end: None,
        }
    }
}

impl From<&FeedPagination> for Params {
    fn from(pagination: &FeedPagination) -> Self {
        Params::new()
            .with("page", pagination.page)
            .with("count", pagination.count)
            .with("duration", pagination.duration)
            .with("type", pagination.kind.clone())
            .with("category", pagination.category.clone())
            .with("show-feed-start", pagination.show_feed_start.clone())
            .with("show-feed-end", pagination.show_feed_end.clone())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistListType {
    #[default]
    Likes,
    Playlists,
    Tracks,
}

impl ArtistListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistListType::Likes => "likes",
            ArtistListType::Playlists => "playlists",
            ArtistListType::Tracks => "tracks",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtistListOptions {
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub kind: ArtistListType,
}

impl Default for ArtistListOptions {
    fn default() -> Self {
        Self {
            page: Some(1),
            count: Some(5),
            kind: ArtistListType::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Tracks,
    User,
    Playlists,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Tracks => "tracks",
            SearchType::User => "user",
            SearchType::Playlists => "playlists",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub kind: SearchType,
    pub page: Option<u32>,
    pub count: Option<u32>,
    pub duration: Option<u32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            kind: SearchType::default(),
            page: Some(1),
            count: Some(5),
            duration: None,
        }
    }
}

/// hearthis.at API. Every endpoint is public.
#[derive(Clone, Default)]
pub struct Hearthis {
    client: Client,
    config: ApiConfig,
}

impl Hearthis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.client = Client::with_transport(transport);
        self
    }

    /// New and popular tracks from the feed.
    pub fn feed_popular_new(&self, pagination: Option<&FeedPagination>) -> Pending {
        let params = Params::new().spread(pagination.map(Params::from));
        self.get("feed", Some(&params.filtered()))
    }

    pub fn all_genres(&self, pagination: Option<&Pagination>) -> Pending {
        let params = Params::new().spread(pagination.map(Params::from));
        self.get("categories", Some(&params.filtered()))
    }

    /// Tracks of one genre.
    pub fn genre_list(&self, category: &str, pagination: &Pagination) -> Pending {
        let params = Params::from(pagination);
        self.get(&format!("categories/{}", category), Some(&params.filtered()))
    }

    pub fn single_artist(&self, username: &str) -> Pending {
        self.get(username, None)
    }

    /// Likes, playlists or tracks of an artist.
    pub fn artists_list(&self, username: &str, options: &ArtistListOptions) -> Pending {
        let params = Params::new()
            .with("page", options.page)
            .with("count", options.count)
            .with("type", options.kind.as_str());
        self.get(username, Some(&params.filtered()))
    }

    pub fn single_track(&self, username: &str, title: &str) -> Pending {
        self.get(&format!("{}/{}", username, title), None)
    }

    pub fn single_playlist(&self, username: &str, page: u32, count: u32) -> Pending {
        let params = Params::new()
            .with("page", page)
            .with("count", count)
            .with("type", ArtistListType::Playlists.as_str());
        self.get(username, Some(&params.filtered()))
    }

    pub fn search(&self, t: &str, options: &SearchOptions) -> Pending {
        let params = Params::new()
            .with("type", options.kind.as_str())
            .with("t", t)
            .with("page", options.page)
            .with("count", options.count)
            .with("duration", options.duration);
        self.get("search", Some(&params.filtered()))
    }

    fn get(&self, path: &str, params: Option<&Params>) -> Pending {
        self.client.get(build_url(path, &self.config.hearthis_api, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::RecordingTransport;
    use crate::model::hearthis::Track;
    use mockito::{Matcher, Server};

    fn hearthis(transport: Arc<RecordingTransport>) -> Hearthis {
        Hearthis::new().with_transport(transport)
    }

    async fn sent_url(pending: Pending, transport: &RecordingTransport) -> String {
        pending.await.unwrap();
        transport.last().url
    }

    #[tokio::test]
    async fn feed_without_pagination() {
        let transport = RecordingTransport::ok();
        let url = sent_url(hearthis(transport.clone()).feed_popular_new(None), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/feed");
    }

    #[tokio::test]
    async fn feed_with_pagination() {
        let transport = RecordingTransport::ok();
        let pagination = FeedPagination {
            kind: Some("popular".to_owned()),
            show_feed_start: Some("2020-01-01".to_owned()),
            ..Default::default()
        };
        let url = sent_url(hearthis(transport.clone()).feed_popular_new(Some(&pagination)), &transport).await;
        assert_eq!(
            url,
            "https://api-v2.hearthis.at/feed?page=1&count=5&type=popular&show-feed-start=2020-01-01"
        );
    }

    #[tokio::test]
    async fn all_genres() {
        let transport = RecordingTransport::ok();
        let client = hearthis(transport.clone());

        let url = sent_url(client.all_genres(None), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/categories");

        let url = sent_url(client.all_genres(Some(&Pagination::default())), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/categories?page=1&count=5");
    }

    #[tokio::test]
    async fn genre_list() {
        let transport = RecordingTransport::ok();
        let pagination = Pagination {
            page: Some(2),
            count: Some(10),
            duration: None,
        };
        let url = sent_url(hearthis(transport.clone()).genre_list("house", &pagination), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/categories/house?page=2&count=10");
    }

    #[tokio::test]
    async fn genre_list_drops_zero_duration() {
        let transport = RecordingTransport::ok();
        let pagination = Pagination {
            duration: Some(0),
            ..Default::default()
        };
        let url = sent_url(hearthis(transport.clone()).genre_list("techno", &pagination), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/categories/techno?page=1&count=5");
    }

    #[tokio::test]
    async fn single_artist_and_track() {
        let transport = RecordingTransport::ok();
        let client = hearthis(transport.clone());

        let url = sent_url(client.single_artist("shawne"), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/shawne");

        let url = sent_url(client.single_track("shawne", "sunday-session"), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/shawne/sunday-session");
    }

    #[tokio::test]
    async fn artists_list_and_playlist() {
        let transport = RecordingTransport::ok();
        let client = hearthis(transport.clone());

        let url = sent_url(client.artists_list("shawne", &ArtistListOptions::default()), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/shawne?page=1&count=5&type=likes");

        let options = ArtistListOptions {
            kind: ArtistListType::Tracks,
            page: Some(3),
            ..Default::default()
        };
        let url = sent_url(client.artists_list("shawne", &options), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/shawne?page=3&count=5&type=tracks");

        let url = sent_url(client.single_playlist("shawne", 1, 5), &transport).await;
        assert_eq!(url, "https://api-v2.hearthis.at/shawne?page=1&count=5&type=playlists");
    }

    #[tokio::test]
    async fn search() {
        let transport = RecordingTransport::ok();
        let options = SearchOptions {
            duration: Some(60),
            ..Default::default()
        };
        let url = sent_url(hearthis(transport.clone()).search("deep house", &options), &transport).await;
        assert_eq!(
            url,
            "https://api-v2.hearthis.at/search?type=tracks&t=deep+house&page=1&count=5&duration=60"
        );
    }

    #[tokio::test]
    async fn single_track_over_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/shawne/sunday-session")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"id": "42", "title": "Sunday Session", "duration": "3600", "user": {"permalink": "shawne"}}"#)
            .create_async()
            .await;

        let client = Hearthis::with_config(ApiConfig::default().with_hearthis_api(&server.url()));
        let track: Track = client.single_track("shawne", "sunday-session").json().await.unwrap();

        mock.assert_async().await;
        assert_eq!(track.title.as_deref(), Some("Sunday Session"));
        assert_eq!(track.user.and_then(|u| u.permalink).as_deref(), Some("shawne"));
    }

    #[tokio::test]
    async fn search_over_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "user".into()),
                Matcher::UrlEncoded("t".into(), "shawne".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("count".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = Hearthis::with_config(ApiConfig::default().with_hearthis_api(&server.url()));
        let options = SearchOptions {
            kind: SearchType::User,
            ..Default::default()
        };
        let result = client.search("shawne", &options).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, serde_json::json!([]));
    }
}
