//! Endpoint functions for the Mixcloud API

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::sync::Arc;

// Use internal modules
use crate::client::{Client, ClientResult};
use crate::config::ApiConfig;
use crate::http::{HttpMethod, Transport};
use crate::params::{metadata_value, normalize_uri, ParamValue, Params};
use crate::pending::Pending;
use crate::url::build_url;

/// Window over a Mixcloud listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl From<&Paging> for Params {
    fn from(paging: &Paging) -> Self {
        Params::new()
            .with("limit", paging.limit)
            .with("offset", paging.offset)
            .with("since", paging.since.clone())
            .with("until", paging.until.clone())
    }
}

/// Trailing options accepted by every Mixcloud read endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions {
    /// Sent as `metadata=0|1`; defaults to `true`.
    pub metadata: ParamValue,
    /// JSONP callback name; empty means none.
    pub callback: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            metadata: ParamValue::Bool(true),
            callback: String::new(),
        }
    }
}

impl QueryOptions {
    pub fn metadata(mut self, metadata: impl Into<ParamValue>) -> Self {
        self.metadata = metadata.into();
        self
    }

    pub fn callback(mut self, callback: &str) -> Self {
        self.callback = callback.to_owned();
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Upload,
    User,
    Tag,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Upload => "upload",
            SearchType::User => "user",
            SearchType::Tag => "tag",
        }
    }
}

/// Options for `Mixcloud::embed`.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedOptions {
    /// `embed-json` when set, `embed-html` otherwise.
    pub json: bool,
    pub callback: String,
    pub width: String,
    pub height: String,
    pub color: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            json: true,
            callback: String::new(),
            width: String::new(),
            height: String::new(),
            color: String::new(),
        }
    }
}

/// The bearer token attached to authenticated calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientSession {
    access_token: Option<String>,
}

impl ClientSession {
    #[must_use]
    pub fn new(access_token: Option<&str>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn param(&self) -> ParamValue {
        self.access_token.clone().into()
    }
}

/// Mixcloud API
///
/// Each method returns a `Pending` that sends its one request when it is
/// first awaited or given a callback. Dropping it unconsumed sends nothing,
/// which matters for the mutations (`follow`, `favorite`, ...).
#[derive(Clone)]
pub struct Mixcloud {
    client: Client,
    config: ApiConfig,
    session: ClientSession,
}

impl Default for Mixcloud {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Mixcloud {
    /// An empty token is treated as no token.
    #[must_use]
    pub fn new(access_token: Option<&str>) -> Self {
        Self::with_config(access_token, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(access_token: Option<&str>, config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            session: ClientSession::new(access_token),
        }
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.client = Client::with_transport(transport);
        self
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    /// Current user data.
    pub fn me(&self, options: &QueryOptions) -> Pending {
        self.lookup("me", options)
    }

    pub fn search(
        &self,
        q: &str,
        kind: SearchType,
        paging: Option<&Paging>,
        options: &QueryOptions,
    ) -> Pending {
        let params = Params::new()
            .with("q", q)
            .with("type", kind.as_str())
            .with("metadata", metadata_value(&options.metadata))
            .with("access_token", self.session.param())
            .with("callback", options.callback.as_str())
            .spread(paging.map(Params::from));
        self.client.get(self.api_url("search", &params.filtered()))
    }

    /// A single show (cloudcast).
    pub fn show(&self, username: &str, title: &str, options: &QueryOptions) -> Pending {
        self.lookup(&format!("{}/{}", username, title), options)
    }

    pub fn tag(&self, tag: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.listing(&format!("/discover/{}", tag), paging, options)
    }

    pub fn city(&self, city: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.listing(&format!("/discover/city:{}", city), paging, options)
    }

    pub fn tag_and_city(
        &self,
        tag: &str,
        city: &str,
        paging: Option<&Paging>,
        options: &QueryOptions,
    ) -> Pending {
        self.listing(&format!("/discover/{}+city:{}", tag, city), paging, options)
    }

    pub fn discover(&self, q: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.listing(&format!("/discover/{}", q), paging, options)
    }

    pub fn discover_latest(&self, q: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.listing(&format!("/discover/{}/latest", q), paging, options)
    }

    pub fn discover_popular(&self, q: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.listing(&format!("/discover/{}/popular", q), paging, options)
    }

    pub fn user(&self, username: &str, options: &QueryOptions) -> Pending {
        self.lookup(username, options)
    }

    pub fn user_cloudcasts(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "cloudcasts", paging, options)
    }

    pub fn user_comments(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "comments", paging, options)
    }

    pub fn user_favorites(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "favorites", paging, options)
    }

    pub fn user_feed(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "feed", paging, options)
    }

    pub fn user_followers(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "followers", paging, options)
    }

    pub fn user_following(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "following", paging, options)
    }

    pub fn user_listens(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "listens", paging, options)
    }

    pub fn user_playlists(&self, username: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        self.connection(username, "playlists", paging, options)
    }

    pub fn user_playlist_cloudcasts(
        &self,
        username: &str,
        slug: &str,
        paging: Option<&Paging>,
        options: &QueryOptions,
    ) -> Pending {
        self.listing(
            &format!("/{}/playlists/{}/cloudcasts/", username, slug),
            paging,
            options,
        )
    }

    /// Exchanges an OAuth code for an access token.
    ///
    /// Every parameter is sent, empty or not.
    pub fn obtain_access_token(
        &self,
        client_id: &str,
        redirect_uri: &str,
        client_secret: &str,
        oauth_code: &str,
        callback: Option<&str>,
    ) -> Pending {
        let params = Params::new()
            .with("callback", callback.unwrap_or_default())
            .with("client_id", client_id)
            .with("redirect_uri", normalize_uri(redirect_uri))
            .with("client_secret", client_secret)
            .with("code", oauth_code);
        self.client.get(build_url(
            "/oauth/access_token",
            &self.config.mixcloud_url,
            Some(&params),
        ))
    }

    /// Embed player markup, as JSON or HTML.
    pub fn embed(&self, username: &str, title: &str, options: &EmbedOptions) -> Pending {
        let format = if options.json { "embed-json" } else { "embed-html" };
        let params = Params::new()
            .with("callback", options.callback.as_str())
            .with("width", options.width.as_str())
            .with("height", options.height.as_str())
            .with("color", options.color.as_str());
        self.client.get(self.api_url(&format!("/{}/{}/{}", username, title, format), &params))
    }

    pub fn oembed(&self, username: &str, title: &str) -> Pending {
        let show_url = build_url(
            &format!("/{}/{}", username, title),
            &self.config.mixcloud_url,
            None,
        );
        let url = show_url.and_then(|show_url| {
            let params = Params::new()
                .with("url", normalize_uri(&show_url))
                .with("format", "json");
            self.api_url("oembed", &params)
        });
        self.client.get(url)
    }

    /// Follows `username`. The POST goes out once the result is awaited or
    /// given a callback.
    pub fn follow(&self, username: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Post, &format!("/{}/follow", username), callback)
    }

    pub fn unfollow(&self, username: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Delete, &format!("/{}/follow", username), callback)
    }

    pub fn favorite(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Post, &format!("/{}/{}/favorite", username, title), callback)
    }

    pub fn undo_favorite(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Delete, &format!("/{}/{}/favorite", username, title), callback)
    }

    pub fn repost(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Post, &format!("/{}/{}/repost", username, title), callback)
    }

    pub fn undo_repost(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Delete, &format!("/{}/{}/repost", username, title), callback)
    }

    pub fn listen_later(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Post, &format!("/{}/{}/listen-later", username, title), callback)
    }

    pub fn undo_listen_later(&self, username: &str, title: &str, callback: Option<&str>) -> Pending {
        self.mutate(HttpMethod::Delete, &format!("/{}/{}/listen-later", username, title), callback)
    }

    fn api_url(&self, path: &str, params: &Params) -> ClientResult<String> {
        build_url(path, &self.config.mixcloud_api, Some(params))
    }

    // metadata, access_token, callback
    fn lookup(&self, path: &str, options: &QueryOptions) -> Pending {
        let params = Params::new()
            .with("metadata", metadata_value(&options.metadata))
            .with("access_token", self.session.param())
            .with("callback", options.callback.as_str());
        self.client.get(self.api_url(path, &params.filtered()))
    }

    // metadata, access_token, paging..., callback
    fn listing(&self, path: &str, paging: Option<&Paging>, options: &QueryOptions) -> Pending {
        let params = Params::new()
            .with("metadata", metadata_value(&options.metadata))
            .with("access_token", self.session.param())
            .spread(paging.map(Params::from))
            .with("callback", options.callback.as_str());
        self.client.get(self.api_url(path, &params.filtered()))
    }

    fn connection(
        &self,
        username: &str,
        connection: &str,
        paging: Option<&Paging>,
        options: &QueryOptions,
    ) -> Pending {
        self.listing(&format!("/{}/{}/", username, connection), paging, options)
    }

    // callback, access_token; sent only when the result is consumed
    fn mutate(&self, method: HttpMethod, path: &str, callback: Option<&str>) -> Pending {
        let params = Params::new()
            .with("callback", callback.unwrap_or_default())
            .with("access_token", self.session.access_token().unwrap_or_default());
        self.client.request(method, self.api_url(path, &params))
    }
}
