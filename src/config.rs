//! Service roots shared by the facades.
//!
//! An `ApiConfig` is built once and handed to each facade at construction.
//! It is never mutated afterwards; tests point it at a mock server with the
//! `with_*` setters.

pub const MIXCLOUD_API: &str = "https://api.mixcloud.com";
pub const HEARTHIS_API: &str = "https://api-v2.hearthis.at";
pub const MIXCLOUD_URL: &str = "https://www.mixcloud.com";
pub const HEARTHIS_URL: &str = "https://hearthis.at";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the Mixcloud API.
    pub mixcloud_api: String,
    /// Root of the hearthis.at API.
    pub hearthis_api: String,
    /// Public Mixcloud site, used for OAuth and oEmbed lookups.
    pub mixcloud_url: String,
    /// Public hearthis.at site.
    pub hearthis_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mixcloud_api: MIXCLOUD_API.to_owned(),
            hearthis_api: HEARTHIS_API.to_owned(),
            mixcloud_url: MIXCLOUD_URL.to_owned(),
            hearthis_url: HEARTHIS_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    pub fn with_mixcloud_api(mut self, root: &str) -> Self {
        self.mixcloud_api = root.to_owned();
        self
    }

    pub fn with_hearthis_api(mut self, root: &str) -> Self {
        self.hearthis_api = root.to_owned();
        self
    }

    pub fn with_mixcloud_url(mut self, root: &str) -> Self {
        self.mixcloud_url = root.to_owned();
        self
    }

    pub fn with_hearthis_url(mut self, root: &str) -> Self {
        self.hearthis_url = root.to_owned();
        self
    }
}
