//! Absolute URL assembly.

// Use 3rd party
use reqwest::Url;

// Use internal modules
use crate::client::{ClientError, ClientResult};
use crate::params::Params;

/// Resolves `path` against `root` and appends `params` as query pairs.
///
/// A leading slash in `path` replaces the root path, otherwise `path` is
/// appended to it. Path segments are taken as given; only characters that
/// cannot appear in a path are percent-encoded. Query pairs keep their
/// insertion order and are form-encoded.
pub fn build_url(path: &str, root: &str, params: Option<&Params>) -> ClientResult<String> {
    let base = Url::parse(root).map_err(|e| ClientError::Url(format!("{}: {}", root, e)))?;
    let mut url = base
        .join(path)
        .map_err(|e| ClientError::Url(format!("{}: {}", path, e)))?;

    if let Some(params) = params {
        if !params.is_empty() {
            let pairs: Vec<(&str, String)> = params.iter().map(|(k, v)| (k, v.to_string())).collect();
            let encoded = serde_urlencoded::to_string(&pairs)
                .map_err(|e| ClientError::Url(e.to_string()))?;
            let query = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{}&{}", existing, encoded),
                _ => encoded,
            };
            url.set_query(Some(&query));
        }
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn relative_path_with_params() {
        let params = Params::new().with("page", 2).with("count", 10);
        let url = build_url("categories/house", "https://api-v2.hearthis.at", Some(&params)).unwrap();
        assert_eq!(url, "https://api-v2.hearthis.at/categories/house?page=2&count=10");
    }

    #[test]
    fn leading_slash_replaces_root_path() {
        let url = build_url("/discover/jazz", "https://api.mixcloud.com/v1/", None).unwrap();
        assert_eq!(url, "https://api.mixcloud.com/discover/jazz");
    }

    #[test]
    fn relative_path_appends_to_root_path() {
        let url = build_url("me", "https://api.mixcloud.com/v1/", None).unwrap();
        assert_eq!(url, "https://api.mixcloud.com/v1/me");
    }

    #[test]
    fn empty_path_is_root() {
        let url = build_url("", "https://api.mixcloud.com", None).unwrap();
        assert_eq!(url, "https://api.mixcloud.com/");
    }

    #[test]
    fn empty_params_add_no_query() {
        let url = build_url("feed", "https://api-v2.hearthis.at", Some(&Params::new())).unwrap();
        assert_eq!(url, "https://api-v2.hearthis.at/feed");
    }

    #[test]
    fn special_characters_are_encoded() {
        let params = Params::new().with("q", "deep house & techno");
        let url = build_url("spartacus/party time", "https://api.mixcloud.com", Some(&params)).unwrap();
        assert_eq!(
            url,
            "https://api.mixcloud.com/spartacus/party%20time?q=deep+house+%26+techno"
        );
    }

    #[test]
    fn values_keep_insertion_order_and_empties() {
        let params = Params::new()
            .with("callback", "")
            .with("access_token", "abc")
            .with("metadata", ParamValue::Int(1));
        let url = build_url("/spartacus/follow", "https://api.mixcloud.com", Some(&params)).unwrap();
        assert_eq!(
            url,
            "https://api.mixcloud.com/spartacus/follow?callback=&access_token=abc&metadata=1"
        );
    }

    #[test]
    fn invalid_root_is_an_error() {
        let err = build_url("me", "not a url", None).unwrap_err();
        assert!(matches!(err, ClientError::Url(_)));
    }
}
