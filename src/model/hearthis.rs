// Use 3rd party
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<String>,
    pub permalink: Option<String>,
    pub username: Option<String>,
    pub caption: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub track_count: Option<String>,
    pub followers_count: Option<String>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub title: Option<String>,
    pub permalink: Option<String>,
    pub uri: Option<String>,
    pub duration: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub artwork_url: Option<String>,
    pub stream_url: Option<String>,
    pub download_url: Option<String>,
    pub created_at: Option<String>,
    pub playback_count: Option<String>,
    pub user: Option<Artist>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Genre {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn track_with_artist() {
        let body = json!({
            "id": "42",
            "title": "Sunday Session",
            "duration": "3600",
            "user": {"permalink": "shawne", "username": "Shawne"}
        });

        let track: Track = serde_json::from_value(body).unwrap();

        assert_eq!(track.id.as_deref(), Some("42"));
        assert_eq!(track.user.unwrap().username.as_deref(), Some("Shawne"));
    }
}
