// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::collections::HashMap;

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct User {
    pub key: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub biog: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub pictures: Option<HashMap<String, String>>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub cloudcast_count: Option<u64>,
    pub favorite_count: Option<u64>,
    pub is_pro: Option<bool>,
    pub is_premium: Option<bool>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Tag {
    pub key: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Cloudcast {
    pub key: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub user: Option<User>,
    pub tags: Option<Vec<Tag>>,
    pub pictures: Option<HashMap<String, String>>,
    pub created_time: Option<String>,
    pub updated_time: Option<String>,
    pub audio_length: Option<u64>,
    pub play_count: Option<u64>,
    pub favorite_count: Option<u64>,
    pub listener_count: Option<u64>,
    pub repost_count: Option<u64>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// A listing as returned by search, discover and user connections.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub paging: Option<PageLinks>,
}
