//! Rsmixes is a wrapper for the Mixcloud and hearthis.at APIs.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsmixes = "0.1.0"
//! ```
//!
//! Every endpoint method builds its URL right away and returns a `Pending`
//! result. The request goes out once, the first time the result is awaited
//! or given a callback.
//!
//! ## Authorization
//!
//! hearthis.at needs no credentials. Mixcloud takes an optional OAuth access
//! token, attached to every call that sends one. Obtaining it is up to you;
//! `Mixcloud::obtain_access_token` performs the final code exchange.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rsmixes = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```no_run
//! use rsmixes::endpoints::hearthis::{Hearthis, Pagination};
//! use rsmixes::endpoints::mixcloud::{Mixcloud, QueryOptions};
//! use dotenv::dotenv;
//! use std::env;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     let token = env::var("RSMIXES_MIXCLOUD_TOKEN").ok();
//!     let mixcloud = Mixcloud::new(token.as_deref());
//!
//!     // Await the result directly...
//!     let me = mixcloud.me(&QueryOptions::default()).await;
//!     println!("{:?}", me);
//!
//!     // ...or hand it a callback.
//!     let hearthis = Hearthis::new();
//!     hearthis
//!         .genre_list("house", &Pagination::default())
//!         .as_callback(|err, tracks| println!("{:?} {:?}", err, tracks))
//!         .expect("called inside the tokio runtime")
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod http;
pub mod model;
pub mod params;
pub mod pending;
pub mod url;

pub use client::{ClientError, ClientResult};
pub use config::ApiConfig;
pub use endpoints::{Hearthis, Mixcloud};
pub use pending::Pending;
