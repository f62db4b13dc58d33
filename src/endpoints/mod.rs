pub mod hearthis;
pub mod mixcloud;

pub use hearthis::Hearthis;
pub use mixcloud::Mixcloud;
