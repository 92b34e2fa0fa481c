pub mod account;
pub mod averages;
pub mod email;
pub mod endpoint;
pub mod leaked;
pub mod phone;
pub mod postback;
pub mod proxy_detection;
pub mod report;
pub mod requests;
pub mod url;

pub use endpoint::{Endpoint, PostEndpoint};
