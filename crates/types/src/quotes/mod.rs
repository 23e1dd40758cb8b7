//! Quote requests and provider quote results

pub mod request;
pub mod response;

pub use request::{QuoteMetaOptions, QuoteRequest};
pub use response::ProviderQuote;
