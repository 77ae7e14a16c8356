//! Adapters that implement [`BrowserTarget`](crate::BrowserTarget).

pub mod recording;
