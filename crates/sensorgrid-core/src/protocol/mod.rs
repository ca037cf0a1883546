//! Wire contracts of the query channel.
//!
//! - Request: one Text frame whose entire payload is a device id (no envelope).
//! - Reply: one Text frame carrying a [`query::QueryReply`] JSON object.

pub mod query;
