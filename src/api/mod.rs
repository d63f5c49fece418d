//! REST boundary to the aggregation server.
//!
//! The server owns all storage (categories, feeds, associations); this
//! module only speaks its `/api` surface:
//!
//! - [`client`] - `ApiClient` with get/post/put/patch/delete and a bounded
//!   envelope reader
//! - [`envelope`] - the uniform `{success, data, error, message}` response
//!   shape

mod client;
mod envelope;

pub use client::{ApiClient, ApiError};
pub use envelope::Envelope;
