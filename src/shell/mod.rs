// Composition root for the attendance context.
//
// - Read config from the environment (see `crate::config`).
// - Instantiate the in-memory ledger, outbox and record stores.
// - Wire them into the use case handlers and expose them over HTTP.

pub mod http;
pub mod state;
