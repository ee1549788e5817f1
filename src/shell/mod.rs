// Composition root.
//
// Responsibilities
// - Wire in-memory adapters into use case handlers (`state`).
// - Expose them over REST (`http`) and GraphQL (`graphql`).
// - The binary in `main.rs` reads config, sets up tracing and serves the router.

pub mod graphql;
pub mod http;
pub mod state;
