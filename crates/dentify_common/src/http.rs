// --- File: crates/dentify_common/src/http.rs ---

// HTTP utilities shared across crates. The clinic API client builds on the
// reusable reqwest client exposed by the `client` submodule.

pub mod client;
