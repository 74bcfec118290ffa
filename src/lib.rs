//! Local JSON inbox server
//!
//! A small development tool for inspecting JSON payloads: it binds a local
//! HTTP listener, pretty-prints every JSON POST it receives to the console,
//! and echoes a confirmation envelope back to the client. Shortly after
//! startup it registers the port with the Gitpod preview via
//! `gp preview --external`.
//!
//! # Usage
//!
//! ```bash
//! json-inbox --port 36625
//! curl -X POST http://localhost:36625 \
//!   -H "Content-Type: application/json" \
//!   -d '{"message": "Hello, Server!", "value": 42}'
//! ```
//!
//! # Features
//!
//! - Accepts POSTs on any path; the body is parsed as JSON and printed
//!   with 2-space indentation
//! - GET on any path serves a static info page
//! - Per-request failures never take the listener down
//! - One-shot delayed `gp preview` launch, isolated from server health

mod error;
mod handlers;
mod preview;
mod server;

pub use error::RequestError;
pub use server::{router, InboxConfig, InboxServer};
