//! wgconsole Web Console
//!
//! Browser front end for a wg-meshconf managed WireGuard mesh: a JSON API
//! over the shared engine plus an embedded single-page UI.

pub mod routes;
pub mod server;

pub use routes::ConsoleState;
pub use server::WebServer;
