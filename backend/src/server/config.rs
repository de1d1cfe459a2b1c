//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::web;
use movies_gateway::inbound::http::state::HttpState;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    /// Construct a server configuration from the bind address and handler state.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: web::Data<HttpState>) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }
}
