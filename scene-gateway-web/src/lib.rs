//! Scene Gateway Web
//!
//! Actix-web front end: configuration, logging, routing and JSON envelopes on
//! top of [`scene_gateway_core`].

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
