//! Play · Pose playlist API
//!
//! Mood, browse and search endpoints over the YouTube Music catalog, hosted
//! either by the local dev server (`playpose-dev`) or as a serverless function
//! (`playpose-function`).

pub mod api;
pub mod catalog;
pub mod config;
pub mod function;
pub mod handler;
pub mod http;
pub mod logger;
pub mod playlists;
pub mod server;
