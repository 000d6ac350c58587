//! FareSmart route search server.
//!
//! Answers "what's the cheapest way to fly between these two cities,
//! counting nearby airports?" by asking a route-search service and
//! reconciling whatever record layout it replies with into one ranked,
//! bounded list of routes.

pub mod config;
pub mod domain;
pub mod pipeline;
pub mod search;
pub mod upstream;
pub mod web;
