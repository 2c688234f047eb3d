//! Rail transit route finder.
//!
//! Loads a network snapshot of lines, stations and connections, and answers
//! "what are the fewest-stop ways from here to there?" over HTTP.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
