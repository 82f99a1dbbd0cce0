//! polyroute routing-client core
//!
//! Polyline codec, routing wire vocabulary, and route result records for
//! talking to a turn-by-turn routing provider. Transport and response
//! parsing live in the consuming application.

pub mod costing;
pub mod point;
pub mod polyline;
pub mod result;
