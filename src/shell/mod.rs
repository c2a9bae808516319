// Composition root for the hotel booking backend.
//
// Responsibilities
// - Read config from the environment.
// - Load the room catalog into the in memory hotel.
// - Wire the hotel into the use case handlers and expose them over HTTP and GraphQL.

pub mod catalog;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
