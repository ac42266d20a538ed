//! Endpoint families (vertical slices): request types, wire types,
//! sub-clients.

pub mod staticmap;
pub mod timezone;
