//! Bus-ticket demo core: catalog model, the pure filter/sort engine, the
//! simulated search service, and seat selection.

pub mod data;
pub mod model;
pub mod query;
pub mod search;
pub mod seats;
