//! Shared core for the two Journeyman demo apps: the bus-ticket browsing
//! demo (search, filter, seat selection) and the resume builder (section
//! CRUD with live preview).
//!
//! The UI layers consume everything here as plain function calls:
//! `bus::query` and `bus::search` feed the search/results pages,
//! `resume::store` + `resume::forms` back the section editors, and
//! `session` ties a single user session together with local JSON snapshots
//! standing in for browser local storage.

pub mod auth;
pub mod bus;
pub mod config;
pub mod errors;
pub mod resume;
pub mod session;
pub mod storage;
