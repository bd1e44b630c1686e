//! Resume-builder core: section entities, the normalized keyed store,
//! field validation, and the add/edit form state machine.

pub mod forms;
pub mod model;
pub mod store;
pub mod validation;
