//! Small shared helpers.

pub mod date;
pub mod hash;
pub mod mime;
pub mod plural;
