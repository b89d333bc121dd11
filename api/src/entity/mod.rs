//! SeaORM table models

pub mod documents;
