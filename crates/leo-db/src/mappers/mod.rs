//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for every table. Writes bind entity
//! fields directly, so there are no insert/update structs here.

mod achievement;
mod application;
mod content;
mod project;
mod site_setting;
