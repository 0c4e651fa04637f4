pub(crate) mod common;

mod catalog;
mod view_model;
