#[macro_use]
extern crate log;

pub mod bands;
pub mod car;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod f1;
pub mod formatting;
pub mod interrupt;
pub mod logging;
pub mod overlay;
pub mod panels;
pub mod registry;
pub mod surface;
pub mod terminal;
