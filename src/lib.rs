#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod controller;
pub mod convert;
pub mod logging;
pub mod model;
pub mod route;
pub mod store;
pub mod tui;
