#![forbid(unsafe_code)]

pub mod config;
pub mod datamodel;
pub mod demo;
pub mod exporters;
pub mod importers;
pub mod sampling;

pub use sampling::{sample, sample_with_interval};
