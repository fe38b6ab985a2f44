#![allow(clippy::doc_markdown, clippy::missing_errors_doc)]
#![doc = include_str!("../README.md")]

#[macro_use]
pub mod quantity;

pub mod fixture;
pub mod kpi;
pub mod prelude;
pub mod report;
pub mod sample;
