#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod core;
pub mod prelude;
pub mod quantity;
