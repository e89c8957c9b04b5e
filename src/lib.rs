//! Plot the entity count of a cellular automaton run against its frame index.
//!
//! The log's first line is the chart title; the rest is scanned for
//! `Frame <n>` and `EntityCount: <n>` markers.

pub mod analyzer;
pub mod config;
pub mod pipeline;
pub mod ui;
