#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
extern crate pretty_assertions;

mod echo;
mod error;
mod pipeline;
mod record;
mod render;
mod schema;

pub use echo::{ECHO_WIDTH, truncate_with_cycle};
pub use error::{Error, Malformed, Result};
pub use pipeline::{Converter, OnError, Report, RunError};
pub use record::{TraceRecord, parse};
pub use render::{RenderMode, Summary, render, render_line};
pub use schema::{Field, Fields, Rule, Schema, Value};
