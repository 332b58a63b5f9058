#![doc = "vpat-publish: convert the most recent VPAT markdown report to styled HTML and publish it."]

//! This crate implements a small CI utility with two entry points sharing one
//! pipeline: resolve inputs from the environment, pick the newest report in a
//! directory, render it to a self-contained HTML document, and hand the result
//! to an output sink (a local file next to the checkout, or an S3 object).
//!
//! # Usage
//! The binary exposes the entry points as subcommands (`convert`, `upload`);
//! see [`cli`] for the orchestration and the remaining modules for the
//! independently testable pieces.

pub mod cli;
pub mod inputs;
pub mod publish;
pub mod render;
pub mod report;
pub mod styles;
