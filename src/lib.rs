// Allow dead code for public API functions that may not be used internally
// but are part of the library's exposed interface
#![allow(dead_code)]

pub mod aggregate;
pub mod audit;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod notify;
pub mod serp;
pub mod subscribe;

pub use audit::{run_audit, AuditReport, AuditSection, Submission};
pub use classify::{classify_result, ClassifiedResult, ControlType};
