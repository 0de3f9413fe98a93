//! # Astel
//!
//! Import pipeline for astronomical bulletin reports: fetch a report page,
//! parse its fixed template, mine the free text for observation dates, sky
//! coordinates, taxonomy keywords and known-object aliases, and hand the
//! assembled record to storage. Structural failures are classified for the
//! caller; free-text extraction is lenient and best-effort.

pub mod astel;
pub mod astel_errors;
pub mod constants;
mod conversion;
pub mod env_state;
pub mod extraction;
pub mod fetch;
pub mod objects;
pub mod reports;
pub mod storage;
pub mod time;
