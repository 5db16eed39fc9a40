//! Common test utilities.
//!
//! Local HTTP servers for probe tests and scripted fakes for shell tests.
#![allow(dead_code)]

pub mod fakes;
pub mod http;
