//! State families shared by the integration tests.
#![allow(dead_code)]

pub mod lock;
pub mod safe;
