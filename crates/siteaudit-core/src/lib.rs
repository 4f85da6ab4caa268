pub mod config;
pub mod error;
pub mod logging;

pub mod audits;
pub mod capability;
pub mod fixtures;
pub mod intake;
pub mod issues;
pub mod url_model;
