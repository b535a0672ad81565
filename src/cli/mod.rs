//! Command-line workflows
//!
//! - `orchestration` - status, list and bump driven by a [crate::store::VersionStore]

pub mod orchestration;

pub use orchestration::{
    run_bump, run_list, run_status, BumpOutcome, BumpRequest, BumpTarget, StatusReport,
};
