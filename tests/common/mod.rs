#![allow(dead_code)]

mod backend;
pub mod schema;

pub use backend::{Call, Method, Reply, ScriptedBackend, recording_log};
