//! Interactive terminal directory of in-memory user records.

pub mod cmd;
pub mod complete;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod logging;
pub mod process;
pub mod store;
