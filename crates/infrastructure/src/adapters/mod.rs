//! Port adapters

mod system_clock;
mod variable_group_api;

pub use system_clock::SystemClock;
pub use variable_group_api::ReqwestVariableGroupApi;
