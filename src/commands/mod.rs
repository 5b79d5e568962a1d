mod audit;
mod context;
mod yaml;

pub use audit::{run_audit, run_audit_impl};
pub use context::{color_choice_to_mode, load_config, report_error, write_output};
pub use yaml::{run_yaml, run_yaml_impl};
