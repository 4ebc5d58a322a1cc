//! UI helpers for consistent CLI output
//!
//! Plain `console`-styled lines; colors are dropped automatically when
//! stdout is not a terminal.

pub mod output;

pub use output::{
    key_value, remark, section, step_error_detail, step_ok, step_ok_detail, step_warn_hint,
};
