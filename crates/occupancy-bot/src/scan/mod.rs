//! Network scanning
//!
//! One raw discovery per call, retried on transient failure.

mod command_scanner;
mod invoker;

pub use command_scanner::CommandScanner;
pub use invoker::{RetryPolicy, ScanInvoker};
