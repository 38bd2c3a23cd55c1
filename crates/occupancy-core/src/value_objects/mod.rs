//! Value objects - immutable domain primitives

mod hardware_address;
mod visibility;

pub use hardware_address::HardwareAddress;
pub use visibility::Visibility;
