//! Identity record - one tracked person and their live occupancy state

use crate::value_objects::{HardwareAddress, Visibility};

/// A tracked person
///
/// `present` and `miss_count` are owned by the presence tracker; outside this
/// crate they are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub name: String,
    pub hardware_address: HardwareAddress,
    pub visibility: Visibility,
    present: bool,
    miss_count: u32,
}

impl IdentityRecord {
    /// Create a new record that has not been observed yet
    pub fn new(
        name: impl Into<String>,
        hardware_address: HardwareAddress,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            hardware_address,
            visibility,
            present: false,
            miss_count: 0,
        }
    }

    /// Whether the tracker currently judges this person to be present
    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Consecutive scan cycles without an observation
    #[inline]
    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// Record a positive observation
    ///
    /// Returns true if this flipped the record from absent to present.
    pub(crate) fn mark_observed(&mut self) -> bool {
        let arrived = !self.present;
        self.present = true;
        self.miss_count = 0;
        arrived
    }

    /// Record a missed observation
    ///
    /// Returns true if this flipped the record from present to absent.
    pub(crate) fn mark_missed(&mut self, threshold: u32) -> bool {
        self.miss_count = self.miss_count.saturating_add(1);
        if self.miss_count > threshold && self.present {
            self.present = false;
            return true;
        }
        false
    }
}
