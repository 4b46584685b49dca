//! Preferred channel list weighting.

/// Provide the preferred-channel-list weight of a frequency.
///
/// A weight of zero means the frequency is not listed; `1..=255` expresses
/// increasing preference.
pub trait PclProvider: Send + Sync {
    /// Weight for `frequency_mhz`.
    fn weight_for(&self, frequency_mhz: u32) -> u8;
}

/// One entry of a [`PreferredChannelList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PclEntry {
    /// Channel centre frequency.
    pub frequency_mhz: u32,
    /// Preference weight.
    pub weight: u8,
}

/// Ordered list of preferred channels.
///
/// Lookups return the first matching entry; frequencies not in the list
/// weigh zero.
///
/// # Examples
/// ```
/// use airwave_core::{PclEntry, PclProvider, PreferredChannelList};
///
/// let pcl = PreferredChannelList::new(vec![PclEntry { frequency_mhz: 5180, weight: 255 }]);
/// assert_eq!(pcl.weight_for(5180), 255);
/// assert_eq!(pcl.weight_for(2412), 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PreferredChannelList {
    entries: Vec<PclEntry>,
}

impl PreferredChannelList {
    /// Build a list from its entries.
    #[must_use]
    pub const fn new(entries: Vec<PclEntry>) -> Self {
        Self { entries }
    }

    /// Entries in lookup order.
    #[must_use]
    pub fn entries(&self) -> &[PclEntry] {
        &self.entries
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PclEntry> for PreferredChannelList {
    fn from_iter<I: IntoIterator<Item = PclEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PclProvider for PreferredChannelList {
    fn weight_for(&self, frequency_mhz: u32) -> u8 {
        self.entries
            .iter()
            .find(|entry| entry.frequency_mhz == frequency_mhz)
            .map_or(0, |entry| entry.weight)
    }
}
