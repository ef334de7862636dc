//! The split configuration: who the two parties are, how costs are
//! divided by default, and which categories the expense form offers.
//!
//! The original tool hardcoded these as module constants; here they are
//! an explicit value built from CLI arguments, validated once at
//! startup, and passed into the settlement calculator and the views.

use crate::Error;

/// The percentage of each expense the first party carries when an
/// expense does not specify its own split.
pub const DEFAULT_SHARE_A: u32 = 60;

/// The percentage of each expense the second party carries when an
/// expense does not specify its own split.
pub const DEFAULT_SHARE_B: u32 = 40;

/// The categories offered by the new-expense form.
///
/// Categories are advisory: the store accepts whatever label a record
/// carries, and aggregation groups by the stored string.
pub const DEFAULT_CATEGORIES: [&str; 15] = [
    "Car Parts",
    "Bed & Mattress",
    "Kitchen & Cooking",
    "Electrics & Solar",
    "Tools",
    "Insulation",
    "Furniture & Storage",
    "Water & Sanitary",
    "Heating",
    "Decoration",
    "Security",
    "Miscellaneous",
    "Fuel",
    "Cleaning Supplies",
    "Building Materials",
];

/// How expenses are shared between the two parties.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// The name of the first party.
    pub party_a: String,

    /// The name of the second party.
    pub party_b: String,

    /// The percentage of an expense carried by the first party when the
    /// expense does not store its own split.
    pub default_share_a: u32,

    /// The percentage of an expense carried by the second party when
    /// the expense does not store its own split.
    pub default_share_b: u32,

    /// The category labels offered by the new-expense form.
    pub categories: Vec<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            party_a: "Alice".to_owned(),
            party_b: "Ben".to_owned(),
            default_share_a: DEFAULT_SHARE_A,
            default_share_b: DEFAULT_SHARE_B,
            categories: DEFAULT_CATEGORIES.map(str::to_owned).to_vec(),
        }
    }
}

impl SplitConfig {
    /// Check that the configuration is internally consistent.
    ///
    /// The party names must be non-empty and distinct, the default
    /// shares must sum to 100 percent, and at least one category must
    /// be available for the expense form.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] describing the first problem
    /// found. Intended to be called once at startup; stored expenses
    /// are never validated against this configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.party_a.trim().is_empty() || self.party_b.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "party names must not be empty".to_owned(),
            ));
        }

        if self.party_a == self.party_b {
            return Err(Error::InvalidConfig(format!(
                "party names must be distinct, got \"{}\" twice",
                self.party_a
            )));
        }

        if self.default_share_a + self.default_share_b != 100 {
            return Err(Error::InvalidConfig(format!(
                "default shares must sum to 100 percent, got {} + {}",
                self.default_share_a, self.default_share_b
            )));
        }

        if self.categories.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one expense category is required".to_owned(),
            ));
        }

        Ok(())
    }
}
