//! # Domain Models
//!
//! Strongly-typed company records with construction-time validation.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CompanyRecord`] | One company: market cap, founding year, staff, location, listing |
//! | [`Headquarters`] | `"<City/Region>, <Country>"` location with a derived country |
//! | [`UtcDateTime`] | UTC timestamp used in envelope metadata |
//!
//! ```rust
//! use hercap_core::{CompanyRecord, ValidationError};
//!
//! let record = CompanyRecord::new("Bonzun", 0.339, 2012, 50, "Stockholm, Sweden", "STO")?;
//! assert_eq!(record.country(), "Sweden");
//!
//! let invalid = CompanyRecord::new("Bonzun", 0.339, 2012, 50, "Stockholm Sweden", "STO");
//! assert!(matches!(invalid, Err(ValidationError::MalformedHeadquarters { .. })));
//! # Ok::<(), ValidationError>(())
//! ```

mod headquarters;
mod record;
mod timestamp;

pub use headquarters::Headquarters;
pub(crate) use record::validate_non_negative;
pub use record::{CompanyRecord, MIN_FOUNDED_YEAR};
pub use timestamp::UtcDateTime;
