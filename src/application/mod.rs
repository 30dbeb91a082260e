//! Application layer - Services coordinating domain rules and ports.
//!
//! - `Notifier` - Resolves target sessions and fans reports out to callbacks
//! - `IssuanceValidator` / `VerifierValidator` - Evidence to report

mod notifier;
mod validation;

pub use notifier::{DeliveryFailureRecord, NotificationSummary, Notifier, NotifyError};
pub use validation::{IssuanceValidator, VerifierValidator};
