// Use cases layer: issuance and verification workflows.

pub mod issue_token;
pub mod verify_scan;

#[cfg(test)]
pub(crate) mod test_support;

pub use issue_token::{IssueTokenInput, IssueTokenUseCase, IssuedToken};
pub use verify_scan::{ScanEvent, ScanReport, SessionState, VerificationSession};
