//! Destination-URL admissibility probing.
//!
//! Before a mapping is registered, its destination is probed with a HEAD
//! request under a bounded timeout. Two policies exist, selected once at
//! startup via configuration ([`ValidationPolicy`]), not as duplicated code
//! paths.

pub mod http_probe;

pub use http_probe::{DestinationValidator, HttpProbeValidator, ValidationPolicy, Verdict};

#[cfg(test)]
pub use http_probe::MockDestinationValidator;
