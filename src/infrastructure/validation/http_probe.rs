//! HEAD-probe implementation of destination validation.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use url::Url;

use crate::error::AppError;

/// Redirect statuses a strict probe refuses to register.
const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Final statuses a permissive probe accepts after following redirects.
const PERMISSIVE_ACCEPTED: [u16; 8] = [200, 201, 202, 301, 302, 303, 307, 308];

/// Admissibility policy for candidate destination URLs.
///
/// The two variants are mutually contradictory by origin (two divergent forks
/// of the same service); exactly one is selected at startup via the
/// `VALIDATION_POLICY` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Probe without following redirects; reject destinations that answer
    /// with a redirect status. A probe failure is treated as acceptable
    /// (fail-open) and the error is recorded as informational detail.
    #[default]
    Strict,
    /// Follow redirects during the probe and accept a fixed set of final
    /// statuses. A probe failure rejects the destination.
    Permissive,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(format!(
                "VALIDATION_POLICY must be 'strict' or 'permissive', got '{other}'"
            )),
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Permissive => write!(f, "permissive"),
        }
    }
}

/// Outcome of a destination probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted {
        detail: String,
    },
    Rejected {
        detail: String,
        /// Where the destination redirects to, when the rejection was caused
        /// by a redirect status under the strict policy.
        redirect_to: Option<String>,
    },
}

/// Decides whether a candidate destination URL is admissible.
///
/// # Implementations
///
/// - [`HttpProbeValidator`] - reqwest HEAD probe with a bounded timeout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationValidator: Send + Sync {
    /// Probes the destination and returns a verdict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the candidate is not an absolute
    /// http/https URL. Fail-open semantics apply only to probe failures, not
    /// to malformed input.
    async fn validate(&self, destination_url: &str) -> Result<Verdict, AppError>;
}

/// HEAD-probe validator backed by a shared reqwest client.
///
/// The redirect behavior of the underlying client is fixed by the policy at
/// construction: strict probes never follow redirects, permissive probes
/// follow up to 10 hops.
pub struct HttpProbeValidator {
    client: reqwest::Client,
    policy: ValidationPolicy,
}

impl HttpProbeValidator {
    /// Builds a validator with the given policy and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(policy: ValidationPolicy, timeout: Duration) -> reqwest::Result<Self> {
        let redirects = match policy {
            ValidationPolicy::Strict => reqwest::redirect::Policy::none(),
            ValidationPolicy::Permissive => reqwest::redirect::Policy::limited(10),
        };

        let client = reqwest::Client::builder()
            .redirect(redirects)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, policy })
    }
}

#[async_trait]
impl DestinationValidator for HttpProbeValidator {
    async fn validate(&self, destination_url: &str) -> Result<Verdict, AppError> {
        let parsed = Url::parse(destination_url)
            .map_err(|e| AppError::bad_request(format!("Invalid destination URL: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::bad_request(
                "Destination URL must use http or https",
            ));
        }

        match self.client.head(parsed).send().await {
            Ok(response) => {
                let status = response.status().as_u16();

                Ok(match self.policy {
                    ValidationPolicy::Strict => {
                        let location = response
                            .headers()
                            .get(header::LOCATION)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);

                        classify_strict(status, location)
                    }
                    ValidationPolicy::Permissive => classify_permissive(status),
                })
            }
            Err(e) => Ok(match self.policy {
                ValidationPolicy::Strict => Verdict::Accepted {
                    detail: format!("Probe failed, accepting destination: {e}"),
                },
                ValidationPolicy::Permissive => Verdict::Rejected {
                    detail: format!("Error validating URL: {e}"),
                    redirect_to: None,
                },
            }),
        }
    }
}

/// Strict classification: any redirect status is a veto.
fn classify_strict(status: u16, location: Option<String>) -> Verdict {
    if REDIRECT_STATUSES.contains(&status) {
        return Verdict::Rejected {
            detail: format!("The destination URL is a redirect (HTTP {status})"),
            redirect_to: Some(location.unwrap_or_else(|| "Unknown".to_string())),
        };
    }

    Verdict::Accepted {
        detail: format!("Destination responded with HTTP {status}"),
    }
}

/// Permissive classification: final status after following redirects must be
/// in the accepted set.
fn classify_permissive(status: u16) -> Verdict {
    if PERMISSIVE_ACCEPTED.contains(&status) {
        Verdict::Accepted {
            detail: format!("Destination responded with HTTP {status}"),
        }
    } else {
        Verdict::Rejected {
            detail: format!("Destination responded with HTTP {status}"),
            redirect_to: None,
        }
    }
}
