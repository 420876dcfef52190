use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio_util::sync::CancellationToken;

use crate::{
    error::{ExtractError, Res},
    spotify::{
        auth::AuthClient,
        transport::{HttpResponse, Transport, TransportError},
    },
    utils, warning,
};

/// Longest `retry-after` worth waiting for within one run (23 hours).
pub const MAX_RETRY_AFTER_SECS: u64 = 82_800;

/// What the retry loop does with the outcome of one physical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    RetryImmediately,
    /// Wait, refresh the token, then retry.
    RetryAfterWait(Duration),
    RefreshAndRetry,
    Fatal(FatalCause),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalCause {
    RateLimitWindow { retry_after: u64 },
}

impl From<FatalCause> for ExtractError {
    fn from(cause: FatalCause) -> Self {
        match cause {
            FatalCause::RateLimitWindow { retry_after } => {
                ExtractError::RateLimitWindow { retry_after }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Unconditional pause before every physical request.
    pub pacing: Duration,
    pub max_retry_after: u64,
    /// Wait used when a 429 carries no usable `retry-after`.
    pub default_retry_after: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            pacing: Duration::from_millis(400),
            max_retry_after: MAX_RETRY_AFTER_SECS,
            default_retry_after: 1,
        }
    }
}

impl RetryPolicy {
    pub fn classify(&self, outcome: Result<&HttpResponse, &TransportError>) -> Verdict {
        let response = match outcome {
            Ok(response) => response,
            Err(_) => return Verdict::RetryImmediately,
        };

        match response.status {
            200..=299 => Verdict::Success,
            401 => Verdict::RefreshAndRetry,
            429 => {
                let retry_after = response.retry_after.unwrap_or(self.default_retry_after);
                if retry_after > self.max_retry_after {
                    Verdict::Fatal(FatalCause::RateLimitWindow { retry_after })
                } else {
                    Verdict::RetryAfterWait(Duration::from_secs(retry_after))
                }
            }
            _ => Verdict::RetryImmediately,
        }
    }
}

#[derive(Debug, Default)]
pub struct RequestStats {
    requests: AtomicU64,
    retries: AtomicU64,
    reauthentications: AtomicU64,
}

impl RequestStats {
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn retries(&self) -> u64 {
        self.retries.load(Ordering::Relaxed)
    }

    pub fn reauthentications(&self) -> u64 {
        self.reauthentications.load(Ordering::Relaxed)
    }
}

/// Issues every downstream GET: paces, authenticates and retries according
/// to its [`RetryPolicy`]. The only component that blocks on time.
pub struct RateLimitedRequester {
    auth: Arc<AuthClient>,
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
    cancel: CancellationToken,
    stats: RequestStats,
}

impl RateLimitedRequester {
    pub fn new(
        auth: Arc<AuthClient>,
        transport: Arc<dyn Transport>,
        policy: RetryPolicy,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            auth,
            transport,
            policy,
            cancel,
            stats: RequestStats::default(),
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub async fn get(&self, url: &str) -> Res<HttpResponse> {
        let max_attempts = self.policy.max_attempts;
        let mut last = String::new();

        for attempt in 1..=max_attempts {
            utils::pause(self.policy.pacing, &self.cancel).await?;

            let token = self.auth.valid_token().await?;
            self.stats.requests.fetch_add(1, Ordering::Relaxed);
            let outcome = self.transport.get(url, &token.access_token).await;
            let verdict = self.policy.classify(outcome.as_ref());

            last = match &outcome {
                Ok(response) => format!("HTTP {}", response.status),
                Err(e) => e.to_string(),
            };

            match (verdict, outcome) {
                (Verdict::Success, Ok(response)) => return Ok(response),
                (Verdict::Fatal(cause), _) => return Err(cause.into()),
                _ if attempt == max_attempts => break,
                (Verdict::RefreshAndRetry, _) => {
                    warning!("Bad or expired token, refreshing ({}/{})", attempt, max_attempts);
                    self.refresh(&token.access_token).await?;
                }
                (Verdict::RetryAfterWait(wait), _) => {
                    warning!(
                        "Rate limited, retrying after {} seconds ({}/{})",
                        wait.as_secs(),
                        attempt,
                        max_attempts
                    );
                    utils::pause(wait, &self.cancel).await?;
                    self.refresh(&token.access_token).await?;
                }
                _ => {
                    warning!(
                        "Request failed with {}, retrying ({}/{}): {}",
                        last,
                        attempt,
                        max_attempts,
                        url
                    );
                }
            }

            self.stats.retries.fetch_add(1, Ordering::Relaxed);
        }

        Err(ExtractError::RetriesExhausted {
            url: url.to_string(),
            attempts: max_attempts,
            last,
        })
    }

    async fn refresh(&self, stale: &str) -> Res<()> {
        self.auth.reauthenticate(stale).await?;
        self.stats.reauthentications.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
