//! AI generation requests and job lifecycle.
//!
//! Jobs move queued -> generating -> completed | failed, driven by events
//! from the rendering backend. Credits are charged on submission and
//! refunded when a job fails.

use crate::error::{MarketError, Result};
use chrono::{DateTime, Utc};
use reelvault_model::{AssetID, GenerationID, GenerationRequest, UserID};
use std::collections::HashMap;
use tracing::info;

/// Lifecycle of a generation job.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobState {
    Queued,
    Generating,
    Completed { asset: AssetID },
    Failed { reason: String },
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed { .. } | JobState::Failed { .. })
    }
}

/// Progress reported by the rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    Started { job: GenerationID },
    Completed { job: GenerationID, asset: AssetID },
    Failed { job: GenerationID, reason: String },
}

/// External source of generation events (a render farm in production, a
/// scripted sequence in tests and demos).
pub trait GenerationSource {
    fn next_event(&mut self) -> Option<GenerationEvent>;
}

/// A tracked generation request.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub id: GenerationID,
    pub request: GenerationRequest,
    pub state: JobState,
    pub credits_charged: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Tracks generation jobs and per-user credit balances.
#[derive(Debug, Default)]
pub struct Studio {
    jobs: Vec<GenerationJob>,
    index: HashMap<GenerationID, usize>,
    credits: HashMap<UserID, u32>,
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_credits(&mut self, user: UserID, amount: u32) {
        *self.credits.entry(user).or_default() += amount;
    }

    pub fn credits_for(&self, user: &UserID) -> u32 {
        self.credits.get(user).copied().unwrap_or(0)
    }

    /// Validate the request, charge the tier's credits, and queue a job.
    pub fn submit(&mut self, request: GenerationRequest) -> Result<GenerationID> {
        request.validate()?;
        let needed = request.quality.credits();
        let available = self.credits_for(&request.user);
        if available < needed {
            return Err(MarketError::InsufficientCredits { needed, available });
        }
        self.credits.insert(request.user, available - needed);

        let job = GenerationJob {
            id: GenerationID::new(),
            request,
            state: JobState::Queued,
            credits_charged: needed,
            submitted_at: Utc::now(),
        };
        let id = job.id;
        info!(job = %id, kind = %job.request.generation_type, "generation queued");
        self.index.insert(id, self.jobs.len());
        self.jobs.push(job);
        Ok(id)
    }

    /// Apply one backend event.
    pub fn apply(&mut self, event: GenerationEvent) -> Result<&GenerationJob> {
        match event {
            GenerationEvent::Started { job } => {
                let at = self.position(&job)?;
                if self.jobs[at].state != JobState::Queued {
                    return Err(MarketError::InvalidJobTransition(format!(
                        "job {job} cannot start from {:?}",
                        self.jobs[at].state
                    )));
                }
                self.jobs[at].state = JobState::Generating;
                Ok(&self.jobs[at])
            }
            GenerationEvent::Completed { job, asset } => {
                let at = self.position(&job)?;
                if self.jobs[at].state.is_terminal() {
                    return Err(MarketError::InvalidJobTransition(format!(
                        "job {job} is already settled"
                    )));
                }
                self.jobs[at].state = JobState::Completed { asset };
                info!(job = %job, asset = %asset, "generation completed");
                Ok(&self.jobs[at])
            }
            GenerationEvent::Failed { job, reason } => {
                let at = self.position(&job)?;
                if self.jobs[at].state.is_terminal() {
                    return Err(MarketError::InvalidJobTransition(format!(
                        "job {job} is already settled"
                    )));
                }
                let refund = self.jobs[at].credits_charged;
                let user = self.jobs[at].request.user;
                *self.credits.entry(user).or_default() += refund;
                self.jobs[at].state = JobState::Failed { reason };
                info!(job = %job, refund, "generation failed, credits refunded");
                Ok(&self.jobs[at])
            }
        }
    }

    /// Drain an event source, applying everything it has to report.
    pub fn drain(&mut self, source: &mut dyn GenerationSource) -> Result<usize> {
        let mut applied = 0;
        while let Some(event) = source.next_event() {
            self.apply(event)?;
            applied += 1;
        }
        Ok(applied)
    }

    pub fn job(&self, id: &GenerationID) -> Option<&GenerationJob> {
        self.index.get(id).map(|&at| &self.jobs[at])
    }

    /// All jobs in submission order.
    pub fn jobs(&self) -> &[GenerationJob] {
        &self.jobs
    }

    fn position(&self, id: &GenerationID) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or(MarketError::JobNotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelvault_model::{GenerationType, QualityTier};

    fn request(user: UserID, quality: QualityTier) -> GenerationRequest {
        GenerationRequest {
            generation_type: GenerationType::Footage,
            prompt: "aerial shot of a coastline".to_string(),
            style: None,
            duration_secs: 10,
            quality,
            user,
        }
    }

    #[test]
    fn submit_charges_credits_by_tier() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 5);

        studio.submit(request(user, QualityTier::Premium)).unwrap();
        assert_eq!(studio.credits_for(&user), 2);

        studio.submit(request(user, QualityTier::Standard)).unwrap();
        assert_eq!(studio.credits_for(&user), 1);
    }

    #[test]
    fn submit_rejects_insufficient_credits() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 2);
        let result = studio.submit(request(user, QualityTier::Premium));
        assert!(matches!(
            result,
            Err(MarketError::InsufficientCredits { needed: 3, available: 2 })
        ));
        // Nothing was charged for the rejected request.
        assert_eq!(studio.credits_for(&user), 2);
    }

    #[test]
    fn jobs_walk_the_full_lifecycle() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 1);
        let job = studio.submit(request(user, QualityTier::Standard)).unwrap();

        studio.apply(GenerationEvent::Started { job }).unwrap();
        let asset = AssetID::new();
        let done = studio
            .apply(GenerationEvent::Completed { job, asset })
            .unwrap();
        assert_eq!(done.state, JobState::Completed { asset });
    }

    #[test]
    fn failure_refunds_credits() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 3);
        let job = studio.submit(request(user, QualityTier::Premium)).unwrap();
        assert_eq!(studio.credits_for(&user), 0);

        studio
            .apply(GenerationEvent::Failed {
                job,
                reason: "render timeout".to_string(),
            })
            .unwrap();
        assert_eq!(studio.credits_for(&user), 3);
    }

    #[test]
    fn terminal_jobs_reject_further_events() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 1);
        let job = studio.submit(request(user, QualityTier::Standard)).unwrap();
        let asset = AssetID::new();
        studio.apply(GenerationEvent::Completed { job, asset }).unwrap();

        let result = studio.apply(GenerationEvent::Started { job });
        assert!(matches!(result, Err(MarketError::InvalidJobTransition(_))));
    }

    #[test]
    fn invalid_requests_are_rejected_before_charging() {
        let mut studio = Studio::new();
        let user = UserID::new();
        studio.grant_credits(user, 5);
        let mut bad = request(user, QualityTier::Standard);
        bad.duration_secs = 300;
        assert!(studio.submit(bad).is_err());
        assert_eq!(studio.credits_for(&user), 5);
    }
}
