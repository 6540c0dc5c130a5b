//! Inactivity sweep: evaluation of stale members and lifecycle transitions.
//!
//! `InactivityService::sweep` walks every guild with inactivity monitoring configured.
//! For each guild it loads the candidate records, resolves them against the live member
//! list, classifies them (`classify`) and applies the resulting transition
//! (`transition`): mark inactive, kick, or leave alone. Each member and each guild is
//! handled independently, so one failure is logged and the sweep moves on.
//!
//! After a guild is processed, a summary is sent to the maintainer account when one is
//! configured.

pub mod classify;
pub mod notice;
pub mod transition;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        inactivity_config::InactivityConfigRepository,
        member_activity::MemberActivityRepository,
    },
    error::AppError,
    model::{inactivity_config::InactivityConfig, member_activity::MemberActivity},
    service::{
        discord::{GuildDirectory, Notifier},
        inactivity::classify::{classify, Classification, SkipReason},
    },
};

/// Result of applying a classification to one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOutcome {
    MarkedInactive,
    Kicked,
    WithinGrace,
    Skipped(SkipReason),
}

/// Per-guild report of one evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildEvaluation {
    pub guild_id: u64,
    /// Last-activity cutoff used for this pass.
    pub threshold: DateTime<Utc>,
    pub marked_inactive: Vec<u64>,
    pub kicked: Vec<u64>,
    pub within_grace: usize,
    pub skipped: usize,
    /// Members whose transition failed.
    pub failed: usize,
}

impl GuildEvaluation {
    fn new(guild_id: u64, threshold: DateTime<Utc>) -> Self {
        Self {
            guild_id,
            threshold,
            marked_inactive: Vec::new(),
            kicked: Vec::new(),
            within_grace: 0,
            skipped: 0,
            failed: 0,
        }
    }

    fn record(&mut self, user_id: u64, outcome: MemberOutcome) {
        match outcome {
            MemberOutcome::MarkedInactive => self.marked_inactive.push(user_id),
            MemberOutcome::Kicked => self.kicked.push(user_id),
            MemberOutcome::WithinGrace => self.within_grace += 1,
            MemberOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

pub struct InactivityService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn GuildDirectory,
    notifier: &'a dyn Notifier,
    maintainer_user_id: Option<u64>,
}

impl<'a> InactivityService<'a> {
    /// Creates a new InactivityService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `directory` - Member lookups, role changes and kicks
    /// - `notifier` - Member notices and the maintainer summary
    /// - `maintainer_user_id` - Account receiving per-guild summaries, if any
    pub fn new(
        db: &'a DatabaseConnection,
        directory: &'a dyn GuildDirectory,
        notifier: &'a dyn Notifier,
        maintainer_user_id: Option<u64>,
    ) -> Self {
        Self {
            db,
            directory,
            notifier,
            maintainer_user_id,
        }
    }

    /// Evaluates every configured guild.
    ///
    /// A guild that fails to evaluate is logged and left out of the result.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildEvaluation>)` - Reports of the guilds evaluated successfully
    /// - `Err(AppError)` - The configured guilds could not be loaded
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<Vec<GuildEvaluation>, AppError> {
        let configs = InactivityConfigRepository::new(self.db).get_all().await?;
        let mut evaluations = Vec::with_capacity(configs.len());

        tracing::info!("Running inactivity sweep for {} guild(s)", configs.len());

        for config in &configs {
            match self.evaluate_guild(config, now).await {
                Ok(evaluation) => evaluations.push(evaluation),
                Err(e) => tracing::error!(
                    "Failed to evaluate inactivity for guild {}: {}",
                    config.guild_id,
                    e
                ),
            }
        }

        Ok(evaluations)
    }

    /// Evaluates one guild and applies the lifecycle transitions.
    ///
    /// # Returns
    /// - `Ok(GuildEvaluation)` - Pass completed; per-member failures are counted in `failed`
    /// - `Err(AppError)` - The threshold is out of range, or candidates or the live member
    ///   list could not be loaded
    pub async fn evaluate_guild(
        &self,
        config: &InactivityConfig,
        now: DateTime<Utc>,
    ) -> Result<GuildEvaluation, AppError> {
        let guild_id = config.guild_id;
        let threshold = config.inactive_threshold(now)?;
        let repo = MemberActivityRepository::new(self.db);

        let candidates = repo.get_inactivity_candidates(guild_id, threshold).await?;
        let mut evaluation = GuildEvaluation::new(guild_id, threshold);

        let guild_name = match self.directory.guild_name(guild_id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Failed to fetch name of guild {}: {}", guild_id, e);
                format!("guild {}", guild_id)
            }
        };

        if !candidates.is_empty() {
            let live_members: HashMap<u64, _> = self
                .directory
                .list_members(guild_id)
                .await?
                .into_iter()
                .map(|member| (member.user_id, member))
                .collect();

            for record in &candidates {
                let classification = classify(
                    record,
                    live_members.get(&record.user_id),
                    config,
                    threshold,
                    now,
                );

                match self
                    .apply(config, record, classification, &guild_name, now)
                    .await
                {
                    Ok(outcome) => evaluation.record(record.user_id, outcome),
                    Err(e) => {
                        evaluation.failed += 1;
                        tracing::error!(
                            "Failed to apply {:?} to member {} in guild {}: {}",
                            classification,
                            record.user_id,
                            guild_id,
                            e
                        );
                    }
                }
            }
        }

        tracing::info!(
            "Inactivity pass for guild {}: {} marked inactive, {} kicked, {} within grace, {} skipped, {} failed",
            guild_id,
            evaluation.marked_inactive.len(),
            evaluation.kicked.len(),
            evaluation.within_grace,
            evaluation.skipped,
            evaluation.failed
        );

        self.send_summary(config, &evaluation, &guild_name).await;

        Ok(evaluation)
    }

    async fn apply(
        &self,
        config: &InactivityConfig,
        record: &MemberActivity,
        classification: Classification,
        guild_name: &str,
        now: DateTime<Utc>,
    ) -> Result<MemberOutcome, AppError> {
        match classification {
            Classification::MarkInactive => {
                self.mark_inactive(config, record, guild_name, now).await?;
                Ok(MemberOutcome::MarkedInactive)
            }
            Classification::Kick => {
                self.kick(config, record, guild_name, now).await?;
                Ok(MemberOutcome::Kicked)
            }
            Classification::WithinGrace => Ok(MemberOutcome::WithinGrace),
            Classification::Skip(reason) => {
                tracing::debug!(
                    "Skipping member {} in guild {}: {:?}",
                    record.user_id,
                    record.guild_id,
                    reason
                );
                if reason == SkipReason::NotInGuild {
                    MemberActivityRepository::new(self.db)
                        .set_lifecycle(record.guild_id, record.user_id, None, Some(now))
                        .await?;
                }
                Ok(MemberOutcome::Skipped(reason))
            }
        }
    }

    /// Sends the guild summary to the maintainer. Failures are only logged.
    async fn send_summary(
        &self,
        config: &InactivityConfig,
        evaluation: &GuildEvaluation,
        guild_name: &str,
    ) {
        let Some(maintainer_id) = self.maintainer_user_id else {
            return;
        };

        let inactive = match MemberActivityRepository::new(self.db)
            .get_inactive(config.guild_id)
            .await
        {
            Ok(inactive) => inactive,
            Err(e) => {
                tracing::warn!(
                    "Failed to list inactive members of guild {} for summary: {}",
                    config.guild_id,
                    e
                );
                Vec::new()
            }
        };

        let summary = notice::maintainer_summary(guild_name, config, evaluation, &inactive);

        if let Err(e) = self.notifier.send_dm(maintainer_id, &summary).await {
            tracing::warn!("Failed to send inactivity summary to maintainer: {}", e);
        }
    }
}
