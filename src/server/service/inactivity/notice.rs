//! Texts sent to members and to the maintainer.

use chrono::{DateTime, Utc};

use crate::server::{
    model::{inactivity_config::InactivityConfig, member_activity::MemberActivity},
    service::inactivity::GuildEvaluation,
};

/// Discord's message length limit in characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

pub fn inactivity_notice(guild_name: &str, config: &InactivityConfig) -> String {
    format!(
        "Hi! You haven't been active in **{}** for {} days, so you've been marked as inactive. \
         Send a message or react to anything in the server within {} days to stay a member.",
        guild_name, config.days_until_inactive, config.days_as_inactive_before_kick
    )
}

pub fn kick_notice(guild_name: &str, invite_link: Option<&str>) -> String {
    let mut notice = format!(
        "You've been removed from **{}** after a long period of inactivity.",
        guild_name
    );

    match invite_link {
        Some(link) => notice.push_str(&format!(" You're welcome back any time: {}", link)),
        None => notice.push_str(" You're welcome back any time."),
    }

    notice
}

/// Summary of one guild's sweep for the maintainer, cut to Discord's message limit.
pub fn maintainer_summary(
    guild_name: &str,
    config: &InactivityConfig,
    evaluation: &GuildEvaluation,
    inactive: &[MemberActivity],
) -> String {
    let mut summary = format!(
        "Inactivity sweep for **{}** ({})\n\
         Thresholds: inactive after {} days (before {}), kick after {} more days\n\
         Marked inactive: {} | Kicked: {} | Within grace: {} | Skipped: {} | Failed: {}\n",
        guild_name,
        config.guild_id,
        config.days_until_inactive,
        format_date(evaluation.threshold),
        config.days_as_inactive_before_kick,
        evaluation.marked_inactive.len(),
        evaluation.kicked.len(),
        evaluation.within_grace,
        evaluation.skipped,
        evaluation.failed,
    );

    if inactive.is_empty() {
        summary.push_str("No inactive members.");
    } else {
        summary.push_str(&format!("Inactive members ({}):\n", inactive.len()));
        for member in inactive {
            let since = member
                .inactive_since
                .map(format_date)
                .unwrap_or_else(|| "unknown".to_string());
            summary.push_str(&format!(
                "- {} ({}) since {}\n",
                member.name(),
                member.user_id,
                since
            ));
        }
    }

    truncate(&summary, DISCORD_MESSAGE_LIMIT)
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Cuts `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
