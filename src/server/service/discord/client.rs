use std::{future::Future, sync::Arc};

use serenity::all::{
    ChannelId, CreateMessage, GuildId, GuildInfo, GuildPagination, Member, RoleId,
    ScheduledEventId, ScheduledEventStatus, UserId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::server::{
    error::AppError,
    model::directory::{DirectoryMember, ScheduledEventInfo},
    service::discord::{GuildDirectory, Notifier},
};

/// Page size for member listing, the maximum Discord allows.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Page size for the bot's guild list, the maximum Discord allows.
const GUILD_PAGE_SIZE: u64 = 200;

/// Maximum interested users fetched per event.
const INTERESTED_USER_LIMIT: u64 = 100;

/// `GuildDirectory` and `Notifier` backed by the bot's HTTP client.
#[derive(Clone)]
pub struct SerenityDiscord {
    http: Arc<Http>,
}

impl SerenityDiscord {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a Discord request failed with 404 Not Found.
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => http_err
            .status_code()
            .is_some_and(|status| status.as_u16() == 404),
        _ => false,
    }
}

/// Fetches cursor-paginated pages until one comes back shorter than `page_size`.
///
/// `fetch` receives the cursor of the last item seen, `None` for the first page.
async fn collect_pages<T, C, F, Fut>(
    page_size: u64,
    mut fetch: F,
    cursor: impl Fn(&T) -> C,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<C>) -> Fut,
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut after = None;

    loop {
        let page = fetch(after).await?;
        let page_len = page.len() as u64;

        after = page.last().map(&cursor);
        items.extend(page);

        if page_len < page_size {
            break;
        }
    }

    Ok(items)
}

#[async_trait]
impl GuildDirectory for SerenityDiscord {
    async fn guild_ids(&self) -> Result<Vec<u64>, AppError> {
        let guilds = collect_pages(
            GUILD_PAGE_SIZE,
            |after: Option<GuildId>| async move {
                self.http
                    .get_guilds(after.map(GuildPagination::After), Some(GUILD_PAGE_SIZE))
                    .await
                    .map_err(AppError::from)
            },
            |guild: &GuildInfo| guild.id,
        )
        .await?;

        Ok(guilds.iter().map(|guild| guild.id.get()).collect())
    }

    async fn guild_name(&self, guild_id: u64) -> Result<String, AppError> {
        let guild = GuildId::new(guild_id).to_partial_guild(&self.http).await?;

        Ok(guild.name)
    }

    async fn list_members(&self, guild_id: u64) -> Result<Vec<DirectoryMember>, AppError> {
        let guild_id = GuildId::new(guild_id);

        let members = collect_pages(
            MEMBER_PAGE_SIZE,
            |after: Option<UserId>| async move {
                guild_id
                    .members(&self.http, Some(MEMBER_PAGE_SIZE), after)
                    .await
                    .map_err(AppError::from)
            },
            |member: &Member| member.user.id,
        )
        .await?;

        Ok(members.iter().map(DirectoryMember::from_member).collect())
    }

    async fn get_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<DirectoryMember>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(DirectoryMember::from_member(&member))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;

        Ok(())
    }

    async fn scheduled_events(&self, guild_id: u64) -> Result<Vec<ScheduledEventInfo>, AppError> {
        let events = GuildId::new(guild_id)
            .scheduled_events(&self.http, false)
            .await?;

        Ok(events
            .iter()
            .filter(|event| event.status == ScheduledEventStatus::Scheduled)
            .map(ScheduledEventInfo::from_event)
            .collect())
    }

    async fn interested_users(
        &self,
        guild_id: u64,
        event_id: u64,
    ) -> Result<Vec<String>, AppError> {
        let users = GuildId::new(guild_id)
            .scheduled_event_users(
                &self.http,
                ScheduledEventId::new(event_id),
                Some(INTERESTED_USER_LIMIT),
            )
            .await?;

        Ok(users
            .into_iter()
            .map(|entry| {
                entry
                    .member
                    .and_then(|member| member.nick)
                    .or(entry.user.global_name)
                    .unwrap_or(entry.user.name)
            })
            .collect())
    }
}

#[async_trait]
impl Notifier for SerenityDiscord {
    async fn send_dm(&self, user_id: u64, content: &str) -> Result<(), AppError> {
        UserId::new(user_id)
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn send_channel_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}
