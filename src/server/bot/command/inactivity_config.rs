//! `/inactivity-config`: view and edit a guild's inactivity settings through a modal.

use std::collections::HashMap;

use serenity::all::{
    ActionRowComponent, CommandInteraction, CreateActionRow, CreateCommand, CreateInputText,
    CreateModal, InputTextStyle, ModalInteraction, Permissions,
};

use crate::server::{
    bot::{
        command::{require_guild, Reply},
        handler::Handler,
    },
    error::AppError,
    model::inactivity_config::UpsertInactivityConfigParam,
    util::parse::parse_user_snowflake,
};

pub const NAME: &str = "inactivity-config";
pub const MODAL_ID: &str = "inactivity-config-form";

const DAYS_UNTIL_INACTIVE: &str = "days_until_inactive";
const DAYS_BEFORE_KICK: &str = "days_as_inactive_before_kick";
const INACTIVE_ROLE_ID: &str = "inactive_role_id";
const INVITE_LINK: &str = "invite_link";

const DEFAULT_DAYS_UNTIL_INACTIVE: i32 = 30;
const DEFAULT_DAYS_BEFORE_KICK: i32 = 10;
/// Upper bound for either day count, one hundred years.
const MAX_DAYS: i32 = 36_500;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Configure inactivity monitoring for this server")
        .default_member_permissions(Permissions::MANAGE_GUILD)
}

/// Opens the settings modal, prefilled with the current configuration.
pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<Reply, AppError> {
    let guild_id = require_guild(command.guild_id)?;
    let current = handler.cache.get(&handler.db, guild_id).await?;

    let (days_until_inactive, days_before_kick, role_id, invite_link) = match &current {
        Some(config) => (
            config.days_until_inactive,
            config.days_as_inactive_before_kick,
            config.inactive_role_id.map(|id| id.to_string()).unwrap_or_default(),
            config.invite_link.clone().unwrap_or_default(),
        ),
        None => (
            DEFAULT_DAYS_UNTIL_INACTIVE,
            DEFAULT_DAYS_BEFORE_KICK,
            String::new(),
            String::new(),
        ),
    };

    let modal = CreateModal::new(MODAL_ID, "Inactivity settings").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Days until inactive", DAYS_UNTIL_INACTIVE)
                .value(days_until_inactive.to_string())
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Days inactive before kick", DAYS_BEFORE_KICK)
                .value(days_before_kick.to_string())
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Inactive role id", INACTIVE_ROLE_ID)
                .value(role_id)
                .required(false),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Invite link for kicked members", INVITE_LINK)
                .value(invite_link)
                .required(false),
        ),
    ]);

    Ok(Reply::Modal(modal))
}

/// Validates and stores the submitted settings.
pub async fn submit(handler: &Handler, modal: &ModalInteraction) -> Result<Reply, AppError> {
    let guild_id = require_guild(modal.guild_id)?;

    let mut values = HashMap::new();
    for row in &modal.data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(input) = component {
                values.insert(
                    input.custom_id.clone(),
                    input.value.clone().unwrap_or_default(),
                );
            }
        }
    }

    let param = parse_config_form(guild_id, &values)?;
    handler.cache.save(&handler.db, &param).await?;

    tracing::info!(
        "Inactivity config of guild {} set to {}/{} days",
        guild_id,
        param.days_until_inactive,
        param.days_as_inactive_before_kick
    );

    Ok(Reply::Message(format!(
        "Saved. Members are marked inactive after {} days without activity and removed {} days later.",
        param.days_until_inactive, param.days_as_inactive_before_kick
    )))
}

/// Parses the modal fields into a configuration.
///
/// Day counts must be positive integers. The role id, when given, must be a snowflake
/// (a role mention is accepted too). Blank optional fields clear the setting.
pub fn parse_config_form(
    guild_id: u64,
    values: &HashMap<String, String>,
) -> Result<UpsertInactivityConfigParam, AppError> {
    let field = |name: &str| values.get(name).map(|v| v.trim()).unwrap_or("");

    let inactive_role_id = match field(INACTIVE_ROLE_ID) {
        "" => None,
        raw => Some(parse_user_snowflake(raw).ok_or_else(|| {
            AppError::BadRequest(format!("`{}` is not a valid role id.", raw))
        })?),
    };

    let invite_link = match field(INVITE_LINK) {
        "" => None,
        link => Some(link.to_string()),
    };

    Ok(UpsertInactivityConfigParam {
        guild_id,
        days_until_inactive: parse_days(field(DAYS_UNTIL_INACTIVE), "Days until inactive")?,
        days_as_inactive_before_kick: parse_days(field(DAYS_BEFORE_KICK), "Days inactive before kick")?,
        inactive_role_id,
        invite_link,
    })
}

fn parse_days(raw: &str, label: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(days) if (1..=MAX_DAYS).contains(&days) => Ok(days),
        _ => Err(AppError::BadRequest(format!(
            "{} must be a whole number of days between 1 and {}.",
            label, MAX_DAYS
        ))),
    }
}
