use super::*;

/// Show this help message
#[poise::command(prefix_command, rename = "h", category = "General")]
pub async fn help(ctx: Context<'_>) -> CommandResult {
    ctx.say(help_text(&ctx.data().prefix)).await?;
    Ok(())
}

/// The help listing, with every command shown under `prefix`.
pub fn help_text(prefix: &str) -> String {
    format!(
        "**📘 Dex Bot Help:**\n\
         `{prefix}ping` - Check if the bot is online\n\
         `{prefix}h` - Show this help message\n\
         `{prefix}s` - Show your voice time in this server"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_all_commands_under_default_prefix() {
        assert_eq!(
            help_text("dx."),
            "**📘 Dex Bot Help:**\n\
             `dx.ping` - Check if the bot is online\n\
             `dx.h` - Show this help message\n\
             `dx.s` - Show your voice time in this server"
        );
    }

    #[test]
    fn follows_configured_prefix() {
        let text = help_text("!");
        assert!(text.contains("`!ping`"));
        assert!(!text.contains("dx."));
    }
}
