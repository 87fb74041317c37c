use std::sync::Arc;

use teloxide::prelude::*;

use srb_core::domain::ChatId;

use crate::handlers::relay::handle_relay;
use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(
    _bot: Bot,
    msg: Message,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let (cmd, _args) = parse_command(text);
    let sender = ChatId(msg.chat.id.0);
    let messenger = state.messenger.as_ref();

    let outcome = match cmd.as_str() {
        "start" => state.relay.handle_start(sender, messenger).await,
        "show_history" => state.relay.handle_show_history(sender, messenger).await,
        "clear_history" => state.relay.handle_clear_history(sender, messenger).await,
        // Unknown commands are treated as ordinary messages and relayed.
        _ => {
            return handle_relay(msg, state).await;
        }
    };

    if let Err(e) = outcome {
        eprintln!("command /{cmd} from chat {} failed: {e}", sender.0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(
            parse_command("/show_history@relay_bot"),
            ("show_history".to_string(), String::new())
        );
        assert_eq!(
            parse_command("/clear_history  now"),
            ("clear_history".to_string(), "now".to_string())
        );
        assert_eq!(parse_command("/START"), ("start".to_string(), String::new()));
    }
}
