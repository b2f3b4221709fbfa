//! botwire-echo: a showcase long-polling bot built with botwire.
//!
//! # Setup
//! 1. Get a token from @BotFather.
//! 2. `BOTWIRE_TOKEN=123456:ABC… cargo run -p botwire-echo`
//!
//! `BOTWIRE_API_URL` points the bot at a local Bot API server and
//! `BOTWIRE_TIMEOUT_SECS` caps each HTTP request.

use std::time::{Duration, Instant};

use botwire::prelude::*;
use botwire::types::{InlineQuery, InlineQueryResultArticle, InputTextMessageContent, User};
use chrono::Utc;

/// Server-side long-polling timeout. Must stay below `BOTWIRE_TIMEOUT_SECS` if that is set.
const POLL_TIMEOUT: i32 = 25;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("botwire_client=info,botwire_echo=info"),
    )
    .init();
    if let Err(e) = run().await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let client = Client::from_config(config)?;

    let me = client.get_me().await?;
    println!("✅ Running as {} (id={})", me.mention().unwrap_or_else(|| me.full_name()), me.id);
    println!("👂 Listening for updates… (Ctrl+C to quit)\n");

    client
        .set_my_commands(vec![
            BotCommand::new("start", "Say hello"),
            BotCommand::new("help", "List commands"),
            BotCommand::new("ping", "Round-trip time"),
            BotCommand::new("time", "UTC date and time"),
            BotCommand::new("id", "Your and this chat's ids"),
        ])
        .await?;

    let mut updates = client.updates().timeout(POLL_TIMEOUT);
    loop {
        let update = match updates.next().await {
            Ok(u) => u,
            Err(e) => {
                let wait = e.retry_after().unwrap_or(Duration::from_secs(3));
                eprintln!("⚠ getUpdates failed ({e}), retrying in {}s", wait.as_secs());
                tokio::time::sleep(wait).await;
                continue;
            }
        };

        let client = client.clone();
        let me     = me.clone();
        // Each update in its own task so a slow handler never stalls polling
        tokio::spawn(async move {
            let id = update.update_id;
            if let Err(e) = dispatch(&client, &me, update).await {
                eprintln!("✗ update {id}: {e}");
            }
        });
    }
}

// ─── Central dispatcher ───────────────────────────────────────────────────────

async fn dispatch(client: &Client, me: &User, update: Update) -> Result<(), InvocationError> {
    match update.kind() {
        UpdateKind::Message(msg) => on_message(client, me, msg).await,
        UpdateKind::CallbackQuery(cb) => {
            let text = match cb.data.as_deref() {
                Some("cb:ping") => "🏓 Pong!".to_owned(),
                Some("cb:time") => Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                Some("cb:help") => "Use /help to see all commands".to_owned(),
                _               => "🤷 Unknown action".to_owned(),
            };
            client.invoke(&AnswerCallbackQuery::new(cb.id.as_str()).text(text)).await?;
            Ok(())
        }
        UpdateKind::InlineQuery(query) => on_inline_query(client, query).await,
        _ => Ok(()),
    }
}

async fn on_message(client: &Client, me: &User, msg: &Message) -> Result<(), InvocationError> {
    if msg.from.as_ref().is_some_and(|u| u.id == me.id) {
        return Ok(());
    }
    let chat_id = msg.chat.id;

    let Some((command, arg)) = msg.command() else {
        // Plain text (or a captioned photo) is echoed back as-is
        if let Some(text) = msg.text_or_caption() {
            reply(client, msg, text.to_owned()).await?;
        }
        return Ok(());
    };

    match command.to_ascii_lowercase().as_str() {
        "start" => {
            let keyboard = InlineKeyboardMarkup::default()
                .row(vec![
                    InlineKeyboardButton::callback("🏓 Ping", "cb:ping"),
                    InlineKeyboardButton::callback("🕐 Time", "cb:time"),
                ])
                .row(vec![InlineKeyboardButton::callback("📖 Help", "cb:help")]);
            let text = format!(
                "👋 <b>Welcome, {}!</b>\n\nSend me anything and I'll echo it back.",
                escape(&msg.from.as_ref().map(User::full_name).unwrap_or_default()),
            );
            client
                .invoke(
                    &SendMessage::new(chat_id, text)
                        .parse_mode(ParseMode::Html)
                        .reply_markup(keyboard),
                )
                .await?;
        }
        "help" => {
            let text = "📖 <b>Commands</b>\n\n\
                /ping: round-trip time 🏓\n\
                /time: UTC date and time 🕐\n\
                /id: your and this chat's ids\n\
                /upper, /lower, /reverse <code>&lt;text&gt;</code>\n\
                /count <code>&lt;text&gt;</code>: text stats\n\n\
                <b>Inline:</b> <code>@bot &lt;text&gt;</code> in any chat";
            client.invoke(&SendMessage::new(chat_id, text).parse_mode(ParseMode::Html)).await?;
        }
        "ping" => {
            let start = Instant::now();
            let sent = client.send_message(chat_id, "🏓 …").await?;
            let ms = start.elapsed().as_millis();
            client
                .invoke(
                    &EditMessageText::new(format!("🏓 <b>Pong!</b> <code>{ms} ms</code>"))
                        .chat_id(chat_id)
                        .message_id(sent.message_id)
                        .parse_mode(ParseMode::Html),
                )
                .await?;
        }
        "time" => {
            let now = Utc::now();
            let sent_at = msg
                .date_time()
                .map(|t| format!("{}s ago", (now - t).num_seconds()))
                .unwrap_or_else(|| "unknown".to_owned());
            let text = format!(
                "🕐 {}\nUnix: {}\nYour message: {sent_at}",
                now.format("%A, %B %d %Y %H:%M:%S UTC"),
                now.timestamp(),
            );
            reply(client, msg, text).await?;
        }
        "id" => {
            let user = msg.from.as_ref().map(|u| u.id.to_string()).unwrap_or_else(|| "(unknown)".into());
            reply(client, msg, format!("🪪 User: {user}\nChat: {chat_id} ({})", msg.chat.kind)).await?;
        }
        "upper"   => reply(client, msg, transform(arg, str::to_uppercase)).await?,
        "lower"   => reply(client, msg, transform(arg, str::to_lowercase)).await?,
        "reverse" => reply(client, msg, transform(arg, |s| s.chars().rev().collect())).await?,
        "count" => {
            let _typing = client.typing(chat_id).await?;
            let text = if arg.is_empty() {
                "📊 Usage: /count <text>".to_owned()
            } else {
                format!(
                    "📊 Chars: {}\nBytes: {}\nWords: {}\nLines: {}",
                    arg.chars().count(),
                    arg.len(),
                    arg.split_whitespace().count(),
                    arg.lines().count(),
                )
            };
            reply(client, msg, text).await?;
        }
        _ => reply(client, msg, "❓ Unknown command. Use /help to see all commands.".to_owned()).await?,
    }
    Ok(())
}

async fn on_inline_query(client: &Client, query: &InlineQuery) -> Result<(), InvocationError> {
    let q = query.query.trim();
    let results = if q.is_empty() {
        vec![
            article("time", "🕐 Current time", &Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            article("help", "📖 Help", "Send /help to see all commands"),
        ]
    } else {
        vec![
            article("u", &format!("UPPER: {}", q.to_uppercase()), &q.to_uppercase()),
            article("l", &format!("lower: {}", q.to_lowercase()), &q.to_lowercase()),
            article("r", "Reversed", &q.chars().rev().collect::<String>()),
        ]
    };
    client
        .invoke(&AnswerInlineQuery::new(query.id.as_str(), results).cache_time(30))
        .await?;
    Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

async fn reply(client: &Client, msg: &Message, text: String) -> Result<(), InvocationError> {
    client
        .invoke(
            &SendMessage::new(msg.chat.id, text)
                .reply_to_message_id(msg.message_id)
                .allow_sending_without_reply(true),
        )
        .await?;
    Ok(())
}

fn transform(arg: &str, f: impl Fn(&str) -> String) -> String {
    if arg.is_empty() { "Usage: /<command> <text>".to_owned() } else { f(arg) }
}

fn article(id: &str, title: &str, content: &str) -> botwire::types::InlineQueryResult {
    InlineQueryResultArticle::new(id, title, InputTextMessageContent::new(content)).into()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
