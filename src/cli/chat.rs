use anyhow::{Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::ai::chat::{Chat, ChatBuilder, ChatEvent, Phase};
use crate::content::recent_topics;
use crate::core::{AppConfig, logging};

/// Block until the in-flight turn settles, printing the same
/// indicators the web chat shows along the way.
async fn wait_for_reply(events: &mut broadcast::Receiver<ChatEvent>) -> Result<()> {
    loop {
        match events.recv().await {
            Ok(ChatEvent::PhaseChanged {
                phase: Phase::Thinking,
            }) => println!("Thinking..."),
            Ok(ChatEvent::PhaseChanged {
                phase: Phase::Responding,
            }) => println!("Generating financial insights..."),
            Ok(ChatEvent::AssistantMessage { message }) => {
                println!("\n{}\n", message.content);
                return Ok(());
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Chat output lagged");
            }
            Err(RecvError::Closed) => bail!("Chat session closed unexpectedly"),
        }
    }
}

async fn repl(chat: &Chat) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut events = chat.subscribe();

    println!("{}\n", chat.greeting());
    println!("Type /new to start over, /topics for ideas, Ctrl-D to quit.\n");

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                match line.trim() {
                    "/new" | "/clear" => {
                        chat.reset();
                        println!("\n{}\n", chat.greeting());
                        continue;
                    }
                    "/topics" => {
                        for topic in recent_topics() {
                            println!("  - {}", topic);
                        }
                        continue;
                    }
                    _ => {}
                }

                if chat.submit(&line).is_accepted() {
                    let _ = rl.add_history_entry(line.as_str());
                    wait_for_reply(&mut events).await?;
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

pub async fn run() -> Result<()> {
    // Keep logs quiet so they don't interleave with the conversation
    logging::init(&format!("{}=warn", env!("CARGO_CRATE_NAME")));

    let config = AppConfig::default();
    let chat = ChatBuilder::new()
        .greeting(&config.greeting)
        .delays(config.turn_delays)
        .build();

    let result = repl(&chat).await;
    chat.close();
    result
}
