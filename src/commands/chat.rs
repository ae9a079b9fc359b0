//! Interactive chat command handler
//!
//! Drives the widget state machine from a readline loop against a running
//! chat proxy. While the transcript is empty the suggested questions are
//! offered; entering a number pre-fills one (it is not auto-submitted), and
//! an empty line then sends the pre-filled question.

use crate::config::Config;
use crate::error::Result;
use crate::widget::{ChatWidget, HttpChatTransport, SubmitOutcome, SUGGESTED_QUESTIONS};

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Start the interactive terminal chat
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `proxy_url` - Optional override for the configured proxy URL
pub async fn run_chat(config: Config, proxy_url: Option<String>) -> Result<()> {
    let url = proxy_url.unwrap_or_else(|| config.chat.proxy_url.clone());
    let transport = HttpChatTransport::new(&url)?;
    let mut widget = ChatWidget::new();
    widget.toggle_visibility();

    tracing::info!("Starting terminal chat against {}", url);
    print_welcome();

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim().to_string();

                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed == "/help" {
                    print_help();
                    continue;
                }

                if trimmed.is_empty() {
                    // An empty line sends a pre-filled suggested question,
                    // and is otherwise ignored.
                    if widget.input().trim().is_empty() {
                        continue;
                    }
                } else {
                    if widget.transcript().is_empty() {
                        let picked = trimmed.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
                        if let Some(index) = picked {
                            if widget.select_suggested_question(index) {
                                println!(
                                    "{}",
                                    format!("Pre-filled: {} (press Enter to send)", widget.input())
                                        .cyan()
                                );
                                continue;
                            }
                        }
                    }
                    widget.set_input(trimmed.as_str());
                    rl.add_history_entry(trimmed.as_str())?;
                }

                println!("{}", "thinking...".dimmed());
                if widget.submit(&transport).await == SubmitOutcome::Sent {
                    if let Some(reply) = widget.transcript().last() {
                        println!(
                            "{} {}",
                            reply.timestamp.format("[%H:%M]").to_string().dimmed(),
                            reply.content.green()
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_welcome() {
    println!("{}", "Portfolio Assistant".bold());
    println!("Ask me about my work. Suggested questions:");
    for (index, question) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!("  {}. {}", index + 1, question);
    }
    println!("Type a question, a number to pre-fill one, or /quit to exit.\n");
}

fn print_help() {
    println!("Commands:");
    println!("  /help  - show this help");
    println!("  /quit  - exit the chat");
    println!(
        "  1..{}  - pre-fill a suggested question (first message only)",
        SUGGESTED_QUESTIONS.len()
    );
}
