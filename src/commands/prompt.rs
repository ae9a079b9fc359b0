//! Prompt inspection command handler

use crate::error::Result;
use crate::profile::Profile;
use crate::prompts::build_system_prompt;
use chrono::Utc;

/// Print the system prompt exactly as the proxy would assemble it right now
pub fn run_prompt() -> Result<()> {
    let prompt = build_system_prompt(&Profile::default(), Utc::now().date_naive());
    println!("{}", prompt);
    Ok(())
}
