//! System prompt assembly for the chat proxy
//!
//! This module builds the instructional system prompt the proxy prepends to
//! every provider request: the curated profile facts plus response-style
//! guidelines and a snapshot of the current date. The prompt is assembled per
//! request and never stored.

use crate::profile::Profile;
use chrono::NaiveDate;
use std::fmt::Write;

/// Build the portfolio assistant system prompt
///
/// # Arguments
///
/// * `profile` - Curated facts to embed
/// * `today` - Date to stamp into the response guidelines
///
/// # Returns
///
/// The full system prompt text
///
/// # Examples
///
/// ```
/// use foliochat::profile::Profile;
/// use foliochat::prompts::build_system_prompt;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// let prompt = build_system_prompt(&Profile::default(), today);
/// assert!(prompt.contains("portfolio assistant"));
/// assert!(prompt.contains("2026-08-27"));
/// ```
pub fn build_system_prompt(profile: &Profile, today: NaiveDate) -> String {
    let mut prompt = String::new();

    // Infallible: fmt::Write on String never errors.
    let _ = writeln!(
        prompt,
        "You are {}'s portfolio assistant. Use ONLY these facts:\n",
        profile.name
    );

    let _ = writeln!(prompt, "# Personal Information");
    let _ = writeln!(prompt, "- Name: {}", profile.name);
    let _ = writeln!(prompt, "- Email: {}", profile.email);
    let _ = writeln!(prompt, "- GitHub: {}", profile.github);
    let _ = writeln!(prompt, "- LinkedIn: {}\n", profile.linkedin);

    let _ = writeln!(prompt, "# Education");
    for entry in &profile.education {
        let _ = writeln!(
            prompt,
            "- {} ({}): {}",
            entry.institution, entry.year, entry.detail
        );
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "# Experience");
    for (index, entry) in profile.experience.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {} ({})", index + 1, entry.title, entry.period);
        for highlight in &entry.highlights {
            let _ = writeln!(prompt, "   - {}", highlight);
        }
        let _ = writeln!(prompt, "   - Technologies: {}", entry.technologies.join(", "));
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "# Technical Projects");
    for (index, project) in profile.projects.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, project.name);
        for highlight in &project.highlights {
            let _ = writeln!(prompt, "   - {}", highlight);
        }
        let _ = writeln!(
            prompt,
            "   - Technologies: {}",
            project.technologies.join(", ")
        );
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "# Technical Skills");
    let _ = writeln!(prompt, "- Languages: {}", profile.skills.languages.join(", "));
    let _ = writeln!(
        prompt,
        "- ML: {}",
        profile.skills.machine_learning.join(", ")
    );
    let _ = writeln!(
        prompt,
        "- Frameworks: {}",
        profile.skills.frameworks.join(", ")
    );
    let _ = writeln!(prompt, "- Tools: {}\n", profile.skills.tools.join(", "));

    let _ = writeln!(prompt, "# Achievements");
    for achievement in &profile.achievements {
        let _ = writeln!(prompt, "- {}", achievement);
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "Response Guidelines:");
    let _ = writeln!(prompt, "1. Be concise (1-3 sentences)");
    let _ = writeln!(prompt, "2. Always mention specific technologies used");
    let _ = writeln!(prompt, "3. Include relevant metrics when available");
    let _ = writeln!(prompt, "4. Current date: {}", today.format("%Y-%m-%d"));

    prompt
}
