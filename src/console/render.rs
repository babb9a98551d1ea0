//! Table and detail rendering for records.

use crate::domain::entities::{RecordStats, UrlRecord};
use crate::error::FieldErrors;
use crate::utils::ShortUrlBuilder;
use chrono::{DateTime, Utc};
use colored::*;

/// Expiry column text.
pub fn expiry_label(expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => "never".to_string(),
    }
}

/// Shortens `value` to at most `width` characters, marking the cut with `…`.
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = value.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Prints the record list.
///
/// # Output Format
///
/// ```text
/// 📋 Your links
///
///   #   Title                Original URL                             Short URL                      Expires     Clicks
///   ─────────────────────────────────────────────────────────────────────────────────────────────────────────────────
///   1   Docs                 https://example.com/docs                 http://localhost:8080/abc123   never       12
/// ```
pub fn print_records(records: &[UrlRecord], short_urls: &ShortUrlBuilder) {
    println!("{}", "📋 Your links".bright_blue().bold());
    println!();

    if records.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        return;
    }

    println!(
        "  {:<3} {:<20} {:<40} {:<30} {:<11} {}",
        "#".bright_white().bold(),
        "Title".bright_white().bold(),
        "Original URL".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(113).bright_black());

    for (index, record) in records.iter().enumerate() {
        let expires = expiry_label(record.expires_at);
        let expires = if record.is_expired() {
            expires.red()
        } else {
            expires.bright_black()
        };

        println!(
            "  {:<3} {:<20} {:<40} {:<30} {:<11} {}",
            (index + 1).to_string().bright_black(),
            truncate(record.display_title().unwrap_or("-"), 20).cyan(),
            truncate(&record.original_url, 40),
            truncate(&short_urls.build(&record.short_code), 30).bright_yellow(),
            expires,
            record.click_count.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();
}

/// Prints statistics for one link.
pub fn print_stats(stats: &RecordStats, short_urls: &ShortUrlBuilder) {
    let short_url = stats
        .short_url
        .clone()
        .unwrap_or_else(|| short_urls.build(&stats.short_code));

    println!("{}", "📊 Link statistics".bright_blue().bold());
    println!();
    println!("  Short URL:    {}", short_url.bright_yellow());
    println!("  Original URL: {}", stats.original_url.cyan());
    if let Some(title) = stats.title.as_deref().filter(|t| !t.is_empty()) {
        println!("  Title:        {}", title);
    }
    println!(
        "  Clicks:       {}",
        stats.click_count.to_string().bright_green().bold()
    );
    if let Some(created) = stats.created_at {
        println!(
            "  Created:      {}",
            created.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
    }
    match stats.expires_at {
        Some(at) => println!("  Expires:      {}", expiry_label(Some(at)).red()),
        None => println!("  Expires:      {}", "never".green()),
    }
    println!();
}

/// Prints field-level validation messages under a form.
pub fn print_field_errors(errors: &FieldErrors) {
    for error in errors.iter() {
        eprintln!(
            "  {} {}: {}",
            "⚠️".yellow(),
            error.field.bright_white(),
            error.message.yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_label() {
        assert_eq!(expiry_label(None), "never");
        let at = Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(expiry_label(Some(at)), "2030-12-31");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("https://example.com/long", 10), "https://e…");
        assert_eq!(truncate("héllo wörld", 5), "héll…");
        assert_eq!(truncate("abc", 0), "");
    }
}
