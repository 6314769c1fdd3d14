//! Terminal rendering of a result map.

use std::fmt::{self, Write};

use colored::Colorize;

use crate::contact::outreach_mailto;
use crate::types::{ExtractionOutcome, ResultMap};

/// Render options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print an outreach `mailto:` link under each address
    pub contact_links: bool,
}

/// Write a human-readable report: a summary header, then each URL with its outcome.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &ResultMap,
    options: RenderOptions,
) -> fmt::Result {
    if !results.has_emails() {
        writeln!(out, "{}", "No Emails Found".bold())?;
        writeln!(
            out,
            "The AI couldn't find any email addresses from the provided source(s)."
        )?;
        for (url, message) in results.failures() {
            writeln!(out, "{} {}", url.bright_magenta(), format!("Error: {}", message).red())?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!(
            "Found {} email(s) across {} source(s)",
            results.total_emails(),
            results.source_count()
        )
        .bold()
    )?;

    for (url, outcome) in results.iter() {
        writeln!(out, "\n{}", url.bright_magenta())?;
        match outcome {
            ExtractionOutcome::Success { emails } if emails.is_empty() => {
                writeln!(out, "  {}", "No emails found.".dimmed())?;
            }
            ExtractionOutcome::Success { emails } => {
                for email in emails {
                    writeln!(out, "  {}", email)?;
                    if options.contact_links {
                        writeln!(out, "    {}", outreach_mailto(email, url).cyan())?;
                    }
                }
            }
            ExtractionOutcome::Failure { message } => {
                writeln!(out, "  {}", format!("Error: {}", message).red())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::reduce;

    fn plain() {
        colored::control::set_override(false);
    }

    fn render(results: &ResultMap, options: RenderOptions) -> String {
        let mut out = String::new();
        write_report(&mut out, results, options).unwrap();
        out
    }

    /// Accepts a fixed number of writes, then fails.
    struct FailAfter(usize);

    impl Write for FailAfter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            if self.0 == 0 {
                return Err(fmt::Error);
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_report_lists_each_source() {
        plain();
        let results = reduce(vec![
            ("https://a.com".to_string(), ExtractionOutcome::success(vec!["x@a.com".into()])),
            ("https://b.com".to_string(), ExtractionOutcome::success(vec![])),
            ("https://c.com".to_string(), ExtractionOutcome::failure("boom")),
        ]);

        let text = render(&results, RenderOptions::default());

        assert!(text.starts_with("Found 1 email(s) across 3 source(s)\n"));
        assert!(text.contains("https://a.com\n  x@a.com\n"));
        assert!(text.contains("https://b.com\n  No emails found.\n"));
        assert!(text.contains("https://c.com\n  Error: boom\n"));
        assert!(!text.contains("mailto:"));
    }

    #[test]
    fn test_contact_links_optional() {
        plain();
        let results = reduce(vec![(
            "https://a.com".to_string(),
            ExtractionOutcome::success(vec!["x@a.com".into()]),
        )]);

        let text = render(&results, RenderOptions { contact_links: true });
        assert!(text.contains("    mailto:x@a.com?subject=Advertising%20Proposal"));
    }

    #[test]
    fn test_no_emails_message() {
        plain();
        let results = reduce(vec![
            ("https://b.com".to_string(), ExtractionOutcome::success(vec![])),
            ("https://c.com".to_string(), ExtractionOutcome::failure("boom")),
        ]);

        let text = render(&results, RenderOptions::default());
        assert!(text.starts_with("No Emails Found\n"));
        assert!(text.contains("https://c.com Error: boom"));
    }

    #[test]
    fn test_write_failure_is_returned() {
        let results = reduce(vec![
            ("https://a.com".to_string(), ExtractionOutcome::success(vec!["x@a.com".into()])),
            ("https://b.com".to_string(), ExtractionOutcome::failure("boom")),
        ]);

        assert!(write_report(&mut FailAfter(0), &results, RenderOptions::default()).is_err());
        assert!(write_report(&mut FailAfter(3), &results, RenderOptions::default()).is_err());

        let empty = reduce(vec![("https://b.com".to_string(), ExtractionOutcome::failure("boom"))]);
        assert!(write_report(&mut FailAfter(2), &empty, RenderOptions::default()).is_err());
    }
}
