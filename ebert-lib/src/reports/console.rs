use super::common;
use crate::Result;
use crate::analysis::Analysis;
use crate::metrics::METRIC_DEFINITIONS;
use crate::scoring::RiskLevel;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(analysis: &Analysis, use_colors: bool, writer: &mut W) -> Result<()> {
    let user = &analysis.user;

    if user.has_name() {
        writeln!(writer, "GitHub account {} ({})", user.login, user.name)?;
    } else {
        writeln!(writer, "GitHub account {}", user.login)?;
    }
    if !user.html_url.is_empty() {
        writeln!(writer, "  {}", user.html_url)?;
    }
    writeln!(writer)?;

    let status_str = common::format_risk_status(analysis.risk_level);
    let colored_status = if use_colors {
        match analysis.risk_level {
            RiskLevel::Low => status_str.green().bold().to_string(),
            RiskLevel::Medium => status_str.yellow().bold().to_string(),
            RiskLevel::High => status_str.red().bold().to_string(),
        }
    } else {
        status_str.to_string()
    };
    writeln!(
        writer,
        "Overall score {}/100, appraised as {colored_status}",
        common::format_score(analysis.overall_score)
    )?;

    write_heading(writer, "Scores", use_colors)?;
    let axes = analysis.scores.axes();
    let max_name_len = axes.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, score) in axes {
        writeln!(writer, "  {name:<max_name_len$} : {}", common::format_score(score))?;
    }

    write_heading(writer, "Metrics", use_colors)?;
    let max_name_len = METRIC_DEFINITIONS.iter().map(|def| def.name.len()).max().unwrap_or(0);
    for def in METRIC_DEFINITIONS {
        writeln!(writer, "  {:<max_name_len$} : {}", def.name, (def.extractor)(&analysis.metrics))?;
    }

    write_flags(writer, "🚩 Red flags", &analysis.red_flags, use_colors)?;
    write_flags(writer, "⚠️ Warnings", &analysis.warnings, use_colors)?;
    write_flags(writer, "✅ Positives", &analysis.positives, use_colors)?;

    Ok(())
}

fn write_heading<W: Write>(writer: &mut W, heading: &str, use_colors: bool) -> Result<()> {
    writeln!(writer)?;
    if use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }
    Ok(())
}

/// Sections without entries are left out entirely.
fn write_flags<W: Write>(writer: &mut W, heading: &str, messages: &[String], use_colors: bool) -> Result<()> {
    if messages.is_empty() {
        return Ok(());
    }

    write_heading(writer, heading, use_colors)?;
    for message in messages {
        writeln!(writer, "  - {message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Profile;
    use chrono::{DateTime, TimeDelta, Utc};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z").unwrap().into()
    }

    fn analysis_for(profile: Profile) -> Analysis {
        crate::analysis::analyze(profile, &[], &[], now())
    }

    fn profile(age_days: i64) -> Profile {
        Profile {
            login: "octocat".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            created_at: now() - TimeDelta::days(age_days),
            ..Profile::default()
        }
    }

    #[test]
    fn test_generate_header() {
        let named = Profile {
            name: "The Octocat".to_string(),
            ..profile(400)
        };
        let mut output = String::new();
        generate(&analysis_for(named), false, &mut output).unwrap();

        assert!(output.starts_with("GitHub account octocat (The Octocat)\n"));
        assert!(output.contains("https://github.com/octocat"));
        assert!(output.contains("appraised as"));
    }

    #[test]
    fn test_generate_lists_scores_and_metrics() {
        let mut output = String::new();
        generate(&analysis_for(profile(400)), false, &mut output).unwrap();

        for name in ["identity", "activity", "quality", "maintenance", "community"] {
            assert!(output.contains(name), "missing axis {name}");
        }
        for def in METRIC_DEFINITIONS {
            assert!(output.contains(def.name), "missing metric {}", def.name);
        }
        assert!(output.contains("account_age_days : 400"));
        assert!(output.contains("identity    : 50.0"));
    }

    #[test]
    fn test_generate_flag_sections() {
        let mut output = String::new();
        generate(&analysis_for(profile(400)), false, &mut output).unwrap();

        assert!(output.contains("⚠️ Warnings"));
        assert!(output.contains("  - No verifiable contact information"));
        assert!(output.contains("✅ Positives"));
        assert!(output.contains("Established account (400 days old)"));
        assert!(!output.contains("🚩 Red flags"));
    }

    #[test]
    fn test_generate_red_flags_for_new_account() {
        let mut output = String::new();
        generate(&analysis_for(profile(3)), false, &mut output).unwrap();

        assert!(output.contains("🚩 Red flags"));
        assert!(output.contains("Very new account (3 days old)"));
        assert!(!output.contains("✅ Positives"));
    }

    #[test]
    fn test_generate_color_mode_never() {
        let mut output = String::new();
        generate(&analysis_for(profile(3)), false, &mut output).unwrap();
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_generate_color_mode_always() {
        let mut output = String::new();
        generate(&analysis_for(profile(3)), true, &mut output).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains("RISK"));
    }
}
