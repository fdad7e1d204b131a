//! Plain rendering of the résumé for `termfolio print`.
//!
//! Pure functions — (Profile, OutputFormat) → String.
//! No I/O, no animation.

use crate::content::{Profile, Section};
use crate::error::Result;

/// Output format for `print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text, one block per section.
    #[default]
    Human,
    /// Pretty-printed JSON of the embedded content.
    Json,
}

/// Format the whole profile.
pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(profile)),
        OutputFormat::Json => format_json(profile),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(profile: &Profile) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", profile.name));
    out.push_str(&format!("{}\n", profile.tagline));
    for contact in profile.contacts {
        out.push_str(&format!("  {:<9} {}\n", contact.label, contact.target));
    }
    out.push('\n');

    for section in Section::ALL {
        out.push_str(&format!("=== {} ===\n", section.title()));
        out.push_str(&format_section(profile, section));
        out.push('\n');
    }

    out
}

/// Body text of a single section.
pub fn format_section(profile: &Profile, section: Section) -> String {
    let mut out = String::new();
    match section {
        Section::About => {
            let edu = &profile.education;
            out.push_str(&format!("{}\n", edu.institution));
            out.push_str(&format!("  {}\n", edu.degree));
            out.push_str(&format!("  {}\n", edu.expected));
            for h in edu.highlights {
                out.push_str(&format!("  * {}\n", h));
            }
        }
        Section::Experience => {
            for job in profile.experience {
                out.push_str(&format!("{} ({})\n", job.title, job.period));
                out.push_str(&format!("  {}\n", job.organization));
                for b in job.bullets {
                    out.push_str(&format!("  > {}\n", b));
                }
            }
        }
        Section::Projects => {
            for p in profile.projects {
                out.push_str(&format!("{}\n", p.title));
                out.push_str(&format!("  {}\n", p.description));
                let stats: Vec<String> = p
                    .stats
                    .iter()
                    .map(|s| format!("{} {}", s.value, s.label))
                    .collect();
                out.push_str(&format!("  {}\n", stats.join(" | ")));
                for d in p.details {
                    out.push_str(&format!("  - {}\n", d));
                }
                out.push_str(&format!("  [{}]\n", p.tech.join(", ")));
            }
        }
        Section::Skills => {
            for g in profile.skills {
                out.push_str(&format!("{:<14}{}\n", format!("{}:", g.category), g.skills.join(", ")));
            }
        }
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(profile: &Profile) -> Result<String> {
    let mut out = serde_json::to_string_pretty(profile)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::profile;

    #[test]
    fn human_lists_every_section_in_tab_order() {
        let out = format_profile(&profile(), OutputFormat::Human).unwrap();
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| out.find(&format!("=== {} ===", s.title())).expect("section header"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn human_includes_contacts() {
        let out = format_profile(&profile(), OutputFormat::Human).unwrap();
        assert!(out.starts_with("Nasir Mirza\n"));
        assert!(out.contains("mailto:nmirza001@csbsju.edu"));
        assert!(out.contains("https://github.com/nmirza001"));
    }

    #[test]
    fn projects_section_shows_stats_and_tech() {
        let out = format_section(&profile(), Section::Projects);
        assert!(out.contains("Algorithmic Trading System"));
        assert!(out.contains("92% Accuracy"));
        assert!(out.contains("[Python, NLTK, scikit-learn, Streamlit]"));
    }

    #[test]
    fn skills_section_keeps_display_order() {
        let out = format_section(&profile(), Section::Skills);
        assert!(out.contains("Pandas, NumPy, Scikit-learn, NLTK"));
    }

    #[test]
    fn json_is_valid_and_complete() {
        let out = format_profile(&profile(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Nasir Mirza");
        assert_eq!(value["contacts"].as_array().unwrap().len(), 4);
        assert_eq!(value["contacts"][1]["kind"], "code_hosting");
        assert_eq!(value["projects"][0]["stats"][0]["value"], "1M+");
        assert_eq!(value["skills"].as_array().unwrap().len(), 4);
    }
}
