use crate::types::{AuditReport, SkipReason, SubdirOutcome};
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};

/// Renders the full audit report as terminal text. The caller decides where
/// it goes; nothing here touches the filesystem.
#[must_use]
pub fn render(report: &AuditReport, plain: bool) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"=".repeat(70));
    out.push('\n');
    out.push_str(&format!("Checking {} subdirectories\n", report.subdirs.len()));
    out.push_str("===========\n");

    for subdir in &report.subdirs {
        out.push_str(&format!("\n {}\n", subdir.name.cyan()));
        out.push_str("-------\n");

        match &subdir.outcome {
            SubdirOutcome::Analyzed { valid, invalid } => {
                if !valid.is_empty() {
                    out.push_str(&format!(
                        "  {}\n",
                        format!("Valid files ({}):", valid.len()).green()
                    ));
                    for name in valid {
                        out.push_str(&format!("  - {name}\n"));
                    }
                }
                if !invalid.is_empty() {
                    out.push_str(&format!(
                        "  {}\n",
                        format!("Invalid files ({}):", invalid.len()).red()
                    ));
                    for name in invalid {
                        out.push_str(&format!("  - {name}\n"));
                    }
                }
                if valid.is_empty() && invalid.is_empty() {
                    out.push_str(&format!(
                        "  {}\n",
                        "No files found in this subdirectory".yellow()
                    ));
                }
            }
            SubdirOutcome::Skipped(reason) => {
                out.push_str(&format!(
                    "  {}\n",
                    format!("Error: {}", skip_message(*reason)).red()
                ));
            }
        }
    }

    out.push_str("\n==========\n");
    out.push_str("GLOBAL SUMMARY\n");
    out.push_str("==========\n");
    out.push_str(&format!("{}\n", summary_table(report, plain)));
    out.push_str(&format!(
        "Subdirectories analyzed: {}\n",
        report.dirs_analyzed
    ));
    out.push_str("==========\n");

    if report.problem_detected() {
        out.push_str(&format!(
            "{}\n",
            format!(
                "Missing documents: {} invalid file(s) found",
                report.total_invalid
            )
            .red()
        ));
    } else {
        out.push_str(&format!("{}\n", "All quote files are valid".green()));
    }

    out
}

fn summary_table(report: &AuditReport, plain: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    if plain {
        table.force_no_tty();
    }
    table.set_header(vec!["Folder", "Valid", "Invalid", "Note"]);

    for subdir in &report.subdirs {
        match &subdir.outcome {
            SubdirOutcome::Analyzed { valid, invalid } => {
                table.add_row(vec![
                    Cell::new(&subdir.name),
                    Cell::new(valid.len()),
                    Cell::new(invalid.len()).fg(if invalid.is_empty() {
                        Color::White
                    } else {
                        Color::Red
                    }),
                    Cell::new(""),
                ]);
            }
            SubdirOutcome::Skipped(reason) => {
                table.add_row(vec![
                    Cell::new(&subdir.name),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(skip_message(*reason)).fg(Color::Yellow),
                ]);
            }
        }
    }

    table.add_row(vec![
        Cell::new("TOTALS").add_attribute(Attribute::Bold),
        Cell::new(report.total_valid).add_attribute(Attribute::Bold),
        Cell::new(report.total_invalid)
            .fg(if report.total_invalid > 0 {
                Color::Red
            } else {
                Color::White
            })
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    table
}

fn skip_message(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::Vanished => "subdirectory no longer exists",
        SkipReason::NotADirectory => "not a directory",
        SkipReason::Unreadable => "no permission to read this subdirectory",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubdirReport;

    fn analyzed(name: &str, valid: &[&str], invalid: &[&str]) -> SubdirReport {
        SubdirReport {
            name: name.to_string(),
            outcome: SubdirOutcome::Analyzed {
                valid: valid.iter().map(ToString::to_string).collect(),
                invalid: invalid.iter().map(ToString::to_string).collect(),
            },
        }
    }

    #[test]
    fn test_render_lists_files_per_folder() {
        colored::control::set_override(false);
        let report = AuditReport {
            subdirs: vec![analyzed(
                "client_a",
                &["15_03_2024_devis_x.pdf"],
                &["note.txt"],
            )],
            dirs_analyzed: 1,
            total_valid: 1,
            total_invalid: 1,
        };

        let text = render(&report, true);
        assert!(text.contains("Checking 1 subdirectories"));
        assert!(text.contains("client_a"));
        assert!(text.contains("Valid files (1):"));
        assert!(text.contains("- 15_03_2024_devis_x.pdf"));
        assert!(text.contains("Invalid files (1):"));
        assert!(text.contains("- note.txt"));
        assert!(text.contains("Subdirectories analyzed: 1"));
        assert!(text.contains("Missing documents: 1 invalid file(s) found"));
    }

    #[test]
    fn test_render_reports_all_clear() {
        colored::control::set_override(false);
        let report = AuditReport {
            subdirs: vec![analyzed("client_b", &["20_01_2025_devisFinal.docx"], &[])],
            dirs_analyzed: 1,
            total_valid: 1,
            total_invalid: 0,
        };

        let text = render(&report, true);
        assert!(text.contains("All quote files are valid"));
        assert!(!text.contains("Missing documents"));
    }

    #[test]
    fn test_render_notes_empty_folders() {
        colored::control::set_override(false);
        let report = AuditReport {
            subdirs: vec![analyzed("empty", &[], &[])],
            dirs_analyzed: 1,
            total_valid: 0,
            total_invalid: 0,
        };

        let text = render(&report, true);
        assert!(text.contains("No files found in this subdirectory"));
    }

    #[test]
    fn test_render_marks_skipped_folders() {
        colored::control::set_override(false);
        let report = AuditReport {
            subdirs: vec![SubdirReport {
                name: "locked".to_string(),
                outcome: SubdirOutcome::Skipped(SkipReason::Unreadable),
            }],
            dirs_analyzed: 0,
            total_valid: 0,
            total_invalid: 0,
        };

        let text = render(&report, true);
        assert!(text.contains("Error: no permission to read this subdirectory"));
        assert!(text.contains("Subdirectories analyzed: 0"));
        assert!(text.contains("All quote files are valid"));
    }
}
