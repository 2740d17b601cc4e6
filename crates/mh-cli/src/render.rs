//! Text rendering for hunts and turns.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mh_core::{Hunt, HuntSummary, RollOutcome, TurnReport};

/// The hunt details block shown before rolling.
pub fn hunt_details(name: &str, hunt: &Hunt) -> String {
    format!(
        "\n--- Hunt Details ---\nMonster: {name}\nMarks: {}/{}",
        hunt.marks_collected(),
        hunt.total_marks()
    )
}

/// Numbered list of open hunts.
pub fn open_hunts(hunts: &[HuntSummary]) -> String {
    let mut out = String::from("\nOpen Hunts:");
    for (i, hunt) in hunts.iter().enumerate() {
        out.push_str(&format!("\n{}. {hunt}", i + 1));
    }
    out
}

/// Everything a turn produced, from the roll to the final tally.
pub fn turn_report(report: &TurnReport) -> String {
    let result = &report.result;
    let mut out = format!("\nRoll: {}\nOutcome: {}", report.die, report.outcome);

    let gained = match result.marks_gained {
        0 => None,
        1 => Some("You gained 1 mark!".to_string()),
        n => Some(format!("You gained {n} marks!")),
    };
    if let Some(line) = gained {
        out.push_str(&format!("\n{}", line.green()));
    }

    if let Some(check) = result.setback {
        let line = if check.occurs {
            format!("{} setback occurs!", check.severity).red()
        } else {
            format!("{} setback avoided!", check.severity).yellow()
        };
        out.push_str(&format!("\n{line}"));
    }

    if result.boon_granted {
        out.push_str(&format!("\n{}", "You received a boon!".cyan()));
    }

    out.push_str(&format!(
        "\n\n--- Final Results ---\nMonster: {}\nTotal Marks: {}/{}",
        report.name,
        result.hunt.marks_collected(),
        result.hunt.total_marks()
    ));

    if report.completed {
        let line = format!(
            "Hunt Complete! You have successfully hunted the {}!",
            report.name
        );
        out.push_str(&format!("\n\n🎉 {}", line.bold()));
    }

    out
}

/// Table of open hunts with a progress column.
pub fn hunt_table(hunts: &[HuntSummary]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Monster", "Marks", "Progress"]);

    for (i, hunt) in hunts.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            hunt.name.clone(),
            format!("{}/{}", hunt.marks_collected, hunt.total_marks),
            progress_bar(hunt.marks_collected, hunt.total_marks),
        ]);
    }
    table
}

/// The d6 outcome table.
pub fn outcome_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["d6", "Outcome", "Marks", "Setback", "Boon"]);

    for outcome in RollOutcome::all() {
        let setback = outcome
            .setback()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        table.add_row(vec![
            outcome.die().to_string(),
            outcome.to_string(),
            outcome.marks_awarded().to_string(),
            setback,
            if outcome.has_boon() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}

const BAR_WIDTH: u32 = 10;

fn progress_bar(collected: u32, total: u32) -> String {
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        let scaled = u64::from(collected.min(total)) * u64::from(BAR_WIDTH) / u64::from(total);
        scaled as u32
    };
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        ".".repeat((BAR_WIDTH - filled) as usize)
    )
}
