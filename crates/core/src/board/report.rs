//! Text report for prompt injection

use std::fmt::Write;

use super::{Vulnerabilities, VulnerabilityRecord};

const DEFINITIONS: &str = "\
Definitions:
- Hanging piece: attacked by the opponent and defended by none of its own pieces.
- Semi-protected piece: attacked exactly as many times as it is defended, so one extra attacker wins it.";

const RECOMMENDATIONS: &str = "\
Recommendations:
- Capture hanging enemy pieces when the capture does not lose material elsewhere.
- Defend or move your own hanging pieces before starting anything new.
- Add an attacker to a semi-protected enemy piece, or a defender to your own.
- Count rooks and queens lined up behind each other on files and diagonals; they add up.";

pub(super) fn render(vulnerabilities: &Vulnerabilities) -> String {
    let mut out = String::from("Piece vulnerability analysis\n\n");
    out.push_str(DEFINITIONS);
    out.push_str("\n\n");

    section(&mut out, "Hanging pieces", &vulnerabilities.hanging);
    section(&mut out, "Semi-protected pieces", &vulnerabilities.semi_protected);

    out.push_str(RECOMMENDATIONS);
    out.push('\n');
    out
}

fn section(out: &mut String, title: &str, records: &[VulnerabilityRecord]) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} ({}):", title, records.len());
    if records.is_empty() {
        out.push_str("- none\n");
    }
    for record in records {
        let _ = writeln!(out, "- {}", record.description);
    }
    out.push('\n');
}
