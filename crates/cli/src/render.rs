//! ANSI terminal rendering for assessment results.

use irr_core::{
    LogAnalysisResult, PlaybookAnalysisResult, ReadinessAssessment, ReadinessLevel, ScenarioResult,
};
use irr_engine::PolicyToolOutcome;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const CYAN: &str = "\x1b[96m";
pub const WHITE: &str = "\x1b[97m";

pub fn print_banner() {
    println!("{CYAN}{BOLD}");
    println!("██╗██████╗ ██████╗ ");
    println!("██║██╔══██╗██╔══██╗");
    println!("██║██████╔╝██████╔╝");
    println!("██║██╔══██╗██╔══██╗");
    println!("██║██║  ██║██║  ██║");
    println!("╚═╝╚═╝  ╚═╝╚═╝  ╚═╝");
    println!("{RESET}");
    println!("{WHITE}{BOLD}Incident Readiness & Response Evaluator{RESET}");
    println!("{DIM}Professional Security Assessment Platform{RESET}");
    println!("{DIM}{}{RESET}", "━".repeat(52));
}

pub fn print_section_header(title: &str) {
    let bar = "=".repeat(60);
    println!("\n{CYAN}{BOLD}{bar}{RESET}");
    println!("{CYAN}{BOLD}{:^60}{RESET}", title);
    println!("{CYAN}{BOLD}{bar}{RESET}\n");
}

pub fn print_success(message: &str) {
    println!("{GREEN}✓{RESET} {message}");
}

pub fn print_warning(message: &str) {
    println!("{YELLOW}⚠{RESET} {message}");
}

pub fn print_error(message: &str) {
    println!("{RED}✗{RESET} {message}");
}

pub fn print_info(message: &str) {
    println!("{BLUE}ℹ{RESET} {message}");
}

/// Render a score as a colored percentage. Band thresholds vary per module,
/// so the green/yellow cutoffs are parameters.
pub fn score_colored(score: f64, green_at: f64, yellow_at: f64) -> String {
    let percentage = (score * 100.0) as u32;
    let color = if score >= green_at {
        GREEN
    } else if score >= yellow_at {
        YELLOW
    } else {
        RED
    };
    format!("{color}{percentage}%{RESET}")
}

pub fn display_progress_bar(current: usize, total: usize, prefix: &str) {
    use std::io::Write;

    const BAR_LENGTH: usize = 40;
    let filled = BAR_LENGTH * current / total.max(1);
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_LENGTH - filled);
    let percent = 100 * current / total.max(1);
    print!("\r{prefix}: {CYAN}[{bar}]{RESET} {percent}%");
    let _ = std::io::stdout().flush();
    if current == total {
        println!();
    }
}

pub fn display_log_results(results: &[LogAnalysisResult]) {
    println!("{BOLD}Log Analysis Results:{RESET}\n");
    for result in results {
        let status = if result.available {
            format!("{GREEN}✓ Available{RESET}")
        } else {
            format!("{RED}✗ Unavailable{RESET}")
        };
        println!("{BOLD}{}{RESET} - {status}", result.source_name);
        println!(
            "  Timestamp Consistency: {}",
            score_colored(result.timestamp_consistency, 0.9, 0.75)
        );
        println!(
            "  Volume Score: {}",
            score_colored(result.volume_score, 0.9, 0.75)
        );
        println!(
            "  Completeness: {}",
            score_colored(result.completeness_score, 0.9, 0.75)
        );
        if !result.issues.is_empty() {
            println!("  {YELLOW}Issues:{RESET}");
            for issue in &result.issues {
                println!("    • {issue}");
            }
        }
        println!();
    }
}

pub fn display_playbook_results(results: &[PlaybookAnalysisResult]) {
    println!("\n{BOLD}Playbook Evaluation Results:{RESET}\n");
    for result in results {
        println!("{BOLD}{}{RESET}", result.playbook_name);
        println!(
            "  Overall Effectiveness: {}",
            score_colored(result.effectiveness(), 0.8, 0.65)
        );
        println!(
            "  Clarity: {}",
            score_colored(result.clarity_score, 0.8, 0.65)
        );
        println!(
            "  Feasibility: {}",
            score_colored(result.feasibility_score, 0.8, 0.65)
        );
        println!(
            "  Completeness: {}",
            score_colored(result.completeness_score, 0.8, 0.65)
        );
        if !result.ambiguous_steps.is_empty() {
            println!("  {YELLOW}Ambiguous Steps:{RESET}");
            for step in result.ambiguous_steps.iter().take(2) {
                println!("    • {step}");
            }
        }
        if !result.missing_elements.is_empty() {
            println!("  {RED}Missing Elements:{RESET}");
            for element in result.missing_elements.iter().take(2) {
                println!("    • {element}");
            }
        }
        println!();
    }
}

pub fn display_policy_summary(outcome: &PolicyToolOutcome) {
    println!("\n{BOLD}Policy & Tool Readiness Summary:{RESET}\n");
    println!(
        "Policy Maturity: {}",
        score_colored(outcome.policy_score, 0.8, 0.65)
    );
    println!(
        "Tool Effectiveness: {}",
        score_colored(outcome.tool_score, 0.8, 0.65)
    );
    if !outcome.bottlenecks.is_empty() {
        println!("\n{YELLOW}Identified Bottlenecks:{RESET}");
        for bottleneck in &outcome.bottlenecks {
            println!("  • {bottleneck}");
        }
    }
}

pub fn display_scenario_results(results: &[ScenarioResult]) {
    println!("{BOLD}Scenario Testing Results:{RESET}\n");
    for result in results {
        println!("{BOLD}{}{RESET}", result.name);
        println!("  {DIM}{}{RESET}", result.description);
        println!(
            "  Readiness Score: {}",
            score_colored(result.readiness_score, 0.8, 0.65)
        );
        println!(
            "  Log Availability: {}",
            score_colored(result.log_availability, 0.8, 0.65)
        );
        println!(
            "  Timeline Feasibility: {}",
            score_colored(result.timeline_feasibility, 0.8, 0.65)
        );
        if !result.strengths.is_empty() {
            println!("  {GREEN}Strengths:{RESET}");
            for strength in &result.strengths {
                println!("    • {strength}");
            }
        }
        if !result.gaps.is_empty() {
            println!("  {RED}Gaps:{RESET}");
            for gap in &result.gaps {
                println!("    • {gap}");
            }
        }
        println!();
    }
}

fn level_color(level: ReadinessLevel) -> &'static str {
    match level {
        ReadinessLevel::Excellent | ReadinessLevel::High => GREEN,
        ReadinessLevel::Moderate => YELLOW,
        ReadinessLevel::Low | ReadinessLevel::Critical => RED,
    }
}

pub fn display_assessment(assessment: &ReadinessAssessment) {
    println!("{BOLD}OVERALL INCIDENT RESPONSE READINESS{RESET}");
    println!("{BOLD}{}{RESET}\n", "═".repeat(60));

    let color = level_color(assessment.readiness_level);
    println!(
        "{BOLD}Readiness Level:{RESET} {color}{}{RESET}",
        assessment.readiness_level.as_str()
    );
    println!(
        "{BOLD}Overall Score:{RESET} {}\n",
        score_colored(assessment.overall_score, 0.85, 0.75)
    );

    println!("{BOLD}Component Scores:{RESET}");
    println!(
        "  Evidence Availability:     {}",
        score_colored(assessment.evidence_availability, 0.85, 0.75)
    );
    println!(
        "  Timeline Reconstruction:   {}",
        score_colored(assessment.timeline_reconstruction, 0.85, 0.75)
    );
    println!(
        "  Playbook Effectiveness:    {}",
        score_colored(assessment.playbook_effectiveness, 0.85, 0.75)
    );
    println!(
        "  Policy Alignment:          {}\n",
        score_colored(assessment.policy_alignment, 0.85, 0.75)
    );

    if !assessment.critical_gaps.is_empty() {
        println!("{RED}{BOLD}CRITICAL GAPS:{RESET}");
        for gap in &assessment.critical_gaps {
            println!("  {RED}⚠{RESET} {gap}");
        }
        println!();
    }

    if !assessment.high_priority_gaps.is_empty() {
        println!("{YELLOW}{BOLD}HIGH PRIORITY GAPS:{RESET}");
        for gap in assessment.high_priority_gaps.iter().take(5) {
            println!("  {YELLOW}•{RESET} {gap}");
        }
        println!();
    }

    println!("{BOLD}TOP RECOMMENDATIONS:{RESET}");
    for (i, recommendation) in assessment.recommendations.iter().take(10).enumerate() {
        println!("  {CYAN}{}.{RESET} {recommendation}", i + 1);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_colored_bands() {
        assert!(score_colored(0.95, 0.9, 0.75).contains(GREEN));
        assert!(score_colored(0.80, 0.9, 0.75).contains(YELLOW));
        assert!(score_colored(0.50, 0.9, 0.75).contains(RED));
        assert!(score_colored(0.95, 0.9, 0.75).contains("95%"));
    }
}
