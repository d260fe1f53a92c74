//! Interactive terminal front end for the readiness evaluator.
//!
//! Collects self-reported answers, feeds them to the scoring engine, and
//! renders the resulting assessment. All analysis is scoring of answers;
//! nothing on the host is inspected or modified.

mod export;
mod prompt;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use irr_core::EnvironmentProfile;
use irr_engine::{
    builtin_scenarios, detect_bottlenecks,
    policy_tools::{BOTTLENECK_CATALOG, POLICY_CATALOG},
    score_policies, score_tools, AssessmentSession, BottleneckAnswer, PolicyAnswer,
    PolicyToolOutcome, ToolAnswer, STANDARD_PLAYBOOKS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use export::{export_assessment, ExportFormat};
use prompt::{display_menu, get_input, get_list, get_number, get_yes_no, PromptError};
use render::*;

/// Incident Readiness & Response Evaluator.
#[derive(Parser, Debug)]
#[command(name = "irr")]
#[command(about = "Incident Readiness & Response Evaluator")]
struct Args {
    /// Organization name (skips the prompt when provided)
    #[arg(long)]
    org: Option<String>,

    /// Directory for exported assessment files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Export format for assessment files
    #[arg(long, value_enum, default_value = "json")]
    export_format: ExportFormat,

    /// Skip the consent screen
    #[arg(long)]
    yes: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct App {
    args: Args,
    session: Option<AssessmentSession>,
    assessment: Option<irr_core::ReadinessAssessment>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app = App {
        args,
        session: None,
        assessment: None,
    };
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(PromptError::Eof) => {
            println!();
            print_warning("Assessment interrupted.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&format!("Unexpected error: {err}"));
            ExitCode::FAILURE
        }
    }
}

impl App {
    fn run(&mut self) -> Result<(), PromptError> {
        if !self.args.yes && !self.display_consent_screen()? {
            print_info("Assessment cancelled. Exiting...");
            return Ok(());
        }

        loop {
            print_banner();
            let choice = display_menu(
                "MAIN MENU",
                &[
                    "Full Assessment (All Modules)",
                    "Environment Overview",
                    "Log Analysis",
                    "Playbook Evaluation",
                    "Policy & Tool Readiness",
                    "Scenario Testing",
                    "Generate Assessment Report",
                    "Export Results",
                ],
            )?;

            match choice {
                0 => {
                    println!("{CYAN}Thank you for using IRR.{RESET}");
                    println!("{DIM}Assessment complete. Stay secure.{RESET}\n");
                    return Ok(());
                }
                1 => self.run_full_assessment()?,
                2 => self.show_or_collect_environment()?,
                3 => self.run_log_analysis()?,
                4 => self.run_playbook_evaluation()?,
                5 => self.run_policy_tools()?,
                6 => self.run_scenario_testing()?,
                7 => self.generate_assessment()?,
                8 => self.export_results(),
                _ => {}
            }
        }
    }

    fn display_consent_screen(&self) -> Result<bool, PromptError> {
        print_banner();
        println!("{BOLD}OVERVIEW & SCOPE{RESET}");
        println!("{DIM}{}{RESET}\n", "─".repeat(60));
        println!(
            "IRR evaluates your organization's capability to respond to\n\
             security incidents by scoring self-reported answers about log\n\
             coverage, playbooks, policies, tools, and scenarios.\n\n\
             IRR is strictly analytical and does NOT:\n\
               ✗ Simulate attacks or generate malicious activity\n\
               ✗ Modify system configurations or data\n\
               ✗ Access systems without explicit user input\n\
               ✗ Store or transmit sensitive organizational data\n\n\
             All assessments are performed locally and remain confidential."
        );
        println!("\n{DIM}{}{RESET}\n", "─".repeat(60));
        get_yes_no("Do you consent to proceed with the assessment", true)
    }

    fn run_full_assessment(&mut self) -> Result<(), PromptError> {
        print_section_header("FULL INCIDENT READINESS ASSESSMENT");
        self.ensure_session()?;
        self.run_log_analysis()?;
        self.run_playbook_evaluation()?;
        self.run_policy_tools()?;
        self.run_scenario_testing()?;
        self.generate_assessment()?;
        Ok(())
    }

    /// Collect the environment profile if this is the first module to need it.
    fn ensure_session(&mut self) -> Result<(), PromptError> {
        if self.session.is_none() {
            let profile = self.collect_environment()?;
            self.session = Some(AssessmentSession::new(profile));
        }
        Ok(())
    }

    fn collect_environment(&self) -> Result<EnvironmentProfile, PromptError> {
        print_section_header("ENVIRONMENT OVERVIEW");
        print_info("Collect organizational security environment metadata");

        let org_name = match &self.args.org {
            Some(org) => org.clone(),
            None => get_input("Organization name", Some("My Organization"))?,
        };
        let platforms = get_list("Platforms (comma-separated)", "Windows,Linux")?;
        let endpoints_count = get_number("Approximate endpoint count", 100)?;
        let network_segments = get_list("Network segments (comma-separated)", "DMZ,Internal")?;
        let security_tools =
            get_list("Security tools (comma-separated)", "EDR,SIEM,Firewall")?;
        let log_sources = get_list(
            "Log sources (comma-separated)",
            "Windows Event Logs,Syslog",
        )?;
        let retention_days = get_number("Log retention period (days)", 90)?;

        let profile = EnvironmentProfile::builder(org_name)
            .platforms(platforms)
            .endpoints_count(endpoints_count)
            .network_segments(network_segments)
            .security_tools(security_tools)
            .log_sources(log_sources)
            .retention_days(retention_days)
            .build();
        print_success("Environment profile collected successfully");
        Ok(profile)
    }

    fn show_or_collect_environment(&mut self) -> Result<(), PromptError> {
        match &self.session {
            Some(session) => display_environment_summary(&session.profile),
            None => self.ensure_session()?,
        }
        Ok(())
    }

    fn run_log_analysis(&mut self) -> Result<(), PromptError> {
        self.ensure_session()?;
        print_section_header("LOG ANALYSIS");
        print_info("Analyzing log sources for incident response capabilities...");

        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let total = session.profile.log_sources.len();
        for i in 1..=total {
            display_progress_bar(i, total, "Analyzing");
        }
        session.analyze_logs();
        println!();
        display_log_results(&session.log_results);
        Ok(())
    }

    fn run_playbook_evaluation(&mut self) -> Result<(), PromptError> {
        self.ensure_session()?;
        print_section_header("PLAYBOOK EVALUATION");
        print_info("Evaluating incident response playbook effectiveness...");

        println!("{BOLD}Standard Playbooks to Evaluate:{RESET}");
        for (i, playbook) in STANDARD_PLAYBOOKS.iter().enumerate() {
            println!("  {}. {playbook}", i + 1);
        }
        println!();

        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if get_yes_no("Evaluate standard playbooks", true)? {
            session.evaluate_standard_playbooks();
        }

        if get_yes_no("Evaluate custom playbooks", false)? {
            loop {
                let name = get_input("Custom playbook name (or 'done' to finish)", None)?;
                if name.is_empty() || name.eq_ignore_ascii_case("done") {
                    break;
                }
                session.evaluate_playbook(&name);
                print_success(&format!("Evaluated: {name}"));
            }
        }

        if !session.playbook_results.is_empty() {
            display_playbook_results(&session.playbook_results);
        }
        Ok(())
    }

    fn run_policy_tools(&mut self) -> Result<(), PromptError> {
        self.ensure_session()?;
        print_section_header("POLICY & TOOL READINESS");
        print_info("Evaluating security policies and tool effectiveness...");

        println!("\n{BOLD}Policy Assessment:{RESET}\n");
        let mut policy_answers = Vec::with_capacity(POLICY_CATALOG.len());
        for (name, description) in POLICY_CATALOG {
            debug!(policy = name, description, "prompting policy answers");
            let exists = get_yes_no(&format!("  {name} exists and is current"), true)?;
            let (documented, tested) = if exists {
                (
                    get_yes_no("    Is it well-documented and accessible", true)?,
                    get_yes_no("    Has it been tested in the last 12 months", true)?,
                )
            } else {
                (false, false)
            };
            policy_answers.push(PolicyAnswer {
                policy_name: name.to_string(),
                exists,
                documented,
                tested,
            });
            println!();
        }

        println!("\n{BOLD}Tool Effectiveness Assessment:{RESET}\n");
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let tools: Vec<String> = session.profile.security_tools.clone();
        let mut tool_answers = Vec::with_capacity(tools.len());
        for tool in &tools {
            println!("{BOLD}{tool}:{RESET}");
            tool_answers.push(ToolAnswer {
                tool_name: tool.clone(),
                operational: get_yes_no("  Fully operational and monitored", true)?,
                integrated: get_yes_no("  Integrated with incident response workflow", true)?,
            });
            println!();
        }

        println!("{BOLD}Bottleneck Analysis:{RESET}\n");
        let mut bottleneck_answers = Vec::with_capacity(BOTTLENECK_CATALOG.len());
        for spec in &BOTTLENECK_CATALOG {
            bottleneck_answers.push(BottleneckAnswer {
                category: spec.category,
                present: get_yes_no(&format!("  Potential bottleneck: {}", spec.label), true)?,
            });
        }
        println!();

        let outcome = PolicyToolOutcome::from_parts(
            score_policies(&policy_answers),
            score_tools(&tool_answers),
            detect_bottlenecks(&bottleneck_answers),
        );
        display_policy_summary(&outcome);
        session.record_policy_outcome(outcome);
        Ok(())
    }

    fn run_scenario_testing(&mut self) -> Result<(), PromptError> {
        let ready = self
            .session
            .as_ref()
            .is_some_and(|s| !s.log_results.is_empty() && !s.playbook_results.is_empty());
        if !ready {
            print_warning("Log analysis and playbook evaluation required first");
            return Ok(());
        }

        print_section_header("SCENARIO TESTING");
        print_info("Evaluate readiness against hypothetical incident scenarios");
        if !get_yes_no("Run scenario testing", true)? {
            return Ok(());
        }

        let scenarios = builtin_scenarios();
        println!("{BOLD}Available Scenarios:{RESET}");
        for (i, scenario) in scenarios.iter().enumerate() {
            println!("  {}. {} - {}", i + 1, scenario.name, scenario.description);
        }
        println!();

        let selected = get_input(
            "Select scenarios (comma-separated numbers, or 'all')",
            Some("all"),
        )?;
        let chosen: Vec<_> = if selected.eq_ignore_ascii_case("all") {
            scenarios.iter().collect()
        } else {
            selected
                .split(',')
                .filter_map(|token| token.trim().parse::<usize>().ok())
                .filter_map(|index| index.checked_sub(1).and_then(|i| scenarios.get(i)))
                .collect()
        };

        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let total = chosen.len();
        for (i, scenario) in chosen.into_iter().enumerate() {
            display_progress_bar(i + 1, total, "Testing");
            session.run_scenario(scenario);
        }
        println!();
        display_scenario_results(&session.scenario_results);
        Ok(())
    }

    fn generate_assessment(&mut self) -> Result<(), PromptError> {
        let ready = self
            .session
            .as_ref()
            .is_some_and(|s| !s.log_results.is_empty() && !s.playbook_results.is_empty());
        if !ready {
            print_warning("Complete at least log analysis and playbook evaluation first");
            return Ok(());
        }

        print_section_header("READINESS ASSESSMENT");
        print_info("Generating comprehensive incident response readiness assessment...");
        println!();

        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let assessment = session.finalize();
        display_assessment(&assessment);
        self.assessment = Some(assessment);
        Ok(())
    }

    fn export_results(&self) {
        let Some(assessment) = &self.assessment else {
            print_warning("No assessment available to export");
            return;
        };

        match export_assessment(assessment, self.args.export_format, &self.args.output_dir) {
            Ok(record) => print_success(&format!(
                "Assessment exported to: {} ({} bytes, sha256 {})",
                record.path.display(),
                record.size_bytes,
                record.sha256
            )),
            Err(err) => print_error(&format!("Export failed: {err}")),
        }
    }
}

fn display_environment_summary(profile: &EnvironmentProfile) {
    print_section_header("ENVIRONMENT SUMMARY");
    println!("{BOLD}Organization:{RESET} {}", profile.org_name);
    println!("{BOLD}Endpoints:{RESET} {}", profile.endpoints_count);
    println!("{BOLD}Log Retention:{RESET} {} days", profile.retention_days);

    for (title, entries) in [
        ("Platforms", &profile.platforms),
        ("Network Segments", &profile.network_segments),
        ("Security Tools", &profile.security_tools),
        ("Log Sources", &profile.log_sources),
    ] {
        println!("\n{BOLD}{title}:{RESET}");
        for entry in entries {
            println!("  • {entry}");
        }
    }
}
