//! Console summary formatter for phase descriptors

use colored::Colorize;
use queue_setup_domain::{DeployDescriptor, InstallDescriptor, WorkerSpec};
use std::collections::BTreeMap;

/// Formats descriptors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the install-phase result
    pub fn format_install(descriptor: &InstallDescriptor) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Queue Install"));
        output.push_str(&Self::env_section(&descriptor.env));

        output.push_str(&Self::section_header("Install Commands"));
        if descriptor.commands.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for command in &descriptor.commands {
            output.push_str(&format!("  * {}\n", command));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the deploy-phase result
    pub fn format_deploy(descriptor: &DeployDescriptor) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Queue Workers"));
        output.push_str(&Self::env_section(&descriptor.env));

        output.push_str(&Self::section_header("Workers"));
        for (index, worker) in descriptor.workers.iter().enumerate() {
            output.push_str(&Self::worker(index + 1, worker));
        }

        if let Some(patch) = &descriptor.deploy_script {
            output.push_str(&Self::section_header("Deploy Script"));
            output.push_str(&format!("  {}\n", patch));
        }

        output.push_str(&Self::footer());
        output
    }

    fn worker(number: usize, worker: &WorkerSpec) -> String {
        let flag = |on: bool| if on { "yes" } else { "no" };
        let tries = worker
            .tries()
            .map_or_else(|| "-".to_string(), |t| t.to_string());

        format!(
            "\n  {} {}\n    timeout={}s sleep={}s processes={} stopwaitsecs={}s\n    daemon={} force={} tries={}\n",
            format!("#{}", number).yellow().bold(),
            format!("{} / {}", worker.connection(), worker.queue()).bold(),
            worker.timeout(),
            worker.sleep(),
            worker.processes(),
            worker.stopwaitsecs(),
            flag(worker.daemon()),
            flag(worker.force()),
            tries,
        )
    }

    fn env_section(env: &BTreeMap<String, String>) -> String {
        let mut output = Self::section_header("Environment");
        for (key, value) in env {
            output.push_str(&format!("  {}={}\n", key.cyan(), value));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
