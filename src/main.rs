use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod escape;
mod message;
mod output;
mod paths;
mod skill;

use config::HookEnv;
use message::{legacy_warning, HookOutput};
use output::Streams;
use paths::PluginPaths;
use skill::SkillContent;

/// What happened to this invocation, as seen by the host
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Complete message written to stdout
    Emitted,
    /// Nothing on stdout, one diagnostic line on stderr
    Failed,
}

impl Outcome {
    fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Emitted => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

fn main() -> ExitCode {
    let mut streams = Streams::stdio();
    init_tracing();

    let result = HookEnv::from_process().and_then(|env| run(&env));
    finish(result, &mut streams).exit_code()
}

/// Logs go to stderr; stdout carries only the hook message
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the SessionStart message. Returns the serialized line to emit.
fn run(env: &HookEnv) -> Result<String> {
    let paths = PluginPaths::resolve(&env.entry_point, &env.home);
    debug!(
        plugin_root = %paths.plugin_root.display(),
        legacy_skills_dir = %paths.legacy_skills_dir.display(),
        "resolved paths"
    );

    let has_legacy_skills = paths.has_legacy_skills();
    debug!(has_legacy_skills, "checked legacy skills directory");
    let warning = legacy_warning(has_legacy_skills);

    let skill = SkillContent::load(&paths.skill_file());
    match &skill {
        SkillContent::Loaded(text) => debug!(bytes = text.len(), "loaded skill"),
        SkillContent::Unavailable(reason) => {
            debug!(%reason, "skill unavailable, injecting error text instead")
        }
    }

    let line = HookOutput::session_start(skill.text(), warning).to_line()?;
    debug!(bytes = line.len(), "serialized hook output");
    Ok(line)
}

/// Single place where a pipeline result becomes stream output
fn finish<O: Write, E: Write>(result: Result<String>, streams: &mut Streams<O, E>) -> Outcome {
    let written = result.and_then(|line| {
        streams
            .emit(&line)
            .context("Failed to write hook output")
    });

    match written {
        Ok(()) => Outcome::Emitted,
        Err(e) => {
            streams.report(&e);
            Outcome::Failed
        }
    }
}
