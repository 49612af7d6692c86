//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskmarkError;

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the generated script is not UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TaskmarkError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for a shell.
///
/// # Errors
///
/// Returns `TaskmarkError::Config` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TaskmarkError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskmark", &mut buf);
    String::from_utf8(buf).map_err(|e| TaskmarkError::Config(format!("UTF-8 error: {e}")))
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(taskmark completions bash)
"
        .to_string(),
        Shell::Zsh => r"# Add to ~/.zshrc (before compinit):
source <(taskmark completions zsh)

# Or save to your fpath:
taskmark completions zsh > ~/.zsh/completions/_taskmark
"
        .to_string(),
        Shell::Fish => r"# Save to the fish completions directory:
taskmark completions fish > ~/.config/fish/completions/taskmark.fish
"
        .to_string(),
        Shell::PowerShell => r"# Add to your PowerShell profile:
taskmark completions powershell | Out-String | Invoke-Expression
"
        .to_string(),
        Shell::Elvish => r"# Add to ~/.config/elvish/rc.elv:
eval (taskmark completions elvish | slurp)
"
        .to_string(),
        _ => format!("# Run: taskmark completions {shell}\n"),
    }
}
