//! Build helpers for the textstat workspace.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completions
    Completions {
        /// Shell to generate for (all shells when omitted)
        shell: Option<Shell>,
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
    /// Generate the man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Completions { shell, out } => completions(shell, &out),
        Task::Man { out } => man(&out),
    }
}

fn completions(shell: Option<Shell>, out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let shells = shell.map_or_else(
        || vec![Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh],
        |s| vec![s],
    );
    for shell in shells {
        let mut cmd = textstat::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "textstat", out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let path = out.join("textstat.1");
    let mut buffer = Vec::new();
    clap_mangen::Man::new(textstat::command())
        .render(&mut buffer)
        .context("failed to render man page")?;
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
