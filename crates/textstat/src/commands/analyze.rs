//! Analyze command — word, sentence, and word-length statistics.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::{analyze, format};

use super::{read_input_file, read_input_stream};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze. Reads standard input when omitted or `-`.
    pub file: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    fn source(&self) -> Option<&Utf8PathBuf> {
        self.file.as_ref().filter(|path| path.as_str() != "-")
    }
}

/// Analyze a file (or standard input) and print the result.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, max_input_bytes, "executing analyze command");

    let content = match args.source() {
        Some(path) => read_input_file(path, max_input_bytes)?,
        None => read_input_stream(std::io::stdin().lock(), max_input_bytes)?,
    };

    let result = analyze(&content);

    if global_json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{json}");
    } else {
        println!("{}", format(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(path: &std::path::Path) -> AnalyzeArgs {
        AnalyzeArgs {
            file: Some(Utf8PathBuf::try_from(path.to_path_buf()).unwrap()),
        }
    }

    #[test]
    fn dash_means_stdin() {
        let args = AnalyzeArgs {
            file: Some(Utf8PathBuf::from("-")),
        };
        assert!(args.source().is_none());
        assert!(AnalyzeArgs::default().source().is_none());
    }

    #[test]
    fn cmd_analyze_text_succeeds() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat. The dog ran.").unwrap();
        assert!(cmd_analyze(args_for(tmp.path()), false, None).is_ok());
    }

    #[test]
    fn cmd_analyze_json_succeeds() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat. The dog ran.").unwrap();
        assert!(cmd_analyze(args_for(tmp.path()), true, None).is_ok());
    }

    #[test]
    fn cmd_analyze_respects_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "The cat sat. The dog ran.").unwrap();
        assert!(cmd_analyze(args_for(tmp.path()), false, Some(3)).is_err());
    }
}
