use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vroll::config::SingleVersionPolicy;

#[derive(Parser, Debug)]
#[command(name = "vroll", version)]
#[command(
    about = "Archive the oldest numbered version directory and seed the next one",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the version directories (defaults to the current one)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Show what a roll would do without changing anything
    #[arg(short = 'n', long, conflicts_with = "list")]
    pub dry_run: bool,

    /// List version directories and exit
    #[arg(short, long)]
    pub list: bool,

    /// What to do when only one version directory exists
    #[arg(long, value_enum, value_name = "POLICY")]
    pub single_version: Option<SinglePolicyArg>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinglePolicyArg {
    /// Archive, remove, then copy (the copy fails)
    Sequential,
    /// Copy before removing
    CopyFirst,
    /// Archive and remove only
    SkipCopy,
    /// Do nothing and report an error
    Refuse,
}

impl From<SinglePolicyArg> for SingleVersionPolicy {
    fn from(arg: SinglePolicyArg) -> Self {
        match arg {
            SinglePolicyArg::Sequential => SingleVersionPolicy::Sequential,
            SinglePolicyArg::CopyFirst => SingleVersionPolicy::CopyFirst,
            SinglePolicyArg::SkipCopy => SingleVersionPolicy::SkipCopy,
            SinglePolicyArg::Refuse => SingleVersionPolicy::Refuse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["vroll"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.list);
        assert!(cli.single_version.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "vroll",
            "-C",
            "/tmp/work",
            "-n",
            "--single-version",
            "copy-first",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/work")));
        assert!(cli.dry_run);
        assert_eq!(cli.single_version, Some(SinglePolicyArg::CopyFirst));
    }

    #[test]
    fn test_dry_run_conflicts_with_list() {
        assert!(Cli::try_parse_from(["vroll", "--dry-run", "--list"]).is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["vroll", "--single-version", "maybe"]).is_err());
    }
}
