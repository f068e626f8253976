//! Process-argument resolution.
//!
//! The host recognizes `--settings|-s <FILE>`, `-v`, `--help|-?`, and a
//! single positional flow file. The unknown-input policy is explicit rather
//! than baked in: [`ArgPolicy::Lenient`] (the default) silently swallows
//! unrecognized flags and malformed values, [`ArgPolicy::Strict`] surfaces
//! them as errors.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// How unrecognized command-line input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgPolicy {
    /// Unknown flags and malformed values are silently ignored.
    #[default]
    Lenient,
    /// Unknown flags and malformed values are reported as errors.
    Strict,
}

/// Resolved process invocation arguments, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct InvocationArgs {
    /// Settings file override from `--settings`.
    pub settings_path: Option<PathBuf>,

    /// Flow file override from the first positional argument.
    pub flow_file: Option<PathBuf>,

    /// `-v` was given.
    pub verbose: bool,

    /// `--help` or `-?` was given; the caller must print usage and exit
    /// with no further side effects.
    pub help: bool,
}

fn command(policy: ArgPolicy) -> Command {
    Command::new("flowhost")
        .about("HTTP front end host for an embeddable flow runtime")
        .disable_help_flag(true)
        .ignore_errors(policy == ArgPolicy::Lenient)
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("use specified settings file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("enable verbose output"),
        )
        .arg(
            Arg::new("help")
                .short('?')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("show usage"),
        )
        .arg(
            Arg::new("flows")
                .value_name("FLOWS")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("flow file overriding the settings-file value"),
        )
}

/// Usage text printed when help is requested.
pub fn usage() -> String {
    let mut cmd = command(ArgPolicy::Lenient);
    cmd.render_help().to_string()
}

/// Resolve raw process arguments into [`InvocationArgs`].
///
/// The iterator must include the program name as its first element, as
/// `std::env::args` does. Under the lenient policy this only fails for
/// argument errors clap cannot swallow.
pub fn resolve<I, T>(args: I, policy: ArgPolicy) -> Result<InvocationArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut tokens: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if policy == ArgPolicy::Lenient {
        tokens = recognized_tokens(tokens);
    }
    let matches = command(policy).try_get_matches_from(tokens)?;
    Ok(InvocationArgs {
        settings_path: matches.get_one::<PathBuf>("settings").cloned(),
        flow_file: matches
            .get_many::<PathBuf>("flows")
            .and_then(|mut values| values.next().cloned()),
        verbose: matches.get_flag("verbose"),
        help: matches.get_flag("help"),
    })
}

/// Drop tokens the host does not recognize, keeping recognized flags, their
/// values, and non-flag tokens. clap's own error handling stops at the first
/// unknown token and would discard the rest of the line.
fn recognized_tokens(tokens: Vec<OsString>) -> Vec<OsString> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter();
    // argv[0] passes through untouched
    out.extend(iter.next());

    let mut expect_value = false;
    for token in iter {
        if expect_value {
            expect_value = false;
            out.push(token);
            continue;
        }
        let text = token.to_string_lossy();
        let takes_value = matches!(text.as_ref(), "-s" | "--settings");
        let bare_flag =
            matches!(text.as_ref(), "-v" | "-?" | "--help") || text.starts_with("--settings=");
        let is_flag = text.len() > 1 && text.starts_with('-');
        if takes_value {
            expect_value = true;
            out.push(token);
        } else if bare_flag || !is_flag {
            out.push(token);
        }
        // anything else is an unrecognized flag, swallowed
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(args: &[&str]) -> InvocationArgs {
        resolve(args.iter().copied(), ArgPolicy::Lenient).unwrap()
    }

    #[test]
    fn recognizes_all_flags() {
        let args = lenient(&["flowhost", "-v", "--settings", "custom.toml", "flows.json"]);
        assert!(args.verbose);
        assert!(!args.help);
        assert_eq!(args.settings_path, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.flow_file, Some(PathBuf::from("flows.json")));
    }

    #[test]
    fn short_settings_alias() {
        let args = lenient(&["flowhost", "-s", "other.toml"]);
        assert_eq!(args.settings_path, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn question_mark_requests_help() {
        assert!(lenient(&["flowhost", "-?"]).help);
        assert!(lenient(&["flowhost", "--help"]).help);
    }

    #[test]
    fn defaults_are_empty() {
        let args = lenient(&["flowhost"]);
        assert!(!args.verbose);
        assert!(!args.help);
        assert!(args.settings_path.is_none());
        assert!(args.flow_file.is_none());
    }

    #[test]
    fn lenient_ignores_unknown_flags() {
        let args = lenient(&["flowhost", "--bogus", "-v"]);
        assert!(args.verbose);

        let args = lenient(&["flowhost", "-v", "--bogus"]);
        assert!(args.verbose);
    }

    #[test]
    fn lenient_keeps_tokens_after_unknown_flag() {
        let args = lenient(&["flowhost", "--bogus", "flows.json", "-v"]);
        assert!(args.verbose);
        assert_eq!(args.flow_file, Some(PathBuf::from("flows.json")));

        let args = lenient(&["flowhost", "--bogus", "-s", "custom.toml"]);
        assert_eq!(args.settings_path, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn inline_settings_value() {
        let args = lenient(&["flowhost", "--settings=inline.toml"]);
        assert_eq!(args.settings_path, Some(PathBuf::from("inline.toml")));
    }

    #[test]
    fn first_non_flag_token_becomes_flow_file() {
        let args = lenient(&["flowhost", "a.json", "b.json"]);
        assert_eq!(args.flow_file, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn strict_rejects_unknown_flags() {
        let result = resolve(["flowhost", "--bogus"], ArgPolicy::Strict);
        assert!(result.is_err());
    }

    #[test]
    fn usage_names_every_flag() {
        let text = usage();
        assert!(text.contains("--settings"));
        assert!(text.contains("-v"));
        assert!(text.contains("--help"));
    }
}
