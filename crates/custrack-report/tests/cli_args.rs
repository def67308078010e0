#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use custrack_report::cli::Args;

#[test]
fn help_and_version_are_not_config_paths() {
    let err = Args::try_parse_from(["custrack-report", "--help"]).expect_err("must print help");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);

    let err = Args::try_parse_from(["custrack-report", "--version"]).expect_err("must print version");
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn positional_config_path() {
    let args = Args::try_parse_from(["custrack-report", "conf/tracker.yaml"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("conf/tracker.yaml")));
    assert_eq!(args.config_path(), Some(PathBuf::from("conf/tracker.yaml")));
}

#[test]
fn no_arguments_is_valid() {
    let args = Args::try_parse_from(["custrack-report"]).unwrap();
    assert!(args.config.is_none());
}

#[test]
fn unknown_flag_is_rejected() {
    let err = Args::try_parse_from(["custrack-report", "--verbose"]).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
