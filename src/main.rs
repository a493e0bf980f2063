use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use relver::config;
use relver::git::GitCli;
use relver::ui;
use relver::ReleaseStatus;
use semver::Version;

#[derive(clap::Parser)]
#[command(
    name = "relver",
    version,
    about = "Derive semantic versions and changelogs from conventional commit history"
)]
struct Args {
    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, value_name = "DIR", help = "Run as if started in DIR")]
    work_dir: Option<PathBuf>,

    #[arg(short, long, help = "Print all info about HEAD and history")]
    all: bool,

    #[arg(short, long, help = "Print the latest release version")]
    latest: bool,

    #[arg(
        short,
        long,
        help = "Calculate the next release version from the latest release and the commit history"
    )]
    next: bool,

    #[arg(
        short,
        long,
        help = "Print the version string of the checked-out commit (HEAD)"
    )]
    describe: bool,

    #[arg(
        short,
        long,
        value_name = "TYPE",
        num_args = 0..,
        help = "Print the changelog since the last release, restricted to the given commit TYPEs"
    )]
    changelog: Option<Vec<String>>,

    #[arg(long, value_name = "FILE", help = "Write the changelog to FILE")]
    write_changelog: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Write the release version to FILE")]
    write_version: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        ui::display_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let status = match &args.work_dir {
        Some(dir) => ReleaseStatus::new(GitCli::in_dir(dir)),
        None => ReleaseStatus::new(GitCli::new()),
    };

    // with no selection at all, behave like --all
    let all = args.all
        || !(args.latest
            || args.next
            || args.describe
            || args.changelog.is_some()
            || args.write_changelog.is_some()
            || args.write_version.is_some());

    if args.latest || all {
        let latest = status.latest()?;
        if latest == Version::new(0, 0, 0) {
            ui::display_report("last release", "no release yet.");
        } else {
            ui::display_report("last release", &latest.to_string());
        }
    }

    if args.next || all {
        let latest = status.latest()?;
        let next = status.next()?;
        if next == latest {
            ui::display_report("next release", "next release not needed.");
        } else {
            ui::display_report("next release", &next.to_string());
        }
    }

    if args.describe || all {
        ui::display_report("head commit version", &status.head()?);
    }

    if args.changelog.is_some() || args.write_changelog.is_some() || all {
        let categories = match args.changelog.as_deref() {
            Some(requested) if !requested.is_empty() => requested.to_vec(),
            _ => config.changelog.types.clone(),
        };
        let groups = status.changelog(&categories)?;

        if args.changelog.is_some() || all {
            if !groups.is_empty() {
                println!("{}", ui::render_changelog(&groups));
            }
            ui::display_report(
                "changelog",
                &format!("{} since last release", ui::render_summary(&groups)),
            );
        }

        if let Some(file) = &args.write_changelog {
            fs::write(file, ui::render_changelog(&groups))
                .with_context(|| format!("cannot write changelog to '{}'", file.display()))?;
            ui::display_report("changelog", &format!("written to '{}'", file.display()));
        }
    }

    if let Some(file) = &args.write_version {
        // the release version: the next one if a release is needed,
        // otherwise the latest
        let version = status.next()?;
        fs::write(file, format!("{}\n", version))
            .with_context(|| format!("cannot write version to '{}'", file.display()))?;
        ui::display_report("release version", &format!("written to '{}'", file.display()));
    }

    Ok(())
}
