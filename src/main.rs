use armature::builder::Report;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("destination")
                .help("The directory the skeleton is created under")
                .default_value("."),
        )
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .help("Build from a TOML tree manifest instead of the built-in skeleton"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the tree without touching the filesystem")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    run(&matches)
}

fn run(matches: &ArgMatches) -> miette::Result<()> {
    let destination = matches
        .get_one::<String>("destination")
        .expect("destination has a default");

    let manifest = matches.get_one::<String>("manifest").map(PathBuf::from);

    let dry_run = matches.get_flag("dry-run");

    match (manifest, dry_run) {
        (Some(manifest), true) => {
            armature::actions::preview_manifest(&manifest, destination)?;
        }
        (Some(manifest), false) => {
            let report = armature::actions::build_manifest(&manifest, destination)?;

            let name = manifest
                .file_stem()
                .map(|os| os.to_string_lossy().to_string())
                .unwrap_or_else(|| "manifest".to_string());

            print_confirmation(&name, &report);
        }
        (None, true) => {
            armature::actions::preview_skeleton(destination);
        }
        (None, false) => {
            let report = armature::actions::build_skeleton(destination)?;

            print_confirmation(armature::skeleton::NAME, &report);
        }
    }

    Ok(())
}

fn print_confirmation(name: &str, report: &Report) {
    println!(
        "{} {} structure created ({} directories, {} files)",
        "✔".green(),
        name,
        report.directories,
        report.files
    );
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}
