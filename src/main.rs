use std::process::ExitCode;

use clap::Parser;
use userchrome::report::Reporter;
use userchrome::Error;

/// Install the bundled userChrome.css into the default Firefox profile.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Print debug detail while locating the profile and installing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.verbose);

    if let Err(err) = color_eyre::install() {
        reporter.debug(format!("failed to install panic handler: {err}"));
    }

    match userchrome::run(&reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.error(err.to_string());
            match err {
                Error::ProfilesRootMissing(_) | Error::NoMatchingProfile(_) => {
                    eprintln!("Please ensure Firefox is installed and has been run at least once.");
                }
                Error::CopyFailed { .. } => {
                    eprintln!("Installation failed!");
                }
                _ => {}
            }
            ExitCode::from(err.exit_code())
        }
    }
}
