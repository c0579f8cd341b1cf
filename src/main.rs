//! uihl - highlight UI elements on a screenshot.
//!
//! Takes a screenshot and the uiautomator dump for the same screen, invoked
//! as `uihl <path>.png <path>.xml`, and writes `<path>-hl.png` with a yellow
//! box drawn around every leaf UI element. Diagnostics go to stdout; the
//! exit status is 0 on success and 1 on any failure.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use ui_highlight::pipeline::{self, Job, USAGE};

#[derive(Parser)]
#[command(name = "uihl")]
#[command(about = "Draw highlight boxes on a screenshot from its uiautomator dump")]
struct Cli {
    /// Screenshot to annotate (<path>.png)
    image: String,

    /// UI hierarchy dump for the same screen (<path>.xml)
    xml: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Wrong argument count is a usage error with exit status 1, same as a
    // bad path shape, so clap's own exit handling (status 2) is bypassed.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => usage_exit(),
    };

    let job = match Job::validate(&cli.image, &cli.xml) {
        Some(job) => job,
        None => usage_exit(),
    };

    if let Err(e) = pipeline::run(&job) {
        println!("{e}");
        std::process::exit(1);
    }
}

fn usage_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}
