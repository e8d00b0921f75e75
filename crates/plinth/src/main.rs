//! Applies a configured content-pane height to a demo document.
//!
//! Mirrors what a page does on load: pick the deployment profile, read the
//! screen height, and fit `div#content`. Useful for eyeballing a profile
//! change without loading the site:
//!
//! ```text
//! plinth --page=home --height=800
//! plinth --page=installation --height=3000 --preset=compact --notify
//! plinth --page=home --height=800 --profile=profiles/classic.json
//! ```

use anyhow::{Context as _, Result, anyhow, bail};
use dom::Document;
use env_logger::{Builder, Env};
use height_control::{HeightControl, LogNotifier};
use log::{error, info};
use page_profile::MinHeightProfile;
use sizing::Px;
use std::env;
use std::fs;
use std::process::exit;

struct Options {
    page: String,
    screen_height: Px,
    profile: MinHeightProfile,
    notify: bool,
}

/// Parse `--page=`, `--height=`, `--preset=`/`--profile=` and `--notify`
/// from the command line.
fn parse_args() -> Result<Options> {
    let mut page: Option<String> = None;
    let mut height: Option<u32> = None;
    let mut profile: Option<MinHeightProfile> = None;
    let mut notify = false;

    let mut args = env::args();
    let _program_name: Option<String> = args.next();
    for arg in args {
        if let Some(rest) = arg.strip_prefix("--page=") {
            page = Some(rest.to_owned());
        } else if let Some(rest) = arg.strip_prefix("--height=") {
            height = Some(
                rest.parse()
                    .with_context(|| format!("invalid --height value `{rest}`"))?,
            );
        } else if let Some(rest) = arg.strip_prefix("--preset=") {
            profile = Some(
                *MinHeightProfile::preset(rest).ok_or_else(|| anyhow!("unknown preset `{rest}`"))?,
            );
        } else if let Some(rest) = arg.strip_prefix("--profile=") {
            let text =
                fs::read_to_string(rest).with_context(|| format!("reading profile `{rest}`"))?;
            profile = Some(
                MinHeightProfile::from_json(&text)
                    .with_context(|| format!("parsing profile `{rest}`"))?,
            );
        } else if arg == "--notify" {
            notify = true;
        } else {
            bail!("unrecognized argument `{arg}`");
        }
    }

    Ok(Options {
        page: page.ok_or_else(|| anyhow!("missing --page=<name>"))?,
        screen_height: Px::new(height.ok_or_else(|| anyhow!("missing --height=<pixels>"))?),
        profile: profile.unwrap_or_default(),
        notify,
    })
}

/// Demo document shaped like a site page: a body with a `div#content` pane.
fn demo_document() -> Document {
    let mut document = Document::new();
    let body = document.append_element(document.root(), "body");
    let content = document.append_element(body, "div");
    document.set_attr(content, "id", "content");
    document
}

fn run() -> Result<Px> {
    let options = parse_args()?;
    let mut controller = HeightControl::new(options.profile);
    if options.notify {
        controller = controller.with_notifier(Box::new(LogNotifier));
    }
    let mut document = demo_document();
    controller.apply(&mut document, &options.page, options.screen_height)
}

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .is_test(false)
        .try_init();
    match run() {
        Ok(applied) => {
            info!("content height applied: {}", applied.to_css());
        }
        Err(err) => {
            error!("error: {err}");
            exit(1);
        }
    }
}
