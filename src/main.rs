// SPDX-License-Identifier: MPL-2.0
use laptop_catalog::app::{self, paths, Flags};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const HELP: &str = "\
laptop_catalog

USAGE:
  laptop_catalog [OPTIONS]

OPTIONS:
  --catalog <FILE>     Catalog TOML file replacing the built-in catalog
  --ads <FILE>         Advertisement TOML file replacing the built-in ads
  --config-dir <DIR>   Directory holding settings.toml
  --mute               Disable interaction sounds
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        catalog_path: args.opt_value_from_str("--catalog")?,
        ads_path: args.opt_value_from_str("--ads")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        muted: args.contains("--mute"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    app::run(flags)
}
