// SPDX-License-Identifier: MPL-2.0
use dicebench::app::{self, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `dicebench=debug`.
const LOG_ENV: &str = "DICEBENCH_LOG";

const USAGE: &str = "\
DiceBench - post-human level benchmark showcase

USAGE:
    dicebench [OPTIONS]

OPTIONS:
    -h, --help               Print this help
        --lang <LOCALE>      Interface language (en-US, fr)
        --config-dir <DIR>   Directory holding settings.toml
        --catalog <FILE>     Catalog TOML listing the quiz clips
        --media-dir <DIR>    Directory of clips; scanned when no catalog is given

ENVIRONMENT:
    DICEBENCH_CONFIG_DIR     Same as --config-dir (the flag wins)
    DICEBENCH_DATA_DIR       Base directory for relative clip paths
    DICEBENCH_LOG            Log filter (default: info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        media_dir: args.opt_value_from_str("--media-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }
    Ok(Some(flags))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting dicebench");
    app::run(flags)
}
