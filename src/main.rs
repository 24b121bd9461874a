// SPDX-License-Identifier: MPL-2.0
use iced_chapel::app::{self, paths, Flags};
use iced_chapel::logging;

const HELP: &str = "\
iced_chapel

USAGE:
  iced_chapel [OPTIONS] [ROUTE]

ARGS:
  ROUTE                 Site path to open first, e.g. /gallery or /events/12

OPTIONS:
  --store-url URL       Base URL of the content store
  --config-dir PATH     Read and write settings in PATH
  --no-splash           Start without the boot splash
  -h, --help            Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let no_splash = args.contains("--no-splash");
    let store_url = args.opt_value_from_str("--store-url")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let route: Option<String> = args.opt_value_from_str("--route")?;
    let route = route.or_else(|| {
        args.finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
    });

    Ok(Flags {
        route,
        config_dir,
        store_url,
        no_splash,
    })
}
