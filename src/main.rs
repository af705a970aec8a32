// SPDX-License-Identifier: MPL-2.0
use cipher_form::app::{self, paths, Flags};

const HELP: &str = "\
cipher_form - validate and send classical cipher requests

USAGE:
    cipher_form [OPTIONS]

OPTIONS:
    -h, --help              Print this help and exit
    --lang <LOCALE>         Interface language (e.g. en-US, fr)
    --config-dir <DIR>      Directory holding settings.toml
                            (overrides CIPHER_FORM_CONFIG_DIR)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });

    for unused in args.finish() {
        eprintln!("Ignoring unknown argument: {}", unused.to_string_lossy());
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags { lang, config_dir })
}
