mod cli;
mod commands;

use cli::{BuildParams, CheckParams, DumpParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or(log_level(matches.get_count("verbose"))),
    );

    match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
