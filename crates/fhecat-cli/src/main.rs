mod cli;
mod commands;

use cli::{
    CheckParams, HandleParams, MatrixParams, OpsParams, ResolveParams, TypesParams, build_cli,
};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("resolve", m)) => {
            let params = ResolveParams::from_matches(m);
            commands::resolve::run(params.into());
        }
        Some(("ops", m)) => {
            let params = OpsParams::from_matches(m);
            commands::ops::run(params.into());
        }
        Some(("matrix", m)) => {
            let params = MatrixParams::from_matches(m);
            commands::matrix::run(params.into());
        }
        Some(("handle", m)) => {
            let params = HandleParams::from_matches(m);
            commands::handle::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
