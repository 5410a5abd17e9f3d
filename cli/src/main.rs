mod args;
mod global_settings;
mod intervals_view;
mod ops;
pub mod tables;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::intervals_view::intervals_view;
use crate::ops::{parse_ops, read_script, Op};
use anyhow::{bail, Result};
use console::Term;
use interval_set::{DisjointIntervalSet, Discrete, Natural, Order};
use itertools::Itertools;
use log::info;
use std::path::Path;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();

    match matches.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some(("eval", sub)) => {
            let ops = sub.get_many::<String>("ops").into_iter().flatten();
            let input = Input::Args(ops.collect());
            println!("{}", run(&input, &settings)?);
        }
        Some(("script", sub)) => {
            let Some(file) = sub.get_one::<String>("FILE") else {
                bail!("No script given");
            };
            println!("{}", run(&Input::Script(Path::new(file)), &settings)?);
        }
        Some((cmd, _)) => bail!("Unknown command {}", cmd),
        None => bail!("No command given"),
    }

    Ok(())
}

/// Where operations are read from
enum Input<'a> {
    Args(Vec<&'a String>),
    Script(&'a Path),
}

fn run(input: &Input, settings: &GlobalSettings) -> Result<String> {
    if settings.discrete {
        evaluate::<Discrete>(input, settings)
    } else {
        evaluate::<Natural>(input, settings)
    }
}

/// Parse the operations, apply them to an empty set, and return the text
/// to display.
fn evaluate<O: Order<i64> + Default>(
    input: &Input,
    settings: &GlobalSettings,
) -> Result<String> {
    let ops: Vec<Op<O>> = match input {
        Input::Args(args) => parse_ops(args)?,
        Input::Script(file) => read_script(file)?,
    };
    info!("{} operations", ops.len());

    let mut set = DisjointIntervalSet::with_order(O::default());
    let mut lines = Vec::new();
    for op in ops {
        lines.extend(op.apply(&mut set)?);
    }

    if settings.as_table {
        lines.push(intervals_view(
            &set,
            &settings.table,
            Term::stdout().size().1 as usize,
        ));
    } else {
        lines.push(set.to_string());
    }
    Ok(lines.iter().join("\n"))
}
