use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("intervals")
        .version("0.1")
        .about("Evaluate operations on sets of disjoint intervals")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true) // --x val1 val2 subcommand
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("eval")
                .about("Apply operations to an empty set, and show the result")
                .after_help(OPS_HELP)
                .arg(
                    Arg::new("ops")
                        .value_name("OP")
                        .help("Operations, applied in order")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("script")
                .about("Apply operations read from a file")
                .after_help(OPS_HELP)
                .arg(arg!(<FILE> "File with one or more operations per line")),
        )
        .subcommand(
            // Use    eval "$(intervals completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

const OPS_HELP: &str = "\
Operations:
  +[0,10)   add all values of an interval
  -(3,5]    remove all values of an interval
  +7        add a single value
  -7        remove a single value
  ?7        show whether a value is in the set";

#[cfg(test)]
mod test {
    use super::build_cli;

    #[test]
    fn test_cli() {
        build_cli().debug_assert();

        let m = build_cli()
            .try_get_matches_from(["intervals", "--discrete", "eval", "+[0,5]", "-3"])
            .unwrap();
        assert!(m.get_flag("discrete"));
        let Some(("eval", sub)) = m.subcommand() else {
            panic!("expected eval");
        };
        let ops: Vec<&String> = sub.get_many::<String>("ops").unwrap().collect();
        assert_eq!(ops, ["+[0,5]", "-3"]);
    }
}
