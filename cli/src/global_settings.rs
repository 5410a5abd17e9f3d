use clap::{arg, Arg, ArgMatches};
use log::LevelFilter;

pub struct GlobalSettings {
    // Whether integers are considered adjacent, so that [0,4] and [5,9]
    // are merged.
    pub discrete: bool,

    // Show the result as a table rather than a single line
    pub as_table: bool,

    pub log_level: LevelFilter,
    pub table: crate::tables::Settings,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--discrete "Merge intervals with no integer between them")
                .global(true),
            arg!(--table "Show one interval per line, with its bounds")
                .global(true),
            arg!(-v --verbose "Log each operation on the set").global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            discrete: args.get_flag("discrete"),
            as_table: args.get_flag("table"),
            log_level: if args.get_flag("verbose") {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
            table: crate::tables::Settings::default(),
        }
    }
}
