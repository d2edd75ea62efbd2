use clap::{self, Arg, Command};

fn add_input(app: Command) -> Command {
    app.arg(
        Arg::new("input")
            .help("Input file")
            .default_value("-")
            .long_help("If not present or a single dash, standard input will be used"),
    )
}

fn add_regex(app: Command) -> Command {
    const LONG_RE_HELP: &str = "\
A regular expression used for splitting input lines into fields.

Every named capture group becomes a field of the record, named after the
group.  Lines where the regex does not match are ignored.

By default '^\\s*(?P<key>\\S+)\\s+(?P<value>\\S+)' is used, so every line is
expected to hold a group name and a value, separated by whitespace.

An example for comma separated lines would be
'^(?P<Platform>[^,]+),(?P<PostType>[^,]+),(?P<Likes>[^,]*)'.
";
    app.arg(
        Arg::new("regex")
            .long("regex")
            .short('R')
            .help("Use a regex to capture record fields")
            .long_help(LONG_RE_HELP)
            .takes_value(true),
    )
}

fn add_key(app: Command) -> Command {
    app.arg(
        Arg::new("key")
            .long("key")
            .short('k')
            .help("Field (capture group) holding the group name")
            .default_value("key")
            .takes_value(true),
    )
}

fn add_value(app: Command) -> Command {
    app.arg(
        Arg::new("value")
            .long("value")
            .help("Field (capture group) holding the numerical value")
            .default_value("value")
            .takes_value(true),
    )
}

fn add_precision(app: Command) -> Command {
    app.arg(
        Arg::new("precision")
            .long("precision")
            .short('p')
            .help("Show that number of decimals (if omitted, 'human' units will be used)")
            .takes_value(true),
    )
}

pub fn get_app() -> Command<'static> {
    let mut summary = Command::new("summary")
        .version(clap::crate_version!())
        .about("Print min, quartiles and max of input values, per group")
        .arg(
            Arg::new("require-groups")
                .long("require-groups")
                .help("Fail if input does not yield any group"),
        );
    summary = add_input(add_precision(add_value(add_key(add_regex(summary)))));

    let mut keys = Command::new("keys")
        .version(clap::crate_version!())
        .about("Print group names in order of appearance, with their counts");
    keys = add_input(add_key(add_regex(keys)));

    Command::new("boxstats")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .subcommand_required(true)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .possible_values(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        )
        .subcommand(summary)
        .subcommand(keys)
}
