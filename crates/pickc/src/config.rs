//! Command-line parsing for the walkthrough binary.

/// Options for `pickc run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Only run demos whose name contains this substring.
    pub filter: Option<String>,
    /// Also print the names each pattern binds.
    pub verbose: bool,
}

impl DemoConfig {
    pub fn matches(&self, name: &str) -> bool {
        self.filter.as_deref().map_or(true, |f| name.contains(f))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(DemoConfig),
    List,
    Help,
    /// Unrecognized command or flag, kept for the error message.
    Unknown(String),
}

impl Command {
    /// Parse arguments, excluding the program name.
    ///
    /// No arguments means `run` with default options.
    pub fn parse(args: &[String]) -> Command {
        let Some(command) = args.first() else {
            return Command::Run(DemoConfig::default());
        };

        match command.as_str() {
            "run" => parse_run(&args[1..]),
            "list" => Command::List,
            "help" | "--help" | "-h" => Command::Help,
            // Flags without a command apply to `run`
            flag if flag.starts_with('-') => parse_run(args),
            other => Command::Unknown(other.to_string()),
        }
    }
}

fn parse_run(args: &[String]) -> Command {
    let mut config = DemoConfig::default();
    for arg in args {
        if let Some(filter) = arg.strip_prefix("--filter=") {
            config.filter = Some(filter.to_string());
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else {
            return Command::Unknown(arg.clone());
        }
    }
    Command::Run(config)
}

#[cfg(test)]
mod tests;
