use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ShellKind {
    Bash,
    Zsh,
}

#[derive(Parser, Debug)]
#[command(
    name = "dogear",
    bin_name = "dogear",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Bookmark directories for easy access in the future", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this bookmark file instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub store: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Bookmark,
    Browse,
    Maintenance,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Bookmark => "Bookmark Commands:",
            CommandGroup::Browse => "Browse Commands:",
            CommandGroup::Maintenance => "Maintenance:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "fold" | "unfold" | "find" => Some(CommandGroup::Bookmark),
            "like" | "list" | "recent" => Some(CommandGroup::Browse),
            "edit" | "clean" | "config" | "shell" | "help" => Some(CommandGroup::Maintenance),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Bookmark,
            CommandGroup::Browse,
            CommandGroup::Maintenance,
        ]
    }
}

/// The help page shown by `dogear`, `dogear help`, and unknown help topics.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("dogear {version}\n"));
    output.push_str("Bookmark directories for easy access in the future.\n");
    output.push('\n');
    output.push_str("To change to a bookmarked directory type:\n");
    output.push_str("  flipto <bookmark name>\n");
    output.push_str("(enable it with: eval \"$(dogear shell bash)\" or zsh)\n");
    output.push('\n');
    output.push_str("Usage: dogear [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --store <PATH>  Use this bookmark file instead of the configured one\n");
    output.push_str("  -v, --verbose       Verbose output (debug logging on stderr)\n");
    output.push_str("  -h, --help          Print help\n");
    output.push_str("  -V, --version       Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bookmark the current directory
    #[command(display_order = 1)]
    Fold {
        /// Bookmark name (1-40 of: letters, digits, _ . -)
        name: String,
    },

    /// Remove the bookmark of the current directory
    #[command(display_order = 2)]
    Unfold,

    /// Print the path of a bookmark
    #[command(display_order = 3)]
    Find {
        /// Exact bookmark name
        name: String,
    },

    /// Search bookmark names and paths (case-insensitive)
    #[command(display_order = 10)]
    Like {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List all bookmarks
    #[command(alias = "ls", display_order = 11)]
    List,

    /// Show the most recently added bookmarks
    #[command(display_order = 12)]
    Recent,

    /// Go through your bookmarks one by one and delete unwanted ones
    #[command(display_order = 20)]
    Edit,

    /// Remove bookmarks pointing to nonexistent directories
    #[command(display_order = 21)]
    Clean,

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (store-file, recent-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the `flipto` shell function for your shell
    #[command(display_order = 23)]
    Shell {
        #[arg(value_enum)]
        shell: ShellKind,
    },

    /// Print help for dogear or a subcommand
    #[command(display_order = 24)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },

    /// Output bookmark names for shell completion (hidden)
    #[command(hide = true, name = "__complete-names")]
    CompleteNames,
}
