// src/cli/commands.rs
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },

    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Leave out easily confused characters (i l L I | o O 0)
        #[arg(long)]
        exclude_similar: bool,

        /// Never repeat a character
        #[arg(long)]
        no_repeat: bool,

        /// Symbols to use instead of the default set
        #[arg(long)]
        symbols: Option<String>,

        /// Number of passwords to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// List all categories and their passwords
    List,

    /// Save a password under a category
    Add {
        /// Category name
        #[arg(required = true)]
        category: String,

        /// Password to store
        #[arg(required = true)]
        password: String,
    },

    /// Delete a password from a category
    Remove {
        /// Category name
        #[arg(required = true)]
        category: String,

        /// Password to delete
        #[arg(required = true)]
        password: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Write the vault as JSON to stdout or a file
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
