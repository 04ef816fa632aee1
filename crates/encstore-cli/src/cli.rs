use clap::{Parser, Subcommand};
use clap_complete::Shell;

use encstore_core::VERSION;

/// Encstore - encrypted key-value storage from the command line
#[derive(Parser)]
#[command(name = "encstore")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "ENCSTORE_CONFIG")]
    pub config: Option<String>,

    /// Path to the persistent store (overrides config)
    #[arg(short, long, global = true, env = "ENCSTORE_PATH")]
    pub store: Option<String>,

    /// Key prefix (overrides config)
    #[arg(short, long, global = true)]
    pub prefix: Option<String>,

    /// Encryption algorithm: AES, XChaCha20 or Age (overrides config)
    #[arg(short, long, global = true)]
    pub algorithm: Option<String>,

    /// Print decrypted values without JSON decoding
    #[arg(long, global = true)]
    pub raw: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt and store a value
    Set {
        /// Key to store under
        #[arg(value_name = "KEY")]
        key: String,

        /// Value to store
        #[arg(value_name = "VALUE")]
        value: String,

        /// Parse VALUE as JSON before storing
        #[arg(long)]
        json: bool,
    },

    /// Decrypt and print a value
    Get {
        /// Key to read
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Remove a value
    Remove {
        /// Key to remove
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print every value whose key matches a pattern
    Find {
        /// Substring to match against stored keys
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Match only the key equal to PATTERN
        #[arg(long)]
        exact: bool,

        /// Print only the first match
        #[arg(long)]
        first: bool,
    },

    /// Remove every value whose key matches a pattern
    Purge {
        /// Substring to match against stored keys
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Match only the key equal to PATTERN
        #[arg(long)]
        exact: bool,
    },

    /// Remove every key in the store, regardless of prefix
    Clear {
        /// Confirm clearing the whole store
        #[arg(long)]
        yes: bool,
    },

    /// Print the stored key at an index
    Key {
        /// Zero-based index
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Print the number of stored keys
    Len,

    /// Encrypt text without storing it
    Encrypt {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Decrypt text produced by `encrypt`
    Decrypt {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
