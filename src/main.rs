use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vic_cipher::cli::{
    decrypt_message, encrypt_message, generate_keys, show_table, ConfigOverrides,
    DecryptOptions, EncryptOptions, KeySource, KeygenOptions, ShowOptions, Table,
};
use vic_cipher::keys::DEFAULT_KEY_LENGTH;
use vic_cipher::{KeyLengths, Language, SquareType};

/// Version info from build.rs
const VERSION: &str = env!("VIC_VERSION");
const PROFILE: &str = env!("VIC_PROFILE");
const GIT_HASH: &str = env!("VIC_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "vic")]
#[command(author, about = "VIC cipher: Polybius fractionation, straddling checkerboard, transposition and chain addition", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message (generates keys when none are given)
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        keys: KeyArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Plaintext
        text: String,
    },

    /// Decrypt a message
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        keys: KeyArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Ciphertext
        text: String,
    },

    /// Generate a key set
    #[command(alias = "k")]
    Keygen {
        /// Derive keys from a passphrase instead of at random
        #[arg(long)]
        passphrase: Option<String>,

        /// Write the key set to a JSON file
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        polybius_length: usize,

        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        checkerboard_length: usize,

        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        transposition_length: usize,

        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        numeric_length: usize,
    },

    /// Render the Polybius square or the straddling checkerboard
    #[command(alias = "s")]
    Show {
        /// square or checkerboard
        #[arg(value_parser = parse_table)]
        table: Table,

        /// Keyword for the table
        #[arg(long)]
        keyword: Option<String>,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// JSON key file written by `vic keygen`
    #[arg(long)]
    keys: Option<PathBuf>,

    #[arg(long)]
    polybius_key: Option<String>,

    #[arg(long)]
    checkerboard_key: Option<String>,

    #[arg(long)]
    transposition_key: Option<String>,

    #[arg(long)]
    numeric_key: Option<String>,
}

impl From<KeyArgs> for KeySource {
    fn from(args: KeyArgs) -> Self {
        Self {
            keys_file: args.keys,
            polybius: args.polybius_key,
            checkerboard: args.checkerboard_key,
            transposition: args.transposition_key,
            numeric: args.numeric_key,
        }
    }
}

#[derive(Args)]
struct ConfigArgs {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// standard, keyword, caesar, atbash or affine
    #[arg(long, value_parser = parse_square_type)]
    square_type: Option<SquareType>,

    /// Custom alphabet (at least 36 characters)
    #[arg(long)]
    alphabet: Option<String>,

    /// english or turkish
    #[arg(long, value_parser = parse_language)]
    language: Option<Language>,

    /// Square parameters as JSON, e.g. '{"shift": 3}' or '{"a": 5, "b": 8}'
    #[arg(long)]
    mono_params: Option<String>,

    /// Transposition passes (1-3)
    #[arg(long)]
    passes: Option<u8>,

    /// Use chain addition
    #[arg(long)]
    chain: bool,
}

impl From<ConfigArgs> for ConfigOverrides {
    fn from(args: ConfigArgs) -> Self {
        Self {
            config_file: args.config,
            square_type: args.square_type,
            alphabet: args.alphabet,
            language: args.language,
            mono_params: args.mono_params,
            passes: args.passes,
            chain: args.chain,
        }
    }
}

fn parse_square_type(s: &str) -> Result<SquareType, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_table(s: &str) -> Result<Table, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(false),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("vic {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { keys, config, text } => {
            let options = EncryptOptions {
                keys: keys.into(),
                config: config.into(),
            };
            encrypt_message(&text, &options).and_then(|outcome| {
                if let Some(generated) = outcome.generated_keys {
                    eprintln!("Generated keys (fingerprint {}):", generated.fingerprint());
                    eprintln!("{}", generated.to_json()?);
                }
                println!("{}", outcome.ciphertext);
                Ok(())
            })
        }

        Commands::Decrypt { keys, config, text } => {
            let options = DecryptOptions {
                keys: keys.into(),
                config: config.into(),
            };
            decrypt_message(&text, &options).map(|plaintext| println!("{}", plaintext))
        }

        Commands::Keygen {
            passphrase,
            out,
            polybius_length,
            checkerboard_length,
            transposition_length,
            numeric_length,
        } => {
            let options = KeygenOptions {
                passphrase,
                lengths: KeyLengths {
                    polybius: polybius_length,
                    checkerboard: checkerboard_length,
                    transposition: transposition_length,
                    numeric: numeric_length,
                },
                out,
            };
            generate_keys(&options).map(|report| print!("{}", report))
        }

        Commands::Show {
            table,
            keyword,
            config,
        } => {
            let options = ShowOptions {
                keyword,
                config: config.into(),
            };
            show_table(table, &options).map(|rendered| print!("{}", rendered))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
