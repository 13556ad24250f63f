use clap::{Parser, Subcommand};
use npkg::explore::ExitStatus;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "npkg")]
#[command(about = "Step into installed Node packages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a shell in an installed package, or run a command there
    Explore {
        /// Package to explore (a directory name under node_modules)
        package: Option<String>,
        /// Explore a globally installed package
        #[arg(short = 'g', long)]
        global: bool,
        /// Command to run instead of an interactive shell
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Explore {
            package,
            global,
            command,
        } => cli::explore::run(package, command, global).await,
    };

    // The only place the process exit code is decided
    let exit_code = match result {
        Ok(ExitStatus::Unchanged) => 0,
        Ok(ExitStatus::Code(code)) => code,
        Err(ref e) => {
            eprintln!("\n{}", npkg::format_error_with_help(e));
            1
        }
    };

    std::process::exit(exit_code);
}
