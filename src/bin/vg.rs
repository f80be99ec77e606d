use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "vg",
    version,
    about = "Version-guard operations CLI utilities"
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        default_value = "develop",
        help = "Target environment for operations (placeholder)"
    )]
    env: Environment,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Environment {
    Develop,
    Test,
    Production,
}

#[derive(Subcommand)]
enum Command {
    /// Show placeholder status
    Status,
}

fn main() {
    let Cli { env: _, command } = Cli::parse();

    match command {
        Some(Command::Status) => {
            println!("vg: no operational commands implemented yet.");
        }
        None => {
            Cli::command().print_help().ok();
            std::process::exit(2);
        }
    }
}
