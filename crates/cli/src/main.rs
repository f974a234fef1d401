use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use shelf_authz::CredentialStore;
use shelf_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "shelf-cli", version, about = "Run and poke the shelf book service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a bearer token for a seeded account
    Token {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load shelf settings")?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            shelf_telemetry::init(&settings.telemetry)?;
            tracing::info!(env = ?settings.environment, "shelf-cli serving");
            shelf_app::run(settings).await
        }
        Command::Token { username, password } => {
            let user = match shelf_app::credentials().authenticate(&username, &password) {
                Some(user) => user,
                None => bail!("invalid username or password"),
            };
            let token = shelf_app::token_service(&settings)
                .issue(&user.username)
                .context("failed to sign token")?;
            println!("{token}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_port_override() {
        let cli = Cli::try_parse_from(["shelf-cli", "serve", "--port", "9090"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve { port: Some(9090) })));
    }

    #[test]
    fn token_requires_both_credentials() {
        assert!(Cli::try_parse_from(["shelf-cli", "token", "--username", "admin"]).is_err());
    }
}
