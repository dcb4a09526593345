use clap::Parser;
use mintwatch::adapter::inbound::cli::{self, command::Cli, output};
use mintwatch::error::{ConfigError, Error};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = cli::execute(cli).await {
        error!(error = %e, "Fatal error");
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &Error) {
    output::error(&e.to_string());
    if let Error::Config(ConfigError::MissingEnv { vars }) = e {
        for var in vars {
            output::field("Missing", var);
        }
    }
}
