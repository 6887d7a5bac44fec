use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use sg_admin::{
    constants::ADMIN_KEY_ENV_VAR,
    error::CreateError,
    util::default_http_client,
    ApiKey, CreatedKey,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Create a SendGrid API key carrying the mail send scopes and print it to stdout.
///
/// The admin credential used to authorize the request is read from SENDGRID_API_KEY.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        help = "Display name for the new API key. Use `--` before names that look like an option."
    )]
    name: String,
    #[arg(
        short = 'e',
        long,
        help = "API host to create the key on. Defaults to the SendGrid production API."
    )]
    endpoint: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // clap exits with 2 on usage errors; every failure here is 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args).await {
        Ok(created) => print_key(&mut io::stdout(), &created.api_key),
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<CreatedKey> {
    let admin_key = ApiKey::from_env(ADMIN_KEY_ENV_VAR)?;
    let http = default_http_client().context("unable to build the HTTP client")?;
    let endpoint = args.endpoint.as_deref().filter(|host| !host.is_empty());
    debug!(name = %args.name, ?endpoint, "creating API key");
    let created = CreatedKey::create_custom(&args.name, &admin_key, &http, endpoint).await?;
    Ok(created)
}

/// The key is the only thing ever written to stdout.
fn print_key<W: Write>(out: &mut W, key: &ApiKey) -> ExitCode {
    match writeln!(out, "{}", key.get()).and_then(|_| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: unable to write the API key to stdout: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    let Some(err) = err.downcast_ref::<CreateError>() else {
        eprintln!("error: {:#}", err);
        return;
    };
    eprintln!("error: {}", err);
    if let Some(status) = err.status() {
        eprintln!("response status code: {}", status.as_u16());
    }
    if let Some(body) = err.response_body() {
        eprintln!("response body: {}", body);
    }
    for message in err.provider_messages() {
        eprintln!("provider error: {}", message);
    }
}
