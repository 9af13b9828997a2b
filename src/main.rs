use sloneek::{
    commands::Cli,
    libs::{
        error::{exit_report, FAILURE_EXIT_CODE},
        messages::{macros::is_debug_mode, Message},
    },
    msg_error,
};
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sloneek=debug")))
            .with_target(false)
            .init();
    }

    // Ctrl-C outside of a prompt; inside one dialoguer reports it as an
    // interrupted read which surfaces as an error below.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            msg_error!(Message::ActionAborted, true);
            process::exit(FAILURE_EXIT_CODE);
        }
    });

    if let Err(err) = Cli::menu().await {
        let (message, code) = exit_report(&err);
        msg_error!(message, true);
        process::exit(code);
    }
}
