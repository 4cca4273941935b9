use actix_server::ServerHandle;
use actix_web::{App, HttpServer, web::Data};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use party_planner::{
    api,
    config::AppConfig,
    shell::Shell,
    transport::ReqwestTransport,
};
use party_planner_core::Event;
use std::io::Write;
use tokio::signal::unix::{SignalKind, signal};

type UiShell = Shell<ReqwestTransport>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize()?;

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let config = AppConfig::get();
    info!("using API at {}", config.api.root());

    let transport =
        ReqwestTransport::new(config.api.clone()).context("failed to create API transport")?;
    let shell = Data::new(UiShell::new(transport));

    // Startup loads events, guests and RSVPs before the first page is served
    shell.dispatch(Event::Initialize).await;

    let (server_handle, server_task) = run_server(shell)?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("ctrl-c received"),
        _ = sigterm.recv() => debug!("SIGTERM received"),
        result = server_task => match result {
            Ok(Ok(())) => debug!("server stopped normally"),
            Ok(Err(e)) => error!("server stopped with error: {e}"),
            Err(e) => error!("server task panicked: {e}"),
        },
    }

    info!("shutting down");
    server_handle.stop(true).await;

    Ok(())
}

fn initialize() -> Result<()> {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!(
        "module version: {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_SHORT_REV")
    );

    AppConfig::init().context("failed to load configuration")?;

    Ok(())
}

fn run_server(
    shell: Data<UiShell>,
) -> Result<(
    ServerHandle,
    tokio::task::JoinHandle<Result<(), std::io::Error>>,
)> {
    let ui = &AppConfig::get().ui;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(shell.clone())
            .configure(api::routes::<ReqwestTransport>)
    })
    .bind((ui.bind_addr.as_str(), ui.port))
    .with_context(|| format!("failed to bind server to {}:{}", ui.bind_addr, ui.port))?
    .disable_signals()
    .run();

    info!("serving on http://{}:{}", ui.bind_addr, ui.port);

    Ok((server.handle(), tokio::spawn(server)))
}
