use std::{
    io,
    process::ExitCode,
    sync::{Arc, OnceLock},
};

use application::{
    args::Command,
    cli::{self, Visit},
    AsError as _, Args, Config, Service,
};
use service::{
    domain::customer::Customer,
    infra::{api::StaticToken, Rest},
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, command } =
        Args::parse().unwrap_or_else(|e| e.exit());

    let Config { api, booking, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {}", e.as_error());
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let rest = Rest::new(
        (&api).into(),
        Arc::new(StaticToken::new(api.token.clone())),
    )
    .map_err(|e| {
        log::error!("failed to initialize `Rest` client: {e}");
    })?;
    let service = Service::new(rest);

    match command {
        Command::Slots { mode } => {
            for label in cli::slots(mode.unwrap_or(booking.display_mode)) {
                println!("{label}");
            }
        }
        Command::Interests { customer } => {
            let interests =
                cli::interests(&service, customer).await.map_err(|e| {
                    log::error!("failed to load interests: {e}");
                })?;
            if interests.is_empty() {
                println!("No properties");
            }
            for interest in &interests {
                println!("{}", cli::row(interest));
            }
        }
        Command::Schedule {
            customer,
            customer_status,
            employee,
            date,
            time,
            property,
        } => {
            let notification = cli::schedule(
                &service,
                booking.into(),
                Visit {
                    customer: Customer {
                        id: customer,
                        status: customer_status,
                    },
                    employee_id: employee,
                    date,
                    time,
                    property_id: property,
                },
            )
            .await
            .map_err(|e| {
                log::error!("failed to schedule visit: {e}");
            })?;
            println!("{notification}");
        }
    }
    Ok(())
}
