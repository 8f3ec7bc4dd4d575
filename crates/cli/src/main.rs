use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tadawul_core::domain::filter::Filter;
use tadawul_core::loader::http::HttpRecommendationSource;
use tadawul_core::render::terminal;
use tadawul_core::runtime::Dashboard;
use tadawul_core::state::{Outcome, Phase};

#[derive(Debug, Parser)]
#[command(name = "tadawul_cli")]
struct Args {
    /// Which recommendations to show: all, buy or sell.
    #[arg(long, default_value = "all")]
    filter: Filter,

    /// Keep refreshing on the configured interval until Ctrl-C.
    #[arg(long)]
    watch: bool,

    /// Override RECOMMENDATIONS_API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = tadawul_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(base_url) = args.base_url {
        settings.api_base_url = base_url;
    }

    let source = HttpRecommendationSource::from_settings(&settings)?;
    let dashboard = Dashboard::new(Arc::new(source));
    dashboard.select_filter(args.filter).await;

    if !args.watch {
        dashboard.refresh().await;
        let (screen, phase) = dashboard
            .read(|s| (terminal::screen_text(s), s.phase()))
            .await;
        print!("{screen}");
        if phase == Phase::Error {
            let err = anyhow::anyhow!("recommendations fetch failed");
            sentry_anyhow::capture_anyhow(&err);
            return Err(err);
        }
        return Ok(());
    }

    let mut ticker = tokio::time::interval(settings.refresh_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let dashboard = dashboard.clone();
                tokio::spawn(async move {
                    if dashboard.refresh().await == Outcome::Applied {
                        let screen = dashboard.read(terminal::screen_text).await;
                        println!("{screen}");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("stopping watch");
                return Ok(());
            }
        }
    }
}

fn init_sentry(settings: &tadawul_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
