use anyhow::Context as _;

use stockwise_app::{AppConfig, DashboardContext};
use stockwise_auth::Credentials;
use stockwise_core::CancelToken;

/// Demo run: sign in, print the overview, forecast the most depleted component.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading STOCKWISE_* configuration")?;
    stockwise_observability::init_with(config.log_format);

    if std::env::var("STOCKWISE_DEMO_EMAIL").is_err() {
        tracing::warn!(email = %config.demo_email, "STOCKWISE_DEMO_EMAIL not set; using demo default");
    }

    let cancel = CancelToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received; cancelling");
                cancel.cancel();
            }
        }
    });

    let mut ctx = DashboardContext::from_config(&config);
    let credentials = Credentials::new(config.demo_email.clone(), config.demo_password.clone());

    if let Err(err) = ctx.login(credentials, &cancel).await {
        let notice = err.notice();
        tracing::error!(title = %notice.title, description = %notice.description, "sign-in failed");
        return Ok(());
    }

    let snapshot = ctx.inventory()?;
    println!("{}", serde_json::to_string_pretty(&snapshot.dashboard_metrics())?);
    println!("{}", serde_json::to_string_pretty(&snapshot.supplier_metrics())?);
    println!("{}", serde_json::to_string_pretty(&snapshot.notification_feed())?);

    let target = snapshot
        .reorder_candidates()
        .first()
        .copied()
        .or_else(|| snapshot.components().first());
    let Some(component) = target else {
        tracing::info!("no components to forecast");
        return Ok(());
    };

    match ctx.forecast(component.id, &cancel).await {
        Ok(reply) => {
            if let Some(summary) = reply.value.summary {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Err(err) => {
            let notice = err.notice();
            tracing::warn!(title = %notice.title, description = %notice.description, "forecast not produced");
        }
    }

    ctx.logout().await?;
    Ok(())
}
