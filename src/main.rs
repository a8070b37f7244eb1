use anyhow::Context;
use story_spoilers::configuration::get_configuration;
use story_spoilers::suite::{SuiteContext, run_suite};
use story_spoilers::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("story-suite".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let context = SuiteContext::setup(&configuration)
        .await
        .context("Failed to obtain an access token.")?;

    tracing::info!("Running story suite against {}", context.client.base_url());
    let report = run_suite(&context).await;
    context.teardown();

    println!("{}", report);
    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} of {} steps failed", failed, report.steps.len());
    }
    Ok(())
}
