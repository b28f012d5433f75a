use storefront_dashboard::{DashboardConfig, run};

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env()?;
    storefront_observability::init_with(config.log_format);

    tracing::info!(
        orders = %config.orders_path.display(),
        products = %config.products_path.display(),
        "building dashboard snapshot"
    );

    let output = run(&config)?;
    println!("{output}");
    Ok(())
}
