//! FibForge CLI - Main entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fibforge_core::compute_checked;

/// 계산할 항의 인덱스 (소스 프로그램과 동일하게 고정)
const TARGET_INDEX: u64 = 10;

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr only; stdout은 결과 전용)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let value = compute_checked(TARGET_INDEX)?;
    tracing::debug!(index = TARGET_INDEX, value, "sequence term ready");

    println!("{value}");
    Ok(())
}
