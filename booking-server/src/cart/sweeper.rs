//! Idle cart sweeper
//!
//! 定时回收空闲购物车的后台任务，随服务器关闭信号退出。

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::CartStore;

/// Run the sweep loop until the token is cancelled
pub async fn run_sweeper(store: Arc<CartStore>, interval: Duration, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(interval);
    // 第一次 tick 立即返回，跳过它避免启动时空扫
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let dropped = store.sweep_idle();
                if dropped > 0 {
                    tracing::debug!(dropped, "Swept idle carts");
                }
            }
            _ = shutdown.cancelled() => {
                tracing::debug!("Cart sweeper shutting down");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::CartLine;

    #[tokio::test]
    async fn test_sweeper_stops_on_cancel() {
        let store = Arc::new(CartStore::new(Duration::ZERO));
        store.add_line(
            "profile:a",
            CartLine {
                menu_item: "menu_item:burger".to_string(),
                name: "burger".to_string(),
                price: Decimal::new(15_99, 2),
            },
        );

        let token = CancellationToken::new();
        let handle = tokio::spawn(run_sweeper(
            store.clone(),
            Duration::from_millis(5),
            token.clone(),
        ));

        // Give the sweeper a couple of ticks
        tokio::time::sleep(Duration::from_millis(30)).await;
        token.cancel();
        handle.await.unwrap();

        assert!(store.is_empty());
    }
}
