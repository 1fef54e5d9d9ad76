/**
* 文件名: basic_sync
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tracing-subscriber
* 描述: 上下文同步使用示例 / Context sync usage example
*
* 运行前设置 AGENTBAY_API_KEY，并传入会话ID、上下文ID与挂载路径：
*   cargo run -p agentbay-context --example basic_sync -- <session_id> [context_id path]
*/
use agentbay_context::{ClientConfig, ContextManager, ContextSyncConfig, SyncRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let session_id = args.next().ok_or("usage: basic_sync <session_id> [context_id path]")?;
    let request = match (args.next(), args.next()) {
        (Some(context_id), Some(path)) => SyncRequest::for_context(context_id, path),
        (None, None) => SyncRequest::new(),
        _ => return Err("context_id and path must be given together".into()),
    };

    // 创建管理器
    let config = ClientConfig::from_env()?;
    let manager = ContextManager::connect(&config, session_id)?
        .with_sync_config(ContextSyncConfig::new().with_max_retries(40));

    // 阻塞模式：等待所有任务结束
    let outcome = manager.sync(request.clone()).await?;
    println!(
        "Blocking sync finished: success={} request_id={}",
        outcome.success, outcome.request_id
    );
    if let Some(failure) = &outcome.failure {
        println!("Reason: {}", failure);
    }

    // 回调模式：立即返回，结果通过回调交付
    let (tx, rx) = tokio::sync::oneshot::channel();
    let accepted = manager
        .sync_with_callback(request, move |success| {
            let _ = tx.send(success);
        })
        .await?;
    println!("Callback sync accepted: {}", accepted.success);
    println!("Callback sync finished: success={}", rx.await?);

    // 查看当前会话的同步任务
    let info = manager.info().await?;
    for task in &info.context_status_data {
        println!(
            "{} {} {} -> {}",
            task.task_type, task.context_id, task.path, task.status
        );
    }

    Ok(())
}
