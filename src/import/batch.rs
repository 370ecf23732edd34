//! まとめて発行し、全件の完了を待つバッチ実行

use crate::error::{Result, SeedError};
use std::future::Future;
use tokio::task::JoinSet;

/// 全要素のタスクを同時に発行し、全件の完了を待つ
///
/// 結果は入力順に並べ直して返す。どれか1件でも失敗した時点で残りを中断し、
/// そのエラーをバッチ全体の失敗として返す。
pub async fn fan_out<T, R, F, Fut>(items: Vec<T>, task: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R>> + Send + 'static,
{
    let mut set = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let fut = task(item);
        set.spawn(async move { fut.await.map(|value| (index, value)) });
    }

    let mut results = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        let (index, value) = joined.map_err(|e| SeedError::Task(e.to_string()))??;
        results.push((index, value));
    }

    results.sort_by_key(|(index, _)| *index);
    Ok(results.into_iter().map(|(_, value)| value).collect())
}
