//! インスタンスモード判定と本文の差し替え

/// 数字を除いたプロジェクト名がこれと一致すればインスタンスコンテナ
const INSTANCE_CONTAINER_NAME: &str = "Instance Mode: Instance Container ";

/// ブロックコメント終端（この後ろがHTML本体）
const COMMENT_END: &str = "*/";

const HTML_END: &str = "</html>";

/// 差し替え対象の汎用ランタイム参照
const GENERIC_RUNTIME: &str = "p5.js";

/// 分割後に見る区間の上限
const MAX_SEGMENTS: usize = 4;

/// スケッチの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchVariant {
    Normal,
    /// 本体が index.html 側にあるスケッチ
    InstanceContainer,
}

impl SketchVariant {
    /// プロジェクト名から種類を判定
    pub fn of(project_name: &str) -> Self {
        let stripped: String = project_name
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect();

        if stripped == INSTANCE_CONTAINER_NAME {
            SketchVariant::InstanceContainer
        } else {
            SketchVariant::Normal
        }
    }
}

/// インスタンスコンテナの本文を index.html 用に組み替える
///
/// `*/` の後ろを `</html>` で分割し、先頭から最大4区間のうち最後の区間だけを残す。
/// 残した区間に `</html>\n` を付け直し、最初の `p5.js` をホスト済みスクリプトに置換する。
pub fn remap_instance_container(raw: &str, runtime_script_url: &str) -> String {
    let body = html_body(raw).unwrap_or_else(|| {
        tracing::warn!("no `{COMMENT_END}` in instance container source, using the whole text");
        raw
    });

    let last = body.split(HTML_END).take(MAX_SEGMENTS).last().unwrap_or_default();
    let content = format!("{last}{HTML_END}\n");

    content.replacen(GENERIC_RUNTIME, runtime_script_url, 1)
}

/// 先頭のブロックコメントより後ろ
fn html_body(raw: &str) -> Option<&str> {
    raw.split(COMMENT_END).nth(1)
}
