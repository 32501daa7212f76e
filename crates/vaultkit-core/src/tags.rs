use std::collections::HashMap;

/// The built-in rename/delete rules. `Some(canonical)` rewrites the tag,
/// `None` drops it. Lookup is exact-string after trimming, so every
/// spelling variant needs its own row.
const BUILTIN_RULES: &[(&str, Option<&str>)] = &[
    // AI umbrella tags, folded into "AI" or a compound canonical form
    ("生成AI", Some("AI")),
    ("AI活用", Some("AI")),
    ("AI 活用", Some("AI")),
    ("AI 導入", Some("AI導入")),
    ("AI 研究", Some("AI研究")),
    ("AI 規制", Some("AI規制")),
    ("AI 設計", Some("AI設計")),
    ("AI 評価", Some("AI評価")),
    ("AI 開発", Some("AI開発")),
    ("AI ツール", Some("AIツール")),
    ("AI モデル", Some("AIモデル")),
    ("AI 収 益 性", Some("AI収益性")),
    ("AI 基本法", Some("AI規制")),
    ("AI 安全性", Some("AIセキュリティ")),
    ("AI ロボット", Some("AIロボット")),
    ("AI 字幕翻訳", Some("AI翻訳")),
    ("AI エンジニア", Some("AIエンジニア")),
    ("AI アシスタント", Some("AIアシスタント")),
    ("AI エージェント", Some("AIエージェント")),
    ("AI セキュリティ", Some("AIセキュリティ")),
    ("AI 旅行エージェント", Some("AIエージェント")),
    ("AI ペアプログラミング", Some("AIコーディング")),
    // LLM variants
    ("大規模言語モデル", Some("LLM")),
    ("言語モデル", Some("LLM")),
    ("Recursive Language Models", Some("LLM")),
    ("MobileLLM-Pro", Some("LLM")),
    ("dLLM", Some("LLM")),
    // Agent variants, folded into "AIエージェント"
    ("エージェント", Some("AIエージェント")),
    ("マルチエージェント", Some("AIエージェント")),
    ("自律型エージェント", Some("AIエージェント")),
    ("汎用AIエージェント", Some("AIエージェント")),
    ("Agent Skills", Some("AIエージェント")),
    ("AgentKit", Some("AIエージェント")),
    ("AgentsSDK", Some("AIエージェント")),
    ("the-agent", Some("AIエージェント")),
    ("Terminal agent", Some("AIエージェント")),
    ("ClaudeAgent", Some("Claude")),
    // Knowledge graph variants
    ("知識グラフ", Some("KnowledgeGraph")),
    ("Knowledge Graph", Some("KnowledgeGraph")),
    ("ContextGraph", Some("KnowledgeGraph")),
    ("PropertyGraph", Some("KnowledgeGraph")),
    ("GraphDatabase", Some("KnowledgeGraph")),
    ("GraphQA", Some("KnowledgeGraph")),
    ("Graph探索", Some("KnowledgeGraph")),
    ("グラフ探索", Some("KnowledgeGraph")),
    ("グラフアルゴリズム", Some("KnowledgeGraph")),
    // Automation variants
    ("Automation", Some("自動化")),
    ("ワークフロー", Some("自動化")),
    ("Workflow", Some("自動化")),
    ("業務効率化", Some("自動化")),
    ("業務改善", Some("自動化")),
    ("効率化", Some("自動化")),
    // Prompting
    ("プロンプト設計", Some("プロンプト")),
    ("プロンプト最適化", Some("プロンプト")),
    ("プロンプトインジェクション", Some("AIセキュリティ")),
    ("システムプロンプト", Some("プロンプト")),
    // OCR variants
    ("LightOnOCR", Some("OCR")),
    ("DeepSeek-OCR", Some("OCR")),
    ("高精度OCR", Some("OCR")),
    // Document processing
    ("Document AI", Some("ドキュメント処理")),
    ("DocumentParsing", Some("ドキュメント処理")),
    ("Agentic Document Extraction", Some("ドキュメント処理")),
    ("ドキュメント管理", Some("ドキュメント処理")),
    ("ドキュメント作成", Some("ドキュメント処理")),
    ("テキスト抽出", Some("ドキュメント処理")),
    ("データ抽出", Some("ドキュメント処理")),
    ("PDF検索", Some("PDF")),
    ("PDF変換", Some("PDF")),
    ("PDF編集", Some("PDF")),
    // Vendor and model-name normalization
    ("NVidia", Some("NVIDIA")),
    ("openai", Some("OpenAI")),
    ("anthropic", Some("Anthropic")),
    ("ClaudeCode", Some("Claude")),
    ("Claude Code", Some("Claude")),
    ("ClaudeCowork", Some("Claude")),
    ("OpenClaudeCowork", Some("Claude")),
    ("ClawdBot", Some("Claude")),
    ("Opus4.5", Some("Claude")),
    ("Gemini CLI", Some("Gemini")),
    ("Gemini Flash", Some("Gemini")),
    ("GPT-5", Some("OpenAI")),
    ("GPT-5.2", Some("OpenAI")),
    ("GPT-4", Some("OpenAI")),
    ("o3-mini", Some("OpenAI")),
    ("ChatGPT", Some("OpenAI")),
    ("Llama4", Some("Llama")),
    ("LlamaParse", Some("Llama")),
    ("Qwenモデル", Some("Qwen")),
    ("GLM-4.7", Some("GLM")),
    ("glm-4.7", Some("GLM")),
    // Dev tooling
    ("オープンソース", Some("OpenSource")),
    ("開発環境", Some("開発")),
    ("開発ツール", Some("開発")),
    ("開発ガイドライン", Some("開発")),
    ("コード実行", Some("開発")),
    ("CI/CD", Some("DevOps")),
    ("デプロイ", Some("DevOps")),
    ("コンテナ", Some("DevOps")),
    // n8n release tags
    ("n8n 2.0", Some("n8n")),
    ("n8n-2.0", Some("n8n")),
    // Noise tags, dropped entirely
    ("記事", None),
    ("リンク", None),
    ("リンク共有", None),
    ("情報提供", None),
    ("情報共有", None),
    ("不明", None),
    ("記事紹介", None),
    ("最新情報", None),
    ("x-post", None),
    ("summarized", None),
    ("話題", None),
    // Business
    ("マーケティング", Some("ビジネス")),
    ("コンテンツマーケティング", Some("ビジネス")),
    ("ビジネス戦略", Some("ビジネス")),
    ("ビジネスモデル", Some("ビジネス")),
    ("ビジネス自動化", Some("ビジネス")),
    ("企業業務", Some("ビジネス")),
    // Learning material
    ("無料講座", Some("学習")),
    ("学習動画", Some("学習")),
    ("マスタークラス", Some("学習")),
    ("図解", Some("学習")),
    ("技術解説", Some("学習")),
    ("ベストプラクティス", Some("学習")),
];

/// Immutable tag rename/delete table.
///
/// Built once at startup and never mutated. A key mapped to `Some(r)`
/// rewrites the tag to `r`, a key mapped to `None` removes it, and a tag
/// absent from the table passes through unchanged (aside from trimming).
pub struct NormalizationTable {
    rules: HashMap<String, Option<String>>,
}

impl NormalizationTable {
    /// The table shipped with the tool.
    pub fn builtin() -> Self {
        Self::from_rules(
            BUILTIN_RULES
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string))),
        )
    }

    pub fn from_rules(rules: impl IntoIterator<Item = (String, Option<String>)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Normalize a single tag.
    ///
    /// Trims surrounding whitespace, then looks the result up verbatim.
    /// Returns `None` when the tag is marked for deletion. No fuzzy or
    /// substring matching.
    pub fn normalize<'a>(&'a self, raw: &'a str) -> Option<&'a str> {
        let tag = raw.trim();
        match self.rules.get(tag) {
            Some(Some(replacement)) => Some(replacement.as_str()),
            Some(None) => None,
            None => Some(tag),
        }
    }

    /// Normalize a tag list: map every tag, drop deletions, and
    /// deduplicate keeping the first occurrence of each result.
    pub fn normalize_list(&self, tags: &[String]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if let Some(normalized) = self.normalize(tag) {
                // Tag lists are a handful of entries; linear dedup is fine.
                if !out.iter().any(|t| t == normalized) {
                    out.push(normalized.to_string());
                }
            }
        }
        out
    }
}
