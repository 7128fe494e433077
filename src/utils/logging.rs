/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::utils::format::digits_only;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 签名表单 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🗄️  数据库: {}", config.supabase_url);
    info!("📮 Webhook: {}", config.webhook_url);
    info!("{}", "=".repeat(60));
}

/// 遮盖 CPF，只保留最后两位，用于日志输出
pub fn mask_tax_id(tax_id: &str) -> String {
    let digits = digits_only(tax_id);
    if digits.len() <= 2 {
        return "*".repeat(digits.len());
    }
    let visible = &digits[digits.len() - 2..];
    format!("{}{}", "*".repeat(digits.len() - 2), visible)
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
