//! 附件加载
//!
//! 文件类型和大小上限只做提示，不阻止上传

use crate::error::AttachmentError;
use crate::models::Attachment;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 表单建议的文件类型
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// 根据扩展名推断 MIME 类型
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// 读取文件作为附件
///
/// # 参数
/// - `path`: 文件路径
/// - `advisory_max_bytes`: 提示用的大小上限
pub async fn load_attachment(
    path: &Path,
    advisory_max_bytes: u64,
) -> Result<Attachment, AttachmentError> {
    let display = path.display().to_string();

    let metadata = fs::metadata(path)
        .await
        .map_err(|source| AttachmentError::ReadFailed {
            path: display.clone(),
            source,
        })?;
    if !metadata.is_file() {
        return Err(AttachmentError::NotAFile { path: display });
    }

    let bytes = fs::read(path)
        .await
        .map_err(|source| AttachmentError::ReadFailed {
            path: display.clone(),
            source,
        })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| display.clone());

    let is_accepted = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if !is_accepted {
        warn!("⚠️ 文件类型不是 PDF/DOC/DOCX: {}", file_name);
    }
    if bytes.len() as u64 > advisory_max_bytes {
        warn!(
            "⚠️ 文件 {} 大小 {} 字节，超过建议上限 {} 字节",
            file_name,
            bytes.len(),
            advisory_max_bytes
        );
    }

    info!("📎 已选择文件: {} ({} 字节)", file_name, bytes.len());

    Ok(Attachment {
        mime_type: mime_for(path).to_string(),
        file_name,
        bytes,
    })
}
