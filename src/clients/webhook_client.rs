/// 签名 Webhook 客户端
///
/// 以 multipart 表单一次性提交签名人信息和文档
use super::SubmissionSink;
use crate::config::Config;
use crate::error::{ConfigError, FormField, SubmitError, ValidationError};
use crate::models::{Attachment, SubmissionRecord};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// Webhook 表单内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    /// 文本字段，按提交顺序排列
    pub fields: Vec<(&'static str, String)>,
    pub document: Attachment,
}

impl WebhookPayload {
    /// 从提交记录构建表单，可选字段为空时不发送
    pub fn from_record(record: &SubmissionRecord) -> Result<Self, ValidationError> {
        let document = record
            .document
            .clone()
            .ok_or_else(|| ValidationError::new(FormField::Document, "Arquivo é obrigatório"))?;

        let mut fields = vec![
            ("nome", record.signer_name.trim().to_string()),
            ("email", record.email.trim().to_string()),
            ("whatsapp", record.phone.clone()),
        ];

        let optional = [
            ("codigoAluno", &record.student_code),
            ("nomeAluno", &record.student_name),
            ("cpfResponsavel", &record.guardian_tax_id),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                fields.push((name, value.trim().to_string()));
            }
        }

        Ok(Self { fields, document })
    }

    /// 查找文本字段
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        let part = Part::bytes(self.document.bytes)
            .file_name(self.document.file_name)
            .mime_str(&self.document.mime_type)?;

        Ok(form.part("arquivo", part))
    }
}

/// Webhook 客户端
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// 创建新的 Webhook 客户端
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            url: config.webhook_url.clone(),
        })
    }
}

#[async_trait]
impl SubmissionSink for WebhookClient {
    async fn submit(&self, payload: &WebhookPayload) -> Result<(), SubmitError> {
        debug!(
            "提交 Webhook: {} ({} 个字段, 附件 {} 字节)",
            self.url,
            payload.fields.len(),
            payload.document.size()
        );

        let form = payload
            .clone()
            .into_form()
            .map_err(|e| SubmitError::transport(&self.url, e))?;

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::transport(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        info!("✓ Webhook 返回 {}", status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SubmissionRecord {
        SubmissionRecord {
            signer_name: " Maria ".to_string(),
            email: "maria@x.com".to_string(),
            phone: "+55 (11) 98888-7777".to_string(),
            student_code: Some("500".to_string()),
            student_name: Some(String::new()),
            guardian_tax_id: None,
            document: Some(Attachment {
                file_name: "contrato.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                bytes: b"%PDF-1.4".to_vec(),
            }),
        }
    }

    #[test]
    fn test_payload_fields() {
        let payload = WebhookPayload::from_record(&sample_record()).unwrap();

        assert_eq!(payload.field("nome"), Some("Maria"));
        assert_eq!(payload.field("whatsapp"), Some("+55 (11) 98888-7777"));
        assert_eq!(payload.field("codigoAluno"), Some("500"));
        // 空值或缺失的可选字段不发送
        assert_eq!(payload.field("nomeAluno"), None);
        assert_eq!(payload.field("cpfResponsavel"), None);
        assert_eq!(payload.document.file_name, "contrato.pdf");
    }

    #[test]
    fn test_payload_requires_document() {
        let mut record = sample_record();
        record.document = None;

        let err = WebhookPayload::from_record(&record).unwrap_err();
        assert_eq!(err.field, FormField::Document);
    }

    #[test]
    fn test_payload_into_form() {
        let payload = WebhookPayload::from_record(&sample_record()).unwrap();
        assert!(payload.into_form().is_ok());
    }
}
