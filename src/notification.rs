//! 用户提示
//!
//! 把结果和错误转换成一次性的提示消息

use crate::error::{AppError, LookupError, SubmitError};
use std::fmt::Display;

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// 一次性提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }

    /// 提交成功
    pub fn submitted() -> Self {
        Self::success(
            "Sucesso!",
            "Formulário enviado com sucesso para processamento.",
        )
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(e) => Notice::destructive("Erro de validação", e.reason),
            AppError::Lookup(LookupError::InvalidKey { .. }) => {
                Notice::destructive("Erro", "Digite o código do aluno")
            }
            AppError::Lookup(LookupError::NotFound { .. }) => Notice::destructive(
                "Aluno não encontrado",
                "Código do aluno não encontrado no sistema",
            ),
            AppError::Lookup(LookupError::Transport { .. }) => {
                Notice::destructive("Erro", "Erro ao buscar dados do aluno")
            }
            AppError::Submit(SubmitError::Transport { .. } | SubmitError::Rejected { .. }) => {
                Notice::destructive("Erro", "Falha ao enviar o formulário. Tente novamente.")
            }
            AppError::Attachment(e) => Notice::destructive("Erro no arquivo", e.to_string()),
            AppError::Wizard(e) => Notice::destructive("Erro", e.to_string()),
            AppError::Config(e) => Notice::destructive("Erro de configuração", e.to_string()),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Destructive => "❌",
        };
        write!(f, "{} {}: {}", icon, self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormField, ValidationError};

    #[test]
    fn test_not_found_notice() {
        let notice = Notice::from(&AppError::from(LookupError::NotFound { code: 1 }));
        assert_eq!(notice.title, "Aluno não encontrado");
        assert_eq!(notice.kind, NoticeKind::Destructive);
    }

    #[test]
    fn test_validation_notice_uses_reason() {
        let err = AppError::from(ValidationError::new(FormField::Email, "Email válido é obrigatório"));
        let notice = Notice::from(&err);
        assert_eq!(notice.to_string(), "❌ Erro de validação: Email válido é obrigatório");
    }

    #[test]
    fn test_rejected_submit_notice() {
        let notice = Notice::from(&AppError::from(SubmitError::Rejected { status: 500 }));
        assert_eq!(notice.description, "Falha ao enviar o formulário. Tente novamente.");
    }
}
