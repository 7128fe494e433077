use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 学生查询错误
    #[error("查询错误: {0}")]
    Lookup(#[from] LookupError),
    /// Webhook 提交错误
    #[error("提交错误: {0}")]
    Submit(#[from] SubmitError),
    /// 向导状态错误
    #[error("流程错误: {0}")]
    Wizard(#[from] WizardError),
    /// 附件错误
    #[error("附件错误: {0}")]
    Attachment(#[from] AttachmentError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 表单中可能校验失败的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SignerName,
    Email,
    Phone,
    StudentCode,
    StudentName,
    TaxId,
    Document,
}

impl FormField {
    /// 表单上显示的字段名
    pub fn label(self) -> &'static str {
        match self {
            FormField::SignerName => "Nome do Signatário",
            FormField::Email => "Email",
            FormField::Phone => "WhatsApp",
            FormField::StudentCode => "Código do Aluno",
            FormField::StudentName => "Nome do Aluno",
            FormField::TaxId => "CPF do Responsável",
            FormField::Document => "Arquivo",
        }
    }
}

/// 表单校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} 无效: {reason}", .field.label())]
pub struct ValidationError {
    pub field: FormField,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: FormField, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// 学生查询错误
#[derive(Debug, Error)]
pub enum LookupError {
    /// 输入的学生代码为空或不是整数
    #[error("学生代码无效: '{input}'")]
    InvalidKey { input: String },
    /// 主表中没有该学生
    #[error("未找到学生代码 {code}")]
    NotFound { code: i64 },
    /// 数据库不可达或查询失败
    #[error("查询 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Webhook 提交错误
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 网络请求失败
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Webhook 返回非 2xx 状态码
    #[error("Webhook 返回状态码 {status}")]
    Rejected { status: u16 },
}

/// 向导状态转换错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("当前状态 {state} 不允许操作 {action}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
    #[error("新生流程不能返回搜索步骤")]
    NotReEnrollment,
}

/// 附件错误
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("无法读取文件 {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    #[error("路径不是文件: {path}")]
    NotAFile { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件 {path} 解析失败: {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: &'static str,
    },
    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl LookupError {
    /// 创建查询传输错误
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LookupError::Transport {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 是否为"未找到"错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

impl SubmitError {
    /// 创建提交传输错误
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SubmitError::Transport {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
