// ==========================================
// GLP 储罐计算系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 将配置层错误转换为调用方可读的错误消息
// 说明: 引擎层不返回错误, 所有错误只来自配置与请求校验
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::LineId;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求校验错误
    // ==========================================
    /// 请求校验失败（带详细原因）
    #[error("请求校验失败: {reason}")]
    RequestValidation {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("储罐数量不匹配: 配置={expected}, 请求={actual}")]
    TankCountMismatch { expected: usize, actual: usize },

    #[error("未知格式: line={line}, name={name}")]
    UnknownFormat { line: LineId, name: String },

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigurationError(String),

    #[error("配置读取失败: {0}")]
    ConfigLoadError(String),
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(msg) => ApiError::ConfigurationError(msg),
            ConfigError::InvalidValue {
                key,
                value,
                message,
            } => ApiError::ConfigurationError(format!("{}={}: {}", key, value, message)),
            ConfigError::Io { path, source } => {
                ApiError::ConfigLoadError(format!("{}: {}", path, source))
            }
            ConfigError::Parse(e) => ApiError::ConfigLoadError(e.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// 违规类型（FILL_PCT_OUT_OF_RANGE / SPEED_OUT_OF_RANGE / ...）
    pub violation_type: String,
    /// 字段名
    pub field: String,
    /// 违规原因
    pub reason: String,
    /// 原始值
    pub value: Option<f64>,
    /// 是否可由 AutoFix 模式修正
    pub fixable: bool,
}
