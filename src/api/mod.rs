// ==========================================
// GLP 储罐计算系统 - API 层
// ==========================================
// 职责: 对展示层提供计算入口, 负责输入校验与配置解析
// ==========================================

pub mod calculator_api;
pub mod error;
pub mod request;
pub mod validator;

pub use calculator_api::CalculatorApi;
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use request::CalculationRequest;
pub use validator::{RequestValidator, ValidationMode};
