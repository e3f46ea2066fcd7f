// ==========================================
// 风电场运维决策支持系统 - 配置层
// ==========================================
// 依据: Engine_Specs_v0.2.md - 10. 配置项全集
// ==========================================
// 职责: 评估会话可调参数管理
// 形态: 显式强类型结构,不走键值存储
// ==========================================

pub mod session_config;

// 重导出核心配置类型
pub use session_config::{ConfigError, SessionConfig};
