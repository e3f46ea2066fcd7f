// ==========================================
// 风电场运维决策支持系统 - 核心库
// ==========================================
// 依据: Wind_OM_Master_Spec.md - 系统宪法
// 技术栈: Rust (同步单线程核心,无后台计算)
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 会话配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 对外操作面
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AnomalyKind, CriticalityTier, SessionState};

// 领域实体
pub use domain::{Asset, Component, CostMatrix, DataAnomaly, PowerContext};

// 引擎
pub use engine::{
    AssetAggregator, CostMatrixBuilder, CostModel, HealthEngine, HealthEvaluation,
    RouteOptimizer, WorthinessFilter,
};

// 配置
pub use config::{ConfigError, SessionConfig};

// API
pub use api::{AnalysisResult, ApiError, ApiResult, EvaluationSession, EvaluationSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "风电场运维决策支持系统";

// ==========================================
// 预编译检查
// ==========================================
