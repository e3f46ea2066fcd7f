// ==========================================
// 风电场运维决策支持系统 - 领域模型层
// ==========================================
// 依据: Wind_OM_Master_Spec.md - PART C 数据与状态体系
// 依据: Engine_Specs_v0.2.md - 主实体定义
// ==========================================
// 职责: 定义领域实体、类型、业务不变量
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod anomaly;
pub mod asset;
pub mod component;
pub mod matrix;
pub mod types;

// 重导出核心类型
pub use anomaly::DataAnomaly;
pub use asset::{Asset, PowerContext};
pub use component::Component;
pub use matrix::CostMatrix;
pub use types::{AnomalyKind, CriticalityTier, SessionState};
