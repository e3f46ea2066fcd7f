// ==========================================
// 风电场运维决策支持系统 - 引擎层
// ==========================================
// 依据: Wind_OM_Master_Spec.md - PART D 引擎体系
// 依据: Engine_Specs_v0.2.md - 1.2 模块拆分
// ==========================================
// 职责: 实现评估/成本/筛选/排路业务规则
// 红线: 引擎无状态、同步、确定性;所有异常必须输出 reason
// ==========================================

pub mod aggregator;
pub mod cost;
pub mod health;
pub mod matrix_builder;
pub mod route;
pub mod worthiness;

// 重导出核心引擎
pub use aggregator::AssetAggregator;
pub use cost::{
    CostModel, DEFAULT_COST_PER_DISTANCE_UNIT, DEFAULT_CREW_COST_PER_DAY,
    DEFAULT_VESSEL_COST_PER_DAY,
};
pub use health::{HealthEngine, HealthEvaluation};
pub use matrix_builder::CostMatrixBuilder;
pub use route::RouteOptimizer;
pub use worthiness::WorthinessFilter;
