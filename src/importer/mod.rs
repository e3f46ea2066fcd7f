// ==========================================
// 风电场运维决策支持系统 - 导入层
// ==========================================
// 依据: Field_Mapping_Spec_v0.2.md - 舰队记录列约定
// ==========================================
// 职责: 外部数据导入,生成内部实体
// 支持: CSV
// ==========================================

pub mod csv_loader;
pub mod error;

// 重导出核心类型
pub use csv_loader::{FleetCsvLoader, LoadResult};
pub use error::ImportError;

// TODO: 支持 Excel 导入(上游运维台账仍以 xlsx 下发)
