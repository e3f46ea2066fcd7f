// ==========================================
// 风电场运维决策支持系统 - API层错误类型
// ==========================================
// 职责: 定义对外接口错误,转换配置/导入层错误
// 红线: 可解释性 - 所有错误信息必须包含显式原因
// 红线: 陈旧结果不得对外 - 状态机越级调用是错误,不是降级
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::SessionState;
use crate::importer::ImportError;
use thiserror::Error;

/// API层结果别名
pub type ApiResult<T> = Result<T, ApiError>;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 会话状态机错误
    // ==========================================
    /// 越级调用: 例如未评分就筛选、未筛选就排路
    #[error("会话状态非法: 需要 {expected} 及之后,当前 {actual}")]
    InvalidSessionState {
        expected: SessionState,
        actual: SessionState,
    },

    /// 资产汇总未重算
    #[error("资产汇总未重算: 必须先执行 recompute_all")]
    TotalsNotCurrent,

    /// 成本矩阵缺失
    #[error("成本矩阵缺失: 必须先执行 rebuild_cost_matrix")]
    CostMatrixMissing,

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("资产未找到: {0}")]
    AssetNotFound(String),

    // ==========================================
    // 分层错误转换
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导入错误: {0}")]
    Import(#[from] ImportError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
