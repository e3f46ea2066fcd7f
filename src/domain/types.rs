// ==========================================
// 风电场运维决策支持系统 - 领域类型定义
// ==========================================
// 依据: Wind_OM_Master_Spec.md - PART A2 红线
// 依据: Engine_Specs_v0.2.md - 0.2 部件关键度体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 部件关键度 (Criticality Tier)
// ==========================================
// 红线: 关键度是"等级制",不参与成本曲线标定
// 用途: 报表分层展示,不影响优先级评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriticalityTier {
    Critical,  // 关键部件(失效即停机)
    Important, // 重要部件(失效降功率)
    Routine,   // 常规部件
}

impl fmt::Display for CriticalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalityTier::Critical => write!(f, "CRITICAL"),
            CriticalityTier::Important => write!(f, "IMPORTANT"),
            CriticalityTier::Routine => write!(f, "ROUTINE"),
        }
    }
}

impl CriticalityTier {
    /// 从源字段解析关键度(导入层使用)
    ///
    /// 未识别的取值返回 None,由调用方记录异常并回退 ROUTINE
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Some(CriticalityTier::Critical),
            "IMPORTANT" => Some(CriticalityTier::Important),
            "ROUTINE" => Some(CriticalityTier::Routine),
            _ => None,
        }
    }
}

// ==========================================
// 会话状态 (Session State)
// ==========================================
// 依据: Engine_Specs_v0.2.md - 1.3 评估会话状态机
// 顺序: Unscored < Scored < Filtered < Routed
// 红线: 任何配置变更/资产变更必须回退到 UNSCORED,
//       陈旧的下游结果不得对外提供
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Unscored, // 未评分(初始/已失效)
    Scored,   // 已评分(优先级已计算)
    Filtered, // 已筛选(值得检修集合已确定)
    Routed,   // 已排路(巡检顺序已生成)
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unscored => write!(f, "UNSCORED"),
            SessionState::Scored => write!(f, "SCORED"),
            SessionState::Filtered => write!(f, "FILTERED"),
            SessionState::Routed => write!(f, "ROUTED"),
        }
    }
}

// ==========================================
// 异常类别 (Anomaly Kind)
// ==========================================
// 依据: Engine_Specs_v0.2.md - 9. 数据完整性异常
// 红线: 异常必须上报,不得静默吞掉;单条坏记录不得阻断整批计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyKind {
    MissingInstallDate,  // 安装日期缺失(回退为全额剩余寿命)
    MalformedField,      // 字段无法解析(记录被跳过或回退默认)
    ValueOutOfRange,     // 数值超出允许范围(已钳制)
    NonPositiveLifetime, // 额定寿命非正(健康度按 0 处理)
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::MissingInstallDate => write!(f, "MISSING_INSTALL_DATE"),
            AnomalyKind::MalformedField => write!(f, "MALFORMED_FIELD"),
            AnomalyKind::ValueOutOfRange => write!(f, "VALUE_OUT_OF_RANGE"),
            AnomalyKind::NonPositiveLifetime => write!(f, "NON_POSITIVE_LIFETIME"),
        }
    }
}
