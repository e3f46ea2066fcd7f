// ==========================================
// 风电场运维决策支持系统 - 数据异常记录
// ==========================================
// 依据: Engine_Specs_v0.2.md - 9. 数据完整性异常
// 红线: 可解释性 - 每条异常必须携带定位信息与 reason
// ==========================================

use crate::domain::types::AnomalyKind;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DataAnomaly - 数据完整性异常
// ==========================================
// 用途: 导入层/健康度引擎上报的记录级异常
// 策略: 异常不终止整批计算,受影响部件按文档化默认值回退
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAnomaly {
    pub asset_id: String,              // 所属资产ID
    pub serial_number: Option<String>, // 部件序列号(资产级异常为 None)
    pub kind: AnomalyKind,             // 异常类别
    pub reason: String,                // 异常原因(可解释性)
}

impl DataAnomaly {
    /// 构造部件级异常
    pub fn component(
        asset_id: impl Into<String>,
        serial_number: impl Into<String>,
        kind: AnomalyKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            serial_number: Some(serial_number.into()),
            kind,
            reason: reason.into(),
        }
    }

    /// 构造资产级异常
    pub fn asset(asset_id: impl Into<String>, kind: AnomalyKind, reason: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            serial_number: None,
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DataAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.serial_number {
            Some(sn) => write!(
                f,
                "[{}] asset={} component={}: {}",
                self.kind, self.asset_id, sn, self.reason
            ),
            None => write!(f, "[{}] asset={}: {}", self.kind, self.asset_id, self.reason),
        }
    }
}
