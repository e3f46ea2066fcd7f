// ==========================================
// 风电场运维决策支持系统 - 部件领域模型
// ==========================================
// 依据: Wind_OM_Master_Spec.md - PART C 数据与状态体系
// 依据: Engine_Specs_v0.2.md - 主实体定义
// 依据: Field_Mapping_Spec_v0.2.md - 字段映射规范
// ==========================================

use crate::domain::types::CriticalityTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Component - 可磨损部件
// ==========================================
// 红线: 派生字段永远是(静态属性, 评估日期, 所属资产功率/电价上下文)
//       的纯函数,只能由引擎通过 recompute 写入,不得独立持久化
// 所有权: 部件由且仅由一个资产独占拥有,向上只保留非拥有型 ID 回链
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    // ===== 标识 =====
    pub serial_number: String,          // 序列号(资产内唯一)
    pub name: String,                   // 部件名称/类型(叶片/齿轮箱/主轴/机舱罩...)

    // ===== 静态属性(导入层写入,引擎层只读)=====
    pub lifetime_years: f64,            // 额定寿命(年)
    pub install_date: Option<NaiveDate>, // 安装日期(缺失=数据异常,回退全额寿命)
    pub replacement_cost: f64,          // 更换成本(货币)
    pub salvage_value: f64,             // 残值(货币)
    pub criticality: CriticalityTier,   // 关键度等级
    pub power_impact_factor: f64,       // 功率影响系数 [0,1](失效损失的出力占比)
    pub repair_hours: f64,              // 预计检修工时(小时)

    // ===== 回链(非拥有型关联)=====
    pub owner_asset_id: Option<String>, // 所属资产ID(attach 时写入)

    // ===== 派生字段(引擎写入)=====
    pub remaining_days: i64,            // 剩余寿命(天)
    pub health_score: f64,              // 健康度 [0,1]
    pub failure_probability: f64,       // 失效概率 [0,1] = 1 - 健康度²
    pub repair_cost: f64,               // 检修成本(货币)
    pub opportunity_cost: f64,          // 机会成本(货币,预期发电损失)
}

impl Component {
    /// 以静态属性构造部件,派生字段置零等待引擎重算
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        serial_number: impl Into<String>,
        name: impl Into<String>,
        lifetime_years: f64,
        install_date: Option<NaiveDate>,
        replacement_cost: f64,
        salvage_value: f64,
        criticality: CriticalityTier,
        power_impact_factor: f64,
        repair_hours: f64,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            name: name.into(),
            lifetime_years,
            install_date,
            replacement_cost,
            salvage_value,
            criticality,
            power_impact_factor,
            repair_hours,
            owner_asset_id: None,
            remaining_days: 0,
            health_score: 0.0,
            failure_probability: 0.0,
            repair_cost: 0.0,
            opportunity_cost: 0.0,
        }
    }

    /// 额定寿命折算为天数
    ///
    /// 口径: 1 年 = 365 天(与上游数据源一致,不做闰年修正)
    pub fn lifetime_days(&self) -> i64 {
        (self.lifetime_years * 365.0).round() as i64
    }
}
