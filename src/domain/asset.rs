// ==========================================
// 风电场运维决策支持系统 - 资产领域模型
// ==========================================
// 依据: Wind_OM_Master_Spec.md - PART C 数据与状态体系
// 依据: Engine_Specs_v0.2.md - 主实体定义
// ==========================================

use crate::domain::component::Component;
use serde::{Deserialize, Serialize};

// ==========================================
// PowerContext - 资产功率/电价上下文
// ==========================================
// 用途: 机会成本计算的只读快照,避免部件持有资产的循环引用
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerContext {
    pub rated_power_kw: f64, // 额定功率(kW)
    pub energy_price: f64,   // 当前电价(货币/kWh)
}

// ==========================================
// Asset - 物理资产(单台风机)
// ==========================================
// 红线: 汇总字段必须等于当前部件集合的逐项求和;
//       增删部件后未重算的优先级评分不得对外提供
// 生命周期: 每条导入记录创建一次,运行期间不删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    // ===== 标识 =====
    pub asset_id: String,              // 资产唯一标识
    pub latitude: f64,                 // 纬度(平面坐标系,任一一致的二维坐标)
    pub longitude: f64,                // 经度

    // ===== 上下文属性 =====
    pub rated_power_kw: f64,           // 额定功率(kW)
    pub energy_price: f64,             // 当前电价(货币/kWh)
    pub cluster_label: Option<String>, // 簇/分组标签(仅信息性)

    // ===== 部件集合(独占拥有)=====
    pub components: Vec<Component>,

    // ===== 派生字段(聚合引擎写入)=====
    pub total_repair_cost: f64,        // 检修成本合计
    pub total_opportunity_cost: f64,   // 机会成本合计
    pub priority_score: Option<f64>,   // 检修优先级评分(None=未评分/已失效)
}

impl Asset {
    /// 构造资产,部件在构造后通过 attach_component 挂接
    pub fn new(
        asset_id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        rated_power_kw: f64,
        energy_price: f64,
        cluster_label: Option<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            latitude,
            longitude,
            rated_power_kw,
            energy_price,
            cluster_label,
            components: Vec::new(),
            total_repair_cost: 0.0,
            total_opportunity_cost: 0.0,
            priority_score: None,
        }
    }

    /// 挂接部件并写入回链
    ///
    /// 挂接后汇总字段与优先级评分即失效,必须由聚合引擎重算
    pub fn attach_component(&mut self, mut component: Component) {
        component.owner_asset_id = Some(self.asset_id.clone());
        self.components.push(component);
        self.invalidate_derived();
    }

    /// 使派生字段失效(增删部件/配置变更时调用)
    pub fn invalidate_derived(&mut self) {
        self.total_repair_cost = 0.0;
        self.total_opportunity_cost = 0.0;
        self.priority_score = None;
    }

    /// 机会成本计算所需的功率/电价快照
    pub fn power_context(&self) -> PowerContext {
        PowerContext {
            rated_power_kw: self.rated_power_kw,
            energy_price: self.energy_price,
        }
    }

    /// 部件数
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
