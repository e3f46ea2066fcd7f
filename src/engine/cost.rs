// ==========================================
// 风电场运维决策支持系统 - 成本模型
// ==========================================
// 依据: Engine_Specs_v0.2.md - 3. Cost Model
// ==========================================
// 职责: 部件检修成本 / 机会成本 / 运输成本 / 作业成本
// 形态: 显式值对象,由会话配置注入,不使用全局可变常量
// ==========================================

use crate::domain::asset::PowerContext;
use crate::domain::component::Component;
use crate::engine::health::HealthEvaluation;
use serde::{Deserialize, Serialize};

/// 默认距离费率(货币/距离单位)
pub const DEFAULT_COST_PER_DISTANCE_UNIT: f64 = 5.0;

/// 默认检修班组日费率(货币/天)
pub const DEFAULT_CREW_COST_PER_DAY: f64 = 2400.0;

/// 默认运维船日费率(货币/天)
pub const DEFAULT_VESSEL_COST_PER_DAY: f64 = 3600.0;

// ==========================================
// CostModel - 成本模型值对象
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub cost_per_distance_unit: f64, // 距离费率(货币/距离单位)
    pub crew_cost_per_day: f64,      // 班组日费率(货币/天)
    pub vessel_cost_per_day: f64,    // 运维船日费率(货币/天)
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            cost_per_distance_unit: DEFAULT_COST_PER_DISTANCE_UNIT,
            crew_cost_per_day: DEFAULT_CREW_COST_PER_DAY,
            vessel_cost_per_day: DEFAULT_VESSEL_COST_PER_DAY,
        }
    }
}

impl CostModel {
    // ==========================================
    // 核心方法 (依据 Engine_Specs 3)
    // ==========================================

    /// 检修成本
    ///
    /// 口径: 更换成本 * 失效概率 + (更换成本 - 残值) * (1 - 健康度)
    /// - 第一项: 期望检修支出
    /// - 第二项: 直线折旧中尚未经残值回收的部分
    /// - 额定寿命非正时直接取更换成本
    pub fn repair_cost(&self, component: &Component, health: &HealthEvaluation) -> f64 {
        if component.lifetime_days() <= 0 {
            return component.replacement_cost;
        }

        component.replacement_cost * health.failure_probability
            + (component.replacement_cost - component.salvage_value) * (1.0 - health.health_score)
    }

    /// 机会成本(预期发电损失)
    ///
    /// 口径: 额定功率 * 功率影响系数 * 检修工时 * 失效概率 * 电价
    /// 失效概率为 0 或部件未挂接资产时为 0
    pub fn opportunity_cost(
        &self,
        component: &Component,
        context: Option<&PowerContext>,
        health: &HealthEvaluation,
    ) -> f64 {
        let Some(ctx) = context else {
            return 0.0;
        };
        if health.failure_probability <= 0.0 {
            return 0.0;
        }

        ctx.rated_power_kw
            * component.power_impact_factor
            * component.repair_hours
            * health.failure_probability
            * ctx.energy_price
    }

    /// 运输成本
    pub fn transport_cost(&self, distance: f64) -> f64 {
        distance * self.cost_per_distance_unit
    }

    /// 作业成本(班组 + 运维船)
    ///
    /// 按整天计费,不足一天按一天计
    pub fn operation_cost(&self, repair_hours: f64) -> f64 {
        (self.crew_cost_per_day + self.vessel_cost_per_day) * (repair_hours / 24.0).ceil()
    }
}
