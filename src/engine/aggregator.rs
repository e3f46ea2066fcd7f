// ==========================================
// 风电场运维决策支持系统 - 资产聚合引擎
// ==========================================
// 依据: Engine_Specs_v0.2.md - 4. Asset Aggregator
// 红线: 汇总字段必须等于当前部件集合的逐项求和
// 红线: 单条坏记录不得阻断整批计算
// ==========================================
// 职责: 部件级重算 + 资产级汇总 + 检修优先级评分
// 输入: 资产集合 + 评估日期 + 成本模型 + 平均运输成本
// 输出: 更新资产派生字段,收集数据异常
// ==========================================

use crate::domain::anomaly::DataAnomaly;
use crate::domain::asset::Asset;
use crate::engine::cost::CostModel;
use crate::engine::health::HealthEngine;
use chrono::NaiveDate;
use serde_json::json;
use tracing::{debug, instrument};

// ==========================================
// AssetAggregator - 资产聚合引擎
// ==========================================
pub struct AssetAggregator {
    health: HealthEngine,
}

impl AssetAggregator {
    /// 创建新的聚合引擎
    pub fn new() -> Self {
        Self {
            health: HealthEngine::new(),
        }
    }

    // ==========================================
    // 核心方法 (依据 Engine_Specs 4)
    // ==========================================

    /// 重算单个资产
    ///
    /// 逐部件执行健康度评估与成本计算,然后顺序归并出资产汇总。
    /// 优先级评分随之失效,等待 score 阶段重新计算。
    ///
    /// # 参数
    /// - `asset`: 待重算资产(派生字段会被覆写)
    /// - `eval_date`: 评估日期(预测日期)
    /// - `cost_model`: 成本模型
    ///
    /// # 返回
    /// 本次重算收集到的数据异常(空表示无异常)
    pub fn recompute_asset(
        &self,
        asset: &mut Asset,
        eval_date: NaiveDate,
        cost_model: &CostModel,
    ) -> Vec<DataAnomaly> {
        let context = asset.power_context();
        let mut anomalies = Vec::new();
        let mut total_repair = 0.0;
        let mut total_opportunity = 0.0;

        for component in &mut asset.components {
            let evaluation = self.health.evaluate(component, eval_date);

            component.remaining_days = evaluation.remaining_days;
            component.health_score = evaluation.health_score;
            component.failure_probability = evaluation.failure_probability;
            component.repair_cost = cost_model.repair_cost(component, &evaluation);
            component.opportunity_cost =
                cost_model.opportunity_cost(component, Some(&context), &evaluation);

            total_repair += component.repair_cost;
            total_opportunity += component.opportunity_cost;

            if let Some(anomaly) = evaluation.anomaly {
                anomalies.push(anomaly);
            }
        }

        asset.total_repair_cost = total_repair;
        asset.total_opportunity_cost = total_opportunity;
        asset.priority_score = None;

        anomalies
    }

    /// 批量重算(推荐使用)
    ///
    /// 聚合是严格顺序的归并步骤;部件级计算彼此独立,
    /// 宿主如需并行只能并行部件评估,不得并发改写汇总字段
    #[instrument(skip(self, assets, cost_model), fields(asset_count = assets.len(), %eval_date))]
    pub fn recompute_fleet(
        &self,
        assets: &mut [Asset],
        eval_date: NaiveDate,
        cost_model: &CostModel,
    ) -> Vec<DataAnomaly> {
        let mut anomalies = Vec::new();
        for asset in assets.iter_mut() {
            anomalies.extend(self.recompute_asset(asset, eval_date, cost_model));
        }
        anomalies
    }

    /// 检修优先级评分(效益/成本比)
    ///
    /// 口径:
    /// - benefit = 机会成本合计 + 0.5 * 检修成本合计
    ///   (检修支出按半权重计入效益,作为可经残值部分回收的折旧规避代理)
    /// - cost = 检修成本合计 + 平均运输成本
    /// - score = benefit / cost (cost <= 0 时为 0)
    pub fn priority_score(&self, asset: &Asset, avg_transport_cost: f64) -> f64 {
        let benefit = asset.total_opportunity_cost + 0.5 * asset.total_repair_cost;
        let cost = asset.total_repair_cost + avg_transport_cost;

        if cost > 0.0 {
            benefit / cost
        } else {
            0.0
        }
    }

    /// 批量评分,写入 priority_score
    #[instrument(skip(self, assets), fields(asset_count = assets.len(), avg_transport_cost))]
    pub fn score_fleet(&self, assets: &mut [Asset], avg_transport_cost: f64) {
        for asset in assets.iter_mut() {
            let score = self.priority_score(asset, avg_transport_cost);
            asset.priority_score = Some(score);

            debug!(
                asset_id = %asset.asset_id,
                score,
                detail = %json!({
                    "benefit": asset.total_opportunity_cost + 0.5 * asset.total_repair_cost,
                    "cost": asset.total_repair_cost + avg_transport_cost,
                    "avg_transport_cost": avg_transport_cost,
                }),
                "优先级评分完成"
            );
        }
    }

    /// 是否达到检修出动阈值
    ///
    /// 阈值是业务可调参数(最低效益成本比),不是常量;
    /// 未评分资产一律不通过
    pub fn meets_threshold(&self, asset: &Asset, threshold_ratio: f64) -> bool {
        match asset.priority_score {
            Some(score) => score >= threshold_ratio,
            None => false,
        }
    }
}

impl Default for AssetAggregator {
    fn default() -> Self {
        Self::new()
    }
}
