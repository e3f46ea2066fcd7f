// ==========================================
// 风电场运维决策支持系统 - 成本矩阵
// ==========================================
// 依据: Engine_Specs_v0.2.md - 5. Cost Matrix Builder
// 不变量: distance[i][j] == distance[j][i], 对角线为 0,
//         transport_cost[i][j] = distance[i][j] * cost_per_distance_unit
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CostMatrix - 资产两两距离/运输成本矩阵
// ==========================================
// 行列顺序与构建时的资产顺序一一对应
// 生命周期: 资产集合或距离费率变更时整体重建,不做增量修补
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMatrix {
    pub asset_ids: Vec<String>,        // 行/列对应的资产ID
    pub distance: Vec<Vec<f64>>,       // 平面欧氏距离
    pub transport_cost: Vec<Vec<f64>>, // 运输成本 = 距离 * 费率
    pub cost_per_distance_unit: f64,   // 构建时使用的费率(审计用)
}

impl CostMatrix {
    /// 矩阵维度(资产数)
    pub fn len(&self) -> usize {
        self.asset_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asset_ids.is_empty()
    }

    /// 两资产间距离(按构建时顺序索引)
    pub fn distance_between(&self, i: usize, j: usize) -> f64 {
        self.distance[i][j]
    }

    /// 两资产间运输成本(按构建时顺序索引)
    pub fn transport_cost_between(&self, i: usize, j: usize) -> f64 {
        self.transport_cost[i][j]
    }

    /// 非对角线运输成本均值
    ///
    /// 用途: score_all 的平均运输成本估计
    /// 边界: 资产数 < 2 时返回 0.0
    pub fn average_transport_cost(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    sum += self.transport_cost[i][j];
                }
            }
        }
        sum / (n * (n - 1)) as f64
    }
}
