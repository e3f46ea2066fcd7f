// ==========================================
// 风电场运维决策支持系统 - 成本矩阵构建引擎
// ==========================================
// 依据: Engine_Specs_v0.2.md - 5. Cost Matrix Builder
// ==========================================
// 职责: 计算资产两两距离与运输成本
// 复杂度: O(N²),低千级资产规模可接受
// 已知近似: 距离取平面欧氏范数,不做大地测量修正
// ==========================================

use crate::domain::asset::Asset;
use crate::domain::matrix::CostMatrix;
use crate::engine::cost::CostModel;
use tracing::{debug, instrument};

// ==========================================
// CostMatrixBuilder - 成本矩阵构建引擎
// ==========================================
pub struct CostMatrixBuilder {
    // 无状态引擎,不需要注入依赖
}

impl CostMatrixBuilder {
    /// 创建新的矩阵构建引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法 (依据 Engine_Specs 5)
    // ==========================================

    /// 构建成本矩阵
    ///
    /// 资产集合或距离费率变更后必须整体重建,不做增量修补
    ///
    /// # 参数
    /// - `assets`: 资产集合(行列顺序与输入顺序一致)
    /// - `cost_model`: 成本模型(提供距离费率)
    ///
    /// # 返回
    /// 对称、对角线为零的 CostMatrix
    #[instrument(skip(self, assets, cost_model), fields(asset_count = assets.len()))]
    pub fn build(&self, assets: &[Asset], cost_model: &CostModel) -> CostMatrix {
        let n = assets.len();
        let mut distance = vec![vec![0.0; n]; n];
        let mut transport_cost = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = assets[i].latitude - assets[j].latitude;
                let dy = assets[i].longitude - assets[j].longitude;
                let d = dx.hypot(dy);
                let c = cost_model.transport_cost(d);

                // 对称写入,保证 distance[i][j] == distance[j][i]
                distance[i][j] = d;
                distance[j][i] = d;
                transport_cost[i][j] = c;
                transport_cost[j][i] = c;
            }
        }

        debug!(asset_count = n, "成本矩阵构建完成");

        CostMatrix {
            asset_ids: assets.iter().map(|a| a.asset_id.clone()).collect(),
            distance,
            transport_cost,
            cost_per_distance_unit: cost_model.cost_per_distance_unit,
        }
    }
}

impl Default for CostMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}
