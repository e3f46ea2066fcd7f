// ==========================================
// 风电场运维决策支持系统 - 巡检路径优化引擎
// ==========================================
// 依据: Engine_Specs_v0.2.md - 7. Route Optimizer
// ==========================================
// 职责: 为值得检修的资产生成巡检顺序
// 算法: 优先级加权贪心(单位边际运输成本的优先级最大化)
// 已知限制: 局部贪心启发式,不保证全局最小成本回路,
//           不做精确 TSP / 分支定界
// 复杂度: O(K²),K 为值得检修资产数
// ==========================================

use crate::domain::asset::Asset;
use crate::domain::matrix::CostMatrix;
use tracing::{debug, instrument};

// ==========================================
// RouteOptimizer - 巡检路径优化引擎
// ==========================================
pub struct RouteOptimizer {
    // 无状态引擎,不需要注入依赖
}

impl RouteOptimizer {
    /// 创建新的路径优化引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法 (依据 Engine_Specs 7)
    // ==========================================

    /// 生成巡检顺序
    ///
    /// 步骤:
    /// 1. 值得检修集合为空时返回空路径(软性空输入,不报错)
    /// 2. 起点取全局优先级最高者(并列取输入顺序靠前者)
    /// 3. 此后每步在未访问资产中选取
    ///    score / max(transport_cost[当前][候选], 1.0) 最大者,
    ///    即从"当前位置"出发的单位边际运输成本优先级,
    ///    并列取未访问列表迭代顺序靠前者
    /// 4. 移动、标记、追加,直至全部访问
    ///
    /// # 参数
    /// - `assets`: 资产集合(与矩阵行列顺序一致)
    /// - `worthy`: 值得检修资产的下标集合
    /// - `matrix`: 成本矩阵
    ///
    /// # 返回
    /// worthy 的一个排列(巡检顺序)
    #[instrument(skip(self, assets, matrix), fields(worthy_count = worthy.len()))]
    pub fn optimize(&self, assets: &[Asset], worthy: &[usize], matrix: &CostMatrix) -> Vec<usize> {
        if worthy.is_empty() {
            debug!("值得检修集合为空,返回空路径");
            return Vec::new();
        }

        let score = |idx: usize| assets[idx].priority_score.unwrap_or(0.0);

        // 步骤2: 起点 = 全局优先级最高(严格大于才替换,保证并列取先者)
        let mut start_pos = 0;
        for (pos, &idx) in worthy.iter().enumerate().skip(1) {
            if score(idx) > score(worthy[start_pos]) {
                start_pos = pos;
            }
        }

        let mut unvisited: Vec<usize> = worthy.to_vec();
        let mut current = unvisited.remove(start_pos);
        let mut route = vec![current];

        // 步骤3/4: 贪心推进
        while !unvisited.is_empty() {
            let mut best_pos = 0;
            let mut best_value =
                score(unvisited[0]) / matrix.transport_cost_between(current, unvisited[0]).max(1.0);

            for (pos, &candidate) in unvisited.iter().enumerate().skip(1) {
                let value =
                    score(candidate) / matrix.transport_cost_between(current, candidate).max(1.0);
                if value > best_value {
                    best_value = value;
                    best_pos = pos;
                }
            }

            current = unvisited.remove(best_pos);
            route.push(current);
        }

        debug!(route_len = route.len(), "巡检路径生成完成");
        route
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
