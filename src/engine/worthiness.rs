// ==========================================
// 风电场运维决策支持系统 - 检修准入筛选引擎
// ==========================================
// 依据: Engine_Specs_v0.2.md - 6. Worthiness Filter
// ==========================================
// 职责: 按效益成本比阈值筛选值得出动检修的资产
// 输入: 已评分资产集合 + 阈值
// 输出: 通过筛选的资产下标(保持输入顺序)
// 红线: 纯筛选,不得改写评分
// ==========================================

use crate::domain::asset::Asset;
use crate::engine::aggregator::AssetAggregator;
use tracing::{debug, instrument};

// ==========================================
// WorthinessFilter - 检修准入筛选引擎
// ==========================================
pub struct WorthinessFilter {
    aggregator: AssetAggregator,
}

impl WorthinessFilter {
    /// 创建新的筛选引擎
    pub fn new() -> Self {
        Self {
            aggregator: AssetAggregator::new(),
        }
    }

    // ==========================================
    // 核心方法 (依据 Engine_Specs 6)
    // ==========================================

    /// 筛选值得检修的资产
    ///
    /// 评分必须已经由聚合引擎算好;未评分资产不通过。
    /// 阈值单调性: 阈值升高时结果集只会缩小,不会扩大。
    ///
    /// # 参数
    /// - `assets`: 资产集合
    /// - `threshold_ratio`: 最低效益成本比
    ///
    /// # 返回
    /// 通过筛选的资产在输入切片中的下标,顺序与输入一致
    #[instrument(skip(self, assets), fields(asset_count = assets.len(), threshold_ratio))]
    pub fn filter(&self, assets: &[Asset], threshold_ratio: f64) -> Vec<usize> {
        let worthy: Vec<usize> = assets
            .iter()
            .enumerate()
            .filter(|(_, asset)| self.aggregator.meets_threshold(asset, threshold_ratio))
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            worthy_count = worthy.len(),
            blocked_count = assets.len() - worthy.len(),
            "检修准入筛选完成"
        );

        worthy
    }
}

impl Default for WorthinessFilter {
    fn default() -> Self {
        Self::new()
    }
}
