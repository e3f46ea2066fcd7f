// ==========================================
// 风电场运维决策支持系统 - 评估会话
// ==========================================
// 依据: Engine_Specs_v0.2.md - 1. 评估主流程
// 依据: Engine_Specs_v0.2.md - 1.3 评估会话状态机
// ==========================================
// 职责: 进程级评估状态 + 对外操作面
// 状态机: UNSCORED -> SCORED -> FILTERED -> ROUTED,可重入;
//         配置变更/资产变更一律回退 UNSCORED
// 红线: 陈旧的下游结果不得对外提供
// 所有权: 会话是资产集合与成本矩阵的唯一写者,
//         评估期间不允许外部并发改写
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::SessionConfig;
use crate::domain::anomaly::DataAnomaly;
use crate::domain::asset::Asset;
use crate::domain::component::Component;
use crate::domain::matrix::CostMatrix;
use crate::domain::types::SessionState;
use crate::engine::{AssetAggregator, CostMatrixBuilder, RouteOptimizer, WorthinessFilter};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// RecomputeReport - 重算结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeReport {
    pub asset_count: usize,          // 资产数
    pub component_count: usize,      // 部件数
    pub anomalies: Vec<DataAnomaly>, // 本次重算收集的数据异常
    pub elapsed_ms: i64,             // 耗时(毫秒)
}

// ==========================================
// EvaluationSummary - 评估汇总快照
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub snapshot_id: String,             // 快照ID
    pub session_id: String,              // 会话ID
    pub state: SessionState,             // 当前会话状态
    pub prediction_date: NaiveDate,      // 预测日期
    pub asset_count: usize,              // 资产总数
    pub component_count: usize,          // 部件总数
    pub worthy_count: usize,             // 值得检修资产数(未筛选时为 0)
    pub total_repair_cost: f64,          // 全场检修成本合计
    pub total_opportunity_cost: f64,     // 全场机会成本合计
    pub repair_threshold_ratio: f64,     // 生效中的检修阈值
    pub created_at: DateTime<Utc>,       // 快照生成时间
}

impl EvaluationSummary {
    /// 导出 JSON(供外部报表协作方消费)
    pub fn to_json_string(&self) -> ApiResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ApiError::Other(anyhow::anyhow!("汇总序列化失败: {}", e)))
    }
}

// ==========================================
// AnalysisResult - 一键分析结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: EvaluationSummary,  // 汇总快照
    pub route: Vec<String>,          // 巡检顺序(资产ID)
    pub anomalies: Vec<DataAnomaly>, // 重算阶段收集的数据异常
    pub elapsed_ms: i64,             // 全流程耗时(毫秒)
}

// ==========================================
// EvaluationSession - 评估会话
// ==========================================
pub struct EvaluationSession {
    session_id: String,
    config: SessionConfig,
    assets: Vec<Asset>,
    cost_matrix: Option<CostMatrix>,
    state: SessionState,
    totals_current: bool,
    worthy: Vec<usize>,
    route: Vec<usize>,
    last_anomalies: Vec<DataAnomaly>,

    // 引擎(均无状态)
    aggregator: AssetAggregator,
    matrix_builder: CostMatrixBuilder,
    filter: WorthinessFilter,
    optimizer: RouteOptimizer,
}

impl EvaluationSession {
    /// 创建评估会话
    ///
    /// 构造时统一补写部件回链,保证 Asset -> Component 单向拥有 +
    /// ID 回链的关联形态
    pub fn new(mut assets: Vec<Asset>, config: SessionConfig) -> Self {
        for asset in &mut assets {
            let asset_id = asset.asset_id.clone();
            for component in &mut asset.components {
                component.owner_asset_id = Some(asset_id.clone());
            }
        }

        let session_id = Uuid::new_v4().to_string();
        info!(
            %session_id,
            asset_count = assets.len(),
            prediction_date = %config.prediction_date(),
            "评估会话已创建"
        );

        Self {
            session_id,
            config,
            assets,
            cost_matrix: None,
            state: SessionState::Unscored,
            totals_current: false,
            worthy: Vec::new(),
            route: Vec::new(),
            last_anomalies: Vec::new(),
            aggregator: AssetAggregator::new(),
            matrix_builder: CostMatrixBuilder::new(),
            filter: WorthinessFilter::new(),
            optimizer: RouteOptimizer::new(),
        }
    }

    // ==========================================
    // 读取
    // ==========================================

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn cost_matrix(&self) -> Option<&CostMatrix> {
        self.cost_matrix.as_ref()
    }

    pub fn find_asset(&self, asset_id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.asset_id == asset_id)
    }

    /// 最近一次重算收集的数据异常
    pub fn last_anomalies(&self) -> &[DataAnomaly] {
        &self.last_anomalies
    }

    // ==========================================
    // 配置变更(一律回退 UNSCORED)
    // ==========================================

    /// 设置预测日期(可前移模拟未来磨损)
    ///
    /// 成本矩阵只依赖坐标与费率,保留不重建
    pub fn set_prediction_date(&mut self, date: NaiveDate) {
        self.config.set_prediction_date(date);
        self.reset_to_unscored(false);
    }

    /// 设置检修出动阈值;非法取值拒绝,原配置保持生效
    pub fn set_repair_threshold_ratio(&mut self, ratio: f64) -> ApiResult<()> {
        self.config.set_repair_threshold_ratio(ratio)?;
        self.reset_to_unscored(false);
        Ok(())
    }

    /// 设置距离费率;矩阵随之失效
    pub fn set_cost_per_distance_unit(&mut self, rate: f64) -> ApiResult<()> {
        self.config.set_cost_per_distance_unit(rate)?;
        self.reset_to_unscored(true);
        Ok(())
    }

    /// 设置班组日费率
    pub fn set_crew_cost_per_day(&mut self, rate: f64) -> ApiResult<()> {
        self.config.set_crew_cost_per_day(rate)?;
        self.reset_to_unscored(false);
        Ok(())
    }

    /// 设置运维船日费率
    pub fn set_vessel_cost_per_day(&mut self, rate: f64) -> ApiResult<()> {
        self.config.set_vessel_cost_per_day(rate)?;
        self.reset_to_unscored(false);
        Ok(())
    }

    // ==========================================
    // 资产变更(一律回退 UNSCORED)
    // ==========================================

    /// 追加资产;矩阵随资产集合变更而失效
    pub fn add_asset(&mut self, mut asset: Asset) {
        let asset_id = asset.asset_id.clone();
        for component in &mut asset.components {
            component.owner_asset_id = Some(asset_id.clone());
        }
        self.assets.push(asset);
        self.reset_to_unscored(true);
    }

    /// 为既有资产挂接部件
    ///
    /// 坐标未变,矩阵保留;汇总与评分失效
    pub fn attach_component(&mut self, asset_id: &str, component: Component) -> ApiResult<()> {
        let asset = self
            .assets
            .iter_mut()
            .find(|a| a.asset_id == asset_id)
            .ok_or_else(|| ApiError::AssetNotFound(asset_id.to_string()))?;

        asset.attach_component(component);
        self.reset_to_unscored(false);
        Ok(())
    }

    // ==========================================
    // 对外操作面 (依据 Engine_Specs 1.1)
    // ==========================================

    /// 全量重算: 刷新每个部件与资产的派生字段
    ///
    /// 数据异常按记录收集并返回,不中断整批计算
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn recompute_all(&mut self) -> RecomputeReport {
        let started = Instant::now();
        let eval_date = self.config.prediction_date();

        let anomalies =
            self.aggregator
                .recompute_fleet(&mut self.assets, eval_date, self.config.cost_model());

        self.totals_current = true;
        self.state = SessionState::Unscored;
        self.worthy.clear();
        self.route.clear();
        self.last_anomalies = anomalies.clone();

        let report = RecomputeReport {
            asset_count: self.assets.len(),
            component_count: self.assets.iter().map(Asset::component_count).sum(),
            anomalies,
            elapsed_ms: started.elapsed().as_millis() as i64,
        };

        info!(
            asset_count = report.asset_count,
            component_count = report.component_count,
            anomaly_count = report.anomalies.len(),
            elapsed_ms = report.elapsed_ms,
            "全量重算完成"
        );
        report
    }

    /// 重建成本矩阵(整体重建,不做增量修补)
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn rebuild_cost_matrix(&mut self) -> &CostMatrix {
        let matrix = self
            .matrix_builder
            .build(&self.assets, self.config.cost_model());
        self.cost_matrix.insert(matrix)
    }

    /// 全量评分
    ///
    /// # 参数
    /// - `avg_transport_cost_override`: 平均运输成本覆写;
    ///   None 时取成本矩阵非对角线均值(要求矩阵已构建)
    ///
    /// # 返回
    /// 本次评分实际使用的平均运输成本
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn score_all(&mut self, avg_transport_cost_override: Option<f64>) -> ApiResult<f64> {
        if !self.totals_current {
            return Err(ApiError::TotalsNotCurrent);
        }

        let avg_transport_cost = match avg_transport_cost_override {
            Some(value) => value,
            None => self
                .cost_matrix
                .as_ref()
                .ok_or(ApiError::CostMatrixMissing)?
                .average_transport_cost(),
        };

        self.aggregator
            .score_fleet(&mut self.assets, avg_transport_cost);
        self.state = SessionState::Scored;
        self.worthy.clear();
        self.route.clear();

        info!(avg_transport_cost, "全量评分完成");
        Ok(avg_transport_cost)
    }

    /// 筛选值得检修的资产(保持输入顺序)
    ///
    /// # 返回
    /// 通过阈值筛选的资产ID列表
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn filter_worthy(&mut self) -> ApiResult<Vec<String>> {
        self.require_state_at_least(SessionState::Scored)?;

        self.worthy = self
            .filter
            .filter(&self.assets, self.config.repair_threshold_ratio());
        self.route.clear();
        self.state = SessionState::Filtered;

        Ok(self.worthy_ids())
    }

    /// 生成巡检顺序
    ///
    /// 值得检修集合为空时返回空路径(软性空输入)
    ///
    /// # 返回
    /// 值得检修资产的一个排列(资产ID,按访问顺序)
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn optimize_route(&mut self) -> ApiResult<Vec<String>> {
        self.require_state_at_least(SessionState::Filtered)?;
        let matrix = self.cost_matrix.as_ref().ok_or(ApiError::CostMatrixMissing)?;

        self.route = self.optimizer.optimize(&self.assets, &self.worthy, matrix);
        self.state = SessionState::Routed;

        Ok(self.route_ids())
    }

    /// 生成评估汇总快照(任意状态可调用,state 字段标明口径)
    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            snapshot_id: Uuid::new_v4().to_string(),
            session_id: self.session_id.clone(),
            state: self.state,
            prediction_date: self.config.prediction_date(),
            asset_count: self.assets.len(),
            component_count: self.assets.iter().map(Asset::component_count).sum(),
            worthy_count: self.worthy.len(),
            total_repair_cost: self.assets.iter().map(|a| a.total_repair_cost).sum(),
            total_opportunity_cost: self
                .assets
                .iter()
                .map(|a| a.total_opportunity_cost)
                .sum(),
            repair_threshold_ratio: self.config.repair_threshold_ratio(),
            created_at: Utc::now(),
        }
    }

    /// 一键分析: 重算 -> 重建矩阵 -> 评分 -> 筛选 -> 排路
    ///
    /// 平均运输成本取矩阵非对角线均值
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn run_full_analysis(&mut self) -> ApiResult<AnalysisResult> {
        let started = Instant::now();

        debug!("步骤1: 全量重算");
        let recompute = self.recompute_all();

        debug!("步骤2: 重建成本矩阵");
        self.rebuild_cost_matrix();

        debug!("步骤3: 全量评分");
        self.score_all(None)?;

        debug!("步骤4: 检修准入筛选");
        self.filter_worthy()?;

        debug!("步骤5: 巡检路径优化");
        let route = self.optimize_route()?;

        let result = AnalysisResult {
            summary: self.summary(),
            route,
            anomalies: recompute.anomalies,
            elapsed_ms: started.elapsed().as_millis() as i64,
        };

        info!(
            worthy_count = result.summary.worthy_count,
            route_len = result.route.len(),
            elapsed_ms = result.elapsed_ms,
            "一键分析完成"
        );
        Ok(result)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 状态机守卫: 当前状态不足时拒绝,绝不提供陈旧结果
    fn require_state_at_least(&self, expected: SessionState) -> ApiResult<()> {
        if self.state < expected {
            return Err(ApiError::InvalidSessionState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    /// 回退 UNSCORED;drop_matrix 为真时同时丢弃成本矩阵
    fn reset_to_unscored(&mut self, drop_matrix: bool) {
        self.state = SessionState::Unscored;
        self.totals_current = false;
        self.worthy.clear();
        self.route.clear();
        for asset in &mut self.assets {
            asset.priority_score = None;
        }
        if drop_matrix {
            self.cost_matrix = None;
        }
        debug!(drop_matrix, "会话回退 UNSCORED");
    }

    fn worthy_ids(&self) -> Vec<String> {
        self.worthy
            .iter()
            .map(|&idx| self.assets[idx].asset_id.clone())
            .collect()
    }

    fn route_ids(&self) -> Vec<String> {
        self.route
            .iter()
            .map(|&idx| self.assets[idx].asset_id.clone())
            .collect()
    }
}
