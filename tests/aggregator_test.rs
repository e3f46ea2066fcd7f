// ==========================================
// AssetAggregator 引擎集成测试
// ==========================================
// 测试目标: 验证资产级汇总与效益成本比评分
// 覆盖范围: 汇总恒等式/幂等性/评分口径/阈值判定
// ==========================================

use chrono::{Duration, NaiveDate};
use windfarm_dss::domain::types::CriticalityTier;
use windfarm_dss::domain::{Asset, Component};
use windfarm_dss::engine::{AssetAggregator, CostModel};

// ==========================================
// 测试辅助函数
// ==========================================

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// 创建测试用资产(3MW, 电价 0.4)
fn create_test_asset(asset_id: &str) -> Asset {
    Asset::new(asset_id, 0.0, 0.0, 3000.0, 0.4, Some("NORTH".to_string()))
}

fn gearbox(age_days: i64) -> Component {
    Component::new(
        "GB001",
        "Gearbox",
        20.0,
        Some(eval_date() - Duration::days(age_days)),
        200000.0,
        20000.0,
        CriticalityTier::Critical,
        1.0,
        72.0,
    )
}

fn blade(age_days: i64) -> Component {
    Component::new(
        "BL001",
        "Blade",
        20.0,
        Some(eval_date() - Duration::days(age_days)),
        200000.0,
        20000.0,
        CriticalityTier::Critical,
        0.33,
        36.0,
    )
}

// ==========================================
// 测试用例 1: 汇总恒等式
// ==========================================

#[test]
fn test_totals_equal_component_sums() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();
    let mut asset = create_test_asset("WT001");
    asset.attach_component(gearbox(3650));
    asset.attach_component(blade(7300));

    let anomalies = aggregator.recompute_asset(&mut asset, eval_date(), &model);
    assert!(anomalies.is_empty(), "正常数据不应产生异常");

    let repair_sum: f64 = asset.components.iter().map(|c| c.repair_cost).sum();
    let opportunity_sum: f64 = asset.components.iter().map(|c| c.opportunity_cost).sum();

    assert_eq!(asset.total_repair_cost, repair_sum, "检修成本合计必须等于逐项求和");
    assert_eq!(
        asset.total_opportunity_cost, opportunity_sum,
        "机会成本合计必须等于逐项求和"
    );

    // 半寿命齿轮箱 240000 + 报废叶片 380000
    assert_eq!(asset.total_repair_cost, 620000.0);
}

// ==========================================
// 测试用例 2: 重算幂等(逐位一致)
// ==========================================

#[test]
fn test_recompute_is_idempotent() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();
    let mut asset = create_test_asset("WT001");
    asset.attach_component(gearbox(2741));
    asset.attach_component(blade(1523));

    aggregator.recompute_asset(&mut asset, eval_date(), &model);
    let first = asset.clone();

    aggregator.recompute_asset(&mut asset, eval_date(), &model);

    assert_eq!(first, asset, "同一输入重复重算必须产生完全相同的派生值");
    assert_eq!(
        first.total_repair_cost.to_bits(),
        asset.total_repair_cost.to_bits()
    );
    assert_eq!(
        first.total_opportunity_cost.to_bits(),
        asset.total_opportunity_cost.to_bits()
    );
}

// ==========================================
// 测试用例 3: 评分口径
// ==========================================

#[test]
fn test_priority_score_formula() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();
    let mut asset = create_test_asset("WT001");
    asset.attach_component(gearbox(3650));

    aggregator.recompute_asset(&mut asset, eval_date(), &model);

    let avg_transport_cost = 1000.0;
    let score = aggregator.priority_score(&asset, avg_transport_cost);

    let benefit = asset.total_opportunity_cost + 0.5 * asset.total_repair_cost;
    let cost = asset.total_repair_cost + avg_transport_cost;
    assert_eq!(score, benefit / cost, "评分必须等于效益/成本");
    assert!(score > 0.0);
}

#[test]
fn test_priority_score_zero_cost_guard() {
    let aggregator = AssetAggregator::new();
    let asset = create_test_asset("WT001"); // 无部件,成本为 0

    let score = aggregator.priority_score(&asset, 0.0);
    assert_eq!(score, 0.0, "成本为 0 时评分取 0,不得除零");
}

// ==========================================
// 测试用例 4: 批量评分与阈值判定
// ==========================================

#[test]
fn test_score_fleet_and_threshold() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();
    let mut worn = create_test_asset("WT001");
    worn.attach_component(gearbox(7300));
    let mut fresh = create_test_asset("WT002");
    fresh.attach_component(gearbox(0));

    let mut assets = vec![worn, fresh];
    aggregator.recompute_fleet(&mut assets, eval_date(), &model);

    // 未评分一律不通过阈值
    assert!(!aggregator.meets_threshold(&assets[0], 0.0), "未评分资产不得通过筛选");

    aggregator.score_fleet(&mut assets, 500.0);

    let worn_score = assets[0].priority_score.expect("评分后必须写入");
    let fresh_score = assets[1].priority_score.expect("评分后必须写入");
    assert!(
        worn_score > fresh_score,
        "磨损资产评分应高于新资产: {} vs {}",
        worn_score,
        fresh_score
    );
    assert!(aggregator.meets_threshold(&assets[0], worn_score));
    assert!(!aggregator.meets_threshold(&assets[1], worn_score + 0.1));
}

// ==========================================
// 测试用例 5: 重算使评分失效
// ==========================================

#[test]
fn test_recompute_invalidates_score() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();
    let mut asset = create_test_asset("WT001");
    asset.attach_component(gearbox(3650));

    let mut assets = vec![asset];
    aggregator.recompute_fleet(&mut assets, eval_date(), &model);
    aggregator.score_fleet(&mut assets, 100.0);
    assert!(assets[0].priority_score.is_some());

    aggregator.recompute_fleet(&mut assets, eval_date(), &model);
    assert!(
        assets[0].priority_score.is_none(),
        "重算后旧评分必须失效,等待重新评分"
    );
}

// ==========================================
// 测试用例 6: 坏部件不阻断整批
// ==========================================

#[test]
fn test_bad_component_does_not_block_batch() {
    let aggregator = AssetAggregator::new();
    let model = CostModel::default();

    let mut bad = create_test_asset("WT001");
    let mut missing_date = gearbox(0);
    missing_date.install_date = None;
    bad.attach_component(missing_date);

    let mut good = create_test_asset("WT002");
    good.attach_component(blade(3650));

    let mut assets = vec![bad, good];
    let anomalies = aggregator.recompute_fleet(&mut assets, eval_date(), &model);

    assert_eq!(anomalies.len(), 1, "缺失安装日期应产生一条异常");
    assert_eq!(anomalies[0].asset_id, "WT001");
    // 好资产照常算完
    assert!(assets[1].total_repair_cost > 0.0, "其余资产必须正常完成计算");
}
