// ==========================================
// 风电场运维决策支持系统 - CLI 主入口
// ==========================================
// 依据: Wind_OM_Master_Spec.md
// 用法: windfarm-dss <fleet.csv> <检修阈值> [预测日期 YYYY-MM-DD]
// 定位: 外部数据加载协作方 + 报表协作方的最小宿主
// ==========================================

use anyhow::{bail, Context, Result};
use std::path::Path;
use windfarm_dss::config::SessionConfig;
use windfarm_dss::importer::FleetCsvLoader;
use windfarm_dss::{logging, EvaluationSession};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 检修优先级与巡检路径", windfarm_dss::APP_NAME);
    tracing::info!("系统版本: {}", windfarm_dss::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "用法: {} <fleet.csv> <检修阈值> [预测日期 YYYY-MM-DD]",
            args.first().map(String::as_str).unwrap_or("windfarm-dss")
        );
        eprintln!("提示: 没有现成数据时可先运行 generate_test_data 生成演示舰队");
        bail!("参数不足");
    }

    let file_path = Path::new(&args[1]);
    let threshold: f64 = args[2]
        .parse()
        .with_context(|| format!("检修阈值无法解析: {}", args[2]))?;

    // 检修阈值无公认默认值,必须显式给定
    let mut config = SessionConfig::new(threshold).context("配置校验失败")?;
    if let Some(raw_date) = args.get(3) {
        let date = SessionConfig::parse_date(raw_date).context("预测日期解析失败")?;
        config.set_prediction_date(date);
    }

    // 加载舰队数据
    let load_result = FleetCsvLoader::new()
        .load(file_path)
        .with_context(|| format!("舰队数据加载失败: {}", file_path.display()))?;

    for anomaly in &load_result.anomalies {
        tracing::warn!(%anomaly, "导入数据异常");
    }
    tracing::info!(
        "已加载 {} 台资产(跳过 {} 行)",
        load_result.assets.len(),
        load_result.skipped_rows
    );

    // 一键分析
    let mut session = EvaluationSession::new(load_result.assets, config);
    let analysis = session.run_full_analysis().context("评估流程执行失败")?;

    // 输出报表
    println!("{}", analysis.summary.to_json_string()?);
    println!();
    println!("巡检顺序 ({} 站):", analysis.route.len());
    for (seq, asset_id) in analysis.route.iter().enumerate() {
        let score = session
            .find_asset(asset_id)
            .and_then(|a| a.priority_score)
            .unwrap_or(0.0);
        println!("  {:>3}. {}  (优先级 {:.4})", seq + 1, asset_id, score);
    }
    if !analysis.anomalies.is_empty() {
        println!();
        println!("数据异常 ({} 条):", analysis.anomalies.len());
        for anomaly in &analysis.anomalies {
            println!("  - {}", anomaly);
        }
    }

    Ok(())
}
