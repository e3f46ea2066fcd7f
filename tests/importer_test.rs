// ==========================================
// FleetCsvLoader 导入层集成测试
// ==========================================
// 测试目标: 验证舰队 CSV 解析、归并与容错回退
// 覆盖范围: 正常导入/脏数据降级/文件级错误
// ==========================================

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use windfarm_dss::domain::types::{AnomalyKind, CriticalityTier};
use windfarm_dss::importer::{FleetCsvLoader, ImportError};

// ==========================================
// 测试辅助函数
// ==========================================

const HEADER: &str = "asset_id,latitude,longitude,rated_power_kw,energy_price,cluster,component_name,lifetime_years,serial_number,install_date,replacement_cost,salvage_value,criticality,power_impact_factor,repair_hours";

/// 将 CSV 内容写入临时文件
fn write_csv(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("测试文件写入失败");
    path
}

// ==========================================
// 测试用例 1: 正常导入与资产归并
// ==========================================

#[test]
fn test_load_groups_rows_by_asset() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let body = format!(
        "{}\n\
         WT001,0.0,0.0,3000,0.40,NORTH,Blade,20,BL001A,2016-05-01,200000,20000,CRITICAL,0.33,36\n\
         WT001,0.0,0.0,3000,0.40,NORTH,Gearbox,15,GB001,2018-03-15,350000,40000,CRITICAL,1.0,72\n\
         WT002,3.0,4.0,2500,0.45,EAST,Blade,20,BL002A,2020-07-20,200000,20000,CRITICAL,0.33,36\n",
        HEADER
    );
    let path = write_csv(&dir, "fleet.csv", &body);

    let result = FleetCsvLoader::new().load(&path).expect("正常数据导入必须成功");

    assert_eq!(result.assets.len(), 2, "同 asset_id 的行必须归并");
    assert_eq!(result.skipped_rows, 0);
    assert!(result.anomalies.is_empty(), "正常数据不应产生异常");

    // 资产按首次出现顺序保序
    let first = &result.assets[0];
    assert_eq!(first.asset_id, "WT001");
    assert_eq!(first.component_count(), 2);
    assert_eq!(first.rated_power_kw, 3000.0);
    assert_eq!(first.cluster_label.as_deref(), Some("NORTH"));

    let second = &result.assets[1];
    assert_eq!(second.asset_id, "WT002");
    assert_eq!(second.component_count(), 1);
    assert_eq!(second.latitude, 3.0);
    assert_eq!(second.longitude, 4.0);

    // 部件字段与回链
    let gearbox = &first.components[1];
    assert_eq!(gearbox.serial_number, "GB001");
    assert_eq!(gearbox.lifetime_years, 15.0);
    assert_eq!(
        gearbox.install_date,
        Some(NaiveDate::from_ymd_opt(2018, 3, 15).unwrap())
    );
    assert_eq!(gearbox.criticality, CriticalityTier::Critical);
    assert_eq!(gearbox.owner_asset_id.as_deref(), Some("WT001"));
}

// ==========================================
// 测试用例 2: 脏数据降级为异常,不阻断整批
// ==========================================

#[test]
fn test_dirty_rows_degrade_to_anomalies() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let body = format!(
        "{}\n\
         WT001,0.0,0.0,3000,0.40,NORTH,Blade,20,BL001A,,200000,20000,CRITICAL,0.33,36\n\
         WT001,0.0,0.0,3000,0.40,NORTH,Gearbox,15,GB001,bad-date,350000,40000,CRITICAL,1.5,72\n\
         WT001,0.0,0.0,3000,0.40,NORTH,Shaft,25,SH001,2018-01-01,180000,-500,URGENT,0.9,48\n\
         WT002,3.0,4.0,2500,0.45,EAST,Blade,abc,BL002A,2020-07-20,200000,20000,CRITICAL,0.33,36\n\
         WT002,3.0,4.0,2500,0.45,EAST,Blade,20,,2020-07-20,200000,20000,CRITICAL,0.33,36\n\
         WT002,3.0,4.0,2500,0.45,EAST,Gearbox,15,GB002,2021-02-02,350000,40000,CRITICAL,1.0,72\n",
        HEADER
    );
    let path = write_csv(&dir, "fleet.csv", &body);

    let result = FleetCsvLoader::new().load(&path).expect("脏数据不得令整批失败");

    // 坏寿命与空序列号两行被跳过,其余照常导入
    assert_eq!(result.skipped_rows, 2);
    assert_eq!(result.assets.len(), 2);
    assert_eq!(result.assets[0].component_count(), 3);
    assert_eq!(result.assets[1].component_count(), 1);

    let wt001 = &result.assets[0];
    // 空安装日期 -> None,由健康度引擎按全额寿命回退并上报
    assert_eq!(wt001.components[0].install_date, None);
    // 无法解析的安装日期 -> None + 异常
    assert_eq!(wt001.components[1].install_date, None);
    // 越界功率影响系数 -> 钳制进 [0,1]
    assert_eq!(wt001.components[1].power_impact_factor, 1.0);
    // 负残值 -> 钳制为 0
    assert_eq!(wt001.components[2].salvage_value, 0.0);
    // 未识别关键度 -> 回退 ROUTINE
    assert_eq!(wt001.components[2].criticality, CriticalityTier::Routine);

    // 每个问题都有对应异常上报
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::MalformedField && a.reason.contains("install_date")));
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::ValueOutOfRange
            && a.reason.contains("power_impact_factor")));
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::ValueOutOfRange && a.reason.contains("salvage_value")));
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::MalformedField && a.reason.contains("criticality")));
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::MalformedField && a.reason.contains("lifetime_years")));
    assert!(result
        .anomalies
        .iter()
        .any(|a| a.kind == AnomalyKind::MalformedField && a.reason.contains("serial_number")));
}

// ==========================================
// 测试用例 3: 空文件与仅表头
// ==========================================

#[test]
fn test_header_only_yields_empty_fleet() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = write_csv(&dir, "fleet.csv", &format!("{}\n", HEADER));

    let result = FleetCsvLoader::new().load(&path).expect("仅表头不是错误");

    assert!(result.assets.is_empty(), "零资产是软性空输入");
    assert!(result.anomalies.is_empty());
}

// ==========================================
// 测试用例 4: 文件级错误
// ==========================================

#[test]
fn test_file_level_errors() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let loader = FleetCsvLoader::new();

    // 文件不存在
    assert!(matches!(
        loader.load(&dir.path().join("missing.csv")),
        Err(ImportError::FileNotFound(_))
    ));

    // 扩展名不支持
    let txt = write_csv(&dir, "fleet.txt", "whatever");
    assert!(matches!(
        loader.load(&txt),
        Err(ImportError::UnsupportedFormat(_))
    ));

    // 缺少必需列(去掉 repair_hours)
    let truncated_header = HEADER.replace(",repair_hours", "");
    let bad = write_csv(
        &dir,
        "fleet.csv",
        &format!("{}\nWT001,0,0,3000,0.4,N,Blade,20,BL1,2020-01-01,200000,20000,CRITICAL,0.33\n", truncated_header),
    );
    match loader.load(&bad) {
        Err(ImportError::MissingColumn(col)) => assert_eq!(col, "repair_hours"),
        other => panic!("缺列必须报 MissingColumn,实际: {:?}", other.map(|_| ())),
    }
}
