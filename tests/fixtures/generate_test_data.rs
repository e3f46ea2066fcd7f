// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成演示/测试用舰队 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// 口径: 不引入随机数依赖,全部由下标推导,保证可重现
// ==========================================

use chrono::{Duration, Local, NaiveDate};
use csv::Writer;
use std::error::Error;
use std::fs;
use std::path::Path;

// CSV 表头(与导入层列约定一致)
const CSV_HEADER: &[&str] = &[
    "asset_id",
    "latitude",
    "longitude",
    "rated_power_kw",
    "energy_price",
    "cluster",
    "component_name",
    "lifetime_years",
    "serial_number",
    "install_date",
    "replacement_cost",
    "salvage_value",
    "criticality",
    "power_impact_factor",
    "repair_hours",
];

// 部件记录行
#[derive(Clone)]
struct ComponentRow {
    asset_id: String,
    latitude: String,
    longitude: String,
    rated_power_kw: String,
    energy_price: String,
    cluster: String,
    component_name: String,
    lifetime_years: String,
    serial_number: String,
    install_date: String,
    replacement_cost: String,
    salvage_value: String,
    criticality: String,
    power_impact_factor: String,
    repair_hours: String,
}

impl ComponentRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.asset_id.clone(),
            self.latitude.clone(),
            self.longitude.clone(),
            self.rated_power_kw.clone(),
            self.energy_price.clone(),
            self.cluster.clone(),
            self.component_name.clone(),
            self.lifetime_years.clone(),
            self.serial_number.clone(),
            self.install_date.clone(),
            self.replacement_cost.clone(),
            self.salvage_value.clone(),
            self.criticality.clone(),
            self.power_impact_factor.clone(),
            self.repair_hours.clone(),
        ]
    }
}

// 部件类型模板: (名称, 寿命年, 更换成本, 残值, 关键度, 功率影响, 检修工时)
const COMPONENT_TEMPLATES: &[(&str, f64, f64, f64, &str, f64, f64)] = &[
    ("Blade", 20.0, 200000.0, 20000.0, "CRITICAL", 0.33, 36.0),
    ("Blade", 20.0, 200000.0, 20000.0, "CRITICAL", 0.33, 36.0),
    ("Blade", 20.0, 200000.0, 20000.0, "CRITICAL", 0.33, 36.0),
    ("Gearbox", 15.0, 350000.0, 40000.0, "CRITICAL", 1.0, 72.0),
    ("MainShaft", 25.0, 180000.0, 25000.0, "IMPORTANT", 0.9, 48.0),
    ("NacelleCasing", 30.0, 60000.0, 5000.0, "ROUTINE", 0.1, 12.0),
];

const CLUSTERS: &[&str] = &["NORTH", "EAST", "SOUTH", "WEST"];

// 生成单台风机的部件行
//
// 坐标/功率/电价/安装日期全部由风机下标推导
fn generate_turbine_rows(index: usize, age_days_base: i64, today: NaiveDate) -> Vec<ComponentRow> {
    let asset_id = format!("WT{:03}", index + 1);
    // 4 列 x N 行的平面网格,间距 3.5 距离单位
    let latitude = (index % 4) as f64 * 3.5;
    let longitude = (index / 4) as f64 * 3.5;
    let rated_power_kw = 2000.0 + (index % 5) as f64 * 500.0;
    let energy_price = 0.35 + (index % 4) as f64 * 0.05;
    let cluster = CLUSTERS[index % CLUSTERS.len()];

    COMPONENT_TEMPLATES
        .iter()
        .enumerate()
        .map(|(slot, (name, lifetime, replacement, salvage, criticality, impact, hours))| {
            // 同一风机内各部件安装日期错开,避免健康度完全一致
            let age_days = age_days_base + (index as i64 * 97 + slot as i64 * 211) % 1400;
            let install_date = today - Duration::days(age_days);

            ComponentRow {
                asset_id: asset_id.clone(),
                latitude: format!("{:.2}", latitude),
                longitude: format!("{:.2}", longitude),
                rated_power_kw: format!("{:.0}", rated_power_kw),
                energy_price: format!("{:.2}", energy_price),
                cluster: cluster.to_string(),
                component_name: (*name).to_string(),
                lifetime_years: format!("{}", lifetime),
                serial_number: format!("{}{:03}{}", &name[..2].to_uppercase(), index + 1, slot),
                install_date: install_date.format("%Y-%m-%d").to_string(),
                replacement_cost: format!("{:.0}", replacement),
                salvage_value: format!("{:.0}", salvage),
                criticality: (*criticality).to_string(),
                power_impact_factor: format!("{}", impact),
                repair_hours: format!("{}", hours),
            }
        })
        .collect()
}

// 写出一个数据集
fn write_dataset(path: &Path, rows: &[ComponentRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record(row.to_row())?;
    }
    writer.flush()?;
    println!("已生成: {} ({} 行)", path.display(), rows.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("tests/fixtures/datasets");
    fs::create_dir_all(out_dir)?;

    let today = Local::now().date_naive();

    // ===== 数据集1: 正常舰队(20 台,轻中度磨损)=====
    let mut normal_rows = Vec::new();
    for i in 0..20 {
        normal_rows.extend(generate_turbine_rows(i, 700, today));
    }
    write_dataset(&out_dir.join("fleet_normal.csv"), &normal_rows)?;

    // ===== 数据集2: 重度磨损舰队(12 台,贴近寿命末期)=====
    let mut worn_rows = Vec::new();
    for i in 0..12 {
        worn_rows.extend(generate_turbine_rows(i, 5000, today));
    }
    write_dataset(&out_dir.join("fleet_worn.csv"), &worn_rows)?;

    // ===== 数据集3: 脏数据舰队(8 台,注入典型数据质量问题)=====
    let mut dirty_rows = Vec::new();
    for i in 0..8 {
        dirty_rows.extend(generate_turbine_rows(i, 1200, today));
    }
    // 每第 5 个部件缺失安装日期
    for (pos, row) in dirty_rows.iter_mut().enumerate() {
        if pos % 5 == 0 {
            row.install_date = String::new();
        }
    }
    // 注入越界功率影响系数 / 负残值 / 未识别关键度 / 坏寿命
    if let Some(row) = dirty_rows.get_mut(3) {
        row.power_impact_factor = "1.5".to_string();
    }
    if let Some(row) = dirty_rows.get_mut(7) {
        row.salvage_value = "-500".to_string();
    }
    if let Some(row) = dirty_rows.get_mut(11) {
        row.criticality = "URGENT".to_string();
    }
    if let Some(row) = dirty_rows.get_mut(13) {
        row.lifetime_years = "n/a".to_string();
    }
    write_dataset(&out_dir.join("fleet_dirty.csv"), &dirty_rows)?;

    println!("CSV 数据集生成完毕");
    Ok(())
}
