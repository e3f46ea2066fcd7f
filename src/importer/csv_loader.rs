// ==========================================
// 风电场运维决策支持系统 - 舰队 CSV 加载器
// ==========================================
// 依据: Field_Mapping_Spec_v0.2.md - 舰队记录列约定
// ==========================================
// 职责: 外部数据源 CSV -> 资产/部件实体
// 约定: 每行一个部件,同 asset_id 的行归并为同一资产
//       (资产按首次出现顺序保序)
// 红线: 行级问题降级为 DataAnomaly 并按文档化默认值回退,
//       只有文件级问题才返回 ImportError
// ==========================================

use crate::domain::anomaly::DataAnomaly;
use crate::domain::asset::Asset;
use crate::domain::component::Component;
use crate::domain::types::{AnomalyKind, CriticalityTier};
use crate::importer::error::ImportError;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument, warn};

// 必需列(cluster 可选)
const REQUIRED_COLUMNS: &[&str] = &[
    "asset_id",
    "latitude",
    "longitude",
    "rated_power_kw",
    "energy_price",
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

// ==========================================
// LoadResult - 加载结果
// ==========================================
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub assets: Vec<Asset>,          // 归并后的资产(首次出现顺序)
    pub anomalies: Vec<DataAnomaly>, // 行级数据异常
    pub skipped_rows: usize,         // 无法构成部件而被跳过的行数
}

// ==========================================
// FleetCsvLoader - 舰队 CSV 加载器
// ==========================================
pub struct FleetCsvLoader;

impl FleetCsvLoader {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 加载舰队 CSV 文件
    ///
    /// # 参数
    /// - `file_path`: CSV 文件路径(带表头)
    ///
    /// # 返回
    /// LoadResult;文件不存在/格式不支持/缺列时返回 ImportError
    #[instrument(skip(self, file_path), fields(path = %file_path.display()))]
    pub fn load(&self, file_path: &Path) -> Result<LoadResult, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 表头校验
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(ImportError::MissingColumn((*col).to_string()));
            }
        }

        let mut assets: Vec<Asset> = Vec::new();
        let mut asset_positions: HashMap<String, usize> = HashMap::new();
        let mut anomalies: Vec<DataAnomaly> = Vec::new();
        let mut skipped_rows = 0usize;

        for (row_offset, record) in reader.records().enumerate() {
            let row_no = row_offset + 2; // 表头占第 1 行
            let record = record?;

            // 行 -> 字段映射(列名 -> 去除空白的值)
            let mut row: HashMap<String, String> = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            // ===== 部件定位字段(解析失败则整行跳过)=====
            let asset_id = Self::field(&row, "asset_id").to_string();
            if asset_id.is_empty() {
                warn!(row_no, "asset_id 为空,跳过该行");
                anomalies.push(DataAnomaly::asset(
                    format!("ROW_{}", row_no),
                    AnomalyKind::MalformedField,
                    format!("第 {} 行 asset_id 为空", row_no),
                ));
                skipped_rows += 1;
                continue;
            }

            let serial_number = Self::field(&row, "serial_number").to_string();
            if serial_number.is_empty() {
                anomalies.push(DataAnomaly::asset(
                    &asset_id,
                    AnomalyKind::MalformedField,
                    format!("第 {} 行 serial_number 为空,跳过该部件", row_no),
                ));
                skipped_rows += 1;
                continue;
            }

            let lifetime_years = match Self::field(&row, "lifetime_years").parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    anomalies.push(DataAnomaly::component(
                        &asset_id,
                        &serial_number,
                        AnomalyKind::MalformedField,
                        format!(
                            "第 {} 行 lifetime_years 无法解析: {:?},跳过该部件",
                            row_no,
                            Self::field(&row, "lifetime_years")
                        ),
                    ));
                    skipped_rows += 1;
                    continue;
                }
            };

            // ===== 资产归并(首行确定坐标与功率/电价上下文)=====
            let asset_pos = match asset_positions.get(&asset_id) {
                Some(&pos) => pos,
                None => {
                    let latitude = Self::lenient_f64(
                        Self::field(&row, "latitude"),
                        "latitude",
                        &asset_id,
                        row_no,
                        &mut anomalies,
                    );
                    let longitude = Self::lenient_f64(
                        Self::field(&row, "longitude"),
                        "longitude",
                        &asset_id,
                        row_no,
                        &mut anomalies,
                    );
                    let rated_power_kw = Self::lenient_non_negative(
                        Self::field(&row, "rated_power_kw"),
                        "rated_power_kw",
                        &asset_id,
                        row_no,
                        &mut anomalies,
                    );
                    let energy_price = Self::lenient_non_negative(
                        Self::field(&row, "energy_price"),
                        "energy_price",
                        &asset_id,
                        row_no,
                        &mut anomalies,
                    );
                    let cluster_label = row
                        .get("cluster")
                        .filter(|v| !v.is_empty())
                        .map(String::to_string);

                    assets.push(Asset::new(
                        asset_id.clone(),
                        latitude,
                        longitude,
                        rated_power_kw,
                        energy_price,
                        cluster_label,
                    ));
                    let pos = assets.len() - 1;
                    asset_positions.insert(asset_id.clone(), pos);
                    pos
                }
            };

            // ===== 部件字段(可回退的按文档化默认值回退)=====
            let install_date = Self::parse_install_date(
                Self::field(&row, "install_date"),
                &asset_id,
                &serial_number,
                row_no,
                &mut anomalies,
            );

            let replacement_cost = Self::lenient_non_negative(
                Self::field(&row, "replacement_cost"),
                "replacement_cost",
                &asset_id,
                row_no,
                &mut anomalies,
            );
            let salvage_value = Self::lenient_non_negative(
                Self::field(&row, "salvage_value"),
                "salvage_value",
                &asset_id,
                row_no,
                &mut anomalies,
            );

            let criticality = match CriticalityTier::parse_lenient(Self::field(&row, "criticality"))
            {
                Some(tier) => tier,
                None => {
                    anomalies.push(DataAnomaly::component(
                        &asset_id,
                        &serial_number,
                        AnomalyKind::MalformedField,
                        format!(
                            "第 {} 行 criticality 无法识别: {:?},回退 ROUTINE",
                            row_no,
                            Self::field(&row, "criticality")
                        ),
                    ));
                    CriticalityTier::Routine
                }
            };

            let power_impact_factor = Self::lenient_unit_interval(
                Self::field(&row, "power_impact_factor"),
                &asset_id,
                &serial_number,
                row_no,
                &mut anomalies,
            );
            let repair_hours = Self::lenient_non_negative(
                Self::field(&row, "repair_hours"),
                "repair_hours",
                &asset_id,
                row_no,
                &mut anomalies,
            );

            let component = Component::new(
                serial_number,
                Self::field(&row, "component_name").to_string(),
                lifetime_years,
                install_date,
                replacement_cost,
                salvage_value,
                criticality,
                power_impact_factor,
                repair_hours,
            );
            assets[asset_pos].attach_component(component);
        }

        info!(
            asset_count = assets.len(),
            component_count = assets.iter().map(Asset::component_count).sum::<usize>(),
            anomaly_count = anomalies.len(),
            skipped_rows,
            "舰队 CSV 加载完成"
        );

        Ok(LoadResult {
            assets,
            anomalies,
            skipped_rows,
        })
    }

    // ==========================================
    // 容错解析辅助
    // ==========================================

    /// 读取行内字段,缺失取空串
    fn field<'m>(row: &'m HashMap<String, String>, name: &str) -> &'m str {
        row.get(name).map(String::as_str).unwrap_or("")
    }

    /// 宽松解析 f64,失败回退 0.0 并记录异常
    fn lenient_f64(
        raw: &str,
        name: &str,
        asset_id: &str,
        row_no: usize,
        anomalies: &mut Vec<DataAnomaly>,
    ) -> f64 {
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                anomalies.push(DataAnomaly::asset(
                    asset_id,
                    AnomalyKind::MalformedField,
                    format!("第 {} 行 {} 无法解析: {:?},回退 0.0", row_no, name, raw),
                ));
                0.0
            }
        }
    }

    /// 宽松解析非负 f64,负值钳制为 0.0 并记录异常
    fn lenient_non_negative(
        raw: &str,
        name: &str,
        asset_id: &str,
        row_no: usize,
        anomalies: &mut Vec<DataAnomaly>,
    ) -> f64 {
        let value = Self::lenient_f64(raw, name, asset_id, row_no, anomalies);
        if value < 0.0 {
            anomalies.push(DataAnomaly::asset(
                asset_id,
                AnomalyKind::ValueOutOfRange,
                format!("第 {} 行 {} 为负: {},钳制为 0.0", row_no, name, value),
            ));
            0.0
        } else {
            value
        }
    }

    /// 宽松解析 [0,1] 区间系数,越界钳制并记录异常
    fn lenient_unit_interval(
        raw: &str,
        asset_id: &str,
        serial_number: &str,
        row_no: usize,
        anomalies: &mut Vec<DataAnomaly>,
    ) -> f64 {
        let value = match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                anomalies.push(DataAnomaly::component(
                    asset_id,
                    serial_number,
                    AnomalyKind::MalformedField,
                    format!(
                        "第 {} 行 power_impact_factor 无法解析: {:?},回退 0.0",
                        row_no, raw
                    ),
                ));
                return 0.0;
            }
        };

        if !(0.0..=1.0).contains(&value) {
            let clamped = value.clamp(0.0, 1.0);
            anomalies.push(DataAnomaly::component(
                asset_id,
                serial_number,
                AnomalyKind::ValueOutOfRange,
                format!(
                    "第 {} 行 power_impact_factor 超出 [0,1]: {},钳制为 {}",
                    row_no, value, clamped
                ),
            ));
            clamped
        } else {
            value
        }
    }

    /// 解析安装日期
    ///
    /// 空值返回 None(由健康度引擎按全额剩余寿命回退并上报);
    /// 非空但无法解析记录 MALFORMED_FIELD 异常后返回 None
    fn parse_install_date(
        raw: &str,
        asset_id: &str,
        serial_number: &str,
        row_no: usize,
        anomalies: &mut Vec<DataAnomaly>,
    ) -> Option<NaiveDate> {
        if raw.is_empty() {
            return None;
        }

        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                anomalies.push(DataAnomaly::component(
                    asset_id,
                    serial_number,
                    AnomalyKind::MalformedField,
                    format!("第 {} 行 install_date 无法解析: {:?}", row_no, raw),
                ));
                None
            }
        }
    }
}

impl Default for FleetCsvLoader {
    fn default() -> Self {
        Self::new()
    }
}
