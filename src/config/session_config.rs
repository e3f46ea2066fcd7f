// ==========================================
// 风电场运维决策支持系统 - 评估会话配置
// ==========================================
// 依据: Engine_Specs_v0.2.md - 10. 配置项全集
// ==========================================
// 职责: 可调参数的显式强类型配置与校验
// 红线: 非法取值在进入会话状态前拒绝,原有效配置保持不变
// 说明: 不做键值反射式赋值,每个参数一个显式校验 setter
// ==========================================

use crate::engine::cost::CostModel;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("检修阈值非法: {0} (必须 >= 0)")]
    NegativeThreshold(f64),

    #[error("距离费率非法: {0} (必须 > 0)")]
    NonPositiveDistanceRate(f64),

    #[error("日费率非法: {field} = {value} (必须 >= 0)")]
    NegativeDayRate { field: &'static str, value: f64 },

    #[error("日期格式错误: {0} (期望 YYYY-MM-DD)")]
    InvalidDate(String),
}

// ==========================================
// SessionConfig - 评估会话配置
// ==========================================
// 检修阈值历史上出现过多个标定值且无定标依据,
// 因此不提供默认值,必须由调用方显式给定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    prediction_date: NaiveDate,   // 预测日期(默认今天,可前移模拟未来磨损)
    repair_threshold_ratio: f64,  // 检修出动阈值(最低效益成本比)
    cost_model: CostModel,        // 成本模型(距离费率/班组/运维船日费率)
}

impl SessionConfig {
    /// 创建配置
    ///
    /// # 参数
    /// - `repair_threshold_ratio`: 检修出动阈值,必须显式给定且 >= 0
    ///
    /// # 返回
    /// 预测日期取今天、成本模型取默认费率的配置
    pub fn new(repair_threshold_ratio: f64) -> Result<Self, ConfigError> {
        if repair_threshold_ratio < 0.0 {
            return Err(ConfigError::NegativeThreshold(repair_threshold_ratio));
        }

        Ok(Self {
            prediction_date: Local::now().date_naive(),
            repair_threshold_ratio,
            cost_model: CostModel::default(),
        })
    }

    // ==========================================
    // 读取
    // ==========================================

    pub fn prediction_date(&self) -> NaiveDate {
        self.prediction_date
    }

    pub fn repair_threshold_ratio(&self) -> f64 {
        self.repair_threshold_ratio
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    // ==========================================
    // 校验 setter (依据 Engine_Specs 10)
    // ==========================================

    /// 设置预测日期
    pub fn set_prediction_date(&mut self, date: NaiveDate) {
        self.prediction_date = date;
    }

    /// 设置检修出动阈值 (>= 0)
    pub fn set_repair_threshold_ratio(&mut self, ratio: f64) -> Result<(), ConfigError> {
        if ratio < 0.0 || !ratio.is_finite() {
            return Err(ConfigError::NegativeThreshold(ratio));
        }
        self.repair_threshold_ratio = ratio;
        Ok(())
    }

    /// 设置距离费率 (> 0)
    pub fn set_cost_per_distance_unit(&mut self, rate: f64) -> Result<(), ConfigError> {
        if rate <= 0.0 || !rate.is_finite() {
            return Err(ConfigError::NonPositiveDistanceRate(rate));
        }
        self.cost_model.cost_per_distance_unit = rate;
        Ok(())
    }

    /// 设置班组日费率 (>= 0)
    pub fn set_crew_cost_per_day(&mut self, rate: f64) -> Result<(), ConfigError> {
        if rate < 0.0 || !rate.is_finite() {
            return Err(ConfigError::NegativeDayRate {
                field: "crew_cost_per_day",
                value: rate,
            });
        }
        self.cost_model.crew_cost_per_day = rate;
        Ok(())
    }

    /// 设置运维船日费率 (>= 0)
    pub fn set_vessel_cost_per_day(&mut self, rate: f64) -> Result<(), ConfigError> {
        if rate < 0.0 || !rate.is_finite() {
            return Err(ConfigError::NegativeDayRate {
                field: "vessel_cost_per_day",
                value: rate,
            });
        }
        self.cost_model.vessel_cost_per_day = rate;
        Ok(())
    }

    // ==========================================
    // 解析辅助
    // ==========================================

    /// 解析 YYYY-MM-DD 格式的预测日期(配置面输入口径)
    pub fn parse_date(raw: &str) -> Result<NaiveDate, ConfigError> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| ConfigError::InvalidDate(raw.to_string()))
    }
}
