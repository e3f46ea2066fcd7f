// ==========================================
// 风电场运维决策支持系统 - 部件健康度引擎
// ==========================================
// 依据: Engine_Specs_v0.2.md - 2. Health Engine
// 红线: 确定性 - 同一(静态属性, 评估日期)必须产生逐位一致的派生值
// ==========================================
// 职责: 计算剩余寿命 / 健康度 / 失效概率
// 输入: 部件静态属性 + 评估日期
// 输出: HealthEvaluation(含可能的数据异常)
// ==========================================

use crate::domain::anomaly::DataAnomaly;
use crate::domain::component::Component;
use crate::domain::types::AnomalyKind;
use chrono::NaiveDate;
use tracing::warn;

// ==========================================
// HealthEvaluation - 健康度评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct HealthEvaluation {
    pub remaining_days: i64,         // 剩余寿命(天),[0, lifetime_days]
    pub health_score: f64,           // 健康度 [0,1]
    pub failure_probability: f64,    // 失效概率 = 1 - 健康度²
    pub anomaly: Option<DataAnomaly>, // 评估过程中发现的数据异常
}

// ==========================================
// HealthEngine - 健康度引擎
// ==========================================
pub struct HealthEngine {
    // 无状态引擎,不需要注入依赖
}

impl HealthEngine {
    /// 创建新的健康度引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估单个部件 (依据 Engine_Specs 2)
    ///
    /// 计算口径:
    /// - lifetime_days = round(lifetime_years * 365)
    /// - remaining_days = clamp(lifetime_days - 已用天数, 0, lifetime_days)
    ///   安装日期晚于评估日期时按全额剩余寿命处理(同一钳制,保证确定性)
    /// - health_score = remaining_days / lifetime_days (lifetime_days <= 0 时为 0)
    /// - failure_probability = 1 - health_score²
    ///   二次曲线使新件风险极低、衰减末期风险陡增,下游成本/优先级
    ///   均按此曲线标定,不得改为线性
    ///
    /// # 参数
    /// - `component`: 待评估部件
    /// - `eval_date`: 评估日期(预测日期)
    ///
    /// # 返回
    /// HealthEvaluation;安装日期缺失时携带 MISSING_INSTALL_DATE 异常,
    /// 并按文档化回退策略取全额剩余寿命
    pub fn evaluate(&self, component: &Component, eval_date: NaiveDate) -> HealthEvaluation {
        let lifetime_days = component.lifetime_days();
        let asset_id = component.owner_asset_id.as_deref().unwrap_or("UNATTACHED");

        // 额定寿命非正: 健康度按 0 处理,上报异常
        if lifetime_days <= 0 {
            let anomaly = DataAnomaly::component(
                asset_id,
                &component.serial_number,
                AnomalyKind::NonPositiveLifetime,
                format!("额定寿命非正: {} 年", component.lifetime_years),
            );
            warn!(%anomaly, "健康度评估异常");
            return HealthEvaluation {
                remaining_days: 0,
                health_score: 0.0,
                failure_probability: 1.0,
                anomaly: Some(anomaly),
            };
        }

        // 安装日期缺失: 显式回退为全额剩余寿命,异常上报调用方
        let (remaining_days, anomaly) = match component.install_date {
            Some(install_date) => {
                let elapsed = (eval_date - install_date).num_days();
                ((lifetime_days - elapsed).clamp(0, lifetime_days), None)
            }
            None => {
                let anomaly = DataAnomaly::component(
                    asset_id,
                    &component.serial_number,
                    AnomalyKind::MissingInstallDate,
                    "安装日期缺失,回退为全额剩余寿命",
                );
                warn!(%anomaly, "健康度评估异常");
                (lifetime_days, Some(anomaly))
            }
        };

        let health_score = remaining_days as f64 / lifetime_days as f64;
        let failure_probability = 1.0 - health_score * health_score;

        HealthEvaluation {
            remaining_days,
            health_score,
            failure_probability,
            anomaly,
        }
    }
}

impl Default for HealthEngine {
    fn default() -> Self {
        Self::new()
    }
}
