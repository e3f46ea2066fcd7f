// ==========================================
// 风电场运维决策支持系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 文件级错误终止导入;行级问题降级为数据异常,
//       单条坏记录不得阻断整批导入
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}(仅支持 .csv)")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 表头相关错误 =====
    #[error("缺少必需列: {0}")]
    MissingColumn(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}
