// ==========================================
// 一年级班级名册统计 - 数据清洗器实现
// ==========================================
// 职责: TRIM / UPPER / NULL 标准化 / 标记规范化
// 说明: 希腊文小写（α, κ, ν, ο）经 to_uppercase 后同样匹配
//       汇总解析先 TRIM 再大写；合法性校验只大写
// ==========================================

use crate::domain::types::{Gender, YesNo};
use crate::importer::roster_importer_trait::DataCleaner as DataCleanerTrait;

#[derive(Debug, Clone, Copy, Default)]
pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn parse_gender(&self, value: Option<&str>) -> Option<Gender> {
        value.and_then(|v| Gender::from_token(&self.clean_text(v, true)))
    }

    fn parse_yes_no(&self, value: Option<&str>) -> Option<YesNo> {
        value.and_then(|v| YesNo::from_token(&self.clean_text(v, true)))
    }
}

impl DataCleaner {
    /// 性别标记是否合法
    ///
    /// 校验只做大写、不做 TRIM：" Α " 与纯空白单元格都不合法。
    /// 空单元格（NULL）视为合法，由缺失检查另行处理。
    pub fn is_valid_gender_token(&self, value: &str) -> bool {
        value.is_empty() || Gender::TOKENS.contains(&value.to_uppercase().as_str())
    }

    /// 是/否标记是否合法（规则同 is_valid_gender_token）
    pub fn is_valid_yes_no_token(&self, value: &str) -> bool {
        value.is_empty() || YesNo::TOKENS.contains(&value.to_uppercase().as_str())
    }
}
