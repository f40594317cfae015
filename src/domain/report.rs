// ==========================================
// 一年级班级名册统计 - 校验报告
// ==========================================
// 缺陷是数据而不是错误：由调用方决定是否继续
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ValidationReport - 校验报告
// ==========================================
// 创建后不可修改；is_valid 由 defects 是否为空推导
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    is_valid: bool,
    defects: Vec<String>,
}

impl ValidationReport {
    pub fn from_defects(defects: Vec<String>) -> Self {
        Self {
            is_valid: defects.is_empty(),
            defects,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// 缺陷列表（按检查顺序）
    pub fn defects(&self) -> &[String] {
        &self.defects
    }

    pub fn into_defects(self) -> Vec<String> {
        self.defects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_follows_defects() {
        let report = ValidationReport::from_defects(vec![]);
        assert!(report.is_valid());
        assert!(report.defects().is_empty());

        let report = ValidationReport::from_defects(vec!["Το αρχείο είναι κενό".to_string()]);
        assert!(!report.is_valid());
        assert_eq!(report.defects().len(), 1);
    }

    #[test]
    fn test_serialize_shape() {
        let report = ValidationReport::from_defects(vec!["x".to_string()]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_valid"], serde_json::json!(false));
        assert_eq!(json["defects"], serde_json::json!(["x"]));
    }
}
