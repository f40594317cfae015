// ==========================================
// 一年级班级名册统计 - 领域类型定义
// ==========================================
// 职责: 性别 / 是否 两类标记的规范值
// 规则: 希腊字母与拉丁形近字母视为同一标记
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 性别 (Gender)
// ==========================================
// 输入标记: Α/A = 男, Κ/K = 女
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,   // Α (ΑΓΟΡΙ)
    Female, // Κ (ΚΟΡΙΤΣΙ)
}

impl Gender {
    /// 合法输入标记（大写后比较）
    pub const TOKENS: [&'static str; 4] = ["Α", "Κ", "A", "K"];

    /// 从已清洗（TRIM + UPPER）的标记解析
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Α" | "A" => Some(Gender::Male),
            "Κ" | "K" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Α"),
            Gender::Female => write!(f, "Κ"),
        }
    }
}

// ==========================================
// 是/否标记 (YesNo)
// ==========================================
// 输入标记: Ν/N = ΝΑΙ, Ο/O = ΟΧΙ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// 合法输入标记（大写后比较）
    pub const TOKENS: [&'static str; 4] = ["Ν", "Ο", "N", "O"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Ν" | "N" => Some(YesNo::Yes),
            "Ο" | "O" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "Ν"),
            YesNo::No => write!(f, "Ο"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_greek_and_latin_tokens() {
        assert_eq!(Gender::from_token("Α"), Some(Gender::Male));
        assert_eq!(Gender::from_token("A"), Some(Gender::Male));
        assert_eq!(Gender::from_token("Κ"), Some(Gender::Female));
        assert_eq!(Gender::from_token("K"), Some(Gender::Female));
        assert_eq!(Gender::from_token("X"), None);
        // 未清洗的小写不匹配，由 DataCleaner 负责大写
        assert_eq!(Gender::from_token("α"), None);
    }

    #[test]
    fn test_yes_no_tokens() {
        assert_eq!(YesNo::from_token("Ν"), Some(YesNo::Yes));
        assert_eq!(YesNo::from_token("N"), Some(YesNo::Yes));
        assert_eq!(YesNo::from_token("Ο"), Some(YesNo::No));
        assert_eq!(YesNo::from_token("O"), Some(YesNo::No));
        assert_eq!(YesNo::from_token("ΝΑΙ"), None);
        assert!(YesNo::Yes.is_yes());
        assert!(!YesNo::No.is_yes());
    }
}
