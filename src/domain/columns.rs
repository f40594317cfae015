// ==========================================
// 一年级班级名册统计 - 列名词表
// ==========================================
// 输入表头必须与下列名称完全一致（区分大小写，无本地化）
// ==========================================

/// 姓名
pub const NAME: &str = "ΟΝΟΜΑ";
/// 性别
pub const GENDER: &str = "ΦΥΛΟ";
/// 教师子女
pub const EDUCATOR_CHILD: &str = "ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ";
/// 活跃
pub const ENERGETIC: &str = "ΖΩΗΡΟΣ";
/// 特殊需求
pub const SPECIAL_NEEDS: &str = "ΙΔΙΑΙΤΕΡΟΤΗΤΑ";
/// 希腊语良好
pub const GREEK_PROFICIENT: &str = "ΚΑΛΗ_ΓΝΩΣΗ_ΕΛΛΗΝΙΚΩΝ";
/// 朋友
pub const FRIENDS: &str = "ΦΙΛΟΙ";
/// 冲突
pub const CONFLICT: &str = "ΣΥΓΚΡΟΥΣΗ";
/// 班级
pub const CLASSROOM: &str = "ΤΜΗΜΑ";

/// 必需列（顺序即缺列报告顺序）
pub const REQUIRED_COLUMNS: [&str; 9] = [
    NAME,
    GENDER,
    EDUCATOR_CHILD,
    ENERGETIC,
    SPECIAL_NEEDS,
    GREEK_PROFICIENT,
    FRIENDS,
    CONFLICT,
    CLASSROOM,
];

/// 是/否编码列
pub const YES_NO_COLUMNS: [&str; 4] = [EDUCATOR_CHILD, ENERGETIC, SPECIAL_NEEDS, GREEK_PROFICIENT];

// ==========================================
// 汇总表列名
// ==========================================

pub const SUMMARY_INDEX_LABEL: &str = "ΤΜΗΜΑ";

/// 汇总表计数列（固定顺序）
pub const SUMMARY_COLUMNS: [&str; 7] = [
    "ΑΓΟΡΙΑ",
    "ΚΟΡΙΤΣΙΑ",
    "ΠΑΙΔΙ_ΕΚΠΑΙΔΕΥΤΙΚΟΥ",
    "ΖΩΗΡΟΙ",
    "ΙΔΙΑΙΤΕΡΟΤΗΤΑ",
    "ΓΝΩΣΗ ΕΛΛ.",
    "ΣΥΝΟΛΟ",
];
