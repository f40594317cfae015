// ==========================================
// 一年级班级名册统计 - 班级排序
// ==========================================
// 规则: 取班级标签中第一段数字（按 f64 比较）升序
//       数字包括所有 Unicode 十进制数字（如 ٣、３）
// 回退: 只要有一个标签取不到数字，全部按完整标签字典序
// ==========================================

use crate::domain::summary::ClassroomSummary;
use regex::Regex;
use std::sync::LazyLock;

/// 第一段数字
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// 单个十进制数字字符
static DIGIT_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// 实际采用的排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassroomOrdering {
    Numeric,
    Lexicographic,
}

/// 提取班级排序键（第一段数字）
///
/// # 返回
/// - Some(f64): 找到数字段
/// - None: 标签中没有数字
pub fn classroom_sort_key(label: &str) -> Option<f64> {
    let digits = DIGIT_RUN.find(label)?;
    digits.as_str().chars().try_fold(0.0_f64, |acc, c| {
        decimal_value(c).map(|d| acc * 10.0 + f64::from(d))
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// 十进制数字字符的数值
///
/// Unicode 十进制数字总是以 0..9 连续 10 个码位成组分配，
/// 因此数值等于该字符在连续数字码位段中的偏移量对 10 取余。
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0u32;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// 就地排序汇总行
///
/// 先按标签字典序排列，再按数字键做稳定排序；
/// 数字键相同的班级因此保持字典序。
pub fn sort_classrooms(rows: &mut Vec<ClassroomSummary>) -> ClassroomOrdering {
    rows.sort_by(|a, b| a.classroom.cmp(&b.classroom));

    let keys: Option<Vec<f64>> = rows
        .iter()
        .map(|row| classroom_sort_key(&row.classroom))
        .collect();

    let Some(keys) = keys else {
        tracing::debug!("存在不含数字的班级标签，使用字典序");
        return ClassroomOrdering::Lexicographic;
    };

    let mut keyed: Vec<(f64, ClassroomSummary)> = keys.into_iter().zip(rows.drain(..)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    rows.extend(keyed.into_iter().map(|(_, row)| row));

    ClassroomOrdering::Numeric
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(labels: &[&str]) -> Vec<ClassroomSummary> {
        labels.iter().map(|l| ClassroomSummary::empty(*l)).collect()
    }

    fn labels(rows: &[ClassroomSummary]) -> Vec<&str> {
        rows.iter().map(|r| r.classroom.as_str()).collect()
    }

    #[test]
    fn test_sort_key_first_digit_run() {
        assert_eq!(classroom_sort_key("Τμήμα3"), Some(3.0));
        assert_eq!(classroom_sort_key("Α12β7"), Some(12.0));
        assert_eq!(classroom_sort_key("007"), Some(7.0));
        assert_eq!(classroom_sort_key("Α"), None);
    }

    #[test]
    fn test_sort_key_unicode_digits() {
        // 阿拉伯-印度数字、全角数字
        assert_eq!(classroom_sort_key("Τμήμα٣"), Some(3.0));
        assert_eq!(classroom_sort_key("Α١٢"), Some(12.0));
        assert_eq!(classroom_sort_key("Β１０"), Some(10.0));
        assert_eq!(classroom_sort_key("٠"), Some(0.0));
    }

    #[test]
    fn test_unicode_digits_sort_numerically() {
        let mut data = rows(&["Τμήμα10", "Τμήμα٣", "Τμήμα2"]);

        let ordering = sort_classrooms(&mut data);

        assert_eq!(ordering, ClassroomOrdering::Numeric);
        assert_eq!(labels(&data), vec!["Τμήμα2", "Τμήμα٣", "Τμήμα10"]);
    }

    #[test]
    fn test_numeric_aware_order() {
        let mut data = rows(&["Τμήμα3", "Τμήμα10", "Τμήμα2"]);

        let ordering = sort_classrooms(&mut data);

        assert_eq!(ordering, ClassroomOrdering::Numeric);
        assert_eq!(labels(&data), vec!["Τμήμα2", "Τμήμα3", "Τμήμα10"]);
    }

    #[test]
    fn test_fallback_is_all_or_nothing() {
        let mut data = rows(&["Α10", "ΓΥΜΝ", "Α2"]);

        let ordering = sort_classrooms(&mut data);

        assert_eq!(ordering, ClassroomOrdering::Lexicographic);
        assert_eq!(labels(&data), vec!["Α10", "Α2", "ΓΥΜΝ"]);
    }

    #[test]
    fn test_equal_keys_keep_lexicographic_order() {
        let mut data = rows(&["Β1", "Α1", "Α2"]);

        sort_classrooms(&mut data);

        assert_eq!(labels(&data), vec!["Α1", "Β1", "Α2"]);
    }

    #[test]
    fn test_empty_input() {
        let mut data = Vec::new();
        assert_eq!(sort_classrooms(&mut data), ClassroomOrdering::Numeric);
        assert!(data.is_empty());
    }
}
