use regex_lite::Regex;

use crate::oss::ObjectStoreError;

/// 对象键的正则过滤器
///
/// 每次列举调用编译一次，匹配采用非锚定的子串搜索：
/// 表达式在键的任意位置命中即视为匹配，无需匹配整个键。
pub struct KeyFilter {
    pattern: String,
    regex: Regex,
}

impl KeyFilter {
    /// 编译过滤表达式
    ///
    /// 表达式非法时返回 [`ObjectStoreError::InvalidPattern`]，
    /// 调用方应在发起任何网络请求之前完成编译。
    pub fn new(pattern: &str) -> Result<Self, ObjectStoreError> {
        let regex = Regex::new(pattern).map_err(|e| ObjectStoreError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// 原始过滤表达式
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 键是否命中过滤表达式
    pub fn is_match(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}
