// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

/// 名称为空或全部字符被过滤时使用的占位 slug
pub const EMPTY_SLUG: &str = "no-name";

static NUMERIC_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)-(\d+)$").expect("valid slug suffix pattern"));

/// 将名称规范化为 URL 友好的 slug
///
/// 音译为 ASCII、转小写、丢弃 `[a-z0-9 ]` 以外的字符，
/// 连续空白折叠为单个 `-`。结果为空时返回 [`EMPTY_SLUG`]。
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name).to_lowercase();
    let kept: String = ascii
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    let slug = kept.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// 计算发生冲突后的下一个候选 slug
///
/// `foo-3` -> `foo-4`，其余情况（包括后缀数字溢出）追加 `-1`
pub fn next_slug_candidate(slug: &str) -> String {
    if let Some(caps) = NUMERIC_SUFFIX.captures(slug) {
        if let Some(next) = caps[2].parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
            return format!("{}-{}", &caps[1], next);
        }
    }
    format!("{}-1", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Senior Rust Developer"), "senior-rust-developer");
        assert_eq!(slugify("  Backend   Engineer \t(Remote) "), "backend-engineer-remote");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Lập trình viên Rust"), "lap-trinh-vien-rust");
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), EMPTY_SLUG);
        assert_eq!(slugify("!!! ???"), EMPTY_SLUG);
    }

    #[test]
    fn test_next_slug_candidate() {
        assert_eq!(next_slug_candidate("rust-dev"), "rust-dev-1");
        assert_eq!(next_slug_candidate("rust-dev-1"), "rust-dev-2");
        assert_eq!(next_slug_candidate("rust-dev-9"), "rust-dev-10");
        assert_eq!(next_slug_candidate("no-name"), "no-name-1");
        assert_eq!(
            next_slug_candidate("build-18446744073709551615"),
            "build-18446744073709551615-1"
        );
        assert_eq!(
            next_slug_candidate("build-99999999999999999999"),
            "build-99999999999999999999-1"
        );
    }
}
