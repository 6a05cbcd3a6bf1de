pub(crate) fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "")
}

/// Lower-cases Latin letters so "三类人员A" and "三类人员a" compare equal.
pub(crate) fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_invisible_removes_bom_and_zero_width_space() {
        assert_eq!(strip_invisible("\u{feff}一建\u{200b}机电"), "一建机电");
    }

    #[test]
    fn fold_case_only_touches_cased_scripts() {
        assert_eq!(fold_case("三类人员A类 C1 挂了2W"), "三类人员a类 c1 挂了2w");
    }
}
