// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 翻译消息（带参数, 指定语言）
///
/// 不读写全局语言设置, 供按会话选择语言的调用方使用
///
/// # 示例
/// ```no_run
/// use sheet_stage::i18n::t_with_args_in;
/// let msg = t_with_args_in("en", "import.saved_rows", &[("count", "3")]);
/// ```
pub fn t_with_args_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    fill_args(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn fill_args(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
