/// 将原始类名转义为可直接写进选择器的形式
///
/// 例如：
/// - "surface-500/50" → "surface-500\/50"
/// - "from-10%" → "from-10\%"
/// - "md:bg-blue-500" → "md\:bg-blue-500"
///
/// 开头的数字使用十六进制码点转义（"0a" → "\30 a"）。
pub fn escape_class_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if c == '\0' {
            escaped.push('\u{FFFD}');
        } else if i == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else if c.is_ascii_control() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }

    escaped
}
