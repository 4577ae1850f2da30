use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig, IndentType, LineFeed},
    CodeGenerator, CodegenConfig, Emit,
};

/// 使用 swc_css_codegen 生成 CSS 字符串
///
/// 保证：
/// - 使用 SWC 的标准 CSS 生成器
/// - 相同的样式表总是产生相同的输出
pub fn emit_css(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    emit_css_with(stylesheet, false)
}

/// 生成压缩后的 CSS 字符串
pub fn emit_css_minified(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    emit_css_with(stylesheet, true)
}

fn emit_css_with(stylesheet: &Stylesheet, minify: bool) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: IndentType::Space,
        indent_width: 2,
        linefeed: LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(&mut wr, CodegenConfig { minify });

    gen.emit(stylesheet)?;

    Ok(output)
}
