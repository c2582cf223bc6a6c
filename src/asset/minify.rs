//! Minification for the stylesheet, the navigation script and any
//! copied `.css`/`.js` static assets.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Minify JavaScript source code.
///
/// Returns `None` when the source does not parse.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify by file extension, skipping files already named `*.min.*`.
pub fn minify_by_ext(path: &Path, content: &str) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem.ends_with(".min") {
        return None;
    }
    match path.extension()?.to_str()? {
        "js" => minify_js(content),
        "css" => minify_css(content),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let css = ".a {\n  color: red;\n}\n\n.b { margin: 0px; }\n";
        let min = minify_css(css).unwrap();
        assert!(min.len() < css.len());
        assert!(min.contains(".a{color:red}"));
    }

    #[test]
    fn test_minify_js() {
        let js = "(() => {\n  // comment\n  const answer = 40 + 2;\n  console.log(answer);\n})();\n";
        let min = minify_js(js).unwrap();
        assert!(min.len() < js.len());
        assert!(!min.contains("comment"));
    }

    #[test]
    fn test_minify_js_rejects_invalid() {
        assert!(minify_js("const = ;").is_none());
    }

    #[test]
    fn test_minify_by_ext() {
        assert!(minify_by_ext(Path::new("a.css"), ".a { color: red; }").is_some());
        assert!(minify_by_ext(Path::new("a.min.css"), ".a { color: red; }").is_none());
        assert!(minify_by_ext(Path::new("logo.png"), "").is_none());
    }
}
