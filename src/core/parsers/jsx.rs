use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Pick the swc syntax for a file from its extension.
///
/// `.ts`/`.mts`/`.cts` use plain TypeScript so `<T>value` assertions parse,
/// `.tsx` enables JSX on top of TypeScript, and everything else is treated as
/// ECMAScript with JSX.
pub fn syntax_for_path(file_path: &Path) -> Syntax {
    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JavaScript/TypeScript source string into a module AST.
pub fn parse_source(code: String, file_path: &Path) -> Result<Module> {
    use swc_common::GLOBALS;

    let source_map = Arc::new(SourceMap::default());

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.to_path_buf()).into(),
            code,
        );

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path.display(), e))
    })
}
