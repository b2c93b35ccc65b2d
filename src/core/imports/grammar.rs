//! Grammar-aware specifier detection.
//!
//! Parses the file with swc and collects the module specifier of every static
//! import, re-export and literal dynamic `import()`.

use std::path::Path;

use anyhow::Result;
use swc_ecma_ast::{
    CallExpr, Callee, ExportAll, Expr, ImportDecl, Lit, NamedExport, Str,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::parsers::jsx::parse_source;

/// Specifiers found by parsing `content`, in source order.
///
/// Returns an error when the file cannot be parsed; callers fall back to the
/// regex pass.
pub fn grammar_specifiers(file_path: &Path, content: &str) -> Result<Vec<String>> {
    let module = parse_source(content.to_string(), file_path)?;

    let mut collector = SpecifierCollector::default();
    module.visit_with(&mut collector);

    Ok(collector.specifiers)
}

#[derive(Default)]
struct SpecifierCollector {
    specifiers: Vec<String>,
}

impl SpecifierCollector {
    fn push(&mut self, src: &Str) {
        if let Some(value) = src.value.as_str() {
            self.specifiers.push(value.to_string());
        }
    }
}

impl Visit for SpecifierCollector {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.push(&node.src);
    }

    fn visit_export_all(&mut self, node: &ExportAll) {
        self.push(&node.src);
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        if let Some(src) = &node.src {
            self.push(src);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Import(_) = node.callee
            && let Some(arg) = node.args.first()
            && let Expr::Lit(Lit::Str(s)) = &*arg.expr
        {
            self.push(s);
        }
        node.visit_children_with(self);
    }
}
