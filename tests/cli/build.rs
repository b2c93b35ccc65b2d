use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_follows_extensionless_import() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.ts", "import {x} from './b';"),
        ("b.ts", "export const x = 1;"),
    ])?;

    let output = test.command().args(["--include", "a.ts"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let expected = "\
## Project File Structure

The following files have been included in this context:

- a.ts
- b.ts

---

## File: a.ts

```typescript
import {x} from './b';
```

---

## File: b.ts

```typescript
export const x = 1;
```

---

";
    assert_eq!(test.context()?, expected);

    Ok(())
}

#[test]
fn test_progress_messages() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/a.ts", "import {x} from './b';"),
        ("src/b.ts", "export const x = 1;"),
    ])?;

    let output = test.command().output()?;
    let out = stdout(&output);

    assert!(out.contains(&format!("Scanning directory: {}", test.root().display())));
    assert!(out.contains("Found 2 files matching pattern"));
    assert!(out.contains(&format!(
        "Context built successfully to {} (2 files)",
        test.root().join("context.md").display()
    )));

    Ok(())
}

#[test]
fn test_import_cycle_terminates() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.ts", "import { b } from './b';\nexport const a = 1;"),
        ("b.ts", "import { a } from './a';\nexport const b = 2;"),
    ])?;

    let output = test.command().args(["-i", "a.ts"]).output()?;
    assert!(output.status.success());

    let context = test.context()?;
    assert_eq!(context.matches("## File: a.ts").count(), 1);
    assert_eq!(context.matches("## File: b.ts").count(), 1);

    Ok(())
}

#[test]
fn test_external_imports_are_not_followed() -> Result<()> {
    let test = CliTest::with_files(&[(
        "a.ts",
        "import _ from 'lodash';\nimport { z } from '@scope/pkg';\nexport default _;",
    )])?;
    test.write_file("lodash", "not a module")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let context = test.context()?;
    assert!(context.contains("- a.ts\n\n---"));
    assert!(!context.contains("## File: lodash"));

    Ok(())
}

#[test]
fn test_invalid_utf8_file_is_kept_and_followed() -> Result<()> {
    let test = CliTest::with_files(&[("b.js", "export const b = 2;")])?;
    test.write_file(
        "legacy.js",
        b"// \xa9 2020 Acme\nimport { b } from './b';\nexport default b;",
    )?;

    let output = test.command().args(["-i", "legacy.js"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stderr(&output).contains("could not be read"));

    let context = test.context()?;
    assert!(context.contains("- legacy.js\n- b.js\n"));
    assert!(context.contains("```javascript\n// \u{FFFD} 2020 Acme\nimport { b } from './b';"));
    assert!(!context.contains("// Error reading file: "));

    Ok(())
}

#[test]
fn test_missing_import_target_gets_placeholder() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.js", "const gone = require('./gone.js');"),
        ("ok.js", "export const ok = true;"),
    ])?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("1 file(s) could not be read"));

    let context = test.context()?;
    assert!(context.contains("- a.js\n- ok.js\n- gone.js\n"));
    assert!(context.contains("## File: gone.js\n\n```javascript\n// Error reading file: "));
    assert!(context.contains("## File: ok.js"));

    Ok(())
}

#[test]
fn test_brace_include_pattern() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/a.ts", "export const a = 1;"),
        ("src/b.tsx", "export const B = () => <b />;"),
        ("src/c.js", "export const c = 3;"),
    ])?;

    let output = test.command().args(["-i", "src/*.{ts,tsx}"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found 2 files matching pattern"));

    let context = test.context()?;
    assert!(context.contains("- src/a.ts\n- src/b.tsx\n\n---"));

    Ok(())
}

#[test]
fn test_stylesheet_imports_do_not_warn() -> Result<()> {
    let test = CliTest::with_files(&[
        ("app.tsx", "import './app.css';\nexport const App = () => <main />;"),
        ("app.css", "body { color: red; }\n"),
    ])?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(!stderr(&output).contains("could not be parsed"));
    assert!(test.context()?.contains("## File: app.css"));

    Ok(())
}

#[test]
fn test_no_imports_reads_only_scanned_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.ts", "import {x} from './b';"),
        ("b.ts", "export const x = 1;"),
    ])?;

    let output = test
        .command()
        .args(["--include", "a.ts", "--no-imports"])
        .output()?;
    assert!(output.status.success());

    let context = test.context()?;
    assert!(context.contains("## File: a.ts"));
    assert!(!context.contains("b.ts"));

    Ok(())
}

#[test]
fn test_max_depth_limits_traversal() -> Result<()> {
    let test = CliTest::with_files(&[
        ("d0.js", "import './d1';\nimport one from './d1';"),
        ("d1.js", "import two from './d2';"),
        ("d2.js", "import three from './d3';"),
        ("d3.js", "export default 3;"),
    ])?;

    let output = test
        .command()
        .args(["-i", "d0.js", "--max-depth", "1"])
        .output()?;
    assert!(output.status.success());
    assert!(test.context()?.contains("- d0.js\n- d1.js\n\n---"));

    let output = test
        .command()
        .args(["-i", "d0.js", "--max-depth", "2"])
        .output()?;
    assert!(output.status.success());
    assert!(test.context()?.contains("- d0.js\n- d1.js\n- d2.js\n\n---"));

    Ok(())
}

#[test]
fn test_no_comments_strips_by_file_type() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "app.ts",
            "// entry point\nimport './styles.css';\n/* setup */\nexport const run = () => 1;\n",
        ),
        ("styles.css", "/* theme */\nbody { color: red; }\n"),
    ])?;

    let output = test
        .command()
        .args(["-i", "app.ts", "--no-comments", "--no-file-structure"])
        .output()?;
    assert!(output.status.success());

    let expected = "\
## File: app.ts

```typescript
import './styles.css';
export const run = () => 1;

```

---

## File: styles.css

```css

body { color: red; }

```

---

";
    assert_eq!(test.context()?, expected);

    Ok(())
}

#[test]
fn test_comments_kept_by_default() -> Result<()> {
    let test = CliTest::with_files(&[("a.js", "// keep me\nexport {};")])?;

    test.command().output()?;

    assert!(test.context()?.contains("// keep me\nexport {};"));

    Ok(())
}

#[test]
fn test_custom_output_and_directory() -> Result<()> {
    let test = CliTest::with_files(&[(
        "packages/web/index.tsx",
        "export const App = () => <main />;",
    )])?;

    let output = test
        .command()
        .args(["packages/web", "--output", "out/web.md"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let context = test.read_file("out/web.md")?;
    assert!(context.contains("## File: index.tsx\n\n```tsx\n"));

    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".contextrc.json",
            r#"{ "include": ["**/*.md"], "includeFileStructure": false, "output": "llm.md" }"#,
        ),
        ("README.md", "# Project\n"),
        ("index.ts", "export {};"),
    ])?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("llm.md")?,
        "## File: README.md\n\n```markdown\n# Project\n\n```\n\n---\n\n"
    );

    Ok(())
}

#[test]
fn test_verbose_reports_parse_failures() -> Result<()> {
    let test = CliTest::with_files(&[
        ("broken.js", "const helper = require('./helper');\nfunction (\n"),
        ("helper.js", "module.exports = 1;"),
    ])?;

    let output = test.command().args(["-i", "broken.js", "-v"]).output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("warning: could not parse imports of broken.js"));
    assert!(stdout(&output).contains("helper.js"));
    assert!(test.context()?.contains("## File: helper.js"));

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--version").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("context-builder "));

    Ok(())
}

#[test]
fn test_output_comes_only_from_flag_or_config() -> Result<()> {
    let test = CliTest::with_files(&[("a.ts", "export {};")])?;

    let output = test
        .command()
        .env("CONTEXT_BUILDER_OUTPUT", "elsewhere.md")
        .output()?;
    assert!(output.status.success());

    assert!(test.root().join("context.md").exists());
    assert!(!test.root().join("elsewhere.md").exists());

    Ok(())
}
