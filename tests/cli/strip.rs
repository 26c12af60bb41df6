use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_strip_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(&[], "let a = 1; // one\n/* two */\nlet b = '//';\n")?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "let a = 1; \nlet b = '//';\n");
    assert_eq!(stderr(&output), "");
    Ok(())
}

#[test]
fn test_strip_stdin_dash_with_options() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(
        &["--safe", "--trim", "-"],
        "/*! license */\n/* note */\n\n\nrun();\n",
    )?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/*! license */\nrun();\n");
    Ok(())
}

#[test]
fn test_strip_stdin_keeps_regex() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(&[], "const re = /\\/\\/x/g; // drop\n")?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "const re = /\\/\\/x/g; \n");
    Ok(())
}

#[test]
fn test_strip_single_file_prints_without_header() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "/**\n * App\n */\nstart();\n")?;

    let output = test.run(&["src/app.js"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "start();\n");
    // Printing never touches the file.
    assert_eq!(test.read_file("src/app.js")?, "/**\n * App\n */\nstart();\n");
    Ok(())
}

#[test]
fn test_strip_directory_prints_headers() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "a(); // x\n")?;
    test.write_file("src/b.ts", "/* y */\nb();\n")?;
    test.write_file("src/notes.md", "<!-- untouched -->\n")?;
    test.write_file("node_modules/dep/index.js", "// vendored\n")?;

    let output = test.run(&["."])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "==> ./src/a.js <==\na(); \n\n==> ./src/b.ts <==\nb();\n"
    );
    Ok(())
}

#[test]
fn test_strip_write_rewrites_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/a.js", "// header\nexport const a = 1;\n")?;
    test.write_file("lib/b.js", "export const b = 2;\n")?;

    let output = test.run(&["--write", "lib"])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Stripped comments from 1 of 2 files");

    assert_eq!(test.read_file("lib/a.js")?, "export const a = 1;\n");
    assert_eq!(test.read_file("lib/b.js")?, "export const b = 2;\n");
    Ok(())
}

#[test]
fn test_strip_write_rejects_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(&["--write"], "x(); // c\n")?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--write needs file paths"));
    Ok(())
}

#[test]
fn test_strip_check_reports_files_with_comments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "a(); /* c */\n")?;
    test.write_file("b.js", "b();\n")?;

    let output = test.run(&["--check", "a.js", "b.js"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output).trim_end(), @r"
    a.js contains comments
    ✘ 1 of 2 files contain comments
    ");
    assert_eq!(test.read_file("a.js")?, "a(); /* c */\n");
    Ok(())
}

#[test]
fn test_strip_check_clean() -> Result<()> {
    let test = CliTest::with_file("a.js", "a();\n")?;

    let output = test.run(&["--check", "a.js"])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Checked 1 file - no comments found");
    Ok(())
}

#[test]
fn test_strip_unterminated_comment_fails() -> Result<()> {
    let test = CliTest::with_file("broken.js", "ok();\n/* never closed\n")?;

    let output = test.run(&["broken.js"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"error: broken.js:2:1: unterminated block comment starting at byte 6"
    );
    Ok(())
}

#[test]
fn test_strip_failures_counted_for_many_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "'open\n")?;
    test.write_file("b.js", "\"open\n")?;
    test.write_file("c.js", "fine(); // ok\n")?;

    let output = test.run(&["a.js", "b.js", "c.js"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "fine(); \n");
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"error: 2 files could not be processed (use -v for details)"
    );
    Ok(())
}

#[test]
fn test_strip_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".decommentrc.json", r#"{ "safe": true, "extensions": ["js"] }"#)?;
    test.write_file("src/a.js", "/*! keep */\n/* drop */\na();\n")?;
    test.write_file("src/b.ts", "// not scanned\n")?;

    let output = test.run(&["src"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/*! keep */\na();\n");
    Ok(())
}

#[test]
fn test_strip_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("conf/strip.json", r#"{ "trim": true }"#)?;

    let output = test.run_with_stdin(
        &["--config", "conf/strip.json"],
        "// a\n\n\nb();\n",
    )?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "b();\n");
    Ok(())
}

#[test]
fn test_strip_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".decommentrc.json", "{ broken")?;

    let output = test.run_with_stdin(&[], "a();\n")?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_strip_css_as_text() -> Result<()> {
    let test = CliTest::with_file(
        "style.css",
        "/* theme */\nbody { background: url(\"//cdn/x.png\"); } /* bg */\n",
    )?;

    let output = test.run(&["style.css"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "body { background: url(\"//cdn/x.png\"); } \n"
    );
    Ok(())
}

#[test]
fn test_strip_html_markup() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        "<!doctype html>\n<p>hi<!-- greeting --></p>\n",
    )?;

    let output = test.run(&["index.html"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "<!doctype html>\n<p>hi</p>\n");
    Ok(())
}

#[test]
fn test_strip_forced_markup_mode() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_with_stdin(&["--mode", "markup"], "text <!-- x --> // kept\n")?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "text  // kept\n");
    Ok(())
}

#[test]
fn test_strip_missing_path_warns() -> Result<()> {
    let test = CliTest::with_file("a.js", "a();\n")?;

    let output = test.run(&["a.js", "missing"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a();\n");
    assert_snapshot!(
        stderr(&output).trim_end(),
        @"warning: 1 path could not be accessed (use -v for details)"
    );
    Ok(())
}

#[test]
fn test_strip_write_keeps_jsx_text() -> Result<()> {
    let source = concat!(
        "// Greeting component\n",
        "export const Hello = ({ name }: { name: string }) => (\n",
        "  <p>Don't panic, {name}. Docs: https://example.com</p> /* trailing */\n",
        ");\n",
    );
    let test = CliTest::with_file("src/Hello.tsx", source)?;

    let output = test.run(&["--write", "src/Hello.tsx"])?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/Hello.tsx")?,
        concat!(
            "export const Hello = ({ name }: { name: string }) => (\n",
            "  <p>Don't panic, {name}. Docs: https://example.com</p> \n",
            ");\n",
        )
    );
    Ok(())
}
