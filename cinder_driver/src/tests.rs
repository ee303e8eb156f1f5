use std::{io::Write, path::PathBuf};

use tempfile::NamedTempFile;

use super::{execute, Argument, Error, Format, Parser};

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn argument(file: &NamedTempFile) -> Argument {
    Argument {
        file: file.path().to_path_buf(),
        dump_tokens: false,
        dump_syntax: false,
        format: Format::Debug,
    }
}

fn execute_to_string(argument: &Argument) -> Result<String, Error> {
    let mut output = Vec::new();
    execute(argument, &mut output)?;

    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn parse_arguments() {
    let argument =
        Argument::try_parse_from(["cinder", "main.cn", "--dump-syntax", "--format", "source"])
            .unwrap();

    assert_eq!(argument.file, PathBuf::from("main.cn"));
    assert!(argument.dump_syntax);
    assert!(!argument.dump_tokens);
    assert_eq!(argument.format, Format::Source);

    let argument = Argument::try_parse_from(["cinder", "main.cn"]).unwrap();
    assert_eq!(argument.format, Format::Debug);
}

#[test]
fn summary() {
    let file = source_file("int a = 8;\nvoid f(int x) { int y = 1; }\n");
    let output = execute_to_string(&argument(&file)).unwrap();

    assert!(output.contains("[info]:"));
    assert!(output.contains("2 declaration(s) parsed"));
}

#[test]
fn dump_tokens() {
    let file = source_file("int a = 8;");
    let argument = Argument {
        dump_tokens: true,
        ..argument(&file)
    };

    let output = execute_to_string(&argument).unwrap();

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "Keyword int",
            "Identifier a",
            "Assign =",
            "Integer 8",
            "Semicolon ;",
            "EndOfInput",
        ]
    );
}

#[test]
fn dump_syntax_as_source() {
    let file = source_file("float b=3.5;char c='x';");
    let argument = Argument {
        dump_syntax: true,
        format: Format::Source,
        ..argument(&file)
    };

    let output = execute_to_string(&argument).unwrap();

    assert_eq!(output, "float b = 3.5;\nchar c = 'x';\n");
}

#[test]
fn dump_syntax_as_debug() {
    let file = source_file("int a = 8;");
    let argument = Argument {
        dump_syntax: true,
        ..argument(&file)
    };

    let output = execute_to_string(&argument).unwrap();

    assert!(output.starts_with("Program {"));
    assert!(output.contains("VariableDeclaration {"));
    assert!(output.contains("Integer(\n"));
}

#[test]
fn lexical_error_fails() {
    let file = source_file("int a = 1.2.3;");
    let error = execute_to_string(&argument(&file)).unwrap_err();

    assert!(matches!(
        error,
        Error::Lexical(cinder_lexical::error::Error::DuplicateDecimalPoint(..))
    ));
}

#[test]
fn syntax_error_fails() {
    let file = source_file("int a = ;");
    let error = execute_to_string(&argument(&file)).unwrap_err();

    assert!(matches!(
        error,
        Error::Syntax(cinder_syntax::error::Error::UnexpectedToken(..))
    ));
}

#[test]
fn missing_file_fails() {
    let directory = tempfile::tempdir().unwrap();
    let argument = Argument {
        file: directory.path().join("missing.cn"),
        dump_tokens: false,
        dump_syntax: false,
        format: Format::Debug,
    };

    let error = execute_to_string(&argument).unwrap_err();

    assert!(matches!(error, Error::Load { .. }));
    assert!(error.to_string().contains("missing.cn"));
}

#[test]
fn invalid_utf8_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x69, 0x6e, 0x74, 0xff]).unwrap();

    let error = execute_to_string(&argument(&file)).unwrap_err();

    assert!(matches!(error, Error::Load {
        source: cinder_base::source_file::Error::Utf8Error(..),
        ..
    }));
}

#[test]
fn empty_file() {
    let file = source_file("");
    let output = execute_to_string(&argument(&file)).unwrap();

    assert!(output.contains("0 declaration(s) parsed"));
}
