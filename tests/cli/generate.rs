use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const TYPING_INDICATORS: &str = r#"{
  "key.diagnostic_stage" : "source.diagnostic.stage.swift.parse",
  "key.length" : 16384,
  "key.offset" : 0,
  "key.substructure" : [
    {
      "key.kind" : "source.lang.swift.decl.protocol",
      "key.name" : "TypingIndicators",
      "key.runtime_name" : "OWSTypingIndicators"
    },
    {
      "key.kind" : "source.lang.swift.decl.class",
      "key.name" : "TypingIndicatorsImpl",
      "key.runtime_name" : "OWSTypingIndicatorsImpl"
    },
    {
      "key.kind" : "source.lang.swift.decl.extension",
      "key.name" : "TSThread"
    }
  ]
}"#;

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("--src-path"));
    assert!(stdout.contains("--swift-bridging-path"));
    assert!(stdout.contains("--intermediates"));

    Ok(())
}

#[test]
fn test_missing_required_flags() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(!output.status.success());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_generates_header_per_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "SignalServiceKit/src/TypingIndicators.swift",
        TYPING_INDICATORS,
    )?;

    let output = test.generate_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Generated 1 header from 1 Swift file in 3 directories"));
    assert!(stdout.contains(&format!(
        "Skipping: {} (no bridgeable declarations)",
        test.out_dir().join("Signal").join("Signal-Swift.h").display()
    )));
    assert!(!stdout.contains("Using config:"));

    let header = test.read_file("out/SignalServiceKit/SignalServiceKit-Swift.h")?;
    assert_snapshot!(header, @r"
    //
    //  Copyright (c) 2019 Signal. All rights reserved.
    //

    #import <Foundation/Foundation.h>

    // NOTE: This file is generated by bridgestub.
    // Do not manually edit it, instead run `sds_codegen.sh`.

    @protocol OWSTypingIndicators
    @end

    @interface OWSTypingIndicatorsImpl : NSObject
    @end
    ");

    // Directories without bridgeable declarations get no header at all.
    assert!(!test.out_dir().join("Signal").exists());
    assert!(!test.out_dir().join("SignalMessaging").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_skips_underscored_declarations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Signal/Foo.swift",
        r#"{ "key.substructure" : [
            { "key.kind" : "source.lang.swift.decl.protocol", "key.name" : "Foo" },
            { "key.kind" : "source.lang.swift.decl.class", "key.name" : "_Bar" }
        ] }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let header = test.read_file("out/Signal/Signal-Swift.h")?;
    assert!(header.contains("@protocol Foo\n@end"));
    assert!(!header.contains("Bar"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_dependency_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Pods/PromiseKit/Sources/Promise.swift",
        r#"{ "key.substructure" : [
            { "key.kind" : "source.lang.swift.decl.class", "key.name" : "AnyPromise" }
        ] }"#,
    )?;
    test.write_file(
        "Pods/Pods.xcodeproj/Hidden.swift",
        r#"{ "key.substructure" : [
            { "key.kind" : "source.lang.swift.decl.class", "key.name" : "Hidden" }
        ] }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    let header = test.read_file("out/PromiseKit/PromiseKit-Swift.h")?;
    assert!(header.contains("@interface AnyPromise : NSObject"));
    assert!(!test.out_dir().join("Pods.xcodeproj").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_rerun_is_idempotent_and_clears_stale_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;
    test.write_file("out/Stale/Stale-Swift.h", "// stale")?;

    assert!(test.generate_command().output()?.status.success());
    let first = test.read_file("out/Signal/Signal-Swift.h")?;
    assert!(!test.out_dir().join("Stale").exists());

    assert!(test.generate_command().output()?.status.success());
    let second = test.read_file("out/Signal/Signal-Swift.h")?;

    assert_eq!(first, second);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_intermediates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;

    let output = test.generate_command().arg("--intermediates").output()?;
    assert!(output.status.success());

    // The fake parser echoes the file, and dumps are stored trimmed.
    assert_eq!(
        test.read_file("Signal/Foo.swift.ast")?,
        TYPING_INDICATORS.trim()
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_without_intermediates_nothing_is_written_to_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;

    assert!(test.generate_command().output()?.status.success());

    assert!(!test.root().join("Signal/Foo.swift.ast").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_parser_failure_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_executable(
        "bin/sourcekitten",
        "#!/bin/sh\ncat \"$3\"\necho 'parse warning' >&2\nexit 2\n",
    )?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;

    let output = test.generate_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert!(stderr.contains("exit code 2"));
    assert!(stderr.contains("parse warning"));
    assert!(test.read_file("out/Signal/Signal-Swift.h")?.contains("OWSTypingIndicators"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_missing_name_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Signal/Broken.swift",
        r#"{ "key.substructure" : [ { "key.kind" : "source.lang.swift.decl.class" } ] }"#,
    )?;

    let output = test.generate_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("\u{2718} error: "));
    assert!(stderr.contains("class is missing name"));
    assert!(stderr.contains("Broken.swift"));

    Ok(())
}

#[test]
fn test_missing_parser_aborts_before_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bridgestubrc.json", r#"{ "parser": "bridgestub-missing-parser" }"#)?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;
    test.write_file("out/Keep/Keep-Swift.h", "// keep")?;

    let output = test.generate_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Missing bridgestub-missing-parser"));
    // Nothing was touched: the old destination tree is still there.
    assert!(test.out_dir().join("Keep/Keep-Swift.h").exists());
    assert!(!test.out_dir().join("Signal").exists());

    Ok(())
}

#[test]
fn test_destination_containing_sources_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Signal/Foo.swift", TYPING_INDICATORS)?;

    let output = test
        .command()
        .arg("--src-path")
        .arg(test.root().join("Signal"))
        .arg("--swift-bridging-path")
        .arg(test.root())
        .output()?;

    let stderr = String::from_utf8(output.stderr)?;

    assert!(!output.status.success());
    assert!(stderr.contains("contains the source path"));
    assert!(test.root().join("Signal/Foo.swift").exists());

    Ok(())
}
