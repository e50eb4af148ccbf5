// tests/source_discovery.rs

use std::error::Error;
use std::fs;

use tempfile::tempdir;

use zbuild::source::{discover_sources, SourceFamily};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn discovers_zig_entry_then_c_then_cpp_in_sorted_order() -> TestResult {
    let dir = tempdir()?;
    let src = dir.path().join("src");

    fs::create_dir_all(src.join("audio"))?;
    fs::write(src.join("main.zig"), "")?;
    fs::write(src.join("zz.c"), "")?;
    fs::write(src.join("audio/mixer.c"), "")?;
    fs::write(src.join("audio/reverb.cpp"), "")?;
    fs::write(src.join("README.md"), "")?;

    let sources = discover_sources(&src)?;

    let families: Vec<SourceFamily> = sources.iter().map(|s| s.family).collect();
    assert_eq!(
        families,
        vec![
            SourceFamily::Zig,
            SourceFamily::C,
            SourceFamily::C,
            SourceFamily::Cpp,
        ]
    );

    assert_eq!(sources[0].path, src.join("main.zig"));
    // C files sorted by path: audio/mixer.c before zz.c.
    assert_eq!(sources[1].path, src.join("audio/mixer.c"));
    assert_eq!(sources[2].path, src.join("zz.c"));
    assert_eq!(sources[3].path, src.join("audio/reverb.cpp"));

    Ok(())
}

#[test]
fn a_tree_without_the_zig_entry_yields_only_c_family_sources() -> TestResult {
    let dir = tempdir()?;
    let src = dir.path().join("src");

    fs::create_dir_all(&src)?;
    fs::write(src.join("a.c"), "")?;
    fs::write(src.join("b.cpp"), "")?;

    let sources = discover_sources(&src)?;
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| s.family != SourceFamily::Zig));

    Ok(())
}

#[test]
fn nested_zig_files_are_not_picked_up_as_entries() -> TestResult {
    // Only `main.zig` directly under the source root is the entry point;
    // other Zig files are pulled in by the compiler itself.
    let dir = tempdir()?;
    let src = dir.path().join("src");

    fs::create_dir_all(src.join("util"))?;
    fs::write(src.join("util/helpers.zig"), "")?;
    fs::write(src.join("a.c"), "")?;

    let sources = discover_sources(&src)?;
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].family, SourceFamily::C);

    Ok(())
}

#[test]
fn an_empty_tree_discovers_nothing() -> TestResult {
    let dir = tempdir()?;
    let src = dir.path().join("src");
    fs::create_dir_all(&src)?;

    assert!(discover_sources(&src)?.is_empty());

    Ok(())
}
