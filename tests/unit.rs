use foldcat::output::{RecordWriter, extension_label};
use foldcat::{
    Event, TextEncoding, decode_first, is_text_file, relative_path, select_examples, should_include,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_decode_prefers_first_encoding() {
    let encodings = [TextEncoding::Utf8, TextEncoding::Latin1];
    let (text, enc) = decode_first("héllo".as_bytes(), &encodings).unwrap();
    assert_eq!(text, "héllo");
    assert_eq!(enc, TextEncoding::Utf8);
}
#[test]
fn test_decode_falls_back_to_latin1() {
    let bytes = [b'c', b'a', b'f', 0xE9];
    let (text, enc) =
        decode_first(&bytes, &[TextEncoding::Utf8, TextEncoding::Latin1]).unwrap();
    assert_eq!(text, "café");
    assert_eq!(enc, TextEncoding::Latin1);
}
#[test]
fn test_decode_reports_every_encoding_tried() {
    let err = decode_first(&[0xFF, 0xFE, 0xFD], &[TextEncoding::Utf8]).unwrap_err();
    assert_eq!(err.tried, vec![TextEncoding::Utf8]);
    assert!(decode_first(b"abc", &[]).is_err());
}
#[test]
fn test_latin1_maps_bytes_to_matching_code_points() {
    let (text, enc) = decode_first(&[b'a', 0x80, 0x9F, 0xFF], &[TextEncoding::Latin1]).unwrap();
    assert_eq!(text, "a\u{80}\u{9f}\u{ff}");
    assert_eq!(enc, TextEncoding::Latin1);
}
#[test]
fn test_utf8_block_check_is_strict() {
    let bytes = "aé".as_bytes();
    assert!(TextEncoding::Utf8.accepts_block(bytes));
    assert!(!TextEncoding::Utf8.accepts_block(&bytes[..2]));
    assert!(!TextEncoding::Utf8.accepts_block(&[b'a', 0xFF, b'b']));
    assert!(TextEncoding::Latin1.accepts_block(&bytes[..2]));
}
#[test]
fn test_character_cut_at_block_boundary_is_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cut.ts");
    let mut data = vec![b'a'; 511];
    data.extend_from_slice("é rest".as_bytes());
    fs::write(&path, data).unwrap();
    assert!(!is_text_file(&path, 512, TextEncoding::Utf8));
    assert!(is_text_file(&path, 513, TextEncoding::Utf8));
}
#[test]
fn test_null_byte_in_first_block_is_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    fs::write(&path, b"text\0more text").unwrap();
    assert!(!is_text_file(&path, 512, TextEncoding::Utf8));
}
#[test]
fn test_null_byte_past_first_block_is_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late.txt");
    let mut data = vec![b'a'; 600];
    data.push(0);
    fs::write(&path, data).unwrap();
    assert!(is_text_file(&path, 512, TextEncoding::Utf8));
}
#[test]
fn test_text_detection_edge_cases() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, b"").unwrap();
    assert!(is_text_file(&empty, 512, TextEncoding::Utf8));
    assert!(!is_text_file(&dir.path().join("missing.txt"), 512, TextEncoding::Utf8));
    let latin = dir.path().join("latin.txt");
    fs::write(&latin, [b'c', b'a', b'f', 0xE9]).unwrap();
    assert!(!is_text_file(&latin, 512, TextEncoding::Utf8));
    assert!(is_text_file(&latin, 512, TextEncoding::Latin1));
}
#[test]
fn test_exclude_prefix_requires_example_membership() {
    let exclude = vec!["lib/generated".to_string()];
    let examples: BTreeSet<String> = ["lib/generated/keep.ts".to_string()].into();
    assert!(should_include("lib/generated/keep.ts", &exclude, &examples));
    assert!(!should_include("lib/generated/drop.ts", &exclude, &examples));
    assert!(should_include("lib/db.ts", &exclude, &examples));
    assert!(should_include("anything", &[], &BTreeSet::new()));
}
#[test]
fn test_exclude_prefix_matches_sibling_names() {
    let exclude = vec!["lib/tes".to_string()];
    assert!(!should_include("lib/test/a.ts", &exclude, &BTreeSet::new()));
}
#[test]
fn test_relative_path_uses_forward_slashes() {
    let root = Path::new("/project");
    assert_eq!(relative_path(root, &root.join("lib").join("a.ts")), "lib/a.ts");
}
#[test]
fn test_select_examples_respects_count_and_extensions() {
    let dir = tempdir().unwrap();
    let samples = dir.path().join("lib").join("samples");
    fs::create_dir_all(samples.join("nested")).unwrap();
    for name in ["a.ts", "b.py", "c.rs", "d.go", "notes.md", "data.json"] {
        fs::write(samples.join(name), "x").unwrap();
    }
    fs::write(samples.join("nested").join("deep.ts"), "x").unwrap();
    let mut map = BTreeMap::new();
    map.insert("lib/samples".to_string(), 2);
    let mut rng = StdRng::seed_from_u64(1);
    let picked = select_examples(dir.path(), &map, &mut rng);
    assert_eq!(picked.len(), 2);
    for path in &picked {
        assert!(path.starts_with("lib/samples/"));
        assert!(!path.ends_with(".md") && !path.ends_with(".json"));
        assert!(!path.contains("nested"));
    }
    map.insert("lib/samples".to_string(), 10);
    let all = select_examples(dir.path(), &map, &mut rng);
    assert_eq!(all.len(), 4);
}
#[test]
fn test_select_examples_is_deterministic_for_a_seed() {
    let dir = tempdir().unwrap();
    let samples = dir.path().join("pool");
    fs::create_dir(&samples).unwrap();
    for i in 0..20 {
        fs::write(samples.join(format!("f{i}.js")), "x").unwrap();
    }
    let mut map = BTreeMap::new();
    map.insert("pool".to_string(), 5);
    let first = select_examples(dir.path(), &map, &mut StdRng::seed_from_u64(42));
    let second = select_examples(dir.path(), &map, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}
#[test]
fn test_select_examples_skips_missing_directory() {
    let dir = tempdir().unwrap();
    let mut map = BTreeMap::new();
    map.insert("nope".to_string(), 3);
    let picked = select_examples(dir.path(), &map, &mut StdRng::seed_from_u64(0));
    assert!(picked.is_empty());
}
#[test]
fn test_extension_labels() {
    assert_eq!(extension_label(Path::new("lib/a.ts")), ".ts");
    assert_eq!(extension_label(Path::new("lib/archive.tar.gz")), ".gz");
    assert_eq!(extension_label(Path::new("lib/Makefile")), "No Extension");
    assert_eq!(extension_label(Path::new("lib/.bashrc")), "No Extension");
    assert_eq!(extension_label(Path::new("lib/..bashrc")), "No Extension");
    assert_eq!(extension_label(Path::new("lib/..conf.bak")), ".bak");
    assert_eq!(extension_label(Path::new("lib/notes.")), ".");
}
#[test]
fn test_skip_event_messages() {
    let unreadable = Event::SkippedUnreadable {
        relative_path: "lib/locked.ts".into(),
        error: "permission denied".into(),
    };
    assert_eq!(unreadable.to_string(), "Skipping lib/locked.ts: permission denied");
    let undecodable = Event::SkippedUndecodable {
        relative_path: "lib/x.ts".into(),
    };
    assert_eq!(undecodable.to_string(), "Skipping lib/x.ts: cannot decode file.");
    let non_text = Event::SkippedNonText {
        relative_path: "lib/a.bin".into(),
    };
    assert_eq!(non_text.to_string(), "Skipping binary or non-text file: lib/a.bin");
}
#[test]
fn test_record_layout() {
    let mut writer = RecordWriter::new(Vec::new());
    writer.write_record("lib/a.ts", ".ts", "let x = 1;").unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(
        out,
        concat!(
            "===== File: lib/a.ts =====\n",
            "Type: .ts\n",
            "----- Content Start -----\n",
            "let x = 1;\n",
            "----- Content End -----\n\n",
        )
    );
}
