use ls::render::{long, short};
use ls::{Entry, Kind, ListOptions, LongEntry, Palette, StaticNames};
use std::fs;
use std::os::unix::fs::symlink;

fn files(names: &[&str]) -> Vec<Entry> {
    names.iter().map(|name| Entry::new(*name, Kind::File)).collect()
}

#[test]
fn test_short_empty() {
    assert_eq!(short(&[], 80, &Palette::plain()), "");
}

#[test]
fn test_short_single_line() {
    let entries = files(&["aaaa", "b", "cc", "ddd", "eeeee", "f"]);
    assert_eq!(
        short(&entries, 26, &Palette::plain()),
        "aaaa  b  cc  ddd  eeeee  f\n"
    );
}

#[test]
fn test_short_grid() {
    let entries = files(&["aaaa", "b", "cc", "ddd", "eeeee", "f"]);
    assert_eq!(
        short(&entries, 20, &Palette::plain()),
        "aaaa   b\ncc     ddd\neeeee  f\n"
    );
}

#[test]
fn test_short_grid_partial_last_row() {
    let entries = files(&["one", "two", "six", "ten", "red"]);
    // 23 columns needed; 12 / (3 + 2) leaves room for two per row
    assert_eq!(
        short(&entries, 12, &Palette::plain()),
        "one  two\nsix  ten\nred\n"
    );
}

#[test]
fn test_short_narrower_than_any_name() {
    let entries = files(&["alpha", "beta"]);
    assert_eq!(short(&entries, 3, &Palette::plain()), "alpha\nbeta\n");
}

#[test]
fn test_short_directory_suffix_counts_toward_width() {
    let entries = vec![Entry::new("src", Kind::Directory), Entry::new("a", Kind::File)];
    // "src/  a" is exactly 7 columns
    assert_eq!(short(&entries, 7, &Palette::plain()), "src/  a\n");
    assert_eq!(short(&entries, 6, &Palette::plain()), "src/\na\n");
}

#[test]
fn test_short_colored_output_keeps_layout() {
    let entries = vec![Entry::new("src", Kind::Directory), Entry::new("a", Kind::File)];
    let out = short(&entries, 80, &Palette::new(true));
    assert_eq!(console::strip_ansi_codes(&out), "src/  a\n");
}

#[test]
fn test_long_alignment() {
    let mut names = StaticNames::new()
        .with_user(1000, "alice")
        .with_user(0, "root")
        .with_group(100, "users")
        .with_group(0, "wheel");

    let entries = vec![
        Entry::new("big.iso", Kind::File)
            .with_size(1_500_000_000)
            .with_owner(1000, 100),
        Entry::new("a", Kind::File).with_size(12).with_owner(0, 0),
    ];
    let entries: Vec<LongEntry> = entries
        .into_iter()
        .map(|e| LongEntry::resolve(e, &mut names).unwrap())
        .collect();

    assert_eq!(
        long(&entries, &Palette::plain()),
        "alice users 1.5G big.iso\n root wheel  12B a\n"
    );
}

#[test]
fn test_long_numeric_fallback_and_directory_suffix() {
    let mut names = StaticNames::new();
    let entry = Entry::new("src", Kind::Directory)
        .with_size(4096)
        .with_owner(501, 20);
    let entry = LongEntry::resolve(entry, &mut names).unwrap();

    assert_eq!(long(&[entry], &Palette::plain()), "501 20 4.0K src/\n");
}

#[test]
fn test_long_empty() {
    assert_eq!(long(&[], &Palette::plain()), "");
}

#[test]
fn test_long_symlink_shows_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("target.txt"), b"x").unwrap();
    symlink("target.txt", dir.path().join("link")).unwrap();

    let options = ListOptions {
        path: dir.path().to_path_buf(),
        all: false,
        long: true,
        width: 80,
        palette: Palette::plain(),
    };
    let out = ls::list(&options, &mut StaticNames::new()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" link -> target.txt"));
    assert!(lines[1].ends_with(" 1B target.txt"));
}

#[test]
fn test_list_short_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"").unwrap();
    fs::write(dir.path().join("A.txt"), b"").unwrap();
    fs::create_dir(dir.path().join("dir")).unwrap();
    fs::write(dir.path().join(".secret"), b"").unwrap();

    let mut options = ListOptions {
        path: dir.path().to_path_buf(),
        all: false,
        long: false,
        width: 80,
        palette: Palette::plain(),
    };
    let out = ls::list(&options, &mut StaticNames::new()).unwrap();
    assert_eq!(out, "dir/  A.txt  b.txt\n");

    options.all = true;
    let out = ls::list(&options, &mut StaticNames::new()).unwrap();
    assert_eq!(out, "dir/  .secret  A.txt  b.txt\n");
}
