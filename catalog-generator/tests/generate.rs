use std::process::Command;

use catalog_generator::{
    item::Category, item_generator::QUANTITY_RANGE, seed_items::seed_items, writer::read_catalog,
};

fn generator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_catalog-generator"))
}

#[test]
fn reference_run_writes_seed_and_generated_items() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("items.json");

    let output = generator()
        .args(["--seed", "31", "--output"])
        .arg(&path)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Generated 5000 new items\nTotal items: 5020\nCategories covered: 14\n"));
    assert!(stdout.contains("\n  Electronics: 365\n"));

    let items = read_catalog(&path).unwrap();
    let seeds = seed_items().unwrap();
    assert_eq!(items.len(), 5020);
    assert_eq!(&items[..seeds.len()], seeds.as_slice());
    for (index, item) in items[seeds.len()..].iter().enumerate() {
        assert_eq!(item.category, Category::round_robin(index));
        assert!(item.name.ends_with(&format!(" - Model {:04}", index + 1)));
        assert!(!item.description.contains("{}"));
        assert!(QUANTITY_RANGE.contains(&item.quantity));
        assert_eq!((item.price * 100.0).round() / 100.0, item.price);
    }
}

#[test]
fn same_seed_writes_identical_files() {
    let directory = tempfile::tempdir().unwrap();
    let first = directory.path().join("first.json");
    let second = directory.path().join("second.json");

    for path in [&first, &second] {
        let status = generator()
            .args(["--seed", "7", "--count", "40", "--output"])
            .arg(path)
            .env("RUST_LOG", "off")
            .status()
            .unwrap();
        assert!(status.success());
    }

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn missing_output_directory_fails_the_run() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("sample-data").join("items.json");

    let output = generator()
        .args(["--count", "3", "--output"])
        .arg(&path)
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("catalog generation failed"));
    assert!(output.stdout.is_empty());
    assert!(!path.exists());
}
