use crate::add_test;
use crate::common::{generate_random_data, Fixture, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};
use crate::MB;

// Test basic compression and extraction
add_test!(compress_extract, async {
    const FILE_NAME: &str = "input.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file(FILE_NAME, data);

    let file_path = fixture.path(FILE_NAME);
    let compressed_path = fixture.compressed_path(FILE_NAME);
    let restored_path = fixture.path("restored.txt");

    let output = fixture.run_cargo(&["a", &file_path, &compressed_path]).await;
    assert_eq!(output.code(), Some(0), "{}", output.stderr);
    assert!(output.stdout.ends_with("Done: compressed\n"));
    assert!(output.stderr.is_empty());

    let output = fixture.run_cargo(&["e", &compressed_path, &restored_path]).await;
    assert_eq!(output.code(), Some(0), "{}", output.stderr);
    assert!(output.stdout.ends_with("Done: uncompressed\n"));

    fixture.assert_files(&["restored.txt"], &[data]);
});

// The compressed file is a standard bzip2 stream
add_test!(compressed_has_bzip2_header, async {
    const FILE_NAME: &str = "input.txt";

    let fixture = Fixture::with_file(FILE_NAME, REPETITIVE_DATA.as_bytes());
    let output = fixture
        .run_cargo(&["a", &fixture.path(FILE_NAME), &fixture.compressed_path(FILE_NAME)])
        .await;
    assert_eq!(output.code(), Some(0));

    let compressed = fixture.read_file("input.txt.bz2");
    assert!(compressed.starts_with(b"BZh9"));
});

// Binary payloads survive the round trip
add_test!(binary_round_trip, async {
    const FILE_NAME: &str = "data.bin";

    let fixture = Fixture::with_file(FILE_NAME, BINARY_DATA);
    let compressed_path = fixture.compressed_path(FILE_NAME);

    fixture
        .run_cargo(&["a", &fixture.path(FILE_NAME), &compressed_path])
        .await;
    let output = fixture
        .run_cargo(&["e", &compressed_path, &fixture.path("restored.bin")])
        .await;
    assert_eq!(output.code(), Some(0));

    fixture.assert_files(&["restored.bin"], &[BINARY_DATA]);
});

// The gauge is drawn in place and ends at 100%
add_test!(progress_gauge_reaches_100, async {
    const FILE_NAME: &str = "large.bin";

    let data = generate_random_data(3 * MB);
    let fixture = Fixture::with_file(FILE_NAME, &data);

    let output = fixture
        .run_cargo(&["a", &fixture.path(FILE_NAME), &fixture.compressed_path(FILE_NAME)])
        .await;
    assert_eq!(output.code(), Some(0));

    let stdout = &output.stdout;
    assert!(stdout.starts_with("\r["));
    assert!(stdout.contains("] 33% "));
    assert!(stdout.contains("] 66% "));
    assert!(stdout.contains("] 100% "));
    let gauge = stdout.split('\r').nth(1).unwrap();
    assert_eq!(gauge.matches(['#', '-']).count(), 50);
});

// Output files are created or truncated
add_test!(existing_output_is_truncated, async {
    const FILE_NAME: &str = "input.txt";

    let fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());
    let compressed_path = fixture.compressed_path(FILE_NAME);
    fixture.write_file("restored.txt", &[b'x'; 4096]);

    fixture
        .run_cargo(&["a", &fixture.path(FILE_NAME), &compressed_path])
        .await;
    let output = fixture
        .run_cargo(&["e", &compressed_path, &fixture.path("restored.txt")])
        .await;
    assert_eq!(output.code(), Some(0));

    fixture.assert_files(&["restored.txt"], &[SAMPLE_TEXT.as_bytes()]);
});
