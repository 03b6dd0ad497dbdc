use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT};
use crate::MB;

// Our bz a -> system bzip2 -d.
add_test!(our_bz_to_system_bzip2, async {
    const FILE_NAME: &str = "test.bin";

    let data = generate_random_data(2 * MB + 123);
    let fixture = Fixture::with_file(FILE_NAME, &data);
    let compressed_path = fixture.compressed_path("copy.bin");

    let output = fixture
        .run_cargo(&["a", &fixture.path(FILE_NAME), &compressed_path])
        .await;
    assert_eq!(output.code(), Some(0), "our bz failed: {}", output.stderr);

    let Some(system_out) = fixture
        .run_system("bzip2", &["-d", "-k", &compressed_path])
        .await
    else {
        return;
    };
    assert!(
        system_out.status.success(),
        "system bzip2 -d failed: {}",
        system_out.stderr
    );

    fixture.assert_files(&["copy.bin"], &[&data]);
});

// System bzip2 -> our bz e.
add_test!(system_bzip2_to_our_bz, async {
    const FILE_NAME: &str = "test.txt";

    let data = SAMPLE_TEXT.repeat(1000);
    let fixture = Fixture::with_file(FILE_NAME, data.as_bytes());

    let Some(system_out) = fixture
        .run_system("bzip2", &["-k", "-9", &fixture.path(FILE_NAME)])
        .await
    else {
        return;
    };
    assert!(
        system_out.status.success(),
        "system bzip2 failed: {}",
        system_out.stderr
    );

    let output = fixture
        .run_cargo(&[
            "e",
            &fixture.compressed_path(FILE_NAME),
            &fixture.path("restored.txt"),
        ])
        .await;
    assert_eq!(output.code(), Some(0), "our bz failed: {}", output.stderr);

    fixture.assert_files(&["restored.txt"], &[data.as_bytes()]);
});

// Both compressors produce byte-identical streams at the same level.
add_test!(identical_to_system_bzip2, async {
    const FILE_NAME: &str = "test.txt";

    let fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());
    let ours = fixture.path("ours.bz2");

    let output = fixture.run_cargo(&["a", &fixture.path(FILE_NAME), &ours]).await;
    assert_eq!(output.code(), Some(0));

    let Some(system_out) = fixture
        .run_system("bzip2", &["-k", "-9", &fixture.path(FILE_NAME)])
        .await
    else {
        return;
    };
    assert!(system_out.status.success());

    assert_eq!(fixture.read_file("ours.bz2"), fixture.read_file("test.txt.bz2"));
});
