use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};
use crate::EXIT_USAGE;

// No arguments at all prints usage and fails
add_test!(no_arguments, async {
    let fixture = Fixture::empty();

    let output = fixture.run_cargo(&[]).await;

    assert_eq!(output.code(), Some(EXIT_USAGE));
    assert!(output.stdout.starts_with("Usage:\n"));
    assert!(output.stdout.contains(" a <input_file> <output_file> (compress)"));
    assert!(output.stdout.contains(" e <input_file> <output_file> (extract)"));
});

// Too few and too many arguments are both usage errors
add_test!(wrong_argument_count, async {
    let fixture = Fixture::with_file("input.txt", SAMPLE_TEXT.as_bytes());
    let input = fixture.path("input.txt");
    let output_path = fixture.path("out.bz2");

    for args in [
        vec!["a"],
        vec!["a", input.as_str()],
        vec!["a", input.as_str(), output_path.as_str(), "extra"],
    ] {
        let output = fixture.run_cargo(&args).await;
        assert_eq!(output.code(), Some(EXIT_USAGE), "args: {args:?}");
        assert!(output.stdout.starts_with("Usage:\n"));
    }
    assert!(!fixture.file_exists("out.bz2"));
});

// An unknown flag in the action slot is an unknown action
add_test!(unknown_flag, async {
    let fixture = Fixture::empty();

    let output = fixture.run_cargo(&["--bogus", "a", "b"]).await;

    assert_eq!(output.code(), Some(EXIT_USAGE));
    assert_eq!(output.stderr, "Error: unknown action: --bogus ('a' or 'e')\n");
    assert!(!fixture.file_exists("b"));
});

// Paths starting with a dash are ordinary paths
add_test!(dash_prefixed_paths, async {
    let fixture = Fixture::with_file("-in.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_cargo(&["a", "-in.txt", "-out.bz2"]).await;
    assert_eq!(output.code(), Some(0), "{}", output.stderr);
    assert!(output.stdout.ends_with("Done: compressed\n"));
    assert!(fixture.read_file("-out.bz2").starts_with(b"BZh9"));

    let output = fixture.run_cargo(&["e", "-out.bz2", "--restored.txt"]).await;
    assert_eq!(output.code(), Some(0), "{}", output.stderr);
    fixture.assert_files(&["--restored.txt"], &[SAMPLE_TEXT.as_bytes()]);
});

// An unknown action is rejected before any file is touched
add_test!(unknown_action, async {
    let fixture = Fixture::with_file("input.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture
        .run_cargo(&["x", &fixture.path("input.txt"), &fixture.path("out")])
        .await;

    assert_eq!(output.code(), Some(EXIT_USAGE));
    assert_eq!(output.stderr, "Error: unknown action: x ('a' or 'e')\n");
    assert!(!fixture.file_exists("out"));
});

// --help and --version succeed
add_test!(help_and_version, async {
    let fixture = Fixture::empty();

    let output = fixture.run_cargo(&["--help"]).await;
    assert_eq!(output.code(), Some(0));
    assert!(output.stdout.contains("with bzip2"));

    let output = fixture.run_cargo(&["--version"]).await;
    assert_eq!(output.code(), Some(0));
    assert!(output.stdout.starts_with("bz "));
});
