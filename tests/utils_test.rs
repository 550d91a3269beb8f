use ymdl::types::Artist;
use ymdl::utils::*;

// Helper to build an artist record
fn artist(name: &str) -> Artist {
    Artist {
        name: name.to_string(),
    }
}

#[test]
fn test_sanitize_keeps_allowed_characters() {
    // Alphanumerics, spaces, hyphens and underscores survive
    assert_eq!(sanitize_component("Back in Black"), "Back in Black");
    assert_eq!(sanitize_component("Twenty-One_22"), "Twenty-One_22");

    // Punctuation and separators are dropped
    assert_eq!(sanitize_component("AC/DC: Live!"), "ACDC Live");
    assert_eq!(sanitize_component("R.E.M."), "REM");
}

#[test]
fn test_sanitize_strips_trailing_whitespace() {
    assert_eq!(sanitize_component("Abbey Road   "), "Abbey Road");

    // Trailing whitespace produced by dropping characters is stripped too
    assert_eq!(sanitize_component("Album ?"), "Album");
}

#[test]
fn test_sanitize_is_idempotent() {
    let inputs = ["AC/DC: Live!", "Abbey Road   ", "ытка - тест", "Plain"];
    for input in inputs {
        let once = sanitize_component(input);
        let twice = sanitize_component(&once);
        assert_eq!(once, twice, "sanitizing {input:?} twice changed the value");
    }
}

#[test]
fn test_sanitize_never_emits_path_separator() {
    let inputs = ["a/b/c", "//", "name / with / slashes", "mixed/и/юникод"];
    for input in inputs {
        assert!(
            !sanitize_component(input).contains('/'),
            "separator survived sanitization of {input:?}"
        );
    }
}

#[test]
fn test_sanitize_keeps_unicode_letters() {
    // Unicode letters count as alphanumeric
    assert_eq!(sanitize_component("Мумий Тролль"), "Мумий Тролль");
}

#[test]
fn test_album_track_filename() {
    // 1-based index, zero-padded to two digits
    assert_eq!(album_track_filename(1, "Money"), "01. Money.mp3");
    assert_eq!(album_track_filename(12, "Eclipse"), "12. Eclipse.mp3");

    // Separators in the title become underscores
    assert_eq!(
        album_track_filename(3, "Intro/Outro"),
        "03. Intro_Outro.mp3"
    );
}

#[test]
fn test_single_track_filename() {
    assert_eq!(
        single_track_filename("Queen", "Bohemian Rhapsody"),
        "Queen - Bohemian Rhapsody.mp3"
    );

    // Both components are sanitized before assembly
    assert_eq!(
        single_track_filename("AC/DC", "T.N.T."),
        "ACDC - TNT.mp3"
    );
}

#[test]
fn test_join_artists() {
    // No artists yields an empty string, not a placeholder
    assert_eq!(join_artists(&[]), "");

    assert_eq!(join_artists(&[artist("Queen")]), "Queen");
    assert_eq!(
        join_artists(&[artist("Queen"), artist("David Bowie")]),
        "Queen, David Bowie"
    );
}

#[test]
fn test_primary_artist() {
    assert_eq!(primary_artist(&[artist("Queen"), artist("Bowie")]), "Queen");

    // Fallback when the record has no artists at all
    assert_eq!(primary_artist(&[]), "Unknown Artist");
}
