//! Locator parsing and building across both providers.

use gm_core::{GalleryError, GalleryIdentity};

#[test]
fn ehentai_round_trip_for_many_ids() {
    let cases = [("1", "a"), ("1234567", "0a1b2c3d4e"), ("42", "token-with-dash"), ("9", "UPPER")];
    for (id, token) in cases {
        let locator = gm_ehentai::id_and_token_to_url(id, token);
        assert_eq!(
            gm_ehentai::parse_locator(&locator).unwrap(),
            GalleryIdentity::new(id, token),
            "round trip of {locator}"
        );
    }
}

#[test]
fn ehentai_url_and_path_forms_agree() {
    let full = gm_ehentai::parse_locator("https://host/g/12345/abcde/?nw=always").unwrap();
    let path = gm_ehentai::parse_locator("/g/12345/abcde/").unwrap();
    assert_eq!(full, GalleryIdentity::new("12345", "abcde"));
    assert_eq!(full, path);
}

#[test]
fn ehentai_normalizes_all_accepted_forms() {
    let expected = "/g/12345/abcde/?nw=always";
    for raw in [
        "https://e-hentai.org/g/12345/abcde/",
        "https://exhentai.org/g/12345/abcde/?p=2",
        "/g/12345/abcde",
        "g/12345/abcde/",
        "//g//12345//abcde",
    ] {
        assert_eq!(gm_ehentai::normalize_url(raw).unwrap(), expected, "normalizing {raw}");
    }
}

#[test]
fn bare_paths_with_embedded_urls_stay_paths() {
    // Only a leading scheme makes a URL; "://" later in a query is plain text
    let expected = "/g/12345/abcde/?nw=always";
    for raw in [
        "/g/12345/abcde/?ref=https://e-hentai.org/",
        "g/12345/abcde/?next=http://host/g/999/zzz/",
    ] {
        assert_eq!(gm_ehentai::normalize_url(raw).unwrap(), expected, "normalizing {raw}");
    }
    assert_eq!(
        gm_pururin::normalize_url("/gallery/48213/summer-days/?back=https://pururin.io/").unwrap(),
        gm_pururin::build_locator(48213, "summer-days")
    );
}

#[test]
fn colons_in_relative_paths_are_kept() {
    assert_eq!(
        gm_ehentai::parse_locator("g/12345/ab:cd/").unwrap(),
        GalleryIdentity::new("12345", "ab:cd")
    );
    assert_eq!(
        gm_ehentai::parse_locator("g:1/12345/abcde").unwrap(),
        GalleryIdentity::new("12345", "abcde")
    );
}

#[test]
fn malformed_locators_are_errors() {
    for raw in ["", "/", "/g/12345", "https://e-hentai.org/", "https://e-hentai.org/g/1"] {
        let err = gm_ehentai::parse_locator(raw).unwrap_err();
        assert!(matches!(err, GalleryError::MalformedLocator { .. }), "{raw} gave {err:?}");
    }
}

#[test]
fn pururin_round_trip() {
    let locator = gm_pururin::build_locator(48213, "summer-days");
    assert_eq!(locator, "/gallery/48213/summer-days");
    assert_eq!(
        gm_pururin::parse_locator(&locator).unwrap(),
        GalleryIdentity::new("48213", "summer-days")
    );
    assert_eq!(
        gm_pururin::normalize_url("https://pururin.io/gallery/48213/summer-days/").unwrap(),
        locator
    );
}

#[test]
fn provider_formats_are_not_interchangeable() {
    // A Pururin id must be numeric, E-Hentai tokens are free-form
    let eh = gm_ehentai::id_and_token_to_url("abc", "def");
    assert!(gm_pururin::parse_locator(&eh).is_err());
}
