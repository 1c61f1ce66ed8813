use super::*;

#[test]
fn format_cookie_carries_one_year_lax_root_path() {
    assert_eq!(format_cookie("theme", "dark"), "theme=dark; path=/; max-age=31536000; samesite=lax");
}

#[test]
fn format_cookie_escapes_separators() {
    let raw = format_cookie("theme", "dark; path=/evil");
    assert!(raw.starts_with("theme=dark%3B%20path%3D%2Fevil;"));
}

#[test]
fn find_cookie_reads_among_others() {
    let raw = "session=abc; theme=cupcake; lang=en";
    assert_eq!(find_cookie(raw, "theme").as_deref(), Some("cupcake"));
    assert_eq!(find_cookie(raw, "lang").as_deref(), Some("en"));
}

#[test]
fn find_cookie_does_not_match_name_suffix() {
    assert_eq!(find_cookie("xtheme=dark", "theme"), None);
}

#[test]
fn find_cookie_treats_empty_value_as_absent() {
    assert_eq!(find_cookie("theme=", "theme"), None);
    assert_eq!(find_cookie("", "theme"), None);
}

#[test]
fn find_cookie_decodes_percent_escapes() {
    assert_eq!(find_cookie("theme=night%20owl", "theme").as_deref(), Some("night owl"));
}

#[test]
fn decode_leaves_malformed_escapes_alone() {
    assert_eq!(find_cookie("theme=a%zzb%4", "theme").as_deref(), Some("a%zzb%4"));
}

#[test]
fn cookie_names_lists_every_pair() {
    assert_eq!(cookie_names("a=1; b=2;c=3"), vec!["a", "b", "c"]);
    assert!(cookie_names("").is_empty());
}

#[test]
fn expire_cookie_uses_epoch() {
    assert_eq!(expire_cookie("theme"), "theme=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/");
}
