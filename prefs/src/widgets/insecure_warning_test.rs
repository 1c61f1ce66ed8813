use super::*;
use crate::dom::MemoryElement;
use crate::widgets::test_support::fixture;

#[test]
fn plain_http_on_a_real_host_shows_banner() {
    let fx = fixture();
    fx.doc.serve_from("http:", "mail.example.org");
    let el = MemoryElement::new("div").with_class("hidden");
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(!el.has_class("hidden"));
}

#[test]
fn banner_stays_hidden_for_tls_and_localhost() {
    for (protocol, hostname) in [("https:", "mail.example.org"), ("http:", "localhost")] {
        let fx = fixture();
        fx.doc.serve_from(protocol, hostname);
        let el = MemoryElement::new("div").with_class("hidden");
        let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
        widget.connect();
        assert!(el.has_class("hidden"), "{protocol}//{hostname}");
    }
}

#[test]
fn loopback_address_still_warns() {
    assert!(is_insecure("http:", "127.0.0.1"));
    assert!(!is_insecure("https:", "127.0.0.1"));
}
