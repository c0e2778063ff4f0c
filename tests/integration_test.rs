//! Integration tests for cidr-calc
//!
//! These drive the public API the way the interactive shell does.

use cidr_calc::shell::{CalcState, KeyInput, ShellAction};
use cidr_calc::{resolve, version_line, Resolution, ResolveError};

#[test]
fn test_scenarios() {
    let facts = *resolve("192.168.1.10", "24").facts().expect("should resolve");
    assert_eq!(facts.netmask.to_string(), "255.255.255.0");
    assert_eq!(facts.wildcard_mask.to_string(), "0.0.0.255");
    assert_eq!(facts.total_addresses, 256);
    assert_eq!(facts.max_usable_addresses, 254);
    assert_eq!(facts.network_address.to_string(), "192.168.1.0");
    assert_eq!(facts.cidr_notation(), "192.168.1.0/24");
    assert_eq!(facts.address_range(), "192.168.1.0 - 192.168.1.255");

    let facts = *resolve("10.0.0.1", "31").facts().expect("should resolve");
    assert_eq!(
        (facts.total_addresses, facts.max_usable_addresses),
        (2, 2)
    );
    assert_eq!(facts.address_range(), "10.0.0.0 - 10.0.0.1");

    let facts = *resolve("10.0.0.5", "32").facts().expect("should resolve");
    assert_eq!(
        (facts.total_addresses, facts.max_usable_addresses),
        (1, 1)
    );
    assert_eq!(facts.address_range(), "10.0.0.5 - 10.0.0.5");
}

#[test]
fn test_error_scenarios() {
    assert_eq!(
        resolve("300.1.1.1", "24"),
        Resolution::Invalid(ResolveError::InvalidAddress)
    );
    assert_eq!(
        resolve("192.168.1.10", "abc"),
        Resolution::Invalid(ResolveError::InvalidMask)
    );
    assert_eq!(
        resolve("::1", "64").error_message().as_deref(),
        Some("Only IPv4 addresses are supported.")
    );
    assert_eq!(resolve("", "24"), Resolution::Empty);
    assert_eq!(resolve("10.0.0.1", ""), Resolution::Empty);
}

#[test]
fn test_resolve_from_threads() {
    let handles: Vec<_> = (0..=32u8)
        .map(|len| std::thread::spawn(move || (len, resolve("172.16.5.4", &len.to_string()))))
        .collect();
    for handle in handles {
        let (len, resolution) = handle.join().expect("thread panicked");
        assert_eq!(resolution, resolve("172.16.5.4", &len.to_string()));
        assert_eq!(resolution.facts().map(|f| f.prefix_len), Some(len));
    }
}

#[test]
fn test_shell_session() {
    let mut state = CalcState::new();
    let keys = "10.1.2.3"
        .chars()
        .map(KeyInput::Char)
        .chain([KeyInput::Tab])
        .chain("16".chars().map(KeyInput::Char));
    for key in keys {
        assert_eq!(state.handle_key(key), ShellAction::Render);
    }
    let facts = state.results().facts().copied().expect("should resolve");
    assert_eq!(facts.cidr_notation(), "10.1.0.0/16");
    assert_eq!(facts.max_usable_addresses, 65534);

    assert_eq!(state.handle_key(KeyInput::Char('q')), ShellAction::Quit);
}

#[test]
fn test_version_line() {
    let line = version_line();
    assert!(line.starts_with("cidr version "), "{line}");
    assert!(line.contains(", commit "), "{line}");
    assert!(line.contains(", built at "), "{line}");
}
