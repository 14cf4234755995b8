//! Tests for `RouteTable` loading and resolution.

use super::source::{MapSource, TomlSource};
use super::{RouteTable, defaults};

const HOOK1: &str = "https://chat.example/hook1";
const DEFAULT: &str = "https://chat.example/default";

mod resolve {
    use super::*;

    #[test]
    fn unrouted_lists_fall_back_to_default() {
        let table = RouteTable::new(DEFAULT, "{text}").with_route("announce", HOOK1);

        for list in ["devel", "users", "", "Announce", "announce.extra"] {
            assert_eq!(table.resolve(list), DEFAULT, "list {list:?}");
        }
    }

    #[test]
    fn routed_lists_never_use_default() {
        let table = RouteTable::new(DEFAULT, "{text}")
            .with_route("announce", HOOK1)
            .with_route("quiet", "");

        assert_eq!(table.resolve("announce"), HOOK1);
        assert_eq!(table.resolve("quiet"), "");
        assert!(table.has_route("quiet"));
    }

    #[test]
    fn empty_default_resolves_empty() {
        assert_eq!(RouteTable::default().resolve("announce"), "");
    }

    #[test]
    fn with_route_replaces_existing() {
        let table = RouteTable::default()
            .with_route("announce", HOOK1)
            .with_route("announce", "");

        assert_eq!(table.resolve("announce"), "");
        assert_eq!(table.len(), 1);
    }
}

mod load {
    use super::*;

    #[test]
    fn empty_source_uses_builtin_defaults() {
        let table = RouteTable::load(&MapSource::new());

        assert_eq!(table.default_url(), "");
        assert_eq!(table.template(), defaults::MESSAGE_FORMAT);
        assert!(table.is_empty());
    }

    #[test]
    fn reads_global_url_and_template() {
        let source = MapSource::new()
            .with("global", "url", DEFAULT)
            .with("global", "message_format", "{list_name}: {subject}");

        let table = RouteTable::load(&source);

        assert_eq!(table.default_url(), DEFAULT);
        assert_eq!(table.template(), "{list_name}: {subject}");
    }

    #[test]
    fn reads_list_sections_including_empty_urls() {
        let source = MapSource::new()
            .with("global", "url", DEFAULT)
            .with("list.announce", "url", HOOK1)
            .with("list.quiet", "url", "");

        let table = RouteTable::load(&source);

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("announce"), HOOK1);
        assert_eq!(table.resolve("quiet"), "");
        assert_eq!(table.resolve("devel"), DEFAULT);
    }

    #[test]
    fn wrong_typed_globals_take_defaults() {
        let source = MapSource::new()
            .with("global", "url", 42_i64)
            .with("global", "message_format", false);

        let table = RouteTable::load(&source);

        assert_eq!(table, RouteTable::default());
    }

    #[test]
    fn list_section_without_usable_url_is_skipped() {
        let source = MapSource::new()
            .with("global", "url", DEFAULT)
            .with_section("list.nourl")
            .with("list.badurl", "url", true)
            .with("list.announce", "url", HOOK1);

        let table = RouteTable::load(&source);

        assert_eq!(table.len(), 1);
        assert!(!table.has_route("nourl"));
        assert_eq!(table.resolve("nourl"), DEFAULT);
        assert_eq!(table.resolve("badurl"), DEFAULT);
    }

    #[test]
    fn non_list_sections_are_ignored() {
        let source = MapSource::new()
            .with("global", "url", DEFAULT)
            .with("lists.announce", "url", HOOK1)
            .with("archiver", "url", HOOK1);

        let table = RouteTable::load(&source);

        assert!(table.is_empty());
    }

    #[test]
    fn loads_from_toml_document() {
        let source = TomlSource::parse(
            r#"
            [global]
            url = "https://chat.example/default"
            message_format = "{from} wrote to {list_name}"

            [list.announce]
            url = "https://chat.example/hook1"

            [list."dev.team"]
            url = ""
        "#,
        )
        .unwrap();

        let table = RouteTable::load(&source);

        assert_eq!(table.resolve("announce"), HOOK1);
        assert_eq!(table.resolve("dev.team"), "");
        assert_eq!(table.resolve("users"), DEFAULT);
        assert_eq!(table.template(), "{from} wrote to {list_name}");
    }

    #[test]
    fn unquoted_dotted_list_names_route_exactly() {
        let source = TomlSource::parse(
            r#"
            [global]
            url = "https://chat.example/default"

            [list.dev.team]
            url = ""

            [list.ops.eu]
            url = "https://chat.example/hook1"
        "#,
        )
        .unwrap();

        let table = RouteTable::load(&source);

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("dev.team"), "");
        assert_eq!(table.resolve("ops.eu"), HOOK1);
        assert!(!table.has_route("dev"));
        assert_eq!(table.resolve("dev"), DEFAULT);
    }
}

#[test]
fn display_summarizes_routes() {
    let table = RouteTable::new(DEFAULT, "{text}")
        .with_route("announce", HOOK1)
        .with_route("quiet", "");

    assert_eq!(
        table.to_string(),
        "Routes { default: https://chat.example/default, lists: 2, enabled: 1 }"
    );
    assert!(RouteTable::default().to_string().contains("default: none"));
}
