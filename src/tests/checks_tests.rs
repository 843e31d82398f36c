#[cfg(test)]
mod tests {
    use std::fs;

    use crate::errors::CheckError;
    use crate::implementations::checks::{
        check_content,
        check_existence,
        check_injection_logic,
        check_payload_prefix,
        read_artifact,
        search_payload,
    };
    use crate::implementations::decode::percent_decode;
    use crate::models::artifact::{ ArtifactKind, ArtifactRef };
    use crate::models::rule::{ ContentRule, PayloadRule };
    use crate::models::verification::PayloadSearch;
    use crate::tests::fixtures::setup;

    fn bookmarklet_rule() -> ContentRule {
        ContentRule::new(
            ["document.createElement('style')", "M1", "M2"],
            ["{{VERSION}}", "{{CSS_ESCAPED}}"]
        )
    }

    #[test]
    fn existence_reports_missing_file() {
        setup();
        let dir = tempfile::tempdir().expect("tempdir");
        let artifact = ArtifactRef::new(ArtifactKind::Installer, dir.path().join("install.html"));

        let err = check_existence(&artifact).unwrap_err();
        assert!(matches!(err, CheckError::MissingArtifact { .. }));
        assert!(err.to_string().starts_with("MISSING: Installer HTML"));
    }

    #[test]
    fn existence_reports_empty_file() {
        setup();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bookmarklet.txt");
        fs::write(&path, "").expect("write");
        let artifact = ArtifactRef::new(ArtifactKind::Bookmarklet, path);

        assert!(matches!(check_existence(&artifact), Err(CheckError::EmptyArtifact { .. })));
    }

    #[test]
    fn existence_returns_size_of_present_file() {
        setup();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kantine-standalone.html");
        fs::write(&path, "<html></html>").expect("write");
        let artifact = ArtifactRef::new(ArtifactKind::Standalone, path);

        assert_eq!(check_existence(&artifact).unwrap(), 13);
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        setup();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("install.html");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).expect("write");
        let artifact = ArtifactRef::new(ArtifactKind::Installer, path);

        assert!(matches!(read_artifact(&artifact), Err(CheckError::UnreadableArtifact { .. })));
    }

    #[test]
    fn content_check_passes_with_all_markers() {
        let text = "javascript:document.createElement('style');M1;M2";
        assert!(check_content("bookmarklet.txt", text, &bookmarklet_rule()).is_empty());
    }

    #[test]
    fn content_check_reports_every_violation() {
        let text = "javascript:{{VERSION}} {{CSS_ESCAPED}} M1";
        let violations = check_content("bookmarklet.txt", text, &bookmarklet_rule());

        assert_eq!(
            violations,
            vec![
                CheckError::MissingMarker {
                    file: "bookmarklet.txt".to_string(),
                    marker: "document.createElement('style')".to_string(),
                },
                CheckError::MissingMarker {
                    file: "bookmarklet.txt".to_string(),
                    marker: "M2".to_string(),
                },
                CheckError::ForbiddenMarker {
                    file: "bookmarklet.txt".to_string(),
                    marker: "{{VERSION}}".to_string(),
                },
                CheckError::ForbiddenMarker {
                    file: "bookmarklet.txt".to_string(),
                    marker: "{{CSS_ESCAPED}}".to_string(),
                }
            ]
        );
    }

    #[test]
    fn forbidden_marker_fails_even_when_required_markers_present() {
        let text = "document.createElement('style') M1 M2 v{{VERSION}}";
        let violations = check_content("bookmarklet.txt", text, &bookmarklet_rule());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "FORBIDDEN CONTENT: '{{VERSION}}' in bookmarklet.txt");
    }

    #[test]
    fn installer_scenario_passes() {
        let rule = ContentRule::new(
            ["Kantine Wrapper", "So funktioniert's", "changelog-container"],
            ["CHANGELOG_HTML_PLACEHOLDER"]
        );
        let page = "<h1>Kantine Wrapper</h1><h2>So funktioniert's</h2><div class=\"changelog-container\"></div>";

        assert!(check_content("install.html", page, &rule).is_empty());
    }

    #[test]
    fn prefix_is_checked_on_trimmed_text() {
        assert!(check_payload_prefix("  \njavascript:void(0)\n", "javascript:").is_ok());
        assert_eq!(
            check_payload_prefix("http://example.org", "javascript:"),
            Err(CheckError::InvalidPayloadPrefix { expected: "javascript:".to_string() })
        );
    }

    #[test]
    fn search_prefers_raw_markers() {
        let raw = "javascript:var%20s=x;document.head.appendChild(s);";
        assert_eq!(
            search_payload(raw, &PayloadRule::default()),
            PayloadSearch::FoundRaw("appendChild(s)".to_string())
        );
    }

    #[test]
    fn search_falls_back_to_decoded_payload() {
        let raw = "javascript:var%20s%3Ddocument.createElement%28%27style%27%29%3Bdocument.head.appendChild%28s%29";
        assert!(!raw.contains("document.createElement('style')"));

        assert_eq!(search_payload(raw, &PayloadRule::default()), PayloadSearch::FoundDecoded);
        assert_eq!(
            check_injection_logic("bookmarklet.txt", raw, &PayloadRule::default()),
            Ok(PayloadSearch::FoundDecoded)
        );
    }

    #[test]
    fn search_reports_missing_injection_logic() {
        let raw = "javascript:alert(%27hi%27)";
        assert_eq!(search_payload(raw, &PayloadRule::default()), PayloadSearch::NotFound);
        assert_eq!(
            check_injection_logic("bookmarklet.txt", raw, &PayloadRule::default()),
            Err(CheckError::InjectionLogicMissing { file: "bookmarklet.txt".to_string() })
        );
    }

    #[test]
    fn decode_handles_escapes_and_malformed_sequences() {
        assert_eq!(percent_decode("a%20b%27c%27"), "a b'c'");
        assert_eq!(percent_decode("%C3%BCber"), "über");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz%4"), "%zz%4");
        assert_eq!(percent_decode("%41"), "A");
    }
}
