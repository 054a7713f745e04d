//! Integration tests for recipe logic

#[cfg(test)]
mod tests {
    use toxpkg_errors::{Error, VersionError};
    use toxpkg_recipe::*;
    use toxpkg_types::{BuildOptions, Platform, RequirementKind, VariableValue};

    const CMAKELISTS: &str = r#"cmake_minimum_required(VERSION 3.16)
project(toxcore)
set(PROJECT_VERSION_MAJOR "0")
set(PROJECT_VERSION_MINOR "2")
set(PROJECT_VERSION_PATCH "20")
"#;

    fn options(shared: bool, with_tests: bool) -> BuildOptions {
        BuildOptions { shared, with_tests }
    }

    // --- version resolution ---

    #[test]
    fn test_resolve_version_well_formed() {
        let version = resolve_version(CMAKELISTS).unwrap();
        assert_eq!(version.to_string(), "0.2.20");
    }

    #[test]
    fn test_resolve_version_trims_whitespace_inside_quotes() {
        let contents = r#"
set(PROJECT_VERSION_MAJOR " 1 ")
set(PROJECT_VERSION_MINOR "12")
set(PROJECT_VERSION_PATCH "3")
"#;
        let version = resolve_version(contents).unwrap();
        assert_eq!(version.to_string(), "1.12.3");
    }

    #[test]
    fn test_resolve_version_missing_patch_names_the_part() {
        let contents = r#"
set(PROJECT_VERSION_MAJOR "0")
set(PROJECT_VERSION_MINOR "2")
"#;
        let err = resolve_version(contents).unwrap_err();
        match err {
            Error::Version(VersionError::MarkerNotFound { part }) => {
                assert_eq!(part, "PATCH");
            }
            other => panic!("expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_version_empty_input_fails_on_major_first() {
        let err = resolve_version("").unwrap_err();
        match err {
            Error::Version(VersionError::MarkerNotFound { part }) => {
                assert_eq!(part, "MAJOR");
            }
            other => panic!("expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_version_non_integer_component() {
        let contents = r#"
set(PROJECT_VERSION_MAJOR "0")
set(PROJECT_VERSION_MINOR "two")
set(PROJECT_VERSION_PATCH "20")
"#;
        let err = resolve_version(contents).unwrap_err();
        match err {
            Error::Version(VersionError::InvalidComponent { part, value }) => {
                assert_eq!(part, "MINOR");
                assert_eq!(value, "two");
            }
            other => panic!("expected InvalidComponent, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_version_rejects_negative_component() {
        let contents = r#"
set(PROJECT_VERSION_MAJOR "-1")
set(PROJECT_VERSION_MINOR "2")
set(PROJECT_VERSION_PATCH "20")
"#;
        let err = resolve_version(contents).unwrap_err();
        assert!(matches!(
            err,
            Error::Version(VersionError::InvalidComponent { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_version_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        tokio::fs::write(&path, CMAKELISTS).await.unwrap();
        let version = resolve_version_from(&path).await.unwrap();
        assert_eq!(version.to_string(), "0.2.20");
    }

    #[tokio::test]
    async fn test_resolve_version_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CMakeLists.txt");
        let err = resolve_version_from(&path).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    // --- requirement resolution ---

    #[test]
    fn test_base_requirements_on_linux() {
        let reqs = resolve_requirements(Platform::Linux, &options(false, false)).unwrap();
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["libsodium", "opus", "libvpx"]);
        assert!(reqs.iter().all(|r| r.kind == RequirementKind::Host));
    }

    #[test]
    fn test_windows_appends_threading_requirement() {
        let reqs = resolve_requirements(Platform::Windows, &options(false, false)).unwrap();
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["libsodium", "opus", "libvpx", "pthreads4w"]);
        let threads = reqs.iter().find(|r| r.name == "pthreads4w").unwrap();
        assert_eq!(threads.kind, RequirementKind::Host);
        assert_eq!(threads.to_string(), "pthreads4w/=3.0.0");
    }

    #[test]
    fn test_with_tests_appends_build_time_test_framework() {
        let reqs = resolve_requirements(Platform::Linux, &options(false, true)).unwrap();
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["libsodium", "opus", "libvpx", "gtest"]);
        let gtest = reqs.iter().find(|r| r.name == "gtest").unwrap();
        assert_eq!(gtest.kind, RequirementKind::Build);
    }

    #[test]
    fn test_windows_with_tests_ordering_is_platform_then_option() {
        let reqs = resolve_requirements(Platform::Windows, &options(true, true)).unwrap();
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["libsodium", "opus", "libvpx", "pthreads4w", "gtest"]);
    }

    #[test]
    fn test_requirement_resolution_is_deterministic() {
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            for shared in [false, true] {
                for with_tests in [false, true] {
                    let opts = options(shared, with_tests);
                    let a = resolve_requirements(platform, &opts).unwrap();
                    let b = resolve_requirements(platform, &opts).unwrap();
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_macos_matches_linux_requirements() {
        let opts = options(false, true);
        let linux = resolve_requirements(Platform::Linux, &opts).unwrap();
        let macos = resolve_requirements(Platform::Macos, &opts).unwrap();
        assert_eq!(linux, macos);
    }

    // --- toolchain variable generation ---

    #[test]
    fn test_generate_variables_is_pure() {
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            for shared in [false, true] {
                for with_tests in [false, true] {
                    let opts = options(shared, with_tests);
                    assert_eq!(
                        generate_variables(platform, &opts),
                        generate_variables(platform, &opts)
                    );
                }
            }
        }
    }

    #[test]
    fn test_shared_and_static_are_mutually_exclusive() {
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            for shared in [false, true] {
                let vars = generate_variables(platform, &options(shared, false));
                assert_eq!(
                    vars.get("ENABLE_SHARED"),
                    Some(&VariableValue::Bool(shared))
                );
                assert_eq!(
                    vars.get("ENABLE_STATIC"),
                    Some(&VariableValue::Bool(!shared))
                );
            }
        }
    }

    #[test]
    fn test_test_switches_fan_out_from_one_option() {
        for with_tests in [false, true] {
            let vars = generate_variables(Platform::Linux, &options(false, with_tests));
            for key in ["AUTOTEST", "BUILD_MISC_TESTS", "UNITTEST"] {
                assert_eq!(vars.get(key), Some(&VariableValue::Bool(with_tests)), "{key}");
            }
        }
    }

    #[test]
    fn test_timeout_is_fixed_string() {
        let vars = generate_variables(Platform::Macos, &options(true, true));
        assert_eq!(
            vars.get("TEST_TIMEOUT_SECONDS"),
            Some(&VariableValue::String("300".to_string()))
        );
    }

    #[test]
    fn test_av_component_is_always_forced_on() {
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            for shared in [false, true] {
                for with_tests in [false, true] {
                    let vars = generate_variables(platform, &options(shared, with_tests));
                    assert_eq!(
                        vars.get("MUST_BUILD_TOXAV"),
                        Some(&VariableValue::Bool(true))
                    );
                }
            }
        }
    }

    #[test]
    fn test_windows_only_keys_present_iff_windows() {
        const WINDOWS_KEYS: [&str; 3] = [
            "MSVC_STATIC_SODIUM",
            "CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS",
            "FLAT_OUTPUT_STRUCTURE",
        ];
        for platform in [Platform::Linux, Platform::Macos, Platform::Windows] {
            let vars = generate_variables(platform, &options(true, false));
            for key in WINDOWS_KEYS {
                assert_eq!(vars.contains(key), platform.is_windows(), "{key} on {platform}");
            }
        }
    }

    #[test]
    fn test_windows_export_and_flatten_mirror_shared() {
        for shared in [false, true] {
            let vars = generate_variables(Platform::Windows, &options(shared, false));
            assert_eq!(
                vars.get("MSVC_STATIC_SODIUM"),
                Some(&VariableValue::Bool(true))
            );
            assert_eq!(
                vars.get("CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS"),
                Some(&VariableValue::Bool(shared))
            );
            assert_eq!(
                vars.get("FLAT_OUTPUT_STRUCTURE"),
                Some(&VariableValue::Bool(shared))
            );
        }
    }

    // --- package info ---

    #[test]
    fn test_system_libs_windows_only() {
        assert_eq!(system_libs(Platform::Windows), ["Ws2_32", "Iphlpapi"]);
        assert!(system_libs(Platform::Linux).is_empty());
        assert!(system_libs(Platform::Macos).is_empty());
    }

    #[test]
    fn test_package_metadata() {
        assert_eq!(METADATA.name, "toxcore");
        assert_eq!(METADATA.license, "GPL-3.0-only");
    }

    // --- end-to-end examples ---

    #[test]
    fn test_end_to_end_linux_shared_with_tests() {
        let version = resolve_version(CMAKELISTS).unwrap();
        assert_eq!(version.to_string(), "0.2.20");

        let opts = options(true, true);
        let vars = generate_variables(Platform::Linux, &opts);
        assert_eq!(vars.get("ENABLE_SHARED"), Some(&VariableValue::Bool(true)));
        assert_eq!(vars.get("ENABLE_STATIC"), Some(&VariableValue::Bool(false)));
        assert_eq!(vars.get("AUTOTEST"), Some(&VariableValue::Bool(true)));
        assert_eq!(vars.get("MUST_BUILD_TOXAV"), Some(&VariableValue::Bool(true)));
        assert!(!vars.contains("MSVC_STATIC_SODIUM"));
        assert!(!vars.contains("CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS"));
        assert!(!vars.contains("FLAT_OUTPUT_STRUCTURE"));

        let reqs = resolve_requirements(Platform::Linux, &opts).unwrap();
        assert!(reqs.iter().any(|r| r.name == "gtest"));
        assert!(!reqs.iter().any(|r| r.name == "pthreads4w"));
    }

    #[test]
    fn test_end_to_end_windows_static_without_tests() {
        let version = resolve_version(CMAKELISTS).unwrap();
        assert_eq!(version.to_string(), "0.2.20");

        let opts = options(false, false);
        let reqs = resolve_requirements(Platform::Windows, &opts).unwrap();
        assert!(reqs.iter().any(|r| r.name == "pthreads4w"));
        assert!(!reqs.iter().any(|r| r.name == "gtest"));

        let vars = generate_variables(Platform::Windows, &opts);
        assert_eq!(vars.get("ENABLE_SHARED"), Some(&VariableValue::Bool(false)));
        assert_eq!(vars.get("ENABLE_STATIC"), Some(&VariableValue::Bool(true)));
        assert_eq!(
            vars.get("MSVC_STATIC_SODIUM"),
            Some(&VariableValue::Bool(true))
        );
        assert_eq!(
            vars.get("CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS"),
            Some(&VariableValue::Bool(false))
        );
        assert_eq!(
            vars.get("FLAT_OUTPUT_STRUCTURE"),
            Some(&VariableValue::Bool(false))
        );
    }
}
